use std::path::Path;

use anyhow::Result;
use clap::Args;
use recipe_core::filter::RecipeFilter;

use super::DataArgs;
use crate::output::print_recipe_list;

#[derive(Args)]
pub struct ListArgs {
    /// Only show recipes whose label contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show recipes carrying this tag (repeat to require several)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: &ListArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, store) = super::load_store(&args.data, config_path)?;

    let filter = RecipeFilter::new()
        .with_search(args.search.clone().unwrap_or_default())
        .with_tags(args.tags.iter().cloned());
    let visible = filter.apply(&store);

    print_recipe_list(&visible, store.len());
    Ok(())
}
