use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::DataArgs;
use crate::output::print_tags;

#[derive(Args)]
pub struct TagsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: &TagsArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, store) = super::load_store(&args.data, config_path)?;

    let counted: Vec<(String, usize)> = store
        .tag_vocabulary()
        .iter()
        .map(|tag| {
            let count = store.iter().filter(|r| r.has_tag(tag)).count();
            (tag.clone(), count)
        })
        .collect();

    print_tags(&counted);
    Ok(())
}
