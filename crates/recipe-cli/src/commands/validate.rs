use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use recipe_core::store::RecipeStore;

#[derive(Args)]
pub struct ValidateArgs {
    /// Recipe file (.json or .toml)
    pub file: PathBuf,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    let store = RecipeStore::load(&args.file)
        .with_context(|| format!("Invalid recipe file {}", args.file.display()))?;

    let unparsable: Vec<(&str, &str)> = store
        .iter()
        .flat_map(|r| {
            r.ingredients
                .iter()
                .filter(|i| i.quantity.is_unparsable())
                .map(move |i| (r.label.as_str(), i.label.as_str()))
        })
        .collect();

    println!("File:         {}", args.file.display());
    println!("Recipes:      {}", store.len());
    println!("Tags:         {}", store.tag_vocabulary().len());
    println!("Unparsable:   {}", unparsable.len());
    for (recipe, ingredient) in &unparsable {
        println!("  {recipe}: {ingredient}");
    }

    Ok(())
}
