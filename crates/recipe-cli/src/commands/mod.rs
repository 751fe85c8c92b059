pub mod config;
pub mod list;
pub mod show;
pub mod tags;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use recipe_core::config::BrowserConfig;
use recipe_core::consts::DEFAULT_CONFIG_FILE;
use recipe_core::store::RecipeStore;

/// Data source selection shared by the read-only commands.
#[derive(Args)]
pub struct DataArgs {
    /// Recipe file (.json or .toml); overrides the config's `data`
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Explicit config file, else `./recipe-browser.toml`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<BrowserConfig> {
    if let Some(path) = path {
        return BrowserConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return BrowserConfig::load(local)
            .with_context(|| format!("Failed to load config {}", local.display()));
    }
    Ok(BrowserConfig::default())
}

/// Resolve the config and load the recipe store it points at.
pub fn load_store(
    data: &DataArgs,
    config_path: Option<&Path>,
) -> Result<(BrowserConfig, Arc<RecipeStore>)> {
    let mut config = load_config(config_path)?;
    if let Some(ref path) = data.data {
        config.data = Some(path.clone());
    }
    let store = config.load_store().with_context(|| match config.data {
        Some(ref p) => format!("Failed to load recipes from {}", p.display()),
        None => "Failed to load bundled recipes".to_string(),
    })?;
    tracing::debug!(count = store.len(), "Recipes loaded");
    Ok((config, Arc::new(store)))
}
