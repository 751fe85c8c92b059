mod app;
mod messages;
mod panels;
mod states;

use std::path::Path;

use anyhow::{Context, Result};
use recipe_core::config::BrowserConfig;
use recipe_core::consts::DEFAULT_CONFIG_FILE;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config()?;
    let store = config.load_store().context("Failed to load recipes")?;
    tracing::info!(count = store.len(), "Recipes loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Recettes"),
        ..Default::default()
    };

    eframe::run_native(
        "RecipeBrowser",
        options,
        Box::new(move |_cc| Ok(Box::new(app::RecipeApp::new(config, store)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

fn load_config() -> Result<BrowserConfig> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(BrowserConfig::default());
    }
    BrowserConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}
