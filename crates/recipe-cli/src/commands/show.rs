use std::path::Path;

use anyhow::Result;
use clap::Args;
use recipe_core::browser::Browser;
use recipe_core::recipe::parse_amount;

use super::DataArgs;
use crate::output::print_detail;

#[derive(Args)]
pub struct ShowArgs {
    /// Recipe label (exact match)
    pub label: String,

    /// Scale factor applied to every ingredient quantity
    #[arg(short, long, default_value = "1")]
    pub scale: String,

    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: &ShowArgs, config_path: Option<&Path>) -> Result<()> {
    let (config, store) = super::load_store(&args.data, config_path)?;
    let mut browser = Browser::new(store, &config);

    browser.select(&args.label);
    let requested = args.scale.trim();
    let applied = browser.scale_mut().set_from_text(requested);
    if browser.scale().is_nan() {
        tracing::warn!(scale = %requested, "Scale is not a number");
    } else if parse_amount(requested) != Some(applied) {
        let bounds = browser.scale().bounds();
        tracing::warn!(
            requested = %requested,
            applied,
            "Scale clamped to {}..={}",
            bounds.min,
            bounds.max
        );
    }

    let Some(detail) = browser.detail() else {
        anyhow::bail!(
            "No recipe labelled '{}' (try `recipes list --search`)",
            args.label
        );
    };

    print_detail(&detail, &browser.scale().to_string());
    Ok(())
}
