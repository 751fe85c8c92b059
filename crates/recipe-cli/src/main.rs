mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipes", about = "Browse, filter and scale recipes")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./recipe-browser.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered by label and tags
    List(commands::list::ListArgs),
    /// Show one recipe's ingredients and steps
    Show(commands::show::ShowArgs),
    /// List every tag used in the collection
    Tags(commands::tags::TagsArgs),
    /// Check that a recipe file loads cleanly
    Validate(commands::validate::ValidateArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::List(args) => commands::list::run(args, config_path),
        Commands::Show(args) => commands::show::run(args, config_path),
        Commands::Tags(args) => commands::tags::run(args, config_path),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
