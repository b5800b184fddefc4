//! CLI module for scopelens
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `evaluate` - Evaluate a feature request against a project scope
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Evaluate a feature against a contract
//! scopelens evaluate --scope contract.txt --feature feature.txt --rate 80 --skills React,Node
//!
//! # Write a default config file
//! scopelens config init
//!
//! # Generate shell completions
//! scopelens completions bash > ~/.bash_completion.d/scopelens
//! ```

pub mod completions;
pub mod config;
pub mod evaluate;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use evaluate::handle_evaluate;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scopelens - contract scope evaluation for freelancers
#[derive(Parser, Debug)]
#[command(
    name = "scopelens",
    version,
    about = "Classify feature requests against contract scope and estimate unbilled work"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a feature request against a project scope
    Evaluate(EvaluateArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the contract/scope text file
    #[arg(short, long)]
    pub scope: PathBuf,

    /// Path to the feature request text file
    #[arg(short, long)]
    pub feature: PathBuf,

    /// Hourly rate in EUR (must be positive)
    #[arg(short, long)]
    pub rate: f64,

    /// Comma-separated skill tags (e.g. "React,Node")
    #[arg(long)]
    pub skills: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "scopelens.toml")]
    pub config: PathBuf,

    /// Output raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "scopelens.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
