//! Handler for the `config init` command.

use super::ConfigInitArgs;
use crate::config::ScopelensConfig;
use anyhow::{bail, Context};

/// Write a default configuration file.
pub fn handle_config_init(args: &ConfigInitArgs) -> anyhow::Result<String> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists, use --force to overwrite",
            args.output.display()
        );
    }

    let config = ScopelensConfig::default();
    let body = toml::to_string_pretty(&config).context("failed to serialize default config")?;
    let content = format!(
        "# scopelens configuration\n\
         # backend.base_url: OpenAI-compatible endpoint (MODEL_BACKEND_URL overrides)\n\
         # backend.model: model identifier (MODEL_NAME overrides)\n\n{}",
        body
    );

    std::fs::write(&args.output, content)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(format!("Wrote default config to {}", args.output.display()))
}
