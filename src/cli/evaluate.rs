//! Handler for the `evaluate` command.

use super::EvaluateArgs;
use crate::config::{ConfigError, ScopelensConfig};
use crate::engine::{Evaluation, EvaluationRequest, ScopeEngine, ScopeStatus};
use anyhow::{bail, Context};
use std::path::Path;

/// Config path used when the user didn't pass --config.
const DEFAULT_CONFIG_PATH: &str = "scopelens.toml";

/// Run one evaluation and render the result.
///
/// Input checks (non-empty texts, positive rate) live here, not in the
/// engine: they are the caller's responsibility by contract.
pub async fn handle_evaluate(args: &EvaluateArgs) -> anyhow::Result<String> {
    let config = load_config(&args.config)?.with_env_overrides();
    crate::logging::init(&config.logging);

    let project_scope = std::fs::read_to_string(&args.scope)
        .with_context(|| format!("failed to read scope file {}", args.scope.display()))?;
    let feature_description = std::fs::read_to_string(&args.feature)
        .with_context(|| format!("failed to read feature file {}", args.feature.display()))?;

    if project_scope.trim().is_empty() {
        bail!("scope file {} is empty", args.scope.display());
    }
    if feature_description.trim().is_empty() {
        bail!("feature file {} is empty", args.feature.display());
    }
    if args.rate <= 0.0 {
        bail!("hourly rate must be positive, got {}", args.rate);
    }

    let skills = args
        .skills
        .as_deref()
        .map(parse_skills)
        .unwrap_or_default();

    let request = EvaluationRequest {
        project_scope,
        feature_description,
        hourly_rate: args.rate,
        skills,
    };

    let engine = ScopeEngine::from_config(&config.backend);
    let evaluation = engine
        .evaluate_scope_and_estimate(&request)
        .await
        .context("scope evaluation failed")?;

    if args.json {
        Ok(serde_json::to_string_pretty(&evaluation)?)
    } else {
        Ok(render_summary(&evaluation))
    }
}

/// Load the config file, tolerating only an absent file at the untouched
/// default path. An explicit --config that is missing or malformed is a hard
/// error; running against silently-defaulted backend settings would be
/// misleading.
fn load_config(path: &Path) -> anyhow::Result<ScopelensConfig> {
    match ScopelensConfig::load(Some(path)) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) if path == Path::new(DEFAULT_CONFIG_PATH) => {
            Ok(ScopelensConfig::default())
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to load config {}", path.display()))
        }
    }
}

fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn render_summary(evaluation: &Evaluation) -> String {
    let status = match evaluation.scope_status {
        ScopeStatus::InScope => "in scope",
        ScopeStatus::OutOfScope => "out of scope",
        ScopeStatus::Partial => "partially in scope",
    };

    let mut out = String::new();
    out.push_str(&format!("Status:     {}\n", status));
    out.push_str(&format!("Confidence: {:?}\n", evaluation.confidence));
    if !evaluation.scope_reasoning.is_empty() {
        out.push_str(&format!("Reasoning:  {}\n", evaluation.scope_reasoning));
    }

    if !evaluation.missing_scope_items.is_empty() {
        out.push_str("\nMissing scope items:\n");
        for item in &evaluation.missing_scope_items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    if !evaluation.tasks.is_empty() {
        out.push_str("\nTasks:\n");
        for task in &evaluation.tasks {
            let skills = if task.skills.is_empty() {
                String::new()
            } else {
                format!(" [{}]", task.skills.join(", "))
            };
            out.push_str(&format!("  - {} ({} h){}\n", task.name, task.hours, skills));
        }
    }

    if !evaluation.assumptions.is_empty() {
        out.push_str("\nAssumptions:\n");
        for assumption in &evaluation.assumptions {
            out.push_str(&format!("  - {}\n", assumption));
        }
    }

    out.push_str(&format!(
        "\nTotal: {} h x {} EUR/h = {} EUR\n",
        evaluation.total_hours, evaluation.hourly_rate, evaluation.total_price
    ));
    out
}
