//! CLI entry point for Process Separator.
//!
//! This binary provides the `separator` command: `analyze` classifies a
//! task list through Gemini, `models` lists the catalogued models.

mod cli;
mod report;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use separator_agent::{
    GeminiBackend, MODELS, Outcome, SessionConfig, SubmitStatus, Workbench, find_model,
};
use separator_core::{Language, TaskListStore};

use crate::cli::{AnalyzeArgs, Cli, Commands};

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Best effort: a missing .env is normal.
    let _ = dotenvy::dotenv();
    init_tracing("info");

    let cli = Cli::parse();
    let config = SessionConfig::load(&cli.config);

    match cli.command {
        Commands::Analyze(args) => cmd_analyze(config, args).await,
        Commands::Models { lang } => cmd_models(config, lang.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Subcommand: analyze
// ---------------------------------------------------------------------------

async fn cmd_analyze(mut config: SessionConfig, args: AnalyzeArgs) -> Result<()> {
    if let Some(lang) = args.lang.as_deref() {
        config.language = parse_language(lang)?;
    }
    if let Some(model) = args.model {
        config.model_id = model;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = Duration::from_secs(secs.max(1));
    }
    if args.strict {
        config.strict_count = true;
    }
    if find_model(&config.model_id).is_none() {
        warn!(model = %config.model_id, "model is not in the catalog; sending as-is");
    }

    let language = config.language;
    let backend =
        GeminiBackend::new(config.gemini_config()).context("failed to build HTTP client")?;
    let workbench = Workbench::new(config, Arc::new(backend));

    if args.sample {
        workbench.load_sample();
    } else {
        let mut rows = Vec::new();
        if let Some(path) = &args.tasks_file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read tasks file {}", path.display()))?;
            rows.extend(content.lines().map(str::to_owned));
        }
        rows.extend(args.tasks);
        workbench.edit_tasks(|store| *store = TaskListStore::from_contents(rows));
        if let Some(context) = args.context {
            workbench.set_context(context);
        }
    }

    info!(
        tasks = workbench.tasks().len(),
        model = %workbench.model_id(),
        "submitting analysis"
    );

    match workbench.submit().await {
        SubmitStatus::Completed(count) => info!(count, "analysis complete"),
        SubmitStatus::Rejected => anyhow::bail!("an analysis is already in progress"),
        SubmitStatus::Failed => {}
    }

    match workbench.outcome() {
        Outcome::Failed(message) => anyhow::bail!("{message}"),
        Outcome::Editing => anyhow::bail!("no results"),
        Outcome::Results(results) => {
            if args.json {
                let labeled = workbench.labeled_results().unwrap_or_default();
                let json = serde_json::to_string_pretty(&labeled)
                    .context("failed to serialize results")?;
                println!("{json}");
            } else {
                print!("{}", report::render(&results, language));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: models
// ---------------------------------------------------------------------------

fn cmd_models(config: SessionConfig, lang: Option<&str>) -> Result<()> {
    let language = match lang {
        Some(code) => parse_language(code)?,
        None => config.language,
    };

    for model in &MODELS {
        let marker = if model.id == config.model_id { "*" } else { " " };
        println!("{marker} {:<24} {}", model.id, model.name(language));
        println!("  {:<24} {}", "", model.description(language));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_language(code: &str) -> Result<Language> {
    code.parse::<Language>()
        .map_err(|e| anyhow::anyhow!("{e} (expected `ja` or `en`)"))
}

/// Initialize the global tracing subscriber with the given default level.
///
/// Respects `RUST_LOG` if set; otherwise falls back to `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
