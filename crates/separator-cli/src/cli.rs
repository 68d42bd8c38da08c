//! CLI argument definitions for Process Separator.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Process Separator -- sort business tasks into AI / hybrid / human work.
#[derive(Parser)]
#[command(
    name = "separator",
    version,
    about = "Process Separator -- classify business process tasks with Gemini",
    long_about = "Classifies each task of a business process as AI_OPTIMAL, HYBRID, or \
                  HUMAN_ESSENTIAL and proposes a concrete improvement for each. The API key \
                  is read from GEMINI_API_KEY and is only sent to the Gemini endpoint."
)]
pub struct Cli {
    /// Path to the TOML config file (`[separator]` section).
    #[arg(long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a task list.
    Analyze(AnalyzeArgs),

    /// List the catalogued models.
    Models {
        /// Language for names and descriptions (`ja` or `en`).
        #[arg(long)]
        lang: Option<String>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Free-text description of the overall business process.
    #[arg(long, short)]
    pub context: Option<String>,

    /// File with one task per line (blank lines are ignored).
    #[arg(long, short = 'f')]
    pub tasks_file: Option<PathBuf>,

    /// A task; repeat for several.  Appended after `--tasks-file` rows.
    #[arg(long = "task", short = 't')]
    pub tasks: Vec<String>,

    /// Use the bundled sample workload instead of the given tasks.
    #[arg(long, conflicts_with_all = ["tasks_file", "tasks", "context"])]
    pub sample: bool,

    /// Model id (defaults to the configured model).
    #[arg(long, short)]
    pub model: Option<String>,

    /// Prompt and output language (`ja` or `en`).
    #[arg(long)]
    pub lang: Option<String>,

    /// Upper bound on the provider call, in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Fail when the number of results differs from the number of tasks.
    #[arg(long)]
    pub strict: bool,

    /// Print the labeled results as JSON.
    #[arg(long)]
    pub json: bool,
}
