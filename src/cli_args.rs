use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "readmebot",
    version,
    about = "LLM-assisted README updater driven by your latest commits"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Path of the README file to update
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Model name to use (e.g. gpt-4o). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; return dummy README content instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional: a brief description of the project, used to steer the rewrite
    #[arg(long)]
    pub project_hint: Option<String>,

    /// Print the regenerated README to stdout instead of writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
