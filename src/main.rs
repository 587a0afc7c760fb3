mod cli_args;
mod config;
mod git;
mod llm;
mod logging;
mod readme;
mod setup;

use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;
use indicatif::ProgressBar;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::git::GitCli;
use crate::llm::prompt_builder::{clip_chars, MAX_DIFF_CHARS};
use crate::llm::LlmClient;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = Config::from_sources(&cli);
    let client = setup::build_llm_client(&cli, &config);

    run(&cli, &config, client.as_ref())
}

/// The whole pipeline: read context, ask the model, replace the README.
fn run(cli: &Cli, config: &Config, llm: &dyn LlmClient) -> Result<()> {
    println!("Fetching repository context...");
    let current_readme = readme::read_or_empty(&config.readme_path)?;

    println!("Retrieving commit diff and history...");
    let git = GitCli::new(std::env::current_dir()?);
    let diff = git.head_commit().text_or_empty("commit diff");
    let commit_log = git.recent_log().text_or_empty("commit log");

    if diff.is_empty() {
        log::warn!("no commit diff found; proceeding with commit log only");
    }

    println!("Generating updated README content...");
    let clipped_diff = clip_chars(&diff, MAX_DIFF_CHARS);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for the model...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let generated = llm.generate_updated_readme(
        &current_readme,
        clipped_diff,
        &commit_log,
        config.project_hint.as_deref(),
    );
    spinner.finish_and_clear();
    let new_content = generated?;

    ensure!(
        !new_content.trim().is_empty(),
        "model returned an empty README; leaving {} untouched",
        config.readme_path.display()
    );

    if cli.dry_run {
        println!();
        println!("----- Proposed README -----");
        println!("{new_content}");
        println!("---------------------------");
        return Ok(());
    }

    println!("Writing updated README...");
    let backup = readme::write_with_backup(&config.readme_path, &new_content)?;
    if let Some(backup) = &backup {
        println!("Backup created at {}", backup.display());
    }
    println!(
        "README updated successfully at {}",
        config.readme_path.display()
    );

    Ok(())
}
