use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";

/// Final resolved configuration for readmebot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is tolerated here; the client fails at call time.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub readme_path: PathBuf,
    pub project_hint: Option<String>,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`, `--project-hint`)
    ///   2. Env vars `READMEBOT_MODEL`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`
    ///   3. TOML `~/.config/readmebot.toml`
    ///   4. Hardcoded defaults ("gpt-4o", the OpenAI endpoint)
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("READMEBOT_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // clap already merged OPENAI_API_KEY into --api-key.
        let openai_api_key = cli.api_key.clone().or(file_cfg.openai_api_key);

        let api_base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .or(file_cfg.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let project_hint = cli.project_hint.clone().or(file_cfg.project_hint);

        Config {
            openai_api_key,
            model,
            api_base_url,
            readme_path: cli.readme.clone(),
            project_hint,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub project_hint: Option<String>,
}

/// Return `~/.config/readmebot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("readmebot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
