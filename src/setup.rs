use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::llm::openai::OpenAiClient;
use crate::llm::{LlmClient, NoopClient};

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cli: &Cli, cfg: &Config) -> Box<dyn LlmClient> {
    if cli.no_model || cfg.model.eq_ignore_ascii_case("none") {
        debug!("Using NoopClient (no model calls).");
        return Box::new(NoopClient);
    }

    if cfg.openai_api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; the model call will fail.");
    }

    debug!("Using OpenAiClient with model: {}", cfg.model);

    Box::new(OpenAiClient::new(
        cfg.openai_api_key.clone(),
        cfg.model.clone(),
        cfg.api_base_url.clone(),
    ))
}
