use super::LlmClient;
use super::prompt_builder::{self, clip_chars};
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every request.
const TEMPERATURE: f32 = 0.7;

/// Ceiling on generated tokens per response.
const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Minimal request/response structs for OpenAI Chat Completions API.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// OpenAI-based implementation of LlmClient.
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

impl OpenAiClient {
    /// A missing API key is accepted here; the call itself reports it.
    pub fn new(api_key: Option<String>, model: String, api_base_url: String) -> Self {
        OpenAiClient {
            client: Client::new(),
            api_key,
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chat_url(&self) -> String {
        if self.api_base_url.ends_with("/v1") {
            format!("{}/chat/completions", self.api_base_url)
        } else {
            format!("{}/v1/chat/completions", self.api_base_url)
        }
    }

    fn call_chat(&self, req: &ChatRequest) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set; export it or pass --api-key"))?;

        let url = self.chat_url();

        log::info!("Calling model {:?}", &req.model);
        log::trace!(
            "Request body: {}",
            serde_json::to_string_pretty(req).unwrap_or_default()
        );

        let resp = self
            .client
            .post(url)
            .bearer_auth(key)
            .json(req)
            .send()
            .context("failed to send request to the chat completions endpoint")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "chat completions API error: HTTP {} - {}",
                status.as_u16(),
                text
            ));
        }

        let chat_resp: ChatResponse = resp
            .json()
            .context("failed to parse the chat completions response")?;
        let content = chat_resp
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| anyhow!("no choices returned from the model"))?;

        if let Some(usage) = &chat_resp.usage {
            log::info!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        Ok(content)
    }
}

impl LlmClient for OpenAiClient {
    fn generate_updated_readme(
        &self,
        current_readme: &str,
        diff: &str,
        commit_log: &str,
        project_hint: Option<&str>,
    ) -> Result<String> {
        let prompts =
            prompt_builder::readme_update_prompt(current_readme, diff, commit_log, project_hint);

        log::debug!(
            "README update prompt:\n{}",
            clip_chars(&prompts.user, 3000)
        );

        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: prompts.system,
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompts.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let content = self.call_chat(&req)?;
        Ok(content)
    }
}
