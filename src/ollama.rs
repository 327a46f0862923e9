use std::time::Instant;

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

const WARMUP_PROMPT:     &str = "warm up";
const WARMUP_MAX_TOKENS: u32  = 5;
const TEMPERATURE:       f64  = 0.3;
/// Caps generation length so answers come back quickly.
const MAX_TOKENS:        u32  = 200;

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("{source}")]
    Unreachable {
        url:    String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status}: {body}")]
    Backend { status: StatusCode, body: String },

    #[error("Malformed response from Ollama: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role:    Role,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    num_predict: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model:    &'a str,
    messages: Vec<ChatMessage<'a>>,
    options:  ChatOptions,
    stream:   bool,
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Handle to the Ollama chat endpoint. Cloning is cheap: the inner
/// `reqwest::Client` is reference-counted and owns the connection pool.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http:     Client,
    base_url: String,
    model:    String,
}

impl OllamaClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(http, &config.ollama_url, &config.model))
    }

    pub fn with_client(http: Client, base_url: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model:    model.to_string(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Ask the model a throwaway question so Ollama loads it into memory
    /// before real traffic arrives. Failures are logged, never returned.
    pub async fn warmup(&self) {
        tracing::info!(model = %self.model, "Warming up model");
        let start = Instant::now();

        let request = ChatRequest {
            model:    &self.model,
            messages: vec![ChatMessage { role: Role::User, content: WARMUP_PROMPT }],
            options:  ChatOptions { temperature: None, num_predict: WARMUP_MAX_TOKENS },
            stream:   false,
        };

        match self.send(&request).await {
            Ok(_) => tracing::info!(
                model = %self.model,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Model warmed up"
            ),
            Err(e) => tracing::warn!(model = %self.model, error = %e, "Warmup failed"),
        }
    }

    /// Send `[system, user]` to the model and return the reply text.
    /// Exactly one request is made; an absent `content` yields `""`.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, OllamaError> {
        let request = ChatRequest {
            model:    &self.model,
            messages: vec![
                ChatMessage { role: Role::System, content: system_prompt },
                ChatMessage { role: Role::User,   content: user_message },
            ],
            options:  ChatOptions { temperature: Some(TEMPERATURE), num_predict: MAX_TOKENS },
            stream:   false,
        };

        let reply = self.send(&request).await?;
        Ok(reply.message.and_then(|m| m.content).unwrap_or_default())
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, OllamaError> {
        let response = self.http
            .post(self.chat_url())
            .json(request)
            .send()
            .await
            .map_err(|source| OllamaError::Unreachable { url: self.base_url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            // A stalled or cut-off error body is a transport failure, not an empty error.
            let body = response
                .text()
                .await
                .map_err(|source| OllamaError::Unreachable { url: self.base_url.clone(), source })?;
            return Err(OllamaError::Backend { status, body });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OllamaError::Unreachable { url: self.base_url.clone(), source: e }
                } else {
                    OllamaError::InvalidResponse(e)
                }
            })
    }
}
