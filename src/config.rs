use std::{path::PathBuf, time::Duration};

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "profesor-bridge",
    about   = "Local Ollama bridge for the Spanish Professor tutor",
    version
)]
pub struct Config {
    /// Base URL of the Ollama server.
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    /// Model identifier passed to Ollama on every chat request.
    #[arg(long, env = "MODEL_NAME", default_value = "mistral")]
    pub model: String,

    /// Persona name interpolated into the system prompt.
    #[arg(long, env = "TOPIC_NAME", default_value = "Spanish Tutor (Beginner, English)")]
    pub topic_name: String,

    /// Inline teaching notes. Takes precedence over the notes file.
    #[arg(long, env = "TOPIC_NOTES", hide_env_values = true)]
    pub topic_notes: Option<String>,

    /// Teaching notes file, read once at startup if it exists.
    #[arg(long, env = "TOPIC_NOTES_FILE", default_value = "notes_sp_en.md")]
    pub notes_file: PathBuf,

    /// Host address to listen on.
    #[arg(long, env = "PROFESOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on. The frontend expects 8787.
    #[arg(long, env = "PROFESOR_PORT", default_value_t = 8787)]
    pub port: u16,

    /// Overall timeout for a single Ollama call, warmup included.
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = self.ollama_url.trim();
        if url.is_empty() {
            anyhow::bail!("OLLAMA_URL must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("OLLAMA_URL must start with http:// or https:// (got `{url}`)");
        }
        if self.model.trim().is_empty() {
            anyhow::bail!("MODEL_NAME must not be empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("OLLAMA_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
