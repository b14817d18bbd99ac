use anyhow::Result;
use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub max_upload_bytes: usize,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub model: String,
    pub base_url: String,
}

// The credential stays out of logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("openai_api_key", &if self.openai_api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: "0.0.0.0".to_string(),
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            llm: LLMConfig {
                openai_api_key: String::new(),
                model: DEFAULT_MODEL.to_string(),
                base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            },
        }
    }
}
