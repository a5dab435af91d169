use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";
pub const DEFAULT_REFERER: &str = "https://praise-kids.vercel.app";
pub const DEFAULT_TITLE: &str = "Praise Kids App";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Process-wide settings, read once at startup and injected into [`crate::AppState`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenRouter credential. `None` is a deployment fault reported per request.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
    pub request_timeout: Duration,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url =
            env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("PRAISE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let referer = env::var("APP_REFERER").unwrap_or_else(|_| DEFAULT_REFERER.to_string());
        let title = env::var("APP_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());
        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            api_key,
            base_url,
            model,
            referer,
            title,
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        }
    }

    /// Same defaults as [`AppConfig::from_env`] with an explicit credential and endpoint.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}
