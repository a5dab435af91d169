use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERATE_PATH: &str = "/api/generate-praise";

#[derive(Error, Debug)]
pub enum PraiseApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    input: &'a str,
    intensity: u8,
}

#[derive(Debug, Deserialize)]
struct RepliesBody {
    replies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the local generation endpoint, used by the terminal front end.
#[derive(Clone)]
pub struct PraiseApiClient {
    client: Client,
    base_url: String,
}

impl PraiseApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate(&self, input: &str, intensity: u8) -> Result<Vec<String>, PraiseApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .json(&GenerateBody { input, intensity })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|e| e.error)
                .unwrap_or(error_text);
            return Err(PraiseApiError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: RepliesBody = response.json().await?;
        Ok(body.replies)
    }
}
