use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 600;
pub const MAX_REPLIES: usize = 5;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("No content received from API")]
    EmptyContent,
    #[error("Missing API key")]
    MissingApiKey,
}

impl LlmError {
    /// Upstream HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            LlmError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatMessageResponse>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenRouter chat-completion client. One attempt per call, no retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    referer: String,
    title: String,
}

impl LlmClient {
    pub fn new(client: Client, config: &AppConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a single user message and returns the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    pub async fn generate_replies(&self, prompt: &str) -> Result<Vec<String>, LlmError> {
        let content = self.complete(prompt).await?;
        Ok(parse_replies(&content))
    }
}

/// Splits model output into at most [`MAX_REPLIES`] lines, dropping blank
/// lines and any leading `N.` numbering.
pub fn parse_replies(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_numbering(line.trim_start()).trim().to_string())
        .take(MAX_REPLIES)
        .collect()
}

fn strip_numbering(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }

    match line[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numbering_and_blank_lines() {
        let content = "1. 你真棒！\n\n2.  继续加油\n   \n3.不怕失败\n最后一句";
        assert_eq!(
            parse_replies(content),
            vec!["你真棒！", "继续加油", "不怕失败", "最后一句"]
        );
    }

    #[test]
    fn keeps_at_most_five_in_order() {
        let content = (1..=8)
            .map(|i| format!("{i}. line {i}"))
            .collect::<Vec<_>>()
            .join("\n");

        let replies = parse_replies(&content);
        assert_eq!(replies.len(), MAX_REPLIES);
        assert_eq!(replies[0], "line 1");
        assert_eq!(replies[4], "line 5");
    }

    #[test]
    fn fewer_lines_are_returned_as_is() {
        assert_eq!(parse_replies("a\nb"), vec!["a", "b"]);
        assert!(parse_replies("\n  \n").is_empty());
    }

    #[test]
    fn clean_lines_survive_a_second_pass() {
        let once = parse_replies("1. 你很努力\n 2. 妈妈为你骄傲 \r\n3. 明天会更好");
        let twice = parse_replies(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn bare_number_line_becomes_empty_reply() {
        assert_eq!(parse_replies("1.\nok"), vec!["", "ok"]);
    }

    #[test]
    fn digits_without_dot_are_kept() {
        assert_eq!(parse_replies("100分不是唯一"), vec!["100分不是唯一"]);
        assert_eq!(strip_numbering("12) x"), "12) x");
    }
}
