use axum::{http::StatusCode, Json};
use thiserror::Error;

use crate::modules::praise::schema::ErrorResponse;
use crate::services::llm::LlmError;

pub const VALIDATION_MESSAGE: &str = "输入参数无效";
pub const CONFIGURATION_MESSAGE: &str = "服务配置错误";
pub const GENERATION_MESSAGE: &str = "生成夸奖话语失败，请重试";

/// Failure kinds of one generation request. Only the status class and a
/// fixed message reach the caller; details stay in the server log.
#[derive(Error, Debug)]
pub enum PraiseError {
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Generation failed: {0}")]
    Generation(#[source] LlmError),
}

impl From<LlmError> for PraiseError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => PraiseError::Configuration(e.to_string()),
            other => PraiseError::Generation(other),
        }
    }
}

impl PraiseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PraiseError::Validation(_) => StatusCode::BAD_REQUEST,
            PraiseError::Configuration(_) | PraiseError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            PraiseError::Validation(_) => VALIDATION_MESSAGE,
            PraiseError::Configuration(_) => CONFIGURATION_MESSAGE,
            PraiseError::Generation(_) => GENERATION_MESSAGE,
        }
    }

    pub fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            PraiseError::Validation(detail) => tracing::warn!(%detail, "rejected praise request"),
            PraiseError::Configuration(detail) => {
                tracing::error!(%detail, "praise service is misconfigured")
            }
            PraiseError::Generation(source) => tracing::error!(
                error = %source,
                upstream_status = ?source.status(),
                "error generating praise"
            ),
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
    }
}
