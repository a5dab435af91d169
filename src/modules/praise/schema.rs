use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest situation text embedded in the outbound prompt, in characters.
pub const MAX_INPUT_CHARS: u64 = 1000;

#[derive(Debug, Deserialize, Validate)]
pub struct GeneratePraiseRequest {
    #[validate(
        required(message = "Input is required"),
        length(min = 1, max = MAX_INPUT_CHARS, message = "Input must be 1-1000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub input: Option<String>,
    #[validate(required(message = "Intensity must be a number"))]
    pub intensity: Option<serde_json::Number>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Input cannot be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PraiseResponse {
    pub replies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct IntensityLevel {
    pub level: i64,
    pub tone: String,
}

#[derive(Debug, Serialize)]
pub struct IntensitiesResponse {
    pub levels: Vec<IntensityLevel>,
    pub default_tone: String,
}
