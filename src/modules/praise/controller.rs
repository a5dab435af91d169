use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::modules::praise::{
    error::PraiseError,
    schema::{
        ErrorResponse, GeneratePraiseRequest, IntensitiesResponse, IntensityLevel, PraiseResponse,
    },
};
use crate::services::llm::LlmClient;
use crate::services::tone::{self, DEFAULT_TONE};
use crate::AppState;

pub async fn generate_praise(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePraiseRequest>, JsonRejection>,
) -> Result<Json<PraiseResponse>, (StatusCode, Json<ErrorResponse>)> {
    match generate(&state, payload).await {
        Ok(replies) => Ok(Json(PraiseResponse { replies })),
        Err(e) => Err(e.into_error_response()),
    }
}

async fn generate(
    state: &AppState,
    payload: Result<Json<GeneratePraiseRequest>, JsonRejection>,
) -> Result<Vec<String>, PraiseError> {
    let Json(payload) = payload.map_err(|e| PraiseError::Validation(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| PraiseError::Validation(e.to_string()))?;

    let (Some(input), Some(intensity)) = (payload.input, payload.intensity) else {
        return Err(PraiseError::Validation("missing input or intensity".to_string()));
    };

    let llm = LlmClient::new(state.http.clone(), &state.config)?;

    let tone = tone::tone_for_number(&intensity);
    let prompt = tone::build_prompt(&input, tone);

    tracing::info!(model = llm.model(), %intensity, tone, "generating praise");

    let replies = llm.generate_replies(&prompt).await?;
    Ok(replies)
}

pub async fn list_intensities() -> Json<IntensitiesResponse> {
    let levels = tone::levels()
        .into_iter()
        .map(|(level, tone)| IntensityLevel {
            level,
            tone: tone.to_string(),
        })
        .collect();

    Json(IntensitiesResponse {
        levels,
        default_tone: DEFAULT_TONE.to_string(),
    })
}
