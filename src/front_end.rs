//! One generation round as the terminal front end runs it.

use thiserror::Error;

use crate::history::{HistoryCache, KeyValueStore};
use crate::services::praise_api::{PraiseApiClient, PraiseApiError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Input cannot be blank")]
    BlankInput,
    #[error(transparent)]
    Api(#[from] PraiseApiError),
}

/// Requests replies for `input` and records them in `history`.
///
/// Blank input is refused before any request is made. History only changes
/// after the server answered successfully.
pub async fn generate_and_record<S: KeyValueStore>(
    client: &PraiseApiClient,
    history: &mut HistoryCache<S>,
    input: &str,
    intensity: u8,
) -> Result<Vec<String>, GenerateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GenerateError::BlankInput);
    }

    let replies = client.generate(input, intensity).await?;

    if let Err(e) = history.record(replies.clone()) {
        tracing::error!(error = %e, "failed to save history");
    }

    Ok(replies)
}
