use axum::{extract::State, routing::post, Json, Router};
use log::debug;

use crate::error::ApiError;
use crate::models::detection::{LanguageDetail, LanguageResponse, TextInput};
use crate::routes::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/detect", post(detect_language))
}

/// Detect the language of the posted text and shape the ranked candidate
/// list into a response. Single attempt, no partial results.
///
/// A single ranked classification serves the whole request; the primary
/// guess is its top entry, so the scalar fields always mirror
/// `all_languages[0]`.
async fn detect_language(
    State(state): State<AppState>,
    Json(input): Json<TextInput>,
) -> Result<Json<LanguageResponse>, ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    let ranked = state
        .classifier
        .detect_ranked(&input.text)
        .map_err(|err| ApiError::Classification(err.to_string()))?;

    let top = ranked
        .first()
        .ok_or_else(|| ApiError::Classification("classifier returned no candidates".to_string()))?;

    let primary_code = top.code.clone();

    debug!(
        "detected {} with {} candidates for {} bytes of text",
        primary_code,
        ranked.len(),
        input.text.len()
    );

    let all_languages = ranked
        .iter()
        .map(|candidate| LanguageDetail {
            language: state.language_names.name_for(&candidate.code),
            code: candidate.code.clone(),
            probability: round_probability(candidate.probability),
        })
        .collect::<Vec<LanguageDetail>>();

    Ok(Json(LanguageResponse {
        detected_language: state.language_names.name_for(&primary_code),
        confidence: round_probability(top.probability),
        language_code: primary_code,
        all_languages,
    }))
}

fn round_probability(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
