use serde::{Deserialize, Serialize};

/// Body of a detection request.
#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// One candidate language with its probability, rounded to 4 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDetail {
    pub language: String,
    pub code: String,
    pub probability: f64,
}

/// Full detection result. The scalar fields mirror the first entry of
/// `all_languages`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub detected_language: String,
    pub language_code: String,
    pub confidence: f64,
    pub all_languages: Vec<LanguageDetail>,
}
