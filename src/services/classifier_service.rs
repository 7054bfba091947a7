use std::cmp::Ordering;

use lingua::{LanguageDetector, LanguageDetectorBuilder};
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no recognizable language features in text")]
    Undetectable,
}

/// One classifier candidate, probability in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLanguage {
    pub code: String,
    pub probability: f64,
}

/// Capability surface of the external statistical language classifier.
///
/// `detect_ranked` returns candidates in descending probability order and is
/// non-empty on success.
pub trait Classifier: Send + Sync {
    fn detect_primary(&self, text: &str) -> Result<String, ClassifierError>;

    fn detect_ranked(&self, text: &str) -> Result<Vec<RankedLanguage>, ClassifierError>;
}

/// Classifier backed by the lingua statistical models.
///
/// Lingua's raw confidence values carry float jitter between calls (the
/// summation order of its parallel reduction varies), so the observable
/// contract is quantized: probabilities are rounded to 4 decimal places and
/// candidates ordered by rounded probability with a code tie-break. Identical
/// input therefore yields identical output.
pub struct LinguaClassifier {
    detector: LanguageDetector,
    max_candidates: usize,
}

fn round_probability(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl LinguaClassifier {
    pub fn new(max_candidates: usize) -> LinguaClassifier {
        debug!("building lingua detector over all supported languages");

        let detector = LanguageDetectorBuilder::from_all_languages().build();

        LinguaClassifier {
            detector,
            max_candidates,
        }
    }
}

impl Classifier for LinguaClassifier {
    fn detect_primary(&self, text: &str) -> Result<String, ClassifierError> {
        self.detect_ranked(text)?
            .into_iter()
            .next()
            .map(|top| top.code)
            .ok_or(ClassifierError::Undetectable)
    }

    fn detect_ranked(&self, text: &str) -> Result<Vec<RankedLanguage>, ClassifierError> {
        let mut candidates = self
            .detector
            .compute_language_confidence_values(text)
            .into_iter()
            .map(|(language, probability)| RankedLanguage {
                code: language.iso_code_639_1().to_string(),
                probability: round_probability(probability),
            })
            .filter(|candidate| candidate.probability > 0.0)
            .collect::<Vec<RankedLanguage>>();

        candidates.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.code.cmp(&b.code))
        });
        candidates.truncate(self.max_candidates);

        if candidates.is_empty() {
            return Err(ClassifierError::Undetectable);
        }

        Ok(candidates)
    }
}
