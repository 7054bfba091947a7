use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::routes::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/supported-languages", get(supported_languages))
}

#[derive(Serialize)]
struct WelcomeBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct SupportedLanguagesBody {
    languages: BTreeMap<&'static str, &'static str>,
}

async fn read_root() -> Json<WelcomeBody> {
    Json(WelcomeBody {
        message:
            "Welcome to the Language Detection API. Use the /detect endpoint to identify languages.",
    })
}

/// Liveness probe, independent of classifier availability.
async fn health_check() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

async fn supported_languages(State(state): State<AppState>) -> Json<SupportedLanguagesBody> {
    Json(SupportedLanguagesBody {
        languages: state.language_names.all_entries(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::routes;
    use crate::routes::AppState;
    use crate::services::classifier_service::{Classifier, ClassifierError, RankedLanguage};
    use crate::services::language_names_service::LanguageNamesService;

    struct UnusedClassifier;

    impl Classifier for UnusedClassifier {
        fn detect_primary(&self, _text: &str) -> Result<String, ClassifierError> {
            Err(ClassifierError::Undetectable)
        }

        fn detect_ranked(&self, _text: &str) -> Result<Vec<RankedLanguage>, ClassifierError> {
            Err(ClassifierError::Undetectable)
        }
    }

    fn app() -> axum::Router {
        let state = AppState {
            classifier: Arc::new(UnusedClassifier),
            language_names: Arc::new(LanguageNamesService::new()),
        };

        routes().with_state(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let (status, body) = get_json("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Welcome to the Language Detection API. Use the /detect endpoint to identify languages."
        );
    }

    #[tokio::test]
    async fn health_reports_healthy_without_touching_the_classifier() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn supported_languages_contains_known_entries() {
        let (status, body) = get_json("/supported-languages").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["languages"]["en"], "English");
        assert_eq!(body["languages"]["zh-cn"], "Chinese (Simplified)");
    }
}
