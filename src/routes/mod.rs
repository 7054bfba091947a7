pub mod detect;
pub mod info;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::services::{
    classifier_service::Classifier, language_names_service::LanguageNamesService,
};

/// Read-only state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub language_names: Arc<LanguageNamesService>,
}

/// Assemble the complete router, CORS wide open for all origins, methods
/// and headers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(info::routes())
        .merge(detect::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
