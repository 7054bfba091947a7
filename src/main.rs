use std::sync::Arc;

use log::info;
use simple_logger::SimpleLogger;

use models::config::Config;
use routes::AppState;
use services::classifier_service::LinguaClassifier;
use services::language_names_service::LanguageNamesService;

mod error;
mod models;
mod routes;
mod services;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    SimpleLogger::new()
        .with_level(config.log_level_filter()?)
        .init()?;

    info!("Loading language classifier");

    let state = AppState {
        classifier: Arc::new(LinguaClassifier::new(config.max_candidates)),
        language_names: Arc::new(LanguageNamesService::new()),
    };

    let app = routes::api_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Language detection api listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
