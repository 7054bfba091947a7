pub mod classifier_service;
pub mod language_names_service;
