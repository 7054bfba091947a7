use anyhow::anyhow;
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            max_candidates: 5,
        }
    }
}

impl Config {
    /// Defaults, overridden by an optional config.json, overridden by
    /// LANGDETECT_* environment variables.
    pub fn load() -> Result<Config, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file("config.json"))
            .merge(Env::prefixed("LANGDETECT_"))
            .extract()
    }

    /// Rejects unknown level names instead of falling back silently.
    pub fn log_level_filter(&self) -> Result<LevelFilter, anyhow::Error> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("invalid log_level '{}' in configuration", self.log_level))
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use log::LevelFilter;

    #[test]
    fn defaults_match_local_development_setup() {
        let config = Config::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_candidates, 5);
    }

    #[test]
    fn known_log_levels_parse() {
        let mut config = Config::default();

        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };

        let err = config.log_level_filter().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
