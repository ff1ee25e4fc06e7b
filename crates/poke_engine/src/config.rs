//! Engine configuration: which `HttpTemplateProvider` base URL to hit and how
//! long to wait for it (§3 "Expanded: Config", §4.12).
//!
//! Grounded on `milan090-pokemonlegends-backend::config::Config::from_env`'s
//! `env::var(...).ok().and_then(...)`-per-field style, narrowed to the three
//! fields SPEC_FULL actually needs (no config file format, per SPEC_FULL §1).

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://templates.example-pokedex.internal",
            Environment::Staging => "https://templates.staging.example-pokedex.internal",
            Environment::Development => "http://localhost:4000",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Environment::Production),
            "staging" | "stage" => Some(Environment::Staging),
            "development" | "dev" => Some(Environment::Development),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub environment: Environment,
    pub request_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { environment: Environment::Production, request_timeout_ms: 5_000 }
    }
}

impl EngineConfig {
    /// Overlay environment variables `POKE_ENGINE_ENVIRONMENT` and
    /// `POKE_ENGINE_REQUEST_TIMEOUT_MS` on top of the defaults, ignoring
    /// unparseable values rather than failing battle setup over a bad env var.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("POKE_ENGINE_ENVIRONMENT") {
            if let Some(env) = Environment::parse(&raw) {
                config.environment = env;
            }
        }

        if let Ok(raw) = env::var("POKE_ENGINE_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = raw.parse::<u64>() {
                config.request_timeout_ms = ms;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_production() {
        assert_eq!(EngineConfig::default().environment, Environment::Production);
    }

    #[test]
    fn environment_parse_is_case_insensitive() {
        assert_eq!(Environment::parse("STAGING"), Some(Environment::Staging));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("nonsense"), None);
    }
}
