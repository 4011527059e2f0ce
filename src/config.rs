//! Server settings read from the environment at startup.

use thiserror::Error;

use crate::domain::weekday::DayOfWeekConvention;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Settings shared with every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database path (`DATABASE_URL`).
    pub database_url: String,
    /// Interface to bind (`ADDRESS`).
    pub address: String,
    /// TCP port (`PORT`).
    pub port: u16,
    /// How stored `day_of_week` values map to weekdays (`DAY_OF_WEEK_START`).
    pub day_of_week: DayOfWeekConvention,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = value("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let address = value("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let port = match value("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|err| ConfigError::InvalidValue {
                    name: "PORT",
                    reason: format!("`{raw}`: {err}"),
                })?,
            None => DEFAULT_PORT,
        };

        let day_of_week = match value("DAY_OF_WEEK_START") {
            Some(raw) => raw
                .parse::<DayOfWeekConvention>()
                .map_err(|err| ConfigError::InvalidValue {
                    name: "DAY_OF_WEEK_START",
                    reason: err.to_string(),
                })?,
            None => DayOfWeekConvention::default(),
        };

        Ok(Self {
            database_url,
            address,
            port,
            day_of_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).expect("valid config");

        assert_eq!(config.database_url, "app.db");
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.day_of_week, DayOfWeekConvention::SundayZero);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = config(&[
            ("DATABASE_URL", "/data/studio.db"),
            ("ADDRESS", "0.0.0.0"),
            ("PORT", "9000"),
            ("DAY_OF_WEEK_START", "monday"),
        ])
        .expect("valid config");

        assert_eq!(config.database_url, "/data/studio.db");
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.day_of_week, DayOfWeekConvention::MondayZero);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
        assert!(matches!(
            config(&[("DAY_OF_WEEK_START", "friday")]),
            Err(ConfigError::InvalidValue {
                name: "DAY_OF_WEEK_START",
                ..
            })
        ));
    }
}
