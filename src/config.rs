use std::env;

use crate::utils::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE: &str = "learning-hub";

/// Process configuration, read once at startup from the environment
/// (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("DB_MONGO_URI")
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("DB_MONGO_URI must be set".to_string()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ConfigError(format!("PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongo_uri,
            database_name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DB_MONGO_URI", "mongodb://localhost:27017")]))
                .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_name, "learning-hub");
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_MONGO_URI", "mongodb://db:27017"),
            ("PORT", "5000"),
            ("HOST", "127.0.0.1"),
            ("DB_NAME", "learning-hub-test"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.database_name, "learning-hub-test");
    }

    #[test]
    fn test_missing_uri_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "3000")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DB_MONGO_URI", "mongodb://localhost:27017"),
            ("PORT", "http"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
