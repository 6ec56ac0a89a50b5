use std::net::SocketAddr;
use thinu_core::SupportedApplications;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub supported_applications: SupportedApplications,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// This function will look for a `.env` file in the current directory
    /// and load the following variables:
    ///
    /// *   `SUPPORTED_APPLICATION_IDS`: Comma separated skill application ids the service answers to. Required.
    /// *   `BIND_ADDRESS`: (Optional) The address and port to bind the server to. Defaults to "0.0.0.0:3000".
    /// *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let ids = lookup("SUPPORTED_APPLICATION_IDS").ok_or_else(|| {
            ConfigError::MissingVar("SUPPORTED_APPLICATION_IDS".to_string())
        })?;
        let supported_applications = SupportedApplications::new(
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty()),
        );
        // An empty allow-list would silently refuse every request.
        if supported_applications.is_empty() {
            return Err(ConfigError::InvalidValue(
                "SUPPORTED_APPLICATION_IDS".to_string(),
                "at least one application id is required".to_string(),
            ));
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            supported_applications,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_application_ids() {
        let config = Config::from_lookup(lookup(&[(
            "SUPPORTED_APPLICATION_IDS",
            "amzn1.ask.skill.one",
        )]))
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.supported_applications.contains("amzn1.ask.skill.one"));
    }

    #[test]
    fn test_application_ids_are_trimmed_and_blank_entries_dropped() {
        let config = Config::from_lookup(lookup(&[(
            "SUPPORTED_APPLICATION_IDS",
            " amzn1.ask.skill.one , ,amzn1.ask.skill.two,",
        )]))
        .unwrap();

        assert_eq!(config.supported_applications.len(), 2);
        assert!(config.supported_applications.contains("amzn1.ask.skill.one"));
        assert!(config.supported_applications.contains("amzn1.ask.skill.two"));
    }

    #[test]
    fn test_missing_application_ids_is_an_error() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }

    #[test]
    fn test_blank_application_ids_is_an_error() {
        let result = Config::from_lookup(lookup(&[("SUPPORTED_APPLICATION_IDS", " , ")]));

        assert!(matches!(result, Err(ConfigError::InvalidValue(name, _)) if name == "SUPPORTED_APPLICATION_IDS"));
    }

    #[test]
    fn test_invalid_bind_address_and_log_level() {
        let bad_bind = Config::from_lookup(lookup(&[
            ("SUPPORTED_APPLICATION_IDS", "a"),
            ("BIND_ADDRESS", "not-an-address"),
        ]));
        assert!(matches!(bad_bind, Err(ConfigError::InvalidValue(name, _)) if name == "BIND_ADDRESS"));

        let bad_level = Config::from_lookup(lookup(&[
            ("SUPPORTED_APPLICATION_IDS", "a"),
            ("RUST_LOG", "loud"),
        ]));
        assert!(matches!(bad_level, Err(ConfigError::InvalidValue(name, _)) if name == "RUST_LOG"));
    }
}
