//! API configuration

use domain_insurance::ValidityConfig;
use serde::Deserialize;

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables; every field has a
/// default so a bare environment still starts a dev server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// ± bound, in years, on dates accepted by the validity check
    pub validity_interval_years: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/carins".to_string(),
            log_level: "info".to_string(),
            validity_interval_years: 50,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The validity checker configuration this API serves
    pub fn validity_config(&self) -> ValidityConfig {
        ValidityConfig::new(self.validity_interval_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.validity_config().validity_interval_years, 50);
    }
}
