//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URL
    pub url: String,

    /// Logical database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Maximum connections in the driver pool
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get server selection timeout as Duration
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("mongodb://") && !self.url.starts_with("mongodb+srv://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.database.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_NAME"));
        }
        if self.max_pool_size == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_pool_size > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            database: default_database(),
            max_pool_size: default_max_pool_size(),
            connect_timeout_secs: default_connect_timeout(),
            server_selection_timeout_secs: default_server_selection_timeout(),
        }
    }
}

fn default_database() -> String {
    "game-store".to_string()
}

fn default_max_pool_size() -> u32 {
    20
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_server_selection_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database, "game-store");
        assert_eq!(config.max_pool_size, 20);
    }

    #[test]
    fn test_timeout_durations() {
        let config = DatabaseConfig {
            connect_timeout_secs: 5,
            server_selection_timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.server_selection_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_validation_missing_url() {
        let config = DatabaseConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_pool_size() {
        let config = DatabaseConfig {
            url: "mongodb://localhost:27017".to_string(),
            max_pool_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_pool_too_large() {
        let config = DatabaseConfig {
            url: "mongodb://localhost:27017".to_string(),
            max_pool_size: 150,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = DatabaseConfig {
            url: "mongodb+srv://cluster.example.net/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
