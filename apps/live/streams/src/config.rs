use core_config::endpoint::service_endpoint;
use core_config::{ConfigError, FromEnv};

#[derive(Debug, Clone)]
pub struct StreamsConfig {
    pub db_service_url: String,
}

impl FromEnv for StreamsConfig {
    /// Reads `DB_SERVICE_URL` (required)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_service_url: service_endpoint("DB_SERVICE_URL")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_address_with_scheme_is_kept() {
        temp_env::with_var("DB_SERVICE_URL", Some("https://db.internal:9090"), || {
            assert_eq!(
                StreamsConfig::from_env().unwrap().db_service_url,
                "https://db.internal:9090"
            );
        });
    }

    #[test]
    fn test_db_address_is_required() {
        temp_env::with_var_unset("DB_SERVICE_URL", || {
            assert!(StreamsConfig::from_env().is_err());
        });
    }
}
