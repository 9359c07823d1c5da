use core_config::endpoint::service_endpoint;
use core_config::{ConfigError, FromEnv};

#[derive(Debug, Clone)]
pub struct UsersConfig {
    pub db_service_url: String,
}

impl FromEnv for UsersConfig {
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
    fn test_db_address_is_normalized() {
        temp_env::with_var("DB_SERVICE_URL", Some("db:9090"), || {
            assert_eq!(UsersConfig::from_env().unwrap().db_service_url, "http://db:9090");
        });
    }

    #[test]
    fn test_db_address_is_required() {
        temp_env::with_var_unset("DB_SERVICE_URL", || {
            assert!(matches!(
                UsersConfig::from_env(),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }
}
