use core_config::endpoint::service_endpoint;
use core_config::{ConfigError, FromEnv, env_parse};
use domain_comments::StreamPolicy;

/// Downstream services and comment policy
#[derive(Debug, Clone)]
pub struct CommentsConfig {
    pub db_service_url: String,
    pub user_service_url: String,
    pub stream_service_url: String,
    /// Whether completed streams still accept comments
    pub stream_policy: StreamPolicy,
}

impl FromEnv for CommentsConfig {
    /// Reads:
    /// - `DB_SERVICE_URL` (required)
    /// - `USER_SERVICE_URL` (required)
    /// - `STREAM_SERVICE_URL` (required)
    /// - `COMMENTS_STREAM_POLICY` (default: reject-completed)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_service_url: service_endpoint("DB_SERVICE_URL")?,
            user_service_url: service_endpoint("USER_SERVICE_URL")?,
            stream_service_url: service_endpoint("STREAM_SERVICE_URL")?,
            stream_policy: env_parse("COMMENTS_STREAM_POLICY", "reject-completed")?,
        })
    }
}
