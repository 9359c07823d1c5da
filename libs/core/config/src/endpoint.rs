//! Addresses of downstream services.
//!
//! Deployments usually hand out bare `host:port` pairs; tonic endpoints need a scheme.

use crate::{env_required, ConfigError};

/// Read a required service address and normalize it into an `http(s)://` URI.
pub fn service_endpoint(key: &str) -> Result<String, ConfigError> {
    let raw = env_required(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: "address is empty".to_string(),
        });
    }
    Ok(normalize_endpoint(trimmed))
}

/// Prefix `http://` unless the address already carries a scheme.
pub fn normalize_endpoint(addr: &str) -> String {
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}
