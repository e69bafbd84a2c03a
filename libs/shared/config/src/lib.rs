use std::env;

use anyhow::{Context, Result};

/// Process-wide configuration, resolved once at startup.
///
/// Every collaborator base URL and the JWT validation parameters are
/// required: the service cannot do anything useful without them, so a
/// missing variable is a fatal startup error rather than a warning.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_api_key: String,
    pub frontend_home_url: String,
    pub auth_service_base_url: String,
    pub appointment_service_base_url: String,
    pub rtc_service_base_url: String,
    pub notification_service_base_url: String,
    pub jwt_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("missing required environment variable {}", name))
}

impl AppConfig {
    /// Load configuration from the environment. `dotenv` is expected to
    /// have been called by the binary beforehand, which gives the
    /// configuration-file fallback.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_api_key: required("DATABASE_API_KEY")?,
            frontend_home_url: required("FRONTEND_HOME_URL")?,
            auth_service_base_url: required("AUTH_SERVICE_BASE_URL")?,
            appointment_service_base_url: required("APPOINTMENT_SERVICE_BASE_URL")?,
            rtc_service_base_url: required("WEBRTC_SERVICE_BASE_URL")?,
            notification_service_base_url: required("NOTIFICATION_SERVICE_BASE_URL")?,
            jwt_key: required("AUTH_SERVICE_JWT_KEY")?,
            jwt_issuer: required("AUTH_SERVICE_JWT_ISSUER")?,
            jwt_audience: required("AUTH_SERVICE_JWT_AUDIENCE")?,
        })
    }
}
