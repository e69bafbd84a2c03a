use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::AuthUser;

pub const TEST_ISSUER: &str = "https://auth.test/";
pub const TEST_AUDIENCE: &str = "https://api.test/";

/// Configuration template for tests. Collaborator URLs default to unused
/// localhost ports; point the relevant ones at a wiremock server.
pub struct TestConfig {
    pub jwt_key: String,
    pub database_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_key: "test-signing-key-long-enough-for-hs256".to_string(),
            database_url: "http://localhost:54321".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            database_api_key: "test-api-key".to_string(),
            frontend_home_url: "http://localhost:5173".to_string(),
            auth_service_base_url: "http://localhost:7000/v1".to_string(),
            appointment_service_base_url: "http://localhost:7012/v1".to_string(),
            rtc_service_base_url: "http://localhost:7020/v1".to_string(),
            notification_service_base_url: "http://localhost:7030/v1".to_string(),
            jwt_key: self.jwt_key.clone(),
            jwt_issuer: TEST_ISSUER.to_string(),
            jwt_audience: TEST_AUDIENCE.to_string(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl TestUser {
    pub fn new(email: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: Some(self.name.clone()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    /// Mint a token the way the authentication collaborator would.
    pub fn create_test_token(user: &TestUser, key: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.id,
            "email": user.email,
            "name": user.name,
            "iat": now.timestamp(),
            "exp": exp.timestamp(),
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
        });

        let header_encoded = URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }
}
