use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Pull the bearer token from the request. The frontend stores the token
/// in a `jwt` cookie; API clients send an `Authorization` header. The
/// cookie wins when both are present.
fn extract_token(request: &Request<Body>) -> Option<String> {
    if let Some(cookies) = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
    {
        for cookie in cookies.split(';') {
            if let Some(token) = cookie.trim().strip_prefix("jwt=") {
                return Some(token.to_string());
            }
        }
    }

    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// Authentication middleware: validates the caller's token and stashes
/// the resulting [`AuthUser`] in the request extensions.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)
        .ok_or_else(|| AppError::Auth("Missing bearer token".to_string()))?;

    let user = validate_token(
        &token,
        &config.jwt_key,
        &config.jwt_issuer,
        &config.jwt_audience,
    )
    .map_err(AppError::Auth)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
