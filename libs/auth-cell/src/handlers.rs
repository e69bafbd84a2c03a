use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_models::profile::SelfProfile;

/// Redirect the frontend to the authentication collaborator's login page.
#[axum::debug_handler]
pub async fn login(State(config): State<Arc<AppConfig>>) -> impl IntoResponse {
    let location = format!(
        "{}/login?redirect_url={}",
        config.auth_service_base_url, config.frontend_home_url
    );

    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// Resolve the caller's email claim to a registered profile and report
/// which kind of user it is.
#[axum::debug_handler]
pub async fn get_self(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SelfProfile>, AppError> {
    debug!("Resolving self profile for {}", user.email);

    let store = StoreClient::new(&config);
    let row = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Not registered. You probably should".to_string()))?;

    Ok(Json(row.to_self_profile()))
}
