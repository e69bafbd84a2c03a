use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::Query;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_models::profile::Doctor;

use crate::models::{DoctorSearchQuery, RegisterDoctorRequest, UpdateDoctorRequest};
use crate::services::doctor::DoctorService;

/// Register a new doctor. The body's email must match the caller's email
/// claim, and the address must not already be registered.
#[axum::debug_handler]
pub async fn register_doctor(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<RegisterDoctorRequest>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    if request.email != user.email {
        return Err(AppError::Forbidden(
            "registration email must match the authenticated user".to_string(),
        ));
    }

    let store = StoreClient::new(&config);
    let existing = store
        .find_user_by_email(&request.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "e-mail {} is already registered",
            request.email
        )));
    }

    let doctor = DoctorService::new(&config)
        .register(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(doctor)))
}

/// Directory search. Personal contact fields are always redacted here,
/// whoever is asking.
#[axum::debug_handler]
pub async fn search_doctors(
    State(config): State<Arc<AppConfig>>,
    Extension(_user): Extension<AuthUser>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    debug!("Doctor search with filters: {:?}", query);

    let doctors = DoctorService::new(&config)
        .search(&query)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .into_iter()
        .map(Doctor::redacted)
        .collect();

    Ok(Json(doctors))
}

/// Fetch a doctor by id. The doctor sees their own full record; patients
/// get a redacted copy; other doctors are rejected.
#[axum::debug_handler]
pub async fn get_doctor(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = DoctorService::new(&config)
        .find_by_id(doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    let store = StoreClient::new(&config);
    let caller = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Caller is not registered".to_string()))?;

    if caller.is_doctor() {
        if caller.id != doctor.id {
            return Err(AppError::Forbidden(
                "doctors may only view their own profile".to_string(),
            ));
        }
        return Ok(Json(doctor));
    }

    Ok(Json(doctor.redacted()))
}

/// Update a doctor's mutable profile fields. Only the doctor themselves
/// (matched by email claim) may call this.
#[axum::debug_handler]
pub async fn update_doctor(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    let service = DoctorService::new(&config);

    let doctor = service
        .find_by_id(doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    if user.email != doctor.email {
        return Err(AppError::Forbidden(
            "only the profile owner may update it".to_string(),
        ));
    }

    let updated = service
        .update(doctor_id, request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::ACCEPTED, Json(updated)))
}
