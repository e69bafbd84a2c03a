use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_models::profile::Patient;
use uuid::Uuid;

use crate::models::{RegisterPatientRequest, UpdatePatientRequest};
use crate::services::patient::PatientService;

/// Register a new patient. The body's email must match the caller's email
/// claim, and the address must not already be registered.
#[axum::debug_handler]
pub async fn register_patient(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
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

    let patient = PatientService::new(&config)
        .register(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(patient)))
}

/// Fetch a patient by id. The patient sees their own full record; doctors
/// get a redacted copy; other patients are rejected.
#[axum::debug_handler]
pub async fn get_patient(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Patient>, AppError> {
    let patient = PatientService::new(&config)
        .find_by_id(patient_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    let store = StoreClient::new(&config);
    let caller = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Caller is not registered".to_string()))?;

    if !caller.is_doctor() {
        if caller.id != patient.id {
            return Err(AppError::Forbidden(
                "patients may only view their own profile".to_string(),
            ));
        }
        return Ok(Json(patient));
    }

    Ok(Json(patient.redacted()))
}

/// Update a patient's mutable profile fields and notification
/// preferences. Only the patient themselves may call this.
#[axum::debug_handler]
pub async fn update_patient(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let service = PatientService::new(&config);

    let patient = service
        .find_by_id(patient_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    if user.email != patient.email {
        return Err(AppError::Forbidden(
            "only the profile owner may update it".to_string(),
        ));
    }

    let updated = service
        .update(patient_id, request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::ACCEPTED, Json(updated)))
}
