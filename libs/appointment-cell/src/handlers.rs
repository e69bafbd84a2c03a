use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_models::profile::{Doctor, Patient};

use crate::models::{
    AppointmentListQuery, AppointmentStatus, CreateOnlineAppointmentRequest, NewExternalAppointment,
    OnlineAppointment, UpdateOnlineAppointmentRequest,
};
use crate::services::appointments::AppointmentServiceClient;
use crate::services::links::OnlineAppointmentService;
use crate::services::notify::NotificationClient;
use crate::services::rtc::RtcClient;

const DEFAULT_LIMIT: i32 = 50;

async fn load_participants(
    store: &StoreClient,
    doctor_id: Uuid,
    patient_id: Uuid,
) -> Result<(Doctor, Patient), AppError> {
    let doctor = store
        .find_user_by_id(doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .and_then(|row| row.to_doctor())
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    let patient = store
        .find_user_by_id(patient_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .and_then(|row| row.to_patient())
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok((doctor, patient))
}

/// Book an online appointment. Patient-only; the claimed identity must be
/// the booking patient. The workflow is strictly ordered and
/// fail-forward: a step that fails aborts the request but already
/// completed steps are not rolled back.
#[axum::debug_handler]
pub async fn create_online_appointment(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateOnlineAppointmentRequest>,
) -> Result<(StatusCode, Json<OnlineAppointment>), AppError> {
    let store = StoreClient::new(&config);

    let caller = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::Forbidden("caller is not registered".to_string()))?;
    if caller.is_doctor() {
        return Err(AppError::Forbidden(
            "appointments are booked by patients".to_string(),
        ));
    }
    if caller.id != request.patient_id {
        return Err(AppError::Forbidden(
            "patients may only book for themselves".to_string(),
        ));
    }
    let patient = caller
        .to_patient()
        .ok_or_else(|| AppError::Forbidden("caller is not a patient".to_string()))?;

    let doctor = store
        .find_user_by_id(request.doctor_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .and_then(|row| row.to_doctor())
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    // Step 1: room allocation.
    let session_url = RtcClient::new(&config)
        .create_session_url()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    // Step 2: canonical appointment.
    let submission = NewExternalAppointment {
        description: format!(
            "DocTalk | {} appointment with Dr. {}",
            request.specialty, doctor.name
        ),
        datetime: request.datetime,
        status: request.status,
        expected_duration: request.expected_duration,
        recurring: false,
        recurring_frequency: None,
        location: "Online".to_string(),
        participant_ids: vec![request.doctor_id, request.patient_id],
    };

    let external = AppointmentServiceClient::new(&config)
        .create(&submission)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| {
            AppError::Conflict("the appointment service did not accept the booking".to_string())
        })?;

    // Steps 3-4: persist the local link, carrying the canonical id.
    let row = OnlineAppointmentService::new(&config)
        .insert(
            request.doctor_id,
            request.patient_id,
            &request.reason,
            request.summary.as_deref(),
            &session_url,
            request.specialty,
            external.id,
        )
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let appointment = OnlineAppointment::from_parts(row, &external);

    // Step 5: tell the patient.
    NotificationClient::new(&config)
        .send_new_appointment(&patient, &doctor.name, &appointment)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    info!(
        "Booked appointment {} (canonical {}) for patient {}",
        appointment.id, external.id, patient.id
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// List the appointments a participant is part of. An explicit
/// `doctor_id` query parameter wins; otherwise the caller's own identity
/// is the participant, with their role choosing the filter column.
#[axum::debug_handler]
pub async fn list_online_appointments(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<OnlineAppointment>>, AppError> {
    let store = StoreClient::new(&config);

    let caller = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::Forbidden("caller is not registered".to_string()))?;

    let (participant_id, doctor_view) = match query.doctor_id {
        Some(doctor_id) => (doctor_id, true),
        None => (caller.id, caller.is_doctor()),
    };

    let links = OnlineAppointmentService::new(&config);
    let rows = if doctor_view {
        links.for_doctor(participant_id).await
    } else {
        links.for_patient(participant_id).await
    }
    .map_err(|e| AppError::Database(e.to_string()))?;

    if rows.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let canonical = AppointmentServiceClient::new(&config)
        .list_for_participant(
            participant_id,
            query.limit.unwrap_or(DEFAULT_LIMIT),
            query.offset.unwrap_or(0),
            query.from,
            query.to,
        )
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    // Merge by canonical id. A local row with no canonical counterpart is
    // orphaned; it is dropped from the listing, not reported.
    let mut appointments: Vec<OnlineAppointment> = Vec::with_capacity(rows.len());
    for row in rows {
        match canonical.iter().find(|a| a.id == row.appointment_id) {
            Some(external) => appointments.push(OnlineAppointment::from_parts(row, external)),
            None => {
                warn!(
                    "Dropping orphaned appointment link {} (canonical {} is gone)",
                    row.id, row.appointment_id
                );
            }
        }
    }

    if let Some(status) = query.status {
        appointments.retain(|a| a.status == status);
    }

    if doctor_view && caller.id != participant_id {
        appointments = appointments
            .into_iter()
            .map(OnlineAppointment::redacted)
            .collect();
    }

    Ok(Json(appointments))
}

/// Update an appointment's status and summary. Only the assigned doctor
/// or patient may call this, and cancellation is terminal.
#[axum::debug_handler]
pub async fn update_online_appointment(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateOnlineAppointmentRequest>,
) -> Result<StatusCode, AppError> {
    let links = OnlineAppointmentService::new(&config);

    let row = links
        .find_by_id(appointment_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    let store = StoreClient::new(&config);
    let caller = store
        .find_user_by_email(&user.email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::Forbidden("caller is not registered".to_string()))?;

    let allowed = if caller.is_doctor() {
        caller.id == row.doctor_id
    } else {
        caller.id == row.patient_id
    };
    if !allowed {
        return Err(AppError::Forbidden(
            "only the assigned doctor or patient may update an appointment".to_string(),
        ));
    }

    let appointments = AppointmentServiceClient::new(&config);
    let mut external = appointments
        .fetch(row.appointment_id)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Canonical appointment not found".to_string()))?;

    if external.status == AppointmentStatus::Cancelled {
        return Err(AppError::Forbidden(
            "cancelled appointments cannot be changed".to_string(),
        ));
    }

    // Push the status change, then re-fetch to see what the collaborator
    // actually settled on.
    external.status = request.status;
    appointments
        .update(row.appointment_id, &external)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let confirmed = appointments
        .fetch(row.appointment_id)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Canonical appointment not found".to_string()))?;

    let updated_row = links
        .update_summary(row.id, request.summary.as_deref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if confirmed.status == AppointmentStatus::Cancelled {
        let (doctor, patient) =
            load_participants(&store, updated_row.doctor_id, updated_row.patient_id).await?;
        let appointment = OnlineAppointment::from_parts(updated_row, &confirmed);

        NotificationClient::new(&config)
            .send_cancelled_appointment(&patient, &doctor.name, &appointment)
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        info!("Appointment {} cancelled, patient notified", appointment_id);
    }

    Ok(StatusCode::NO_CONTENT)
}
