use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::handlers;
use appointment_cell::models::{
    AppointmentListQuery, AppointmentStatus, CreateOnlineAppointmentRequest,
    UpdateOnlineAppointmentRequest, REDACTED,
};
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::test_utils::{TestConfig, TestUser};

fn doctor_row(id: Uuid, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": "Greg House",
        "date_of_birth": "1970-06-11",
        "phone_number": "+351000000001",
        "address": "1 Main St",
        "city": "Aveiro",
        "region": "Aveiro",
        "postal_code": "3810",
        "country": "PT",
        "role": "doctor",
        "order_id": "OM-1234",
        "specialties": ["Neurology"]
    })
}

fn patient_row(id: Uuid, email: &str, notify_email: bool, notify_sms: bool) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": "John Doe",
        "date_of_birth": "1990-01-01",
        "phone_number": "+351000000002",
        "address": "2 Side St",
        "city": "Porto",
        "region": "Porto",
        "postal_code": "4000",
        "country": "PT",
        "role": "patient",
        "patient_code": "PC-42",
        "notify_email": notify_email,
        "notify_sms": notify_sms
    })
}

fn link_row(
    id: Uuid,
    doctor_id: Uuid,
    patient_id: Uuid,
    appointment_id: Uuid,
    session_url: &str,
) -> serde_json::Value {
    json!({
        "id": id,
        "doctor_id": doctor_id,
        "patient_id": patient_id,
        "reason": "persistent headaches",
        "summary": null,
        "session_url": session_url,
        "specialty": "Neurology",
        "appointment_id": appointment_id
    })
}

fn external_json(id: Uuid, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "description": "DocTalk | Neurology appointment with Dr. Greg House",
        "datetime": "2026-09-01T10:00:00Z",
        "ical_data": "BEGIN:VCALENDAR\r\nEND:VCALENDAR",
        "status": status,
        "expected_duration": "00:20:00",
        "location": "Online",
        "recurring": false,
        "recurring_frequency": null,
        "participant_ids": []
    })
}

fn booking_request(doctor_id: Uuid, patient_id: Uuid) -> CreateOnlineAppointmentRequest {
    serde_json::from_value(json!({
        "datetime": "2026-09-01T10:00:00Z",
        "expected_duration": "00:20:00",
        "doctor_id": doctor_id,
        "patient_id": patient_id,
        "reason": "persistent headaches",
        "specialty": "Neurology"
    }))
    .unwrap()
}

fn list_query() -> AppointmentListQuery {
    serde_json::from_value(json!({})).unwrap()
}

/// Every collaborator lives on one mock server; their paths do not
/// overlap (`/rest/v1/...`, `/appointments`, `/video-call`,
/// `/notifications/...`).
fn config_for(mock_server: &MockServer) -> Arc<AppConfig> {
    let mut config = TestConfig::default().to_app_config();
    config.database_url = mock_server.uri();
    config.appointment_service_base_url = mock_server.uri();
    config.rtc_service_base_url = mock_server.uri();
    config.notification_service_base_url = mock_server.uri();
    Arc::new(config)
}

#[tokio::test]
async fn booking_walks_the_whole_workflow() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let room_id = Uuid::new_v4();
    let canonical_id = Uuid::new_v4();
    let link_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    let session_url = format!("{}/room={}", mock_server.uri(), room_id);

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            true
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{}", doctor_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([doctor_row(doctor_id, "doc@example.com")])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/video-call"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "videoCallId": room_id })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .and(body_partial_json(json!({
            "description": "DocTalk | Neurology appointment with Dr. Greg House",
            "location": "Online",
            "expected_duration": "00:20:00",
            "participant_ids": [doctor_id, patient_id]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(external_json(canonical_id, "Scheduled")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/online_appointments"))
        .and(body_partial_json(json!({
            "session_url": session_url,
            "appointment_id": canonical_id
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([link_row(
            link_id,
            doctor_id,
            patient_id,
            canonical_id,
            &session_url
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notifications/sms"))
        .and(body_partial_json(json!({ "send_to": "+351000000002" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notifications/email"))
        .and(body_partial_json(json!({
            "recipients": ["john@example.com"],
            "subject": "DocTalk | Appointments"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let (status, Json(appointment)) = handlers::create_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Json(booking_request(doctor_id, patient_id)),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appointment.id, link_id);
    assert_eq!(appointment.session_url, session_url);
    assert_eq!(appointment.ical_data, "BEGIN:VCALENDAR\r\nEND:VCALENDAR");
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn rejected_booking_leaves_no_local_row() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{}", doctor_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([doctor_row(doctor_id, "doc@example.com")])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/video-call"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "videoCallId": Uuid::new_v4() })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(409).set_body_string("slot taken"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/online_appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::create_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Json(booking_request(doctor_id, patient_id)),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::Conflict(_));
}

#[tokio::test]
async fn doctors_cannot_book_appointments() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let user = TestUser::new("doc@example.com", "Greg House");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.doc@example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([doctor_row(doctor_id, "doc@example.com")])),
        )
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::create_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Json(booking_request(Uuid::new_v4(), Uuid::new_v4())),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::Forbidden(_));
}

#[tokio::test]
async fn patients_book_only_for_themselves() {
    let mock_server = MockServer::start().await;
    let patient_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::create_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Json(booking_request(Uuid::new_v4(), Uuid::new_v4())),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::Forbidden(_));
}

#[tokio::test]
async fn listing_drops_orphaned_links() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let kept_canonical = Uuid::new_v4();
    let gone_canonical = Uuid::new_v4();
    let kept_link = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("patient_id", format!("eq.{}", patient_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            link_row(kept_link, doctor_id, patient_id, kept_canonical, "http://rtc/room=1"),
            link_row(Uuid::new_v4(), doctor_id, patient_id, gone_canonical, "http://rtc/room=2"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("participant_id", patient_id.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([external_json(kept_canonical, "Scheduled")])),
        )
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let Json(appointments) = handlers::list_online_appointments(
        State(config),
        Extension(user.to_auth_user()),
        Query(list_query()),
    )
    .await
    .unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, kept_link);
}

#[tokio::test]
async fn listing_without_local_rows_skips_the_collaborator() {
    let mock_server = MockServer::start().await;
    let patient_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let Json(appointments) = handlers::list_online_appointments(
        State(config),
        Extension(user.to_auth_user()),
        Query(list_query()),
    )
    .await
    .unwrap();

    assert!(appointments.is_empty());
}

#[tokio::test]
async fn status_filter_applies_after_the_merge() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let scheduled = Uuid::new_v4();
    let cancelled = Uuid::new_v4();
    let cancelled_link = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            link_row(Uuid::new_v4(), doctor_id, patient_id, scheduled, "http://rtc/room=1"),
            link_row(cancelled_link, doctor_id, patient_id, cancelled, "http://rtc/room=2"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            external_json(scheduled, "Scheduled"),
            external_json(cancelled, "Cancelled"),
        ])))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let query: AppointmentListQuery =
        serde_json::from_value(json!({ "status": "Cancelled" })).unwrap();
    let Json(appointments) = handlers::list_online_appointments(
        State(config),
        Extension(user.to_auth_user()),
        Query(query),
    )
    .await
    .unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, cancelled_link);
    assert_eq!(appointments[0].status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn another_doctors_listing_is_redacted() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let canonical_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("doctor_id", format!("eq.{}", doctor_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_row(
            Uuid::new_v4(),
            doctor_id,
            patient_id,
            canonical_id,
            "http://rtc/room=1"
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("participant_id", doctor_id.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([external_json(canonical_id, "Scheduled")])),
        )
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let query: AppointmentListQuery =
        serde_json::from_value(json!({ "doctor_id": doctor_id })).unwrap();
    let Json(appointments) = handlers::list_online_appointments(
        State(config),
        Extension(user.to_auth_user()),
        Query(query),
    )
    .await
    .unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].patient_id, Uuid::nil());
    assert_eq!(appointments[0].reason, REDACTED);
    assert_eq!(appointments[0].session_url, REDACTED);
    assert_eq!(appointments[0].doctor_id, doctor_id);
}

fn update_request(status: &str) -> UpdateOnlineAppointmentRequest {
    serde_json::from_value(json!({ "status": status, "summary": "post-visit notes" })).unwrap()
}

#[tokio::test]
async fn cancellation_is_terminal() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let canonical_id = Uuid::new_v4();
    let link_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("id", format!("eq.{}", link_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_row(
            link_id,
            doctor_id,
            patient_id,
            canonical_id,
            "http://rtc/room=1"
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/appointments/{}", canonical_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(external_json(canonical_id, "Cancelled")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/appointments/{}", canonical_id)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::update_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Path(link_id),
        Json(update_request("Completed")),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::Forbidden(_));
}

#[tokio::test]
async fn only_assigned_participants_may_update() {
    let mock_server = MockServer::start().await;
    let link_id = Uuid::new_v4();
    let user = TestUser::new("jane@example.com", "Jane Roe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("id", format!("eq.{}", link_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_row(
            link_id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "http://rtc/room=1"
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.jane@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            Uuid::new_v4(),
            "jane@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::update_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Path(link_id),
        Json(update_request("Completed")),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::Forbidden(_));
}

#[tokio::test]
async fn cancelling_notifies_the_patient_once() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();
    let patient_id = Uuid::new_v4();
    let canonical_id = Uuid::new_v4();
    let link_id = Uuid::new_v4();
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("id", format!("eq.{}", link_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_row(
            link_id,
            doctor_id,
            patient_id,
            canonical_id,
            "http://rtc/room=1"
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.john@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    // First fetch sees the live appointment; the re-fetch after the push
    // sees the cancellation confirmed.
    Mock::given(method("GET"))
        .and(path(format!("/appointments/{}", canonical_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(external_json(canonical_id, "Scheduled")),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/appointments/{}", canonical_id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(external_json(canonical_id, "Cancelled")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/appointments/{}", canonical_id)))
        .and(body_partial_json(json!({ "status": "Cancelled" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut updated = link_row(link_id, doctor_id, patient_id, canonical_id, "http://rtc/room=1");
    updated["summary"] = json!("post-visit notes");
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/online_appointments"))
        .and(query_param("id", format!("eq.{}", link_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([updated])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{}", doctor_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([doctor_row(doctor_id, "doc@example.com")])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", format!("eq.{}", patient_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row(
            patient_id,
            "john@example.com",
            true,
            false
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notifications/email"))
        .and(body_partial_json(json!({
            "recipients": ["john@example.com"],
            "subject": "DocTalk | Appointments"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notifications/sms"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let status = handlers::update_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Path(link_id),
        Json(update_request("Cancelled")),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_appointment_is_not_found() {
    let mock_server = MockServer::start().await;
    let user = TestUser::new("john@example.com", "John Doe");

    Mock::given(method("GET"))
        .and(path("/rest/v1/online_appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let err = handlers::update_online_appointment(
        State(config),
        Extension(user.to_auth_user()),
        Path(Uuid::new_v4()),
        Json(update_request("Completed")),
    )
    .await
    .unwrap_err();

    assert_matches!(err, AppError::NotFound(_));
}
