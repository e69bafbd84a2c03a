use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::profile::DoctorSpecialty;

/// Placeholder written over sensitive appointment fields when a doctor's
/// list is viewed by someone other than that doctor.
pub const REDACTED: &str = "REDACTED";

/// Lifecycle states owned by the appointment collaborator; this service
/// mirrors them but never invents its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

/// `chrono::Duration` as the collaborator's `"HH:MM:SS"` wire format.
pub mod duration_hms {
    use chrono::Duration;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let total = duration.num_seconds();
        serializer.serialize_str(&format!(
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        ))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 3 {
            return Err(de::Error::custom(format!("invalid duration: {}", text)));
        }
        let hours: i64 = parts[0].parse().map_err(de::Error::custom)?;
        let minutes: i64 = parts[1].parse().map_err(de::Error::custom)?;
        let seconds: i64 = parts[2].parse().map_err(de::Error::custom)?;
        Ok(Duration::seconds(hours * 3600 + minutes * 60 + seconds))
    }
}

pub fn zero_duration() -> Duration {
    Duration::zero()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringFrequencyType {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringOptions {
    #[serde(rename = "type")]
    pub frequency_type: RecurringFrequencyType,
    pub interval: i32,
    pub count: i32,
}

/// Creation payload for the appointment collaborator. The canonical id is
/// assigned by the collaborator, so there is none here.
#[derive(Debug, Clone, Serialize)]
pub struct NewExternalAppointment {
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(with = "duration_hms")]
    pub expected_duration: Duration,
    pub recurring: bool,
    pub recurring_frequency: Option<RecurringOptions>,
    pub location: String,
    pub participant_ids: Vec<Uuid>,
}

/// Canonical appointment record as returned by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalAppointment {
    pub id: Uuid,
    #[serde(default)]
    pub description: String,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub ical_data: String,
    pub status: AppointmentStatus,
    #[serde(with = "duration_hms", default = "zero_duration")]
    pub expected_duration: Duration,
    #[serde(default)]
    pub num_participants: i32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<RecurringOptions>,
    #[serde(default)]
    pub participant_ids: Vec<Uuid>,
}

/// Persisted link row of the `online_appointments` table. Everything the
/// collaborator owns (datetime, status, duration, iCal) stays out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineAppointmentRow {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub reason: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub session_url: String,
    pub specialty: DoctorSpecialty,
    pub appointment_id: Uuid,
}

/// Appointment as exposed by the API: the local link row plus the
/// transient fields mirrored from its canonical counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineAppointment {
    pub id: Uuid,
    pub datetime: DateTime<Utc>,
    pub ical_data: String,
    pub status: AppointmentStatus,
    #[serde(with = "duration_hms")]
    pub expected_duration: Duration,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub reason: String,
    pub summary: Option<String>,
    pub session_url: String,
    pub specialty: DoctorSpecialty,
}

impl OnlineAppointment {
    pub fn from_parts(row: OnlineAppointmentRow, external: &ExternalAppointment) -> Self {
        Self {
            id: row.id,
            datetime: external.datetime,
            ical_data: external.ical_data.clone(),
            status: external.status,
            expected_duration: external.expected_duration,
            doctor_id: row.doctor_id,
            patient_id: row.patient_id,
            reason: row.reason,
            summary: row.summary,
            session_url: row.session_url,
            specialty: row.specialty,
        }
    }

    /// View of a doctor's appointment for someone who is not that doctor:
    /// the patient identity and every content field are blanked out.
    pub fn redacted(mut self) -> Self {
        self.patient_id = Uuid::nil();
        self.ical_data = REDACTED.to_string();
        self.summary = Some(REDACTED.to_string());
        self.reason = REDACTED.to_string();
        self.session_url = REDACTED.to_string();
        self
    }
}

/// Booking request. The id, session URL and canonical link are all
/// assigned during the workflow; callers only choose the participants,
/// the slot and the reason.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOnlineAppointmentRequest {
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(with = "duration_hms")]
    pub expected_duration: Duration,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub reason: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub specialty: DoctorSpecialty,
}

/// Update body: only status and summary are honored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOnlineAppointmentRequest {
    pub status: AppointmentStatus,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub doctor_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}
