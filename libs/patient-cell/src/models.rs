use chrono::NaiveDate;
use serde::Deserialize;

use shared_models::profile::NotificationPreferences;

/// Registration body. A caller-supplied `id` is ignored; the identifier
/// is always server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPatientRequest {
    pub email: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub patient_code: String,
    pub notification_preferences: NotificationPreferences,
}

/// Profile update body. Name, email and the patient code are immutable
/// through this path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatientRequest {
    pub address: String,
    pub city: String,
    pub country: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub postal_code: String,
    pub region: String,
    pub notification_preferences: NotificationPreferences,
}
