use chrono::NaiveDate;
use serde::Deserialize;

use shared_models::profile::DoctorSpecialty;

/// Registration body. A caller-supplied `id` is ignored; the identifier
/// is always server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDoctorRequest {
    pub email: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub order_id: String,
    pub specialties: Vec<DoctorSpecialty>,
}

/// Profile update body. Name and email are identity fields and cannot be
/// changed through this path; extra keys in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDoctorRequest {
    pub address: String,
    pub city: String,
    pub country: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub postal_code: String,
    pub region: String,
    pub specialties: Vec<DoctorSpecialty>,
}

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub name: Option<String>,
    pub order_id: Option<String>,
    #[serde(default)]
    pub specialties: Vec<DoctorSpecialty>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}
