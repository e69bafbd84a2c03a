use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const REDACTED: &str = "[REDACTED]";

/// Medical specialties recognized by the directory. Serialized as plain
/// strings on every surface (API, store, appointment descriptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoctorSpecialty {
    Allergiology,
    Immunology,
    Anesthesiology,
    Dermathology,
    DiagnosticRadiology,
    EmergencyMedicine,
    InternalMedicine,
    MedicalGenetics,
    Neurology,
    NuclearMedicine,
    Obstetrics,
    Gynecology,
    Ophthalnology,
    Pathology,
    Pediatrics,
    PhysicalMedicine,
    PreventiveMedicine,
    Psychiatry,
    RadiationOncology,
    Surgery,
    Urology,
}

impl DoctorSpecialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorSpecialty::Allergiology => "Allergiology",
            DoctorSpecialty::Immunology => "Immunology",
            DoctorSpecialty::Anesthesiology => "Anesthesiology",
            DoctorSpecialty::Dermathology => "Dermathology",
            DoctorSpecialty::DiagnosticRadiology => "DiagnosticRadiology",
            DoctorSpecialty::EmergencyMedicine => "EmergencyMedicine",
            DoctorSpecialty::InternalMedicine => "InternalMedicine",
            DoctorSpecialty::MedicalGenetics => "MedicalGenetics",
            DoctorSpecialty::Neurology => "Neurology",
            DoctorSpecialty::NuclearMedicine => "NuclearMedicine",
            DoctorSpecialty::Obstetrics => "Obstetrics",
            DoctorSpecialty::Gynecology => "Gynecology",
            DoctorSpecialty::Ophthalnology => "Ophthalnology",
            DoctorSpecialty::Pathology => "Pathology",
            DoctorSpecialty::Pediatrics => "Pediatrics",
            DoctorSpecialty::PhysicalMedicine => "PhysicalMedicine",
            DoctorSpecialty::PreventiveMedicine => "PreventiveMedicine",
            DoctorSpecialty::Psychiatry => "Psychiatry",
            DoctorSpecialty::RadiationOncology => "RadiationOncology",
            DoctorSpecialty::Surgery => "Surgery",
            DoctorSpecialty::Urology => "Urology",
        }
    }
}

impl std::fmt::Display for DoctorSpecialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Doctor,
    Patient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
}

/// Doctor profile as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
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

impl Doctor {
    /// Copy with the personal contact fields blanked out. Applied to every
    /// search result and to fetches by non-owners.
    pub fn redacted(mut self) -> Self {
        self.address = REDACTED.to_string();
        self.city = REDACTED.to_string();
        self.postal_code = REDACTED.to_string();
        self.phone_number = REDACTED.to_string();
        self.email = REDACTED.to_string();
        self
    }
}

/// Patient profile as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
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

impl Patient {
    pub fn redacted(mut self) -> Self {
        self.address = REDACTED.to_string();
        self.city = REDACTED.to_string();
        self.postal_code = REDACTED.to_string();
        self.phone_number = REDACTED.to_string();
        self.email = REDACTED.to_string();
        self
    }
}

/// Result of the self-profile lookup: base identity plus the variant the
/// role discriminator selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "user_type", content = "user_data")]
pub enum SelfProfile {
    Doctor(Doctor),
    Patient(Patient),
}

/// A row of the `users` table: the base identity columns, the role
/// discriminator and the role-specific columns, nullable for the other
/// role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub role: UserRole,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub specialties: Option<Vec<DoctorSpecialty>>,
    #[serde(default)]
    pub patient_code: Option<String>,
    #[serde(default)]
    pub notify_email: Option<bool>,
    #[serde(default)]
    pub notify_sms: Option<bool>,
}

impl UserRow {
    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }

    pub fn to_doctor(&self) -> Option<Doctor> {
        if self.role != UserRole::Doctor {
            return None;
        }
        Some(self.build_doctor())
    }

    fn build_doctor(&self) -> Doctor {
        Doctor {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            order_id: self.order_id.clone().unwrap_or_default(),
            specialties: self.specialties.clone().unwrap_or_default(),
        }
    }

    pub fn to_patient(&self) -> Option<Patient> {
        if self.role != UserRole::Patient {
            return None;
        }
        Some(self.build_patient())
    }

    fn build_patient(&self) -> Patient {
        Patient {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            patient_code: self.patient_code.clone().unwrap_or_default(),
            notification_preferences: NotificationPreferences {
                email: self.notify_email.unwrap_or(false),
                sms: self.notify_sms.unwrap_or(false),
            },
        }
    }

    pub fn to_self_profile(&self) -> SelfProfile {
        match self.role {
            UserRole::Doctor => SelfProfile::Doctor(self.build_doctor()),
            UserRole::Patient => SelfProfile::Patient(self.build_patient()),
        }
    }
}
