use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::profile::{Patient, UserRow};

use crate::models::{RegisterPatientRequest, UpdatePatientRequest};

pub struct PatientService {
    store: StoreClient,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn find_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>> {
        let path = format!("/rest/v1/users?id=eq.{}&role=eq.patient", patient_id);
        let rows: Vec<UserRow> = self.store.select(&path).await?;
        Ok(rows.first().and_then(|row| row.to_patient()))
    }

    /// Insert a new patient row with a freshly assigned identifier.
    pub async fn register(&self, request: RegisterPatientRequest) -> Result<Patient> {
        debug!("Registering patient {}", request.email);

        let row = json!({
            "id": Uuid::new_v4(),
            "email": request.email,
            "name": request.name,
            "date_of_birth": request.date_of_birth,
            "phone_number": request.phone_number,
            "address": request.address,
            "city": request.city,
            "region": request.region,
            "postal_code": request.postal_code,
            "country": request.country,
            "role": "patient",
            "patient_code": request.patient_code,
            "notify_email": request.notification_preferences.email,
            "notify_sms": request.notification_preferences.sms,
        });

        let inserted: UserRow = self.store.insert("/rest/v1/users", row).await?;
        inserted
            .to_patient()
            .ok_or_else(|| anyhow!("inserted row is not a patient"))
    }

    /// Overwrite the mutable profile fields of an existing patient.
    pub async fn update(&self, patient_id: Uuid, request: UpdatePatientRequest) -> Result<Patient> {
        debug!("Updating patient {}", patient_id);

        let changes = json!({
            "address": request.address,
            "city": request.city,
            "country": request.country,
            "date_of_birth": request.date_of_birth,
            "phone_number": request.phone_number,
            "postal_code": request.postal_code,
            "region": request.region,
            "notify_email": request.notification_preferences.email,
            "notify_sms": request.notification_preferences.sms,
        });

        let path = format!("/rest/v1/users?id=eq.{}&role=eq.patient", patient_id);
        let updated: UserRow = self.store.update(&path, changes).await?;
        updated
            .to_patient()
            .ok_or_else(|| anyhow!("updated row is not a patient"))
    }
}
