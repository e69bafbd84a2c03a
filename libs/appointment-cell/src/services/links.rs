use anyhow::Result;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::profile::DoctorSpecialty;

use crate::models::OnlineAppointmentRow;

/// Persistence of the local `online_appointments` link rows.
pub struct OnlineAppointmentService {
    store: StoreClient,
}

impl OnlineAppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
        reason: &str,
        summary: Option<&str>,
        session_url: &str,
        specialty: DoctorSpecialty,
        appointment_id: Uuid,
    ) -> Result<OnlineAppointmentRow> {
        let row = json!({
            "id": Uuid::new_v4(),
            "doctor_id": doctor_id,
            "patient_id": patient_id,
            "reason": reason,
            "summary": summary,
            "session_url": session_url,
            "specialty": specialty,
            "appointment_id": appointment_id,
        });

        debug!("Linking appointment {} for patient {}", appointment_id, patient_id);
        self.store.insert("/rest/v1/online_appointments", row).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<OnlineAppointmentRow>> {
        let path = format!("/rest/v1/online_appointments?id=eq.{}", id);
        let mut rows: Vec<OnlineAppointmentRow> = self.store.select(&path).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    pub async fn for_doctor(&self, doctor_id: Uuid) -> Result<Vec<OnlineAppointmentRow>> {
        let path = format!("/rest/v1/online_appointments?doctor_id=eq.{}", doctor_id);
        self.store.select(&path).await
    }

    pub async fn for_patient(&self, patient_id: Uuid) -> Result<Vec<OnlineAppointmentRow>> {
        let path = format!("/rest/v1/online_appointments?patient_id=eq.{}", patient_id);
        self.store.select(&path).await
    }

    /// The summary is the only locally persisted field an update may
    /// change; everything else lives with the collaborator.
    pub async fn update_summary(
        &self,
        id: Uuid,
        summary: Option<&str>,
    ) -> Result<OnlineAppointmentRow> {
        let path = format!("/rest/v1/online_appointments?id=eq.{}", id);
        self.store.update(&path, json!({ "summary": summary })).await
    }
}
