use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::models::{ExternalAppointment, NewExternalAppointment};

/// Client for the appointment collaborator, which owns the canonical
/// appointment records and their scheduling conflicts.
pub struct AppointmentServiceClient {
    client: Client,
    base_url: String,
}

impl AppointmentServiceClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.appointment_service_base_url.clone(),
        }
    }

    /// Submit a canonical appointment. The collaborator answering with
    /// anything but 201 means the slot was not accepted; that outcome is
    /// `None`, not an error.
    pub async fn create(
        &self,
        appointment: &NewExternalAppointment,
    ) -> Result<Option<ExternalAppointment>> {
        let url = format!("{}/appointments", self.base_url);
        info!("Posting an appointment to {}", url);

        let response = self.client.post(&url).json(appointment).send().await?;
        let status = response.status();
        info!("Appointment service answered {}", status);

        if status != StatusCode::CREATED {
            warn!("Appointment creation rejected: {}", response.text().await?);
            return Ok(None);
        }

        Ok(Some(response.json::<ExternalAppointment>().await?))
    }

    /// Fetch a canonical appointment; `None` when the collaborator does
    /// not know the id.
    pub async fn fetch(&self, appointment_id: Uuid) -> Result<Option<ExternalAppointment>> {
        let url = format!("{}/appointments/{}", self.base_url, appointment_id);
        debug!("Fetching appointment {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        Ok(Some(response.json::<ExternalAppointment>().await?))
    }

    pub async fn update(
        &self,
        appointment_id: Uuid,
        appointment: &ExternalAppointment,
    ) -> Result<()> {
        let url = format!("{}/appointments/{}", self.base_url, appointment_id);
        debug!("Updating appointment {}", url);

        self.client
            .put(&url)
            .json(appointment)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// List the canonical appointments a participant is part of,
    /// forwarding the caller's date range and paging.
    pub async fn list_for_participant(
        &self,
        participant_id: Uuid,
        limit: i32,
        offset: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<ExternalAppointment>> {
        let mut url = format!(
            "{}/appointments?participant_id={}&limit={}&offset={}",
            self.base_url, participant_id, limit, offset
        );
        if let Some(from) = from {
            url.push_str(&format!("&from={}", from.to_rfc3339()));
        }
        if let Some(to) = to {
            url.push_str(&format!("&to={}", to.to_rfc3339()));
        }

        info!("Listing appointments: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let appointments: Vec<ExternalAppointment> = response.json().await?;

        info!("Appointment query returned {} results", appointments.len());
        Ok(appointments)
    }
}
