use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::profile::Patient;

use crate::models::OnlineAppointment;

const SENDER: &str = "egs-notify@nextechnology.xyz";
const SUBJECT: &str = "DocTalk | Appointments";

#[derive(Debug, Serialize)]
struct SmsNotification {
    send_to: String,
    msg_body: String,
}

#[derive(Debug, Serialize)]
struct EmailNotification {
    sender: String,
    recipients: Vec<String>,
    subject: String,
    body: String,
    attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Serialize)]
struct EmailAttachment {
    attachment_data: String,
    attachment_name: String,
    attachment_mime: String,
}

/// Client for the notification collaborator. Channel selection follows
/// the patient's stored preferences; emails carry the appointment iCal
/// as a calendar attachment.
pub struct NotificationClient {
    client: Client,
    base_url: String,
}

impl NotificationClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.notification_service_base_url.clone(),
        }
    }

    pub async fn send_new_appointment(
        &self,
        patient: &Patient,
        doctor_name: &str,
        appointment: &OnlineAppointment,
    ) -> Result<()> {
        let message = format!(
            "We're confirming your online doctor's appointment on {} with Dr. {}",
            appointment.datetime.format("%A, %d %B %Y"),
            doctor_name
        );
        self.send(patient, &message, &appointment.ical_data).await
    }

    pub async fn send_cancelled_appointment(
        &self,
        patient: &Patient,
        doctor_name: &str,
        appointment: &OnlineAppointment,
    ) -> Result<()> {
        let message = format!(
            "Your online doctor's appointment on {} with Dr. {} has been cancelled",
            appointment.datetime.format("%A, %d %B %Y"),
            doctor_name
        );
        self.send(patient, &message, &appointment.ical_data).await
    }

    async fn send(&self, patient: &Patient, message: &str, ical_data: &str) -> Result<()> {
        if patient.notification_preferences.sms {
            let url = format!("{}/notifications/sms", self.base_url);
            debug!("Sending SMS notification via {}", url);

            let sms = SmsNotification {
                send_to: patient.phone_number.clone(),
                msg_body: message.to_string(),
            };
            self.client
                .post(&url)
                .json(&sms)
                .send()
                .await?
                .error_for_status()?;
        }

        if patient.notification_preferences.email {
            let url = format!("{}/notifications/email", self.base_url);
            debug!("Sending email notification via {}", url);

            let email = EmailNotification {
                sender: SENDER.to_string(),
                recipients: vec![patient.email.clone()],
                subject: SUBJECT.to_string(),
                body: format!("<p>{}</p>", message),
                attachments: vec![EmailAttachment {
                    attachment_data: BASE64.encode(ical_data.as_bytes()),
                    attachment_name: "DocTalk_appointment.icl".to_string(),
                    attachment_mime: "text/calendar".to_string(),
                }],
            };
            self.client
                .post(&url)
                .json(&email)
                .send()
                .await?
                .error_for_status()?;
        }

        info!("Notification dispatched for patient {}", patient.id);
        Ok(())
    }
}
