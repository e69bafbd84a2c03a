use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;

/// Client for the video/RTC collaborator, which allocates room
/// identifiers for new appointments.
pub struct RtcClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct VideoCallResponse {
    #[serde(rename = "videoCallId")]
    video_call_id: Uuid,
}

impl RtcClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.rtc_service_base_url.clone(),
        }
    }

    /// Allocate a room and return the session URL participants will join.
    pub async fn create_session_url(&self) -> Result<String> {
        let url = format!("{}/video-call", self.base_url);
        debug!("Requesting a video call id from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: VideoCallResponse = response.json().await?;

        info!("Allocated video call {}", body.video_call_id);
        Ok(format!("{}/room={}", self.base_url, body.video_call_id))
    }
}
