use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::traits::BaseNotificationService;
use crate::common::MemberId;

const PUSH_ENDPOINT: &str = "https://exp.host/--/api/v2/push/send";

/// Push notification client for review decisions.
///
/// Delivery is fire-and-forget from the workflow's perspective: callers log
/// failures but never roll back a decision because a push did not land.
pub struct PushNotificationClient {
    client: Client,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct PushMessage {
    to: String,
    title: String,
    body: String,
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    data: Vec<PushTicket>,
}

#[derive(Debug, Deserialize)]
struct PushTicket {
    status: String,
    #[allow(dead_code)]
    message: Option<String>,
}

impl PushNotificationClient {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }
}

#[async_trait]
impl BaseNotificationService for PushNotificationClient {
    async fn notify_decision(
        &self,
        recipient: MemberId,
        campaign_name: &str,
        decision: &str,
        feedback: &str,
    ) -> Result<()> {
        let title = format!("Submission {}", decision);
        let body = if feedback.is_empty() {
            format!("Your submission for \"{}\" was {}.", campaign_name, decision)
        } else {
            format!(
                "Your submission for \"{}\" was {}: {}",
                campaign_name, decision, feedback
            )
        };

        let message = PushMessage {
            to: format!("member:{}", recipient),
            title,
            body,
            data: serde_json::json!({
                "decision": decision,
                "campaign": campaign_name,
            }),
        };

        let mut request = self.client.post(PUSH_ENDPOINT).json(&message);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        info!(recipient = %recipient, decision = %decision, "Sending decision notification");

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("Push delivery failed {}: {}", status, body);
            anyhow::bail!("Push API error {}: {}", status, body);
        }

        let push_response: PushResponse = response.json().await?;
        for ticket in &push_response.data {
            if ticket.status == "error" {
                error!("Push ticket error: {:?}", ticket);
                anyhow::bail!("Push ticket error: {:?}", ticket);
            }
        }

        Ok(())
    }
}
