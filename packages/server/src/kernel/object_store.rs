use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use super::traits::{BaseObjectStore, DeleteOutcome};

/// Default per-request deadline for storage calls. Storage must never block
/// a review decision indefinitely.
const DELETE_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the hosted object store.
///
/// Media references are opaque keys appended to the store's base URL.
pub struct HttpObjectStore {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpObjectStore {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(DELETE_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            token,
        })
    }

    fn object_url(&self, media_ref: &str) -> Result<Url> {
        self.base_url
            .join(media_ref)
            .map_err(|e| anyhow::anyhow!("Invalid media reference {}: {}", media_ref, e))
    }
}

#[async_trait]
impl BaseObjectStore for HttpObjectStore {
    async fn delete(&self, media_ref: &str) -> Result<DeleteOutcome> {
        let url = self.object_url(media_ref)?;

        let mut request = self.client.delete(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(media_ref = %media_ref, "Object already absent");
                Ok(DeleteOutcome::AlreadyAbsent)
            }
            status if status.is_success() => {
                debug!(media_ref = %media_ref, "Object removed");
                Ok(DeleteOutcome::Removed)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                error!(media_ref = %media_ref, %status, "Object store delete failed: {}", body);
                anyhow::bail!("Object store delete failed with {}: {}", status, body)
            }
        }
    }
}
