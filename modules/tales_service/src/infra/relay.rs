//! Third-party form relay client

use crate::contract::ContactMessage;
use crate::domain::relay::ContactRelay;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Posts contact messages as an urlencoded form
#[derive(Clone)]
pub struct FormRelayClient {
    client: reqwest::Client,
    url: String,
}

impl FormRelayClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ContactRelay for FormRelayClient {
    async fn submit(&self, message: &ContactMessage) -> Result<()> {
        let form = [
            ("name", message.name.as_str()),
            ("email", message.email.as_str()),
            ("message", message.message.as_str()),
        ];

        self.client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .context("Failed to reach contact relay")?
            .error_for_status()
            .context("Contact relay rejected the message")?;
        Ok(())
    }
}
