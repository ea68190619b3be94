//! Contact message relay
//!
//! The contact page hands submissions to a third-party form relay. The relay
//! outcome is logged only; the submitter sees the thank-you state either way.

use crate::contract::ContactMessage;

/// Relay for contact form submissions
#[async_trait::async_trait]
pub trait ContactRelay: Send + Sync {
    /// Forward a validated message
    async fn submit(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

/// No-op relay for tests or when no relay endpoint is configured
pub struct NoOpContactRelay;

#[async_trait::async_trait]
impl ContactRelay for NoOpContactRelay {
    async fn submit(&self, message: &ContactMessage) -> anyhow::Result<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            "Contact relay not configured; message dropped"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_relay_accepts_messages() {
        let relay = NoOpContactRelay;
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            message: "Hello".to_string(),
        };

        // Should not error
        assert!(relay.submit(&message).await.is_ok());
    }
}
