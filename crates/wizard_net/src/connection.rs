//! NATS connection management.
//!
//! Provides a thin wrapper around `async-nats` with the helpers a wizard
//! agent needs: receiving its tick stream and submitting commands.

use tracing::{debug, info};
use wizard_model::UnitId;

use crate::error::NetError;
use crate::messages::{COMMAND_SUBMISSION_MSG_TYPE, CommandSubmission, headers};
use crate::subjects;

/// Default NATS server URL.
pub const DEFAULT_NATS_URL: &str = "nats://localhost:4222";

/// The environment variable used to override the NATS URL.
pub const NATS_URL_ENV: &str = "NATS_URL";

/// A wrapper around an `async-nats` client.
#[derive(Debug, Clone)]
pub struct NatsConnection {
    client: async_nats::Client,
}

impl NatsConnection {
    /// Connect to NATS using the URL from the `NATS_URL` environment variable,
    /// falling back to [`DEFAULT_NATS_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Connect`] if the connection cannot be established.
    pub async fn connect() -> Result<Self, NetError> {
        let url = std::env::var(NATS_URL_ENV).unwrap_or_else(|_| DEFAULT_NATS_URL.to_string());
        Self::connect_to(&url).await
    }

    /// Connect to NATS at the specified URL.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Connect`] if the connection cannot be established.
    pub async fn connect_to(url: &str) -> Result<Self, NetError> {
        info!(url, "connecting to NATS");
        let client = async_nats::connect(url).await?;
        info!("NATS connection established");
        Ok(Self { client })
    }

    /// Submit a finished command, tagging it with routing headers.
    ///
    /// # Errors
    ///
    /// Returns [`NetError`] if encoding or publishing fails.
    pub async fn submit_command(&self, submission: &CommandSubmission) -> Result<(), NetError> {
        let mut map = async_nats::HeaderMap::new();
        map.insert(headers::MSG_TYPE, COMMAND_SUBMISSION_MSG_TYPE);
        map.insert(headers::TICK_ID, submission.tick_id.to_string().as_str());
        map.insert(
            headers::WIZARD_ID,
            submission.wizard_id.id().to_string().as_str(),
        );
        map.insert(headers::INSTANCE_ID, submission.instance_id.as_str());

        let payload = crate::codec::encode(submission)?;
        self.client
            .publish_with_headers(subjects::COMMAND_SUBMIT.to_string(), map, payload.into())
            .await?;
        debug!(
            tick_id = submission.tick_id,
            wizard_id = submission.wizard_id.id(),
            "command submitted"
        );
        Ok(())
    }

    /// Subscribe to the per-tick context of one wizard.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Subscribe`] if the subscription fails.
    pub async fn subscribe_ticks(
        &self,
        wizard_id: UnitId,
    ) -> Result<async_nats::Subscriber, NetError> {
        let subject = subjects::agent_tick(wizard_id.id());
        let sub = self
            .client
            .queue_subscribe(subject.clone(), subjects::queue_group(wizard_id.id()))
            .await?;
        info!(subject, "subscribed to ticks");
        Ok(sub)
    }
}
