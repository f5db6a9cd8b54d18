//! Webhook delivery for captured leads.
//!
//! The `LeadRelay` trait abstracts the destination so tests can record
//! deliveries in memory. `HttpLeadRelay` performs the single
//! fire-and-forget POST to the configured marketing-automation endpoint;
//! any non-2xx response or transport failure surfaces as
//! [`PlannerError::NetworkError`] with no retry.

use crate::config::RelayConfig;
use crate::lead::CapturedLead;
use crate::types::PlannerError;

/// Trait for delivering a captured lead to a marketing endpoint.
#[async_trait::async_trait]
pub trait LeadRelay: Send + Sync {
    /// Delivers the lead. One attempt, no retry.
    async fn deliver(&self, lead: &CapturedLead) -> Result<(), PlannerError>;
}

/// Relay that POSTs leads as JSON to a configured webhook URL.
pub struct HttpLeadRelay {
    client: reqwest::Client,
    url: String,
}

impl HttpLeadRelay {
    pub fn new(config: &RelayConfig) -> Self {
        let builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds));

        Self {
            client: builder.build().unwrap_or_default(),
            url: config.webhook_url.clone(),
        }
    }
}

#[async_trait::async_trait]
impl LeadRelay for HttpLeadRelay {
    async fn deliver(&self, lead: &CapturedLead) -> Result<(), PlannerError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|e| PlannerError::NetworkError(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Webhook endpoint rejected lead");
            return Err(PlannerError::NetworkError(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }

        tracing::debug!(lead_id = %lead.id, "Lead delivered to webhook");
        Ok(())
    }
}

/// In-memory relay for tests: records every delivered lead.
#[derive(Default)]
pub struct RecordingRelay {
    delivered: std::sync::Mutex<Vec<CapturedLead>>,
}

impl RecordingRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leads delivered so far, in order.
    pub fn delivered(&self) -> Vec<CapturedLead> {
        self.delivered.lock().expect("Relay mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl LeadRelay for RecordingRelay {
    async fn deliver(&self, lead: &CapturedLead) -> Result<(), PlannerError> {
        self.delivered
            .lock()
            .expect("Relay mutex poisoned")
            .push(lead.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::planner::{AffordabilityPlanner, AssessAffordability};

    fn sample_lead() -> CapturedLead {
        let report = AffordabilityPlanner::default()
            .cash(5000)
            .income(4800)
            .expenses(3200)
            .purchase(1200)
            .assess(&PlannerConfig::default())
            .unwrap();
        CapturedLead::new("jo@example.com", None, &report).unwrap()
    }

    #[tokio::test]
    async fn test_recording_relay_captures_leads() {
        let relay = RecordingRelay::new();
        let lead = sample_lead();
        relay.deliver(&lead).await.unwrap();

        let delivered = relay.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].email, "jo@example.com");
    }

    #[tokio::test]
    #[ignore] // Requires a reachable webhook endpoint; not run in CI.
    async fn test_http_relay_live() {
        let config = RelayConfig::new("https://example.com/hooks/leads");
        let relay = HttpLeadRelay::new(&config);
        let res = relay.deliver(&sample_lead()).await;
        println!("Live delivery result: {:?}", res);
    }
}
