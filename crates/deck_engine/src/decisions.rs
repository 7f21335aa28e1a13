use serde::Serialize;

use crate::{ApiSettings, DecisionError};

/// Backend collaborator receiving resolved swipes.
///
/// Recording is best-effort: callers never wait on the outcome and a failure
/// carries no user-visible consequence.
#[async_trait::async_trait]
pub trait DecisionSink: Send + Sync {
    async fn record(&self, job_id: &str, action: &str) -> Result<(), DecisionError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDecisionSink {
    settings: ApiSettings,
}

impl ReqwestDecisionSink {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, DecisionError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| DecisionError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl DecisionSink for ReqwestDecisionSink {
    async fn record(&self, job_id: &str, action: &str) -> Result<(), DecisionError> {
        let client = self.build_client()?;

        // The response, including its status code, is ignored by contract.
        client
            .post(self.settings.feed_url("decisions"))
            .json(&DecisionBody { job_id, action })
            .send()
            .await
            .map_err(|err| DecisionError::Network(err.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct DecisionBody<'a> {
    job_id: &'a str,
    action: &'a str,
}
