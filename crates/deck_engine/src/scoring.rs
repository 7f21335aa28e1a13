use serde::{Deserialize, Serialize};

use crate::{ApiSettings, MatchOutcome, ScoreError};

/// Number of top features requested from the oracle per prediction.
pub const SCORE_TOPK: u32 = 6;

/// External compatibility-scoring oracle.
#[async_trait::async_trait]
pub trait ScoringOracle: Send + Sync {
    async fn score(&self, jd_text: &str, cv_text: &str) -> Result<MatchOutcome, ScoreError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScoringOracle {
    settings: ApiSettings,
}

impl ReqwestScoringOracle {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScoreError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.score_timeout)
            .build()
            .map_err(|err| ScoreError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ScoringOracle for ReqwestScoringOracle {
    async fn score(&self, jd_text: &str, cv_text: &str) -> Result<MatchOutcome, ScoreError> {
        let client = self.build_client()?;

        let response = client
            .post(self.settings.oracle_url("predict"))
            .json(&PredictBody {
                jd_text,
                cv_text,
                topk: SCORE_TOPK,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // Error payloads carry an optional `detail` message; it is used
            // verbatim as the failure text when present.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            let message =
                detail.unwrap_or_else(|| format!("http status {}", status.as_u16()));
            return Err(ScoreError::Api { message });
        }

        let body: OutcomeBody = response
            .json()
            .await
            .map_err(|err| ScoreError::Malformed(err.to_string()))?;

        Ok(MatchOutcome {
            score: body.score,
            percent: body.percent,
            features: body.features,
            latency_ms: body.latency_ms,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScoreError {
    if err.is_timeout() {
        return ScoreError::Timeout;
    }
    ScoreError::Network(err.to_string())
}

#[derive(Debug, Serialize)]
struct PredictBody<'a> {
    jd_text: &'a str,
    cv_text: &'a str,
    topk: u32,
}

#[derive(Debug, Deserialize)]
struct OutcomeBody {
    score: f64,
    percent: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    latency_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
