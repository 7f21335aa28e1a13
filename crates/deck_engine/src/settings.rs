use std::time::Duration;

/// Endpoints and timeouts for the three collaborators.
///
/// The jobs feed and the decisions endpoint live behind one base URL; the
/// scoring oracle is a separate service.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL serving `/jobs` and `/decisions`.
    pub feed_base: String,
    /// Base URL serving `/predict`.
    pub oracle_base: String,
    pub connect_timeout: Duration,
    /// Total deadline for one scoring call. On expiry the request is aborted
    /// and surfaced as a timeout, never left pending.
    pub score_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            feed_base: "http://localhost:8080/api".to_string(),
            oracle_base: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            score_timeout: Duration::from_secs(15),
        }
    }
}

impl ApiSettings {
    pub(crate) fn feed_url(&self, path: &str) -> String {
        format!("{}/{}", self.feed_base.trim_end_matches('/'), path)
    }

    pub(crate) fn oracle_url(&self, path: &str) -> String {
        format!("{}/{}", self.oracle_base.trim_end_matches('/'), path)
    }
}
