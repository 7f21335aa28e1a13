use thiserror::Error;

/// Ticket tagging one scoring request; opaque to the engine, compared by the
/// core when a settlement comes back.
pub type RequestId = u64;

/// One posting as decoded from the jobs feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingRecord {
    pub id: String,
    pub company: String,
    pub title: String,
    pub description: String,
}

/// A decoded page of postings plus the cursor for the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPage {
    pub items: Vec<PostingRecord>,
    pub next_offset: u64,
}

/// Scoring oracle output for one (JD, CV) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub score: f64,
    pub percent: String,
    pub features: Vec<String>,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("http status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed page: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The oracle did not answer within the request deadline.
    #[error("timed out")]
    Timeout,
    /// Non-2xx response; the extracted `detail` text, verbatim.
    #[error("{message}")]
    Api { message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("network error: {0}")]
    Network(String),
}

/// Everything the engine reports back to the update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageLoaded { page: JobPage },
    PageFailed { error: PageError },
    ScoreSettled {
        request_id: RequestId,
        result: Result<MatchOutcome, ScoreError>,
    },
}
