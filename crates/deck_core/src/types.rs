use std::fmt;

/// Ticket identifying one issued scoring request. Monotonically increasing;
/// a settlement whose ticket is not the active one is stale and dropped.
pub type RequestId = u64;

/// One job posting as delivered by the paginated feed. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: String,
    pub company: String,
    pub title: String,
    pub description: String,
}

/// Resolved swipe direction for the visible card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Apply,
    Skip,
}

impl SwipeAction {
    /// Wire name used by the decisions collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeAction::Apply => "apply",
            SwipeAction::Skip => "skip",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compatibility score for one (posting, resume) pair, as returned by the
/// scoring oracle. Held only for the currently visible posting.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Match strength in `[0, 1]`.
    pub score: f64,
    /// Pre-formatted percentage, shown verbatim on the badge.
    pub percent: String,
    /// Top matching features, strongest first.
    pub features: Vec<String>,
    pub latency_ms: u64,
}

/// Why a scoring request produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreFailure {
    /// The oracle did not answer within the request deadline.
    Timeout,
    /// Non-2xx response; `message` is the extracted `detail` text.
    Api { message: String },
    Network,
    Malformed,
}

impl fmt::Display for ScoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFailure::Timeout => write!(f, "timed out"),
            ScoreFailure::Api { message } => write!(f, "{message}"),
            ScoreFailure::Network => write!(f, "network error"),
            ScoreFailure::Malformed => write!(f, "malformed response"),
        }
    }
}

/// Lifecycle of the annotation on the visible card.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MatchBadge {
    /// No computation triggered yet (or inputs absent).
    #[default]
    Idle,
    /// A scoring request is in flight for the visible posting.
    Loading,
    Ready(MatchResult),
    Failed(ScoreFailure),
}

/// A previously persisted MatchResult plus the context it was computed for.
/// Written by an upstream screen; read here once at entry as a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMatch {
    pub job_id: String,
    pub resume_excerpt: String,
    pub result: MatchResult,
}
