use crate::{CachedMatch, JobPosting, MatchResult, RequestId, ScoreFailure};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Browsing screen became active; kicks off the first page fetch.
    ScreenEntered,
    /// A page of postings arrived from the jobs feed.
    PageLoaded {
        items: Vec<JobPosting>,
        next_offset: u64,
    },
    /// The page fetch failed; the queue is left unchanged.
    PageFailed { reason: String },
    /// The visible card was released at a final horizontal offset.
    DragReleased { offset_x: f32 },
    /// The candidate resume text changed (or was cleared).
    ResumeChanged(Option<String>),
    /// The scoring oracle settled the request carrying this ticket.
    ScoreSettled {
        request_id: RequestId,
        result: Result<MatchResult, ScoreFailure>,
    },
    /// Cached result from an earlier screen, shown until fresh data exists.
    LastMatchRestored(CachedMatch),
    /// Fallback for placeholder wiring.
    NoOp,
}
