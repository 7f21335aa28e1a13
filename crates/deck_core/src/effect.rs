use crate::{RequestId, SwipeAction};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Request the next page from the jobs feed at the current cursor.
    FetchPage { offset: u64, limit: u32 },
    /// Score the visible posting against the current resume text.
    ScoreVisible {
        request_id: RequestId,
        jd_text: String,
        cv_text: String,
    },
    /// Abort the in-flight scoring request carrying this ticket.
    CancelScore { request_id: RequestId },
    /// Report a resolved swipe. Best-effort; never awaited by the loop.
    RecordDecision {
        job_id: String,
        action: SwipeAction,
    },
}
