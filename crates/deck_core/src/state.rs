use std::collections::VecDeque;

use crate::view_model::{BadgeView, CardView, DeckViewModel, DECK_DEPTH};
use crate::{CachedMatch, JobPosting, MatchBadge, RequestId};

/// Page size requested from the jobs feed.
pub const PAGE_LIMIT: u32 = 12;

/// Queue length below which another page is requested after a pop.
pub const LOW_WATER_MARK: usize = 5;

/// All state behind the browsing screen. Mutated only through [`crate::update`],
/// invoked from a single consumer thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckState {
    queue: VecDeque<JobPosting>,
    offset: u64,
    loading: bool,
    resume: Option<String>,
    badge: MatchBadge,
    cached: Option<CachedMatch>,
    active_score: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl DeckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DeckViewModel {
        let deck = self
            .queue
            .iter()
            .take(DECK_DEPTH)
            .map(CardView::from_posting)
            .collect();
        let badge = match &self.badge {
            MatchBadge::Idle => match &self.cached {
                Some(cached) => BadgeView::Cached(cached.result.clone()),
                None => BadgeView::None,
            },
            MatchBadge::Loading => BadgeView::Loading,
            MatchBadge::Ready(result) => BadgeView::Ready(result.clone()),
            MatchBadge::Failed(failure) => BadgeView::Failed(failure.to_string()),
        };
        DeckViewModel {
            deck,
            remaining: self.queue.len(),
            offset: self.offset,
            loading: self.loading,
            badge,
        }
    }

    /// Returns the dirty flag and clears it. The shell re-renders only when
    /// this was set since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn visible(&self) -> Option<&JobPosting> {
        self.queue.front()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn resume(&self) -> Option<&str> {
        self.resume.as_deref()
    }

    pub(crate) fn set_resume(&mut self, resume: Option<String>) {
        self.resume = resume;
        self.dirty = true;
    }

    pub(crate) fn badge(&self) -> &MatchBadge {
        &self.badge
    }

    pub(crate) fn set_badge(&mut self, badge: MatchBadge) {
        self.badge = badge;
        self.dirty = true;
    }

    pub(crate) fn set_cached(&mut self, cached: CachedMatch) {
        self.cached = Some(cached);
        self.dirty = true;
    }

    /// Marks a page request as issued. Returns false when one is already in
    /// flight, which makes refill attempts idempotent.
    pub(crate) fn begin_loading(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.dirty = true;
        true
    }

    /// Appends a fetched page in arrival order and advances the cursor.
    /// The cursor never moves backwards, even if the feed misbehaves.
    pub(crate) fn append_page(&mut self, items: Vec<JobPosting>, next_offset: u64) {
        self.queue.extend(items);
        self.offset = self.offset.max(next_offset);
        self.loading = false;
        self.dirty = true;
    }

    /// Clears the loading guard after a failed fetch; the queue is untouched
    /// and a later refill attempt may succeed.
    pub(crate) fn fail_loading(&mut self) {
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn pop_head(&mut self) -> Option<JobPosting> {
        let popped = self.queue.pop_front();
        if popped.is_some() {
            self.dirty = true;
        }
        popped
    }

    /// Issues a fresh scoring ticket and makes it the only one whose
    /// settlement will be accepted.
    pub(crate) fn issue_score_ticket(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.active_score = Some(self.next_request_id);
        self.next_request_id
    }

    pub(crate) fn active_score(&self) -> Option<RequestId> {
        self.active_score
    }

    pub(crate) fn take_active_score(&mut self) -> Option<RequestId> {
        self.active_score.take()
    }
}
