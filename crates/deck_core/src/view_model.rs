use crate::{JobPosting, MatchResult};

/// Number of cards the deck shows at once; only the front card is interactive.
pub const DECK_DEPTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckViewModel {
    /// Front of the queue, at most [`DECK_DEPTH`] cards; index 0 is visible.
    pub deck: Vec<CardView>,
    /// Total postings still queued, the visible one included.
    pub remaining: usize,
    pub offset: u64,
    pub loading: bool,
    pub badge: BadgeView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub company: String,
    pub title: String,
    pub description: String,
    /// First letter of the company name, uppercased; '?' when unknown.
    pub avatar: char,
}

impl CardView {
    pub(crate) fn from_posting(posting: &JobPosting) -> Self {
        let avatar = posting
            .company
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        Self {
            id: posting.id.clone(),
            company: posting.company.clone(),
            title: posting.title.clone(),
            description: posting.description.clone(),
            avatar,
        }
    }
}

/// What the compatibility badge on the visible card shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BadgeView {
    /// No badge at all.
    #[default]
    None,
    /// Stale fallback from the last-match cache, pending a fresh computation.
    Cached(MatchResult),
    Loading,
    Ready(MatchResult),
    Failed(String),
}
