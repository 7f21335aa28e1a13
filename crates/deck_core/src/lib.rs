//! Deck core: pure state machine for the swipe browsing screen.
mod effect;
mod gesture;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use gesture::{classify_release, SWIPE_THRESHOLD};
pub use msg::Msg;
pub use state::{DeckState, LOW_WATER_MARK, PAGE_LIMIT};
pub use types::{
    CachedMatch, JobPosting, MatchBadge, MatchResult, RequestId, ScoreFailure, SwipeAction,
};
pub use update::update;
pub use view_model::{BadgeView, CardView, DeckViewModel, DECK_DEPTH};
