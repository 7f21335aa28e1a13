//! Deck engine: HTTP collaborators and effect execution.
mod decisions;
mod engine;
mod jobs;
mod scoring;
mod settings;
mod types;

pub use decisions::{DecisionSink, ReqwestDecisionSink};
pub use engine::EngineHandle;
pub use jobs::{JobsFeed, ReqwestJobsFeed};
pub use scoring::{ReqwestScoringOracle, ScoringOracle, SCORE_TOPK};
pub use settings::ApiSettings;
pub use types::{
    DecisionError, EngineEvent, JobPage, MatchOutcome, PageError, PostingRecord, RequestId,
    ScoreError,
};
