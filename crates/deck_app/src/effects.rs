use std::sync::mpsc;
use std::thread;

use chrono::Utc;
use deck_core::{Effect, JobPosting, MatchResult, Msg, ScoreFailure};
use deck_engine::{
    ApiSettings, EngineEvent, EngineHandle, MatchOutcome, PostingRecord, ScoreError,
};
use deck_logging::{deck_info, deck_warn};

use crate::app::AppMsg;

/// Bridges core effects to engine commands and engine events back to
/// messages for the update loop.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(msg_tx: mpsc::Sender<AppMsg>, settings: ApiSettings) -> Self {
        let (engine, events) = EngineHandle::spawn(settings);
        spawn_event_pump(events, msg_tx);
        Self { engine }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { offset, limit } => {
                    deck_info!("FetchPage offset={offset} limit={limit}");
                    self.engine.fetch_page(offset, limit);
                }
                Effect::ScoreVisible {
                    request_id,
                    jd_text,
                    cv_text,
                } => {
                    deck_info!(
                        "ScoreVisible ticket={} jd_len={} cv_len={}",
                        request_id,
                        jd_text.len(),
                        cv_text.len()
                    );
                    self.engine.score(request_id, jd_text, cv_text);
                }
                Effect::CancelScore { request_id } => {
                    self.engine.cancel_score(request_id);
                }
                Effect::RecordDecision { job_id, action } => {
                    deck_info!(
                        "decision {} for {} at {}",
                        action,
                        job_id,
                        Utc::now().to_rfc3339()
                    );
                    self.engine.record(job_id, action.as_str());
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(AppMsg::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageLoaded { page } => Msg::PageLoaded {
            items: page.items.into_iter().map(map_posting).collect(),
            next_offset: page.next_offset,
        },
        EngineEvent::PageFailed { error } => {
            deck_warn!("page fetch failed: {error}");
            Msg::PageFailed {
                reason: error.to_string(),
            }
        }
        EngineEvent::ScoreSettled { request_id, result } => Msg::ScoreSettled {
            request_id,
            result: result.map(map_outcome).map_err(map_score_error),
        },
    }
}

fn map_posting(record: PostingRecord) -> JobPosting {
    JobPosting {
        id: record.id,
        company: record.company,
        title: record.title,
        description: record.description,
    }
}

fn map_outcome(outcome: MatchOutcome) -> MatchResult {
    MatchResult {
        score: outcome.score,
        percent: outcome.percent,
        features: outcome.features,
        latency_ms: outcome.latency_ms,
    }
}

fn map_score_error(err: ScoreError) -> ScoreFailure {
    match err {
        ScoreError::Timeout => ScoreFailure::Timeout,
        ScoreError::Api { message } => ScoreFailure::Api { message },
        ScoreError::Network(detail) => {
            deck_warn!("scoring network failure: {detail}");
            ScoreFailure::Network
        }
        ScoreError::Malformed(detail) => {
            deck_warn!("scoring returned malformed response: {detail}");
            ScoreFailure::Malformed
        }
    }
}
