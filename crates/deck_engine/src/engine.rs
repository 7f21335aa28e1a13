use std::sync::{mpsc, Arc};
use std::thread;

use deck_logging::{deck_debug, deck_info, deck_warn};
use tokio_util::sync::CancellationToken;

use crate::decisions::{DecisionSink, ReqwestDecisionSink};
use crate::jobs::{JobsFeed, ReqwestJobsFeed};
use crate::scoring::{ReqwestScoringOracle, ScoringOracle};
use crate::{ApiSettings, EngineEvent, RequestId};

enum EngineCommand {
    FetchPage {
        offset: u64,
        limit: u32,
    },
    Score {
        request_id: RequestId,
        jd_text: String,
        cv_text: String,
    },
    CancelScore {
        request_id: RequestId,
    },
    Record {
        job_id: String,
        action: String,
    },
}

/// Command side of the engine. Cheap to clone; all IO happens on a dedicated
/// runtime thread and results come back on the paired event receiver.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Starts the engine thread and returns the handle plus the event stream.
    pub fn spawn(settings: ApiSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let feed = Arc::new(ReqwestJobsFeed::new(settings.clone()));
        let oracle = Arc::new(ReqwestScoringOracle::new(settings.clone()));
        let sink = Arc::new(ReqwestDecisionSink::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // At most one scoring call lives at a time; issuing a new one (or
            // an explicit cancel) aborts the previous via its token. Stale
            // settlements are additionally filtered by ticket in the core.
            let mut active_score: Option<(RequestId, CancellationToken)> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchPage { offset, limit } => {
                        let feed = feed.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let event = match feed.fetch_page(offset, limit).await {
                                Ok(page) => EngineEvent::PageLoaded { page },
                                Err(error) => EngineEvent::PageFailed { error },
                            };
                            let _ = event_tx.send(event);
                        });
                    }
                    EngineCommand::Score {
                        request_id,
                        jd_text,
                        cv_text,
                    } => {
                        if let Some((stale, token)) = active_score.take() {
                            deck_debug!("scoring request {stale} superseded by {request_id}");
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        active_score = Some((request_id, token.clone()));

                        let oracle = oracle.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {
                                    // No event: the card this was for is gone.
                                }
                                result = oracle.score(&jd_text, &cv_text) => {
                                    let _ = event_tx.send(EngineEvent::ScoreSettled {
                                        request_id,
                                        result,
                                    });
                                }
                            }
                        });
                    }
                    EngineCommand::CancelScore { request_id } => {
                        match active_score.take() {
                            Some((active, token)) if active == request_id => {
                                deck_debug!("scoring request {request_id} cancelled");
                                token.cancel();
                            }
                            other => active_score = other,
                        }
                    }
                    EngineCommand::Record { job_id, action } => {
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            // Best-effort by contract: log and move on.
                            match sink.record(&job_id, &action).await {
                                Ok(()) => deck_info!("decision {action} recorded for {job_id}"),
                                Err(err) => {
                                    deck_warn!("decision {action} for {job_id} dropped: {err}");
                                }
                            }
                        });
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch_page(&self, offset: u64, limit: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { offset, limit });
    }

    pub fn score(
        &self,
        request_id: RequestId,
        jd_text: impl Into<String>,
        cv_text: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Score {
            request_id,
            jd_text: jd_text.into(),
            cv_text: cv_text.into(),
        });
    }

    pub fn cancel_score(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::CancelScore { request_id });
    }

    pub fn record(&self, job_id: impl Into<String>, action: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Record {
            job_id: job_id.into(),
            action: action.into(),
        });
    }
}
