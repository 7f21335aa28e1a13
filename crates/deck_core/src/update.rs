use crate::gesture::classify_release;
use crate::state::{LOW_WATER_MARK, PAGE_LIMIT};
use crate::{DeckState, Effect, MatchBadge, Msg, SwipeAction};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DeckState, msg: Msg) -> (DeckState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScreenEntered => {
            if state.begin_loading() {
                vec![Effect::FetchPage {
                    offset: state.offset(),
                    limit: PAGE_LIMIT,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded { items, next_offset } => {
            let was_empty = state.visible().is_none();
            state.append_page(items, next_offset);
            if was_empty {
                // A head card just became visible; annotate it.
                annotate_visible(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PageFailed { reason: _ } => {
            // Recovered locally: queue unchanged, only the guard clears so a
            // later refill attempt can go out. The shell logs the reason.
            state.fail_loading();
            Vec::new()
        }
        Msg::DragReleased { offset_x } => match classify_release(offset_x) {
            Some(action) => resolve_swipe(&mut state, action),
            // Spring-back; no queue mutation, nothing to do.
            None => Vec::new(),
        },
        Msg::ResumeChanged(resume) => {
            state.set_resume(resume);
            annotate_visible(&mut state)
        }
        Msg::ScoreSettled { request_id, result } => {
            if state.active_score() != Some(request_id) {
                // Stale settlement for a posting or resume text no longer
                // current. Dropped unconditionally.
                return (state, Vec::new());
            }
            state.take_active_score();
            match result {
                Ok(result) => state.set_badge(MatchBadge::Ready(result)),
                Err(failure) => state.set_badge(MatchBadge::Failed(failure)),
            }
            Vec::new()
        }
        Msg::LastMatchRestored(cached) => {
            state.set_cached(cached);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Pops the swiped card, reports the decision, re-annotates the new head and
/// tops the queue up when it runs low. Decision recording is fire-and-forget;
/// the pop and refill never wait on it.
fn resolve_swipe(state: &mut DeckState, action: SwipeAction) -> Vec<Effect> {
    let Some(job) = state.pop_head() else {
        return Vec::new();
    };

    let mut effects = vec![Effect::RecordDecision {
        job_id: job.id,
        action,
    }];
    effects.extend(annotate_visible(state));
    if state.queue_len() < LOW_WATER_MARK && state.begin_loading() {
        effects.push(Effect::FetchPage {
            offset: state.offset(),
            limit: PAGE_LIMIT,
        });
    }
    effects
}

/// Restarts the scoring pipeline for the currently visible posting.
///
/// Any prior in-flight request is cancelled first; its ticket stops being
/// the active one, so a late settlement can never be applied to the wrong
/// card. When either input is missing, no request goes out and the badge
/// clears (the cached fallback, if any, shows through).
fn annotate_visible(state: &mut DeckState) -> Vec<Effect> {
    let mut effects = Vec::new();
    if let Some(request_id) = state.take_active_score() {
        effects.push(Effect::CancelScore { request_id });
    }

    let jd_text = state
        .visible()
        .map(|job| job.description.clone())
        .filter(|text| !text.is_empty());
    let cv_text = state
        .resume()
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned);

    match (jd_text, cv_text) {
        (Some(jd_text), Some(cv_text)) => {
            let request_id = state.issue_score_ticket();
            state.set_badge(MatchBadge::Loading);
            effects.push(Effect::ScoreVisible {
                request_id,
                jd_text,
                cv_text,
            });
        }
        _ => {
            if *state.badge() != MatchBadge::Idle {
                state.set_badge(MatchBadge::Idle);
            }
        }
    }
    effects
}
