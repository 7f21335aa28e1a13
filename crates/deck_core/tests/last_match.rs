use deck_core::{
    update, BadgeView, CachedMatch, DeckState, JobPosting, MatchResult, Msg, RequestId,
};

fn init_logging() {
    deck_logging::initialize_for_tests();
}

fn cached(percent: &str) -> CachedMatch {
    CachedMatch {
        job_id: "J-prev".to_string(),
        resume_excerpt: "senior backend engineer".to_string(),
        result: MatchResult {
            score: 0.73,
            percent: percent.to_string(),
            features: vec!["python".to_string()],
            latency_ms: 40,
        },
    }
}

fn job(id: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        company: "Acme".to_string(),
        title: "Engineer".to_string(),
        description: "build things".to_string(),
    }
}

fn active_ticket(state: DeckState) -> (DeckState, RequestId) {
    let (state, effects) = update(state, Msg::ResumeChanged(Some("cv".to_string())));
    let ticket = effects
        .iter()
        .find_map(|effect| match effect {
            deck_core::Effect::ScoreVisible { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("score effect");
    (state, ticket)
}

#[test]
fn cached_result_shows_while_idle() {
    init_logging();
    let (state, effects) = update(DeckState::new(), Msg::LastMatchRestored(cached("73%")));
    assert!(effects.is_empty());
    assert_eq!(state.view().badge, BadgeView::Cached(cached("73%").result));
}

#[test]
fn fresh_computation_displaces_the_fallback() {
    init_logging();
    let (state, _) = update(DeckState::new(), Msg::LastMatchRestored(cached("73%")));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            items: vec![job("J1")],
            next_offset: 1,
        },
    );
    let (state, ticket) = active_ticket(state);
    assert_eq!(state.view().badge, BadgeView::Loading);

    let fresh = MatchResult {
        score: 0.91,
        percent: "91%".to_string(),
        features: vec!["rust".to_string()],
        latency_ms: 9,
    };
    let (state, _) = update(
        state,
        Msg::ScoreSettled {
            request_id: ticket,
            result: Ok(fresh.clone()),
        },
    );
    assert_eq!(state.view().badge, BadgeView::Ready(fresh));
}

#[test]
fn fallback_returns_when_inputs_clear() {
    init_logging();
    let (state, _) = update(DeckState::new(), Msg::LastMatchRestored(cached("73%")));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            items: vec![job("J1")],
            next_offset: 1,
        },
    );
    let (state, _ticket) = active_ticket(state);

    // Resume cleared before the request settled: back to the fallback.
    let (state, _) = update(state, Msg::ResumeChanged(None));
    assert_eq!(state.view().badge, BadgeView::Cached(cached("73%").result));
}
