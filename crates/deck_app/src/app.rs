use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use deck_core::{update, DeckState, Msg, SWIPE_THRESHOLD};
use deck_engine::ApiSettings;
use deck_logging::{deck_info, deck_warn};

use crate::effects::EffectRunner;
use crate::persistence;
use crate::profile::ProfileSnapshot;
use crate::render;

/// Everything the consumer loop can receive: core messages from the engine
/// and the input reader, plus the shutdown request.
pub(crate) enum AppMsg {
    Core(Msg),
    Quit,
}

pub(crate) fn run() {
    let resume_path = std::env::args().nth(1).map(PathBuf::from);
    let profile = ProfileSnapshot::load(resume_path.as_deref());

    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(msg_tx.clone(), ApiSettings::default());
    spawn_input_reader(msg_tx);

    let mut state = DeckState::new();

    // Screen entry: cached badge fallback, the immutable profile snapshot,
    // then the first page request.
    let cache_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if let Some(cached) = persistence::load_last_match(&cache_dir) {
        dispatch(&mut state, Msg::LastMatchRestored(cached), &runner);
    }
    dispatch(
        &mut state,
        Msg::ResumeChanged(profile.into_resume_text()),
        &runner,
    );
    dispatch(&mut state, Msg::ScreenEntered, &runner);

    while let Ok(msg) = msg_rx.recv() {
        match msg {
            AppMsg::Core(msg) => dispatch(&mut state, msg, &runner),
            AppMsg::Quit => break,
        }
    }
    deck_info!("deck session ended");
}

fn dispatch(state: &mut DeckState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        render::draw(&next.view());
    }
    *state = next;
}

fn spawn_input_reader(msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(line.trim()) {
                Some(Command::Quit) => {
                    let _ = msg_tx.send(AppMsg::Quit);
                    return;
                }
                Some(Command::Release(offset_x)) => {
                    let _ = msg_tx.send(AppMsg::Core(Msg::DragReleased { offset_x }));
                }
                None => {
                    if !line.trim().is_empty() {
                        deck_warn!("unrecognized input: {:?}", line.trim());
                    }
                }
            }
        }
        // stdin closed; end the session.
        let _ = msg_tx.send(AppMsg::Quit);
    });
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    /// A simulated drag release at this horizontal offset.
    Release(f32),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "" => None,
        "q" | "quit" => Some(Command::Quit),
        "apply" => Some(Command::Release(SWIPE_THRESHOLD + 1.0)),
        "skip" => Some(Command::Release(-(SWIPE_THRESHOLD + 1.0))),
        other => other.parse::<f32>().ok().map(Command::Release),
    }
}
