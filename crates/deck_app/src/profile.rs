//! Immutable candidate profile snapshot.
//!
//! The resume text is read once at startup and threaded through the screen
//! explicitly; nothing mutates it afterwards.

use std::fs;
use std::path::Path;

use deck_logging::{deck_info, deck_warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ProfileSnapshot {
    resume_text: Option<String>,
}

impl ProfileSnapshot {
    /// Loads the resume text from `path`, if given. Missing or empty files
    /// yield a snapshot without a resume; the deck then browses unscored.
    pub(crate) fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => {
                deck_info!("loaded resume snapshot from {:?} ({} bytes)", path, text.len());
                Self {
                    resume_text: Some(text),
                }
            }
            Ok(_) => {
                deck_warn!("resume file {:?} is empty; scoring disabled", path);
                Self::default()
            }
            Err(err) => {
                deck_warn!("failed to read resume from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub(crate) fn into_resume_text(self) -> Option<String> {
        self.resume_text
    }
}
