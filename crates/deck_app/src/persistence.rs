//! Read side of the last-match cache.
//!
//! An upstream screen persists the most recent scoring result; this screen
//! only reads it, once, as a fallback badge before any fresh computation
//! settles. Two filenames are probed for compatibility with records written
//! by older builds; the first readable one wins.

use std::fs;
use std::path::Path;

use deck_core::{CachedMatch, MatchResult};
use deck_logging::{deck_info, deck_warn};
use serde::{Deserialize, Serialize};

const CACHE_FILENAMES: [&str; 2] = [".last_match.ron", ".last_result.ron"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedMatch {
    job_id: String,
    #[serde(default)]
    resume_excerpt: String,
    score: f64,
    percent: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    latency_ms: u64,
}

impl PersistedMatch {
    fn into_cached(self) -> CachedMatch {
        CachedMatch {
            job_id: self.job_id,
            resume_excerpt: self.resume_excerpt,
            result: MatchResult {
                score: self.score,
                percent: self.percent,
                features: self.features,
                latency_ms: self.latency_ms,
            },
        }
    }
}

pub(crate) fn load_last_match(dir: &Path) -> Option<CachedMatch> {
    for filename in CACHE_FILENAMES {
        let path = dir.join(filename);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => {
                deck_warn!("failed to read last-match cache from {:?}: {}", path, err);
                continue;
            }
        };

        match ron::from_str::<PersistedMatch>(&content) {
            Ok(record) => {
                deck_info!("loaded last-match cache from {:?}", path);
                return Some(record.into_cached());
            }
            Err(err) => {
                deck_warn!("failed to parse last-match cache {:?}: {}", path, err);
                continue;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::load_last_match;

    const PRIMARY: &str = ".last_match.ron";
    const LEGACY: &str = ".last_result.ron";

    fn record(job_id: &str, percent: &str) -> String {
        format!(
            "(job_id: \"{job_id}\", resume_excerpt: \"backend engineer\", \
             score: 0.8, percent: \"{percent}\", features: [\"rust\"], latency_ms: 7)"
        )
    }

    #[test]
    fn absent_cache_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_last_match(dir.path()).is_none());
    }

    #[test]
    fn primary_key_wins_over_legacy() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRIMARY), record("J-new", "80%")).unwrap();
        fs::write(dir.path().join(LEGACY), record("J-old", "30%")).unwrap();

        let cached = load_last_match(dir.path()).expect("cached");
        assert_eq!(cached.job_id, "J-new");
        assert_eq!(cached.result.percent, "80%");
    }

    #[test]
    fn legacy_key_is_read_when_primary_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEGACY), record("J-old", "30%")).unwrap();

        let cached = load_last_match(dir.path()).expect("cached");
        assert_eq!(cached.job_id, "J-old");
    }

    #[test]
    fn corrupt_primary_falls_through_to_legacy() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRIMARY), "not ron at all {").unwrap();
        fs::write(dir.path().join(LEGACY), record("J-old", "30%")).unwrap();

        let cached = load_last_match(dir.path()).expect("cached");
        assert_eq!(cached.job_id, "J-old");
    }

    #[test]
    fn defaulted_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PRIMARY),
            "(job_id: \"J1\", score: 0.5, percent: \"50%\")",
        )
        .unwrap();

        let cached = load_last_match(dir.path()).expect("cached");
        assert!(cached.result.features.is_empty());
        assert_eq!(cached.result.latency_ms, 0);
    }
}
