use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const LEADERBOARD_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Best score per player name, persisted as a JSON array.
///
/// Names are unique ignoring case; the stored score is always the highest
/// ever submitted for that name.
#[derive(Debug, Clone)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
    path: PathBuf,
}

impl HighScores {
    /// Loads the score file. A missing or malformed file yields an empty list.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut hs = HighScores {
            entries: Vec::new(),
            path: path.into(),
        };
        hs.reload();
        hs
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the file, picking up scores written by other sessions.
    pub fn reload(&mut self) {
        self.entries = match read_file(&self.path) {
            Ok(entries) => {
                log::debug!("Loaded {} scores from {}", entries.len(), self.path.display());
                entries
            }
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => {
                log::warn!("Treating score file as empty: {e}");
                Vec::new()
            }
        };
    }

    /// Merges `score` into the in-memory list. Returns true if the stored
    /// best for `name` changed.
    pub fn merge(&mut self, name: &str, score: u32) -> bool {
        let existing = self
            .entries
            .iter_mut()
            .find(|e| e.name.to_lowercase() == name.to_lowercase());
        match existing {
            Some(entry) if score > entry.score => {
                entry.score = score;
                true
            }
            Some(_) => false,
            None => {
                self.entries.push(ScoreEntry {
                    name: name.to_string(),
                    score,
                });
                true
            }
        }
    }

    /// Merges against the current file contents and writes the result back.
    pub fn submit(&mut self, name: &str, score: u32) -> Result<(), StoreError> {
        self.reload();
        self.merge(name, score);
        self.write_file()?;
        log::info!("Saved score {score} for {name}");
        Ok(())
    }

    fn write_file(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.entries).map_err(|e| StoreError::json(&self.path, e))?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Highest `n` entries, best first. Ties keep file order.
    pub fn top_scores(&self, n: usize) -> Vec<ScoreEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    pub fn best(&self) -> u32 {
        self.entries.iter().map(|e| e.score).max().unwrap_or(0)
    }
}

fn read_file(path: &Path) -> Result<Vec<ScoreEntry>, StoreError> {
    let data = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| StoreError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store() -> (tempfile::TempDir, HighScores) {
        let dir = tempfile::tempdir().unwrap();
        let hs = HighScores::load(dir.path().join("highscores.json"));
        (dir, hs)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, hs) = store();
        assert!(hs.entries().is_empty());
        assert_eq!(hs.best(), 0);
    }

    #[test]
    fn malformed_file_is_empty() {
        let (_dir, hs) = store();
        fs::write(hs.path(), "{ oops").unwrap();
        let hs = HighScores::load(hs.path());
        assert!(hs.entries().is_empty());
    }

    #[test]
    fn wrong_shape_is_empty() {
        let (_dir, hs) = store();
        fs::write(hs.path(), r#"[{"player": "Ann", "points": 3}]"#).unwrap();
        let hs = HighScores::load(hs.path());
        assert!(hs.entries().is_empty());
    }

    #[test]
    fn lower_score_does_not_replace_best() {
        let (_dir, mut hs) = store();
        hs.submit("Ann", 50).unwrap();
        hs.submit("Ann", 30).unwrap();
        let hs = HighScores::load(hs.path());
        assert_eq!(
            hs.entries(),
            &[ScoreEntry {
                name: "Ann".into(),
                score: 50
            }]
        );
    }

    #[test]
    fn names_merge_ignoring_case() {
        let (_dir, mut hs) = store();
        hs.submit("ann", 10).unwrap();
        hs.submit("ANN", 40).unwrap();
        assert_eq!(hs.entries().len(), 1);
        assert_eq!(hs.entries()[0].name, "ann");
        assert_eq!(hs.entries()[0].score, 40);
    }

    #[test]
    fn file_format_is_name_score_array() {
        let (_dir, mut hs) = store();
        hs.submit("Bob", 7).unwrap();
        let raw = fs::read_to_string(hs.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!([{ "name": "Bob", "score": 7 }]));
    }

    #[test]
    fn submit_merges_with_scores_written_elsewhere() {
        let (_dir, mut first) = store();
        let mut second = HighScores::load(first.path());
        first.submit("Ann", 5).unwrap();
        second.submit("Bob", 9).unwrap();
        assert_eq!(second.entries().len(), 2);
    }

    #[test]
    fn top_scores_are_sorted_and_capped() {
        let (_dir, mut hs) = store();
        for i in 0..15u32 {
            hs.merge(&format!("p{i}"), i * 3);
        }
        let top = hs.top_scores(LEADERBOARD_LEN);
        assert_eq!(top.len(), LEADERBOARD_LEN);
        assert_eq!(top[0].score, 42);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(hs.best(), 42);
    }

    proptest! {
        #[test]
        fn stored_score_is_max_submitted(
            subs in prop::collection::vec((prop::sample::select(vec!["ann", "Ann", "BOB", "bob", "cy"]), 0u32..1000), 1..40)
        ) {
            let mut hs = HighScores { entries: Vec::new(), path: PathBuf::from("unused.json") };
            for (name, score) in &subs {
                hs.merge(name, *score);
            }
            let mut seen: Vec<String> = hs.entries().iter().map(|e| e.name.to_lowercase()).collect();
            let len = seen.len();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), len);
            for entry in hs.entries() {
                let max = subs
                    .iter()
                    .filter(|(n, _)| n.to_lowercase() == entry.name.to_lowercase())
                    .map(|(_, s)| *s)
                    .max()
                    .unwrap();
                prop_assert_eq!(entry.score, max);
            }
        }
    }
}
