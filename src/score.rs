use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Best score and the name of the player who set it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
    #[serde(default)]
    pub player: String,
}

/// Errors raised by high-score persistence.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high score storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("high score storage is unavailable")]
    Unavailable,
}

/// Key-value persistence for the high-score record.
///
/// The engine only talks to storage through this trait.
pub trait HighScoreStore {
    /// Loads the stored record, or the default record when none exists yet.
    fn load(&self) -> Result<HighScoreRecord, ScoreError>;

    fn store(&mut self, record: &HighScoreRecord) -> Result<(), ScoreError>;
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Stores the record as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    /// Returns the default record when the file does not yet exist (first run).
    fn load(&self) -> Result<HighScoreRecord, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScoreRecord::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Creates parent directories when needed.
    fn store(&mut self, record: &HighScoreRecord) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store; can be switched to fail every call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: HighScoreRecord,
    writes: usize,
    failing: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn with_record(record: HighScoreRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// A store whose loads and writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn record(&self) -> HighScoreRecord {
        self.record.clone()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<HighScoreRecord, ScoreError> {
        if self.failing {
            return Err(ScoreError::Unavailable);
        }
        Ok(self.record())
    }

    fn store(&mut self, record: &HighScoreRecord) -> Result<(), ScoreError> {
        if self.failing {
            return Err(ScoreError::Unavailable);
        }
        self.record = record.clone();
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{HighScoreRecord, HighScoreStore, JsonFileStore, MemoryStore, ScoreError};

    #[test]
    fn file_store_saves_score_and_player() {
        let path = unique_test_path("saved");
        let mut store = JsonFileStore::new(path.clone());
        let record = HighScoreRecord {
            high_score: 42,
            player: "Ada".to_owned(),
        };

        store.store(&record).expect("score save should succeed");
        let loaded = store.load().expect("load should succeed");

        assert_eq!(loaded, record);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_default_record() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = JsonFileStore::new(path.clone())
            .load()
            .expect("missing file should load the default record");
        assert_eq!(loaded, HighScoreRecord::default());
    }

    #[test]
    fn score_file_without_player_loads_empty_name() {
        let path = unique_test_path("legacy");
        write_raw(&path, r#"{ "high_score": 7 }"#);

        let loaded = JsonFileStore::new(path.clone()).load().expect("load should succeed");

        assert_eq!(loaded.high_score, 7);
        assert!(loaded.player.is_empty());
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        write_raw(&path, "not-json");

        assert!(matches!(
            JsonFileStore::new(path.clone()).load(),
            Err(ScoreError::Json(_))
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_counts_writes_and_can_fail() {
        let mut store = MemoryStore::default();
        store
            .store(&HighScoreRecord {
                high_score: 3,
                player: "Bo".to_owned(),
            })
            .expect("memory store accepts writes");
        assert_eq!(store.writes(), 1);
        assert_eq!(store.record().high_score, 3);

        let mut broken = MemoryStore::failing();
        assert!(broken.load().is_err());
        assert!(broken.store(&HighScoreRecord::default()).is_err());
        assert_eq!(broken.writes(), 0);
    }

    fn write_raw(path: &PathBuf, raw: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, raw).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
