use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk form of the record: a single non-negative integer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RecordFile {
    best_moves: u32,
}

/// Persisted best (lowest) move count across sessions.
///
/// A single global record, not keyed by difficulty. The stored value only
/// ever goes down: a win replaces it when its move count is strictly lower,
/// or when no record exists yet.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    best: Option<u32>,
}

impl RecordStore {
    /// Opens the store at `path` and loads any persisted record. A missing
    /// or malformed file degrades to no record.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = Self::load(&path);
        Self { path, best }
    }

    fn load(path: &Path) -> Option<u32> {
        let json = fs::read_to_string(path).ok()?;
        let record: RecordFile = serde_json::from_str(&json).ok()?;
        Some(record.best_moves)
    }

    /// The best move count seen so far, if any.
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Records a win in `moves` moves and returns the best after the call.
    ///
    /// When `moves` does not improve on the stored best, storage is left
    /// untouched. A failed write still updates the in-memory best so the
    /// running session sees it; the error is returned for the caller to
    /// surface as a non-fatal warning.
    pub fn record_win(&mut self, moves: u32) -> io::Result<u32> {
        if let Some(best) = self.best {
            if best <= moves {
                return Ok(best);
            }
        }
        self.best = Some(moves);
        self.save(moves)?;
        Ok(moves)
    }

    fn save(&self, moves: u32) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&RecordFile { best_moves: moves })?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("slide-record-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn missing_file_means_no_record() {
        let store = RecordStore::open(temp_path("missing"));
        assert_eq!(store.best(), None);
    }

    #[test]
    fn malformed_file_degrades_to_no_record() {
        let path = temp_path("malformed");
        fs::write(&path, "definitely not a record").unwrap();
        let store = RecordStore::open(&path);
        assert_eq!(store.best(), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn first_win_persists() {
        let path = temp_path("first-win");
        let _ = fs::remove_file(&path);

        let mut store = RecordStore::open(&path);
        assert_eq!(store.record_win(4).unwrap(), 4);
        assert_eq!(store.best(), Some(4));

        // A fresh store sees the persisted value.
        let reopened = RecordStore::open(&path);
        assert_eq!(reopened.best(), Some(4));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn only_strict_improvements_replace_the_record() {
        let path = temp_path("improvements");
        let _ = fs::remove_file(&path);

        let mut store = RecordStore::open(&path);
        assert_eq!(store.record_win(10).unwrap(), 10);
        assert_eq!(store.record_win(12).unwrap(), 10);
        assert_eq!(store.record_win(10).unwrap(), 10);
        assert_eq!(store.record_win(7).unwrap(), 7);

        let reopened = RecordStore::open(&path);
        assert_eq!(reopened.best(), Some(7));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn values_round_trip_exactly() {
        let path = temp_path("round-trip");
        let _ = fs::remove_file(&path);

        for value in [0, 1, u32::MAX] {
            let _ = fs::remove_file(&path);
            let mut store = RecordStore::open(&path);
            store.record_win(value).unwrap();
            assert_eq!(RecordStore::open(&path).best(), Some(value));
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn write_failure_keeps_the_session_best() {
        // A directory path cannot be written as a file.
        let dir = temp_path("as-dir");
        let _ = fs::remove_file(&dir);
        fs::create_dir_all(&dir).unwrap();

        let mut store = RecordStore::open(&dir);
        assert!(store.record_win(5).is_err());
        assert_eq!(store.best(), Some(5));
        let _ = fs::remove_dir(&dir);
    }
}
