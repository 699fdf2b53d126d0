//! Solve-history persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tour_core::Position;

/// Record of a single completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Board side length.
    pub size: usize,
    /// Chosen start cell.
    pub start: Position,
    /// Whether a tour was found.
    pub solved: bool,
    /// Wall-clock search time in milliseconds.
    pub duration_ms: f64,
    /// Unix timestamp of the run.
    pub timestamp: u64,
}

/// All recorded runs, most recent first.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SolveHistory {
    pub records: Vec<SolveRecord>,
}

impl SolveHistory {
    /// Get the save file path.
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("knights_tour_history.json")
    }

    /// Load history from file; a missing or unreadable file yields an
    /// empty history.
    pub fn load() -> Self {
        match fs::read_to_string(Self::save_path()) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save history to file, best effort.
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(Self::save_path(), json);
        }
    }

    /// Record a completed run.
    pub fn record(&mut self, size: usize, start: Position, solved: bool, duration_ms: f64) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        self.records.insert(
            0,
            SolveRecord {
                size,
                start,
                solved,
                duration_ms,
                timestamp,
            },
        );
    }

    /// Fastest successful solve recorded for a board size.
    pub fn best_time_ms(&self, size: usize) -> Option<f64> {
        self.records
            .iter()
            .filter(|record| record.solved && record.size == size)
            .map(|record| record.duration_ms)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_most_recent_first() {
        let mut history = SolveHistory::default();
        history.record(5, Position::new(0, 0), true, 1.0);
        history.record(6, Position::new(1, 1), true, 2.0);

        assert_eq!(history.records.len(), 2);
        assert_eq!(history.records[0].size, 6);
        assert_eq!(history.records[1].size, 5);
    }

    #[test]
    fn test_best_time_ignores_failures_and_other_sizes() {
        let mut history = SolveHistory::default();
        history.record(5, Position::new(0, 0), true, 4.5);
        history.record(5, Position::new(0, 1), false, 0.2);
        history.record(5, Position::new(2, 2), true, 3.1);
        history.record(8, Position::new(0, 0), true, 1.0);

        assert_eq!(history.best_time_ms(5), Some(3.1));
        assert_eq!(history.best_time_ms(6), None);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = SolveRecord {
            size: 8,
            start: Position::new(3, 4),
            solved: true,
            duration_ms: 12.75,
            timestamp: 1_700_000_000,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: SolveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
