use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header name of the preferred duration column.
pub const DURATION_COLUMN: &str = "duration";

/// Fallback header name used when the file has no `duration` column.
pub const MINUTES_COLUMN: &str = "minutes";

/// A single row read from the workout CSV file, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    fields: HashMap<String, String>,
}

impl WorkoutRecord {
    /// Build a record from `(header, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw text of `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn exercise(&self) -> Option<&str> {
        self.get("exercise")
    }

    /// Raw duration text, read from `duration` or else `minutes`.
    pub fn duration_raw(&self) -> Option<&str> {
        self.get(DURATION_COLUMN).or_else(|| self.get(MINUTES_COLUMN))
    }

    /// Number of fields present in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Totals derived from one full pass over the workout file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutAggregate {
    /// Number of data rows (header excluded), whatever their content.
    pub total_workouts: usize,
    /// Sum of parseable durations; unparseable values count as zero.
    pub total_minutes: i64,
}

impl WorkoutAggregate {
    /// Fold one row's parsed duration into the totals.
    pub fn add_workout(&mut self, minutes: Option<i64>) {
        self.total_workouts += 1;
        self.total_minutes = self.total_minutes.saturating_add(minutes.unwrap_or(0));
    }
}

/// A validated health-metrics document.
///
/// `metrics` entries are opaque; any other top-level fields are kept in
/// `extra` so callers of the full read see the document as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthDocument {
    pub metrics: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HealthDocument {
    /// Number of entries in `metrics`.
    pub fn entry_count(&self) -> usize {
        self.metrics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_record_accessors() {
        let record = WorkoutRecord::from_pairs([
            ("date", "2024-01-15"),
            ("exercise", "Running"),
            ("duration", "30"),
            ("calories", "300"),
        ]);
        assert_eq!(record.date(), Some("2024-01-15"));
        assert_eq!(record.exercise(), Some("Running"));
        assert_eq!(record.duration_raw(), Some("30"));
        assert_eq!(record.get("calories"), Some("300"));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_duration_falls_back_to_minutes_column() {
        let record = WorkoutRecord::from_pairs([("minutes", "45")]);
        assert_eq!(record.duration_raw(), Some("45"));
    }

    #[test]
    fn test_duration_prefers_duration_column() {
        let record = WorkoutRecord::from_pairs([("minutes", "45"), ("duration", "20")]);
        assert_eq!(record.duration_raw(), Some("20"));
    }

    #[test]
    fn test_aggregate_add_workout() {
        let mut agg = WorkoutAggregate::default();
        agg.add_workout(Some(30));
        agg.add_workout(None);
        agg.add_workout(Some(15));
        assert_eq!(agg.total_workouts, 3);
        assert_eq!(agg.total_minutes, 45);
    }

    #[test]
    fn test_aggregate_saturates() {
        let mut agg = WorkoutAggregate {
            total_workouts: 0,
            total_minutes: i64::MAX - 1,
        };
        agg.add_workout(Some(10));
        assert_eq!(agg.total_minutes, i64::MAX);
    }

    #[test]
    fn test_health_document_keeps_extra_fields() {
        let doc: HealthDocument = serde_json::from_value(serde_json::json!({
            "user": "alex",
            "metrics": [{"type": "sleep"}, {"type": "steps"}],
        }))
        .unwrap();
        assert_eq!(doc.entry_count(), 2);
        assert_eq!(doc.extra.get("user"), Some(&serde_json::json!("alex")));
    }
}
