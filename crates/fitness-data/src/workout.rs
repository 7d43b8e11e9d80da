//! Workout CSV loading and aggregation.
//!
//! Reads the workout log row by row, keys every row by the header names and
//! folds the duration column into a [`WorkoutAggregate`]. Duration values are
//! parsed leniently: anything without a leading integer counts as zero.

use std::fs::File;
use std::path::{Path, PathBuf};

use fitness_core::error::{FitnessError, Result};
use fitness_core::models::{WorkoutAggregate, WorkoutRecord};
use tracing::{debug, info};

// ── Public API ────────────────────────────────────────────────────────────────

/// Lazy, single-pass iterator over the data rows of a workout file.
///
/// Holds the open file handle; dropping the iterator releases it.
pub struct WorkoutRecords {
    path: PathBuf,
    headers: csv::StringRecord,
    rows: csv::StringRecordsIntoIter<File>,
}

impl WorkoutRecords {
    /// Column names from the header row.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    fn to_record(&self, row: &csv::StringRecord) -> WorkoutRecord {
        // Extra fields beyond the header are keyed by their column index.
        WorkoutRecord::from_pairs(row.iter().enumerate().map(|(i, field)| {
            let key = self
                .headers
                .get(i)
                .map(str::to_string)
                .unwrap_or_else(|| i.to_string());
            (key, field)
        }))
    }
}

impl Iterator for WorkoutRecords {
    type Item = Result<WorkoutRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(match row {
            Ok(row) => Ok(self.to_record(&row)),
            Err(source) => Err(FitnessError::ParseFailure {
                path: self.path.clone(),
                source,
            }),
        })
    }
}

/// Open `path` and read its header row.
///
/// Fails with [`FitnessError::FileNotFound`] when the file does not exist and
/// [`FitnessError::ParseFailure`] when the header row cannot be decoded.
pub fn workout_records(path: &Path) -> Result<WorkoutRecords> {
    if !path.exists() {
        debug!("Workout file not found at {}", path.display());
        return Err(FitnessError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| FitnessError::from_io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| FitnessError::ParseFailure {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    Ok(WorkoutRecords {
        path: path.to_path_buf(),
        headers,
        rows: reader.into_records(),
    })
}

/// Read every workout row into memory.
pub fn read_workout_data(path: &Path) -> Result<Vec<WorkoutRecord>> {
    workout_records(path)?.collect()
}

/// Count workouts and total their minutes.
///
/// Rows whose duration is missing or not numeric still count as workouts but
/// add nothing to the minutes. Only structural CSV failures are errors.
pub fn workout_calculator(path: &Path) -> Result<WorkoutAggregate> {
    let mut aggregate = WorkoutAggregate::default();
    for record in workout_records(path)? {
        let record = record?;
        aggregate.add_workout(record.duration_raw().and_then(parse_leading_int));
    }

    info!("Total workouts: {}", aggregate.total_workouts);
    info!("Total minutes: {}", aggregate.total_minutes);

    Ok(aggregate)
}

/// Fold already-loaded records into totals.
pub fn aggregate_records<'a, I>(records: I) -> WorkoutAggregate
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let mut aggregate = WorkoutAggregate::default();
    for record in records {
        aggregate.add_workout(record.duration_raw().and_then(parse_leading_int));
    }
    aggregate
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then the
/// longest run of ASCII digits is taken and the rest ignored, so `"30abc"`
/// gives 30 and `"12.9"` gives 12. Returns `None` when there are no digits.
/// Values too large for `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = unsigned.as_bytes()[..digits]
        .iter()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    Some(if negative { -value } else { value })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
