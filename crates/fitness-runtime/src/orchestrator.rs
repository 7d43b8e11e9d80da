//! End-to-end report run.
//!
//! Reads the workout and health files concurrently on tokio's blocking pool,
//! waits for both, and assembles a [`Summary`]. Any error from either reader
//! aborts the run.

use fitness_core::error::{FitnessError, Result};
use fitness_core::settings::Config;
use fitness_data::health::health_metrics_counter;
use fitness_data::workout::workout_calculator;
use tokio::task::{self, JoinError};

use crate::report::Summary;

// ── Progress reporting ────────────────────────────────────────────────────────

/// Receives the user-facing progress markers emitted during a run.
pub trait ProgressSink: Send + Sync {
    fn progress(&self, message: &str);
}

/// Prints progress markers to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn progress(&self, message: &str) {
        println!("{message}");
    }
}

// ── ReportOrchestrator ────────────────────────────────────────────────────────

/// Drives one report run from a validated [`Config`].
pub struct ReportOrchestrator {
    config: Config,
}

impl ReportOrchestrator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read both data files and build the summary.
    pub async fn run(&self, progress: &dyn ProgressSink) -> Result<Summary> {
        let config = &self.config;
        tracing::debug!(
            user = config.user_name(),
            weekly_goal = config.weekly_goal(),
            workout_file = %config.workout_file().display(),
            health_file = %config.health_file().display(),
            "starting report"
        );

        progress.progress(&format!("Processing data for: {}", config.user_name()));

        let workout_path = config.workout_file().to_path_buf();
        let health_path = config.health_file().to_path_buf();

        progress.progress("📁 Reading workout data...");
        progress.progress("📁 Reading health data...");

        let (workouts, health_entries) = tokio::join!(
            task::spawn_blocking(move || workout_calculator(&workout_path)),
            task::spawn_blocking(move || health_metrics_counter(&health_path)),
        );

        let workouts = workouts.map_err(|e| join_failure("workout", e))??;
        let health_entries = health_entries.map_err(|e| join_failure("health", e))??;

        let summary = Summary::new(
            config.user_name(),
            workouts,
            health_entries,
            config.weekly_goal(),
        );

        tracing::debug!(
            workouts = summary.workouts.total_workouts,
            minutes = summary.workouts.total_minutes,
            health_entries = summary.health_entries,
            goal_met = summary.status.is_met(),
            "report complete"
        );

        Ok(summary)
    }
}

fn join_failure(reader: &str, err: JoinError) -> FitnessError {
    FitnessError::Other(anyhow::Error::new(err).context(format!("{reader} reader task failed")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_core::calculations::GoalStatus;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::TempDir;

    // ── helpers ───────────────────────────────────────────────────────────

    /// Collects progress markers in memory.
    #[derive(Debug, Default)]
    struct RecordedProgress {
        messages: Mutex<Vec<String>>,
    }

    impl RecordedProgress {
        fn messages(&self) -> Vec<String> {
            self.messages
                .lock()
                .map(|m| m.clone())
                .unwrap_or_default()
        }
    }

    impl ProgressSink for RecordedProgress {
        fn progress(&self, message: &str) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(message.to_string());
            }
        }
    }

    const WORKOUTS: &str = "date,exercise,minutes\n\
                            2024-01-15,Running,30\n\
                            2024-01-16,Cycling,45\n\
                            2024-01-17,Yoga,invalid\n\
                            2024-01-18,Swimming,20\n";

    const HEALTH: &str = r#"{"metrics": [{"type": "sleep"}, {"type": "steps"}, {"type": "weight"}]}"#;

    fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
        let workout = dir.join("workouts.csv");
        let health = dir.join("health-metrics.json");
        std::fs::write(&workout, WORKOUTS).unwrap();
        std::fs::write(&health, HEALTH).unwrap();
        (workout, health)
    }

    fn orchestrator(goal: u32, workout: &Path, health: &Path) -> ReportOrchestrator {
        let config = Config::new("Riley", goal)
            .unwrap()
            .with_data_files(workout, health);
        ReportOrchestrator::new(config)
    }

    // ── async: full runs ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_run_goal_not_met() {
        let dir = TempDir::new().unwrap();
        let (workout, health) = write_fixtures(dir.path());
        let progress = RecordedProgress::default();

        let summary = orchestrator(150, &workout, &health)
            .run(&progress)
            .await
            .unwrap();

        assert_eq!(summary.workouts.total_workouts, 4);
        assert_eq!(summary.workouts.total_minutes, 95);
        assert_eq!(summary.health_entries, 3);
        assert_eq!(summary.status, GoalStatus::Remaining(55));
        assert!(summary.goal_message().contains("55 more minutes"));
    }

    #[tokio::test]
    async fn test_run_goal_met() {
        let dir = TempDir::new().unwrap();
        let (workout, health) = write_fixtures(dir.path());

        let summary = orchestrator(90, &workout, &health)
            .run(&RecordedProgress::default())
            .await
            .unwrap();

        assert!(summary.status.is_met());
        assert!(summary.goal_message().contains("Congratulations Riley!"));
    }

    #[tokio::test]
    async fn test_run_emits_progress_markers_in_order() {
        let dir = TempDir::new().unwrap();
        let (workout, health) = write_fixtures(dir.path());
        let progress = RecordedProgress::default();

        orchestrator(150, &workout, &health)
            .run(&progress)
            .await
            .unwrap();

        assert_eq!(
            progress.messages(),
            vec![
                "Processing data for: Riley".to_string(),
                "📁 Reading workout data...".to_string(),
                "📁 Reading health data...".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_missing_workout_file_aborts() {
        let dir = TempDir::new().unwrap();
        let (_, health) = write_fixtures(dir.path());
        let missing = dir.path().join("missing.csv");

        let err = orchestrator(150, &missing, &health)
            .run(&RecordedProgress::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FitnessError::FileNotFound(ref p) if p == &missing));
    }

    #[tokio::test]
    async fn test_run_invalid_health_document_aborts() {
        let dir = TempDir::new().unwrap();
        let (workout, health) = write_fixtures(dir.path());
        std::fs::write(&health, r#"{"readings": []}"#).unwrap();

        let err = orchestrator(150, &workout, &health)
            .run(&RecordedProgress::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FitnessError::InvalidSchema(_)));
    }

    // ── orchestrator creation ─────────────────────────────────────────────

    #[test]
    fn test_orchestrator_keeps_config() {
        let config = Config::new("Riley", 120).unwrap();
        let orch = ReportOrchestrator::new(config.clone());
        assert_eq!(orch.config(), &config);
    }
}
