use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{FitnessError, Result};

/// Default location of the workout CSV, relative to the working directory.
pub const DEFAULT_WORKOUT_FILE: &str = "./data/workouts.csv";

/// Default location of the health-metrics JSON document.
pub const DEFAULT_HEALTH_FILE: &str = "./data/health-metrics.json";

// ── Settings (CLI + environment) ───────────────────────────────────────────────

/// Summarise workout minutes against a weekly goal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fitness-summary",
    about = "Summarise workout minutes against a weekly goal",
    version
)]
pub struct Settings {
    /// Name used in the summary messages
    #[arg(long, env = "USER_NAME")]
    pub user_name: Option<String>,

    /// Weekly workout goal in minutes
    #[arg(long, env = "WEEKLY_GOAL")]
    pub weekly_goal: Option<String>,

    /// Workout log (CSV with a header row)
    #[arg(long, env = "WORKOUT_FILE", default_value = DEFAULT_WORKOUT_FILE)]
    pub workout_file: PathBuf,

    /// Health metrics document (JSON with a "metrics" array)
    #[arg(long, env = "HEALTH_FILE", default_value = DEFAULT_HEALTH_FILE)]
    pub health_file: PathBuf,

    /// Logging level
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO", ignore_case = true, value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments (with environment fallbacks).
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but over an explicit argument list.
    ///
    /// `--help` and `--version` print and exit as usual; any other argument
    /// or environment problem becomes a [`FitnessError::Config`].
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = match Settings::try_parse_from(args) {
            Ok(settings) => settings,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => return Err(FitnessError::Config(e.to_string().trim_end().to_string())),
        };
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        Ok(settings)
    }
}

// ── Config (validated) ─────────────────────────────────────────────────────────

/// Validated run configuration handed to the report orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    user_name: String,
    weekly_goal: u32,
    workout_file: PathBuf,
    health_file: PathBuf,
}

impl Config {
    /// Validate a user name and goal; data files use the default locations.
    pub fn new(user_name: impl Into<String>, weekly_goal: u32) -> Result<Self> {
        let user_name: String = user_name.into();
        let user_name = validate_user_name(Some(user_name.as_str()))?;
        if weekly_goal == 0 {
            return Err(FitnessError::Config(
                "WEEKLY_GOAL must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self {
            user_name,
            weekly_goal,
            workout_file: PathBuf::from(DEFAULT_WORKOUT_FILE),
            health_file: PathBuf::from(DEFAULT_HEALTH_FILE),
        })
    }

    /// Build the configuration from raw settings, validating every field once.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let user_name = validate_user_name(settings.user_name.as_deref())?;
        let weekly_goal = parse_weekly_goal(settings.weekly_goal.as_deref())?;
        Ok(Self {
            user_name,
            weekly_goal,
            workout_file: settings.workout_file.clone(),
            health_file: settings.health_file.clone(),
        })
    }

    /// Replace the data file locations.
    pub fn with_data_files(
        mut self,
        workout_file: impl Into<PathBuf>,
        health_file: impl Into<PathBuf>,
    ) -> Self {
        self.workout_file = workout_file.into();
        self.health_file = health_file.into();
        self
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn weekly_goal(&self) -> u32 {
        self.weekly_goal
    }

    pub fn workout_file(&self) -> &Path {
        &self.workout_file
    }

    pub fn health_file(&self) -> &Path {
        &self.health_file
    }
}

fn validate_user_name(raw: Option<&str>) -> Result<String> {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(FitnessError::Config(
            "USER_NAME environment variable is not set".to_string(),
        )),
    }
}

fn parse_weekly_goal(raw: Option<&str>) -> Result<u32> {
    let invalid = || {
        FitnessError::Config("WEEKLY_GOAL environment variable is not set or invalid".to_string())
    };
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    match raw.parse::<u32>() {
        Ok(goal) if goal > 0 => Ok(goal),
        _ => Err(invalid()),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
