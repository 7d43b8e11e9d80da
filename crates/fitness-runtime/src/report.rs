//! The summary block printed at the end of a run.

use std::fmt;

use fitness_core::calculations::GoalStatus;
use fitness_core::formatting::{format_goal_message, format_summary_lines, SUMMARY_HEADER};
use fitness_core::models::WorkoutAggregate;

/// Everything the report prints once both data files have been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub user_name: String,
    pub workouts: WorkoutAggregate,
    pub health_entries: usize,
    pub weekly_goal: u32,
    pub status: GoalStatus,
}

impl Summary {
    /// Assemble a summary, comparing the workout minutes against the goal.
    pub fn new(
        user_name: impl Into<String>,
        workouts: WorkoutAggregate,
        health_entries: usize,
        weekly_goal: u32,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            status: GoalStatus::evaluate(workouts.total_minutes, weekly_goal),
            workouts,
            health_entries,
            weekly_goal,
        }
    }

    /// The congratulation or encouragement line.
    pub fn goal_message(&self) -> String {
        format_goal_message(&self.user_name, self.status)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{SUMMARY_HEADER}")?;
        for line in format_summary_lines(
            self.workouts.total_workouts,
            self.workouts.total_minutes,
            self.health_entries,
            self.weekly_goal,
        ) {
            writeln!(f, "{line}")?;
        }
        write!(f, "{}", self.goal_message())
    }
}
