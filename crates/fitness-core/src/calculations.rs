use serde::{Deserialize, Serialize};

/// Outcome of comparing the week's workout minutes against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Total minutes reached or exceeded the goal.
    Met,
    /// Minutes still needed to reach the goal (always positive).
    Remaining(i64),
}

impl GoalStatus {
    /// Compare `total_minutes` against `weekly_goal`.
    ///
    /// Reaching the goal exactly counts as met.
    pub fn evaluate(total_minutes: i64, weekly_goal: u32) -> Self {
        let goal = i64::from(weekly_goal);
        if total_minutes >= goal {
            GoalStatus::Met
        } else {
            GoalStatus::Remaining(goal.saturating_sub(total_minutes))
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, GoalStatus::Met)
    }

    /// Minutes still needed, `0` once the goal is met.
    pub fn remaining_minutes(&self) -> i64 {
        match self {
            GoalStatus::Met => 0,
            GoalStatus::Remaining(minutes) => *minutes,
        }
    }
}
