use std::fmt::Display;

use crate::calculations::GoalStatus;

/// Header line printed above the summary block.
pub const SUMMARY_HEADER: &str = "=== SUMMARY ===";

/// Remediation hints printed after a fatal error.
pub const REMEDIATION_HINTS: [&str; 3] = [
    "Your .env file exists with USER_NAME and WEEKLY_GOAL variables",
    "Your data files exist in the ./data/ directory",
    "Your files are properly formatted",
];

/// Congratulation or encouragement line for `user_name`.
///
/// # Examples
///
/// ```
/// use fitness_core::calculations::GoalStatus;
/// use fitness_core::formatting::format_goal_message;
///
/// assert_eq!(
///     format_goal_message("Sam", GoalStatus::Remaining(55)),
///     "💪 Keep going Sam! You need 55 more minutes to reach your weekly goal."
/// );
/// ```
pub fn format_goal_message(user_name: &str, status: GoalStatus) -> String {
    match status {
        GoalStatus::Met => {
            format!("🎉 Congratulations {user_name}! You have exceeded your weekly goal!")
        }
        GoalStatus::Remaining(minutes) => format!(
            "💪 Keep going {user_name}! You need {minutes} more minutes to reach your weekly goal."
        ),
    }
}

/// The four labelled summary lines, in their fixed order.
pub fn format_summary_lines(
    total_workouts: usize,
    total_minutes: i64,
    health_entries: usize,
    weekly_goal: u32,
) -> [String; 4] {
    [
        format!("Workouts found: {total_workouts}"),
        format!("Total workout minutes: {total_minutes}"),
        format!("Health entries found: {health_entries}"),
        format!("Weekly goal: {weekly_goal} minutes"),
    ]
}

/// Multi-line, user-facing explanation of a fatal error with remediation hints.
pub fn format_error_report(error: &dyn Display) -> String {
    let mut out = String::from("\n❌ Error processing files:\n");
    out.push_str(&error.to_string());
    out.push_str("\n\nPlease check that:");
    for (i, hint) in REMEDIATION_HINTS.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, hint));
    }
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitnessError;

    #[test]
    fn test_goal_message_met_names_user() {
        let msg = format_goal_message("Jordan", GoalStatus::Met);
        assert_eq!(
            msg,
            "🎉 Congratulations Jordan! You have exceeded your weekly goal!"
        );
    }

    #[test]
    fn test_goal_message_remaining() {
        let msg = format_goal_message("Jordan", GoalStatus::evaluate(95, 150));
        assert!(msg.contains("Jordan"));
        assert!(msg.contains("55 more minutes"));
    }

    #[test]
    fn test_summary_lines_order() {
        let lines = format_summary_lines(4, 95, 3, 150);
        assert_eq!(lines[0], "Workouts found: 4");
        assert_eq!(lines[1], "Total workout minutes: 95");
        assert_eq!(lines[2], "Health entries found: 3");
        assert_eq!(lines[3], "Weekly goal: 150 minutes");
    }

    #[test]
    fn test_error_report_contains_message_and_hints() {
        let err = FitnessError::Config("USER_NAME environment variable is not set".to_string());
        let report = format_error_report(&err);
        assert!(report.starts_with("\n❌ Error processing files:\n"));
        assert!(report.contains("USER_NAME environment variable is not set"));
        assert!(report.contains("Please check that:"));
        assert!(report.contains("1. Your .env file exists"));
        assert!(report.contains("2. Your data files exist in the ./data/ directory"));
        assert!(report.ends_with("3. Your files are properly formatted"));
    }
}
