//! Formatting utilities for terminal output

/// Format a duration as M:SS
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format a lifetime duration as whole minutes
#[must_use]
pub fn format_minutes(total_seconds: u64) -> String {
    format!("{} minutes", total_seconds / 60)
}

/// Accuracy of a correct/played pair in whole percent
#[must_use]
pub fn accuracy_percent(correct: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(played) * 100.0).round() as u32
}
