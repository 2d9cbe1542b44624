//! Color families for status and progress badges on account pages.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Badge tone for a status label, matched case-insensitively.
pub fn status_tone(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "online" | "completed" => "green",
        "review" | "away" | "in progress" | "pending" => "yellow",
        "overdue" => "red",
        _ => "gray",
    }
}

/// Progress bar tone: done, underway, or not started.
pub fn progress_tone(percent: u8) -> &'static str {
    match percent {
        100.. => "green",
        1..=99 => "blue",
        0 => "gray",
    }
}

/// Progress clamped to 0..=100 for the bar width.
pub fn progress_width(percent: u8) -> String {
    format!("width: {}%", percent.min(100))
}

/// Share of `done` out of `done + pending`, rounded down. Nothing assigned
/// counts as complete.
pub fn completion_percent(done: u32, pending: u32) -> u8 {
    let total = done + pending;
    if total == 0 {
        return 100;
    }
    u8::try_from(done * 100 / total).unwrap_or(100)
}
