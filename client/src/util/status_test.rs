use super::*;

#[test]
fn status_tones_follow_status_families() {
    assert_eq!(status_tone("Active"), "green");
    assert_eq!(status_tone("Completed"), "green");
    assert_eq!(status_tone("In Progress"), "yellow");
    assert_eq!(status_tone("pending"), "yellow");
    assert_eq!(status_tone("Overdue"), "red");
    assert_eq!(status_tone("Archived"), "gray");
}

#[test]
fn progress_width_is_clamped() {
    assert_eq!(progress_width(45), "width: 45%");
    assert_eq!(progress_width(250), "width: 100%");
}

#[test]
fn progress_tone_reflects_completion() {
    assert_eq!(progress_tone(0), "gray");
    assert_eq!(progress_tone(60), "blue");
    assert_eq!(progress_tone(100), "green");
}

#[test]
fn completion_percent_rounds_down_and_handles_empty() {
    assert_eq!(completion_percent(12, 1), 92);
    assert_eq!(completion_percent(6, 4), 60);
    assert_eq!(completion_percent(15, 0), 100);
    assert_eq!(completion_percent(0, 0), 100);
}
