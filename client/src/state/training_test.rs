use super::*;

#[test]
fn each_status_has_one_action() {
    assert_eq!(TrainingStatus::Available.action().label(), "Start Course");
    assert_eq!(TrainingStatus::InProgress.action().label(), "Continue");
    assert_eq!(TrainingStatus::Completed.action().label(), "View Certificate");
    assert_eq!(TrainingStatus::Overdue.action().label(), "Complete Now");
}

#[test]
fn only_in_progress_shows_bar() {
    assert!(TrainingStatus::InProgress.shows_progress());
    assert!(!TrainingStatus::Overdue.shows_progress());
    assert!(!TrainingStatus::Completed.shows_progress());
}

#[test]
fn category_counts_keep_first_seen_order() {
    let counts = category_counts(["Safety", "Compliance", "Safety", "Legal"]);
    assert_eq!(counts, vec![("Safety", 2), ("Compliance", 1), ("Legal", 1)]);
}

#[test]
fn search_is_case_insensitive_and_blank_matches() {
    assert!(matches_search("", &["anything"]));
    assert!(matches_search("  ", &["anything"]));
    assert!(matches_search("crisis", &["Crisis Intervention", "Skills"]));
    assert!(!matches_search("legal", &["Crisis Intervention", "Skills"]));
}

#[test]
fn tones_fall_back_to_gray() {
    assert_eq!(course_type_tone("Required"), "red");
    assert_eq!(course_type_tone("Optional"), "gray");
    assert_eq!(difficulty_tone("Advanced"), "red");
    assert_eq!(difficulty_tone("Expert"), "gray");
}
