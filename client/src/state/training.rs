//! Assigned-course progress on the training page.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

/// Where one assigned course stands for the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingStatus {
    Available,
    InProgress,
    Completed,
    Overdue,
}

/// Button shown under a course for its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingAction {
    Start,
    Continue,
    ViewCertificate,
    CompleteNow,
}

impl TrainingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    pub fn action(self) -> TrainingAction {
        match self {
            Self::Available => TrainingAction::Start,
            Self::InProgress => TrainingAction::Continue,
            Self::Completed => TrainingAction::ViewCertificate,
            Self::Overdue => TrainingAction::CompleteNow,
        }
    }

    /// Only courses underway show a progress bar.
    pub fn shows_progress(self) -> bool {
        self == Self::InProgress
    }
}

impl TrainingAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Course",
            Self::Continue => "Continue",
            Self::ViewCertificate => "View Certificate",
            Self::CompleteNow => "Complete Now",
        }
    }
}

/// Badge tone for required vs. elective courses.
pub fn course_type_tone(kind: &str) -> &'static str {
    match kind {
        "Required" => "red",
        "Elective" => "blue",
        _ => "gray",
    }
}

/// Badge tone by difficulty.
pub fn difficulty_tone(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => "green",
        "Intermediate" => "yellow",
        "Advanced" => "red",
        _ => "gray",
    }
}

/// How many entries fall in each category, in first-seen order.
pub fn category_counts<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for category in categories {
        match counts.iter_mut().find(|(name, _)| *name == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }
    counts
}

/// Case-insensitive match on any of `fields`; blank search matches all.
pub fn matches_search(search: &str, fields: &[&str]) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
