//! Static course catalog for the shop page and its search/category filter.

/// Category chips shown above the catalog, "All" first.
pub const CATEGORIES: [&str; 6] = ["All", "Compliance", "Leadership", "Technical Skills", "Soft Skills", "Industry Specific"];

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Number of tags a course card shows.
pub const VISIBLE_TAGS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Badge color family: green, yellow, red.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            Self::Beginner => "green",
            Self::Intermediate => "yellow",
            Self::Advanced => "red",
        }
    }
}

/// One catalog entry. Prices are in cents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub instructor: &'static str,
    pub duration: &'static str,
    pub level: CourseLevel,
    pub category: &'static str,
    pub price_cents: u32,
    pub original_price_cents: Option<u32>,
    pub rating: f32,
    pub students: u32,
    pub lessons: u32,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

impl Course {
    /// Tags rendered on the card.
    #[must_use]
    pub fn visible_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(VISIBLE_TAGS)]
    }
}

/// Format cents as `$149.99`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub const SAMPLE_COURSES: [Course; 6] = [
    Course {
        id: "1",
        title: "Workplace Safety & Compliance",
        description: "Comprehensive training on workplace safety regulations, hazard identification, and compliance requirements for various industries.",
        instructor: "Sarah Johnson",
        duration: "8 hours",
        level: CourseLevel::Beginner,
        category: "Compliance",
        price_cents: 14_999,
        original_price_cents: Some(19_999),
        rating: 4.8,
        students: 1247,
        lessons: 24,
        image: "/images/workplace-safety.jpg",
        tags: &["OSHA", "Safety", "Compliance", "Workplace"],
        featured: true,
    },
    Course {
        id: "2",
        title: "Effective Leadership & Management",
        description: "Develop essential leadership skills including communication, team building, conflict resolution, and strategic thinking.",
        instructor: "Michael Chen",
        duration: "12 hours",
        level: CourseLevel::Intermediate,
        category: "Leadership",
        price_cents: 19_999,
        original_price_cents: None,
        rating: 4.9,
        students: 892,
        lessons: 32,
        image: "/images/leadership.jpg",
        tags: &["Leadership", "Management", "Communication", "Team Building"],
        featured: false,
    },
    Course {
        id: "3",
        title: "Data Privacy & GDPR Compliance",
        description: "Learn about data protection regulations, privacy best practices, and how to implement GDPR compliance in your organization.",
        instructor: "Emily Rodriguez",
        duration: "6 hours",
        level: CourseLevel::Intermediate,
        category: "Compliance",
        price_cents: 17_999,
        original_price_cents: None,
        rating: 4.7,
        students: 567,
        lessons: 18,
        image: "/images/data-privacy.jpg",
        tags: &["GDPR", "Data Privacy", "Compliance", "Security"],
        featured: false,
    },
    Course {
        id: "4",
        title: "Project Management Fundamentals",
        description: "Master the basics of project management including planning, execution, monitoring, and successful project delivery.",
        instructor: "David Thompson",
        duration: "10 hours",
        level: CourseLevel::Beginner,
        category: "Technical Skills",
        price_cents: 15_999,
        original_price_cents: None,
        rating: 4.6,
        students: 743,
        lessons: 28,
        image: "/images/project-management.jpg",
        tags: &["Project Management", "Planning", "Execution", "Monitoring"],
        featured: false,
    },
    Course {
        id: "5",
        title: "Customer Service Excellence",
        description: "Enhance customer service skills with proven techniques for handling difficult situations and building customer relationships.",
        instructor: "Lisa Wang",
        duration: "5 hours",
        level: CourseLevel::Beginner,
        category: "Soft Skills",
        price_cents: 12_999,
        original_price_cents: None,
        rating: 4.5,
        students: 1023,
        lessons: 20,
        image: "/images/customer-service.jpg",
        tags: &["Customer Service", "Communication", "Problem Solving", "Relationships"],
        featured: false,
    },
    Course {
        id: "6",
        title: "Healthcare Compliance & HIPAA",
        description: "Comprehensive training on healthcare compliance, HIPAA regulations, patient privacy, and medical record management.",
        instructor: "Dr. Robert Martinez",
        duration: "7 hours",
        level: CourseLevel::Intermediate,
        category: "Industry Specific",
        price_cents: 18_999,
        original_price_cents: None,
        rating: 4.8,
        students: 456,
        lessons: 22,
        image: "/images/healthcare-compliance.jpg",
        tags: &["HIPAA", "Healthcare", "Compliance", "Patient Privacy"],
        featured: false,
    },
];

// =============================================================================
// FILTER
// =============================================================================

/// Selected category chip plus free-text search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self { category: ALL_CATEGORIES.to_owned(), search: String::new() }
    }
}

impl CatalogFilter {
    /// Category is "All" or exact; search is a case-insensitive substring of
    /// title, description, or instructor.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let matches_category = self.category == ALL_CATEGORIES || course.category == self.category;
        let needle = self.search.to_lowercase();
        let matches_search = course.title.to_lowercase().contains(&needle)
            || course.description.to_lowercase().contains(&needle)
            || course.instructor.to_lowercase().contains(&needle);
        matches_category && matches_search
    }

    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;
