//! Assigned training courses with progress, completions, and deadlines.

use leptos::prelude::*;

use crate::components::stat_card::{Stat, StatGrid};
use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::state::training::{
    TrainingAction, TrainingStatus, category_counts, course_type_tone, difficulty_tone, matches_search,
};
use crate::util::status::{progress_tone, progress_width, status_tone};

#[derive(Clone, Copy)]
struct AssignedCourse {
    id: u32,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    kind: &'static str,
    status: TrainingStatus,
    progress: u8,
    due: &'static str,
    assigned_by: &'static str,
    category: &'static str,
    difficulty: &'static str,
}

const COURSES: [AssignedCourse; 6] = [
    AssignedCourse {
        id: 1,
        title: "Child Safety Protocols",
        description: "Comprehensive training on child safety procedures and emergency response protocols.",
        duration: "4 hours",
        kind: "Required",
        status: TrainingStatus::Available,
        progress: 0,
        due: "2024-02-15",
        assigned_by: "Lisa Wang",
        category: "Safety",
        difficulty: "Intermediate",
    },
    AssignedCourse {
        id: 2,
        title: "Documentation Standards",
        description: "Learn proper documentation practices for case files and compliance reporting.",
        duration: "2 hours",
        kind: "Required",
        status: TrainingStatus::InProgress,
        progress: 65,
        due: "2024-02-20",
        assigned_by: "Michael Brown",
        category: "Compliance",
        difficulty: "Beginner",
    },
    AssignedCourse {
        id: 3,
        title: "Crisis Intervention",
        description: "Advanced techniques for handling crisis situations and de-escalation strategies.",
        duration: "6 hours",
        kind: "Elective",
        status: TrainingStatus::Completed,
        progress: 100,
        due: "2024-01-30",
        assigned_by: "Emily Rodriguez",
        category: "Skills",
        difficulty: "Advanced",
    },
    AssignedCourse {
        id: 4,
        title: "Cultural Sensitivity Training",
        description: "Understanding diverse backgrounds and cultural considerations in foster care.",
        duration: "3 hours",
        kind: "Required",
        status: TrainingStatus::Overdue,
        progress: 25,
        due: "2024-01-25",
        assigned_by: "Sarah Davis",
        category: "Cultural",
        difficulty: "Beginner",
    },
    AssignedCourse {
        id: 5,
        title: "Legal Requirements",
        description: "Overview of state and federal legal requirements for foster care agencies.",
        duration: "5 hours",
        kind: "Required",
        status: TrainingStatus::Available,
        progress: 0,
        due: "2024-03-01",
        assigned_by: "Lisa Wang",
        category: "Legal",
        difficulty: "Intermediate",
    },
    AssignedCourse {
        id: 6,
        title: "Trauma-Informed Care",
        description: "Understanding trauma and implementing trauma-informed care practices.",
        duration: "4 hours",
        kind: "Elective",
        status: TrainingStatus::Completed,
        progress: 100,
        due: "2024-01-15",
        assigned_by: "David Thompson",
        category: "Care",
        difficulty: "Intermediate",
    },
];

const TRAINING_STATS: [Stat; 4] = [
    Stat { title: "Total Courses", value: "24", icon: "📚", change: Some("+3"), description: "This quarter" },
    Stat { title: "Completed", value: "18", icon: "✅", change: Some("+5"), description: "This month" },
    Stat { title: "In Progress", value: "4", icon: "🕒", change: Some("+1"), description: "Currently" },
    Stat { title: "Overdue", value: "2", icon: "⚠️", change: Some("-1"), description: "This week" },
];

/// (course, user, completed, score)
const RECENT_COMPLETIONS: [(&str, &str, &str, u8); 3] = [
    ("Trauma-Informed Care", "Emily Rodriguez", "2024-01-15", 95),
    ("Crisis Intervention", "David Thompson", "2024-01-14", 88),
    ("Documentation Standards", "Sarah Davis", "2024-01-12", 92),
];

/// (course, due, days left, assigned to)
const UPCOMING_DEADLINES: [(&str, &str, u32, &str); 3] = [
    ("Child Safety Protocols", "2024-02-15", 5, "All Staff"),
    ("Documentation Standards", "2024-02-20", 10, "Case Workers"),
    ("Legal Requirements", "2024-03-01", 20, "All Staff"),
];

const COMPLETION_RATES: [(&str, u8); 4] =
    [("Required Courses", 78), ("Elective Courses", 64), ("Safety Training", 91), ("Compliance Training", 85)];

fn action_variant(action: TrainingAction) -> ButtonVariant {
    match action {
        TrainingAction::Continue => ButtonVariant::Default,
        TrainingAction::CompleteNow => ButtonVariant::Destructive,
        TrainingAction::Start | TrainingAction::ViewCertificate => ButtonVariant::Outline,
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| {
        search.with(|s| {
            COURSES
                .iter()
                .filter(|c| matches_search(s, &[c.title, c.description, c.category]))
                .map(|c| c.id)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="account-page">
            <PageHeader title="Training" description="Manage training courses, track progress, and ensure compliance">
                <Button variant=ButtonVariant::Outline>"⬇️ Export Report"</Button>
                <Button>"➕ Create Course"</Button>
            </PageHeader>

            <StatGrid stats=&TRAINING_STATS />

            <Card>
                <CardContent class="toolbar">
                    <div class="toolbar__search">
                        <span class="toolbar__search-icon">"🔍"</span>
                        <input
                            type="text"
                            class="input toolbar__search-input"
                            placeholder="Search courses..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"Filter"</Button>
                </CardContent>
            </Card>

            <div class="account-grid account-grid--wide-left">
                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"🎓 Training Courses"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="row-list">
                            <For
                                each=move || visible.get()
                                key=|id| *id
                                children=move |id| COURSES.iter().find(|c| c.id == id).map(|c| course_row(*c))
                            />
                        </div>
                    </CardContent>
                </Card>

                <div class="account-stack">
                    <Card>
                        <CardHeader>
                            <CardTitle class="card__title--icon">"🏅 Recent Completions"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {RECENT_COMPLETIONS
                                .iter()
                                .map(|(course, user, date, score)| view! {
                                    <div class="alert-card__item alert-card__item--green">
                                        <h4>{*course}</h4>
                                        <p>{format!("{user} • {date}")}</p>
                                        <p class="alert-card__score">{format!("Score: {score}% ✅")}</p>
                                    </div>
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle class="card__title--icon">"📅 Upcoming Deadlines"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {UPCOMING_DEADLINES
                                .iter()
                                .map(|(course, due, days_left, assigned)| view! {
                                    <div class="alert-card__item alert-card__item--yellow">
                                        <h4>{*course}</h4>
                                        <p>{format!("Due: {due}")}</p>
                                        <p class="alert-card__hint">{format!("Assigned to: {assigned}")}</p>
                                        <p class="alert-card__warning">{format!("{days_left} days left ⚠️")}</p>
                                    </div>
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>
                </div>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle class="card__title--icon">"📈 Training Progress Overview"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="overview overview--two">
                        <div class="overview__column">
                            <h4 class="overview__title">"Course Categories"</h4>
                            {category_counts(COURSES.iter().map(|c| c.category))
                                .into_iter()
                                .map(|(category, count)| view! {
                                    <div class="overview__row">
                                        <span>{category}</span>
                                        <Badge outline=true>{format!("{count} courses")}</Badge>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <div class="overview__column">
                            <h4 class="overview__title">"Completion Rates"</h4>
                            {COMPLETION_RATES
                                .iter()
                                .map(|(label, percent)| view! {
                                    <div class="overview__row">
                                        <span>{*label}</span>
                                        <div class="overview__progress">
                                            <div class="progress">
                                                <div class="progress__bar progress__bar--green" style=progress_width(*percent)></div>
                                            </div>
                                            <span class="overview__count">{format!("{percent}%")}</span>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

fn course_row(course: AssignedCourse) -> impl IntoView {
    let action = course.status.action();
    view! {
        <div class="training-item">
            <div class="training-item__top">
                <div class="training-item__main">
                    <div class="training-item__title-row">
                        <h4 class="training-item__title">{course.title}</h4>
                        <Badge tone=course_type_tone(course.kind)>{course.kind}</Badge>
                        <Badge outline=true tone=difficulty_tone(course.difficulty)>{course.difficulty}</Badge>
                    </div>
                    <p class="training-item__description">{course.description}</p>
                    <div class="training-item__meta">
                        <span>{format!("🕒 {}", course.duration)}</span>
                        <span>{format!("🎯 {}", course.category)}</span>
                        <span>{format!("📅 Due: {}", course.due)}</span>
                    </div>
                </div>
                <div class="training-item__aside">
                    <Badge tone=status_tone(course.status.label())>{course.status.label()}</Badge>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm title="Open">"▶"</Button>
                </div>
            </div>
            {course.status.shows_progress().then(|| view! {
                <div class="training-item__progress">
                    <div class="training-item__progress-label">
                        <span>"Progress"</span>
                        <span>{format!("{}%", course.progress)}</span>
                    </div>
                    <div class="progress">
                        <div
                            class=format!("progress__bar progress__bar--{}", progress_tone(course.progress))
                            style=progress_width(course.progress)
                        ></div>
                    </div>
                </div>
            })}
            <div class="training-item__footer">
                <span>{format!("Assigned by: {}", course.assigned_by)}</span>
                <Button size=ButtonSize::Sm variant=action_variant(action)>{action.label()}</Button>
            </div>
        </div>
    }
}
