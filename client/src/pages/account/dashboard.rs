//! Daily overview: active kids, overdue work, team, and organization summary.

use leptos::prelude::*;

use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::pages::account::team::{TEAM_MEMBERS, TeamMember};
use crate::state::schedule::{appointment_label, today};
use crate::util::status::status_tone;

struct ActiveKid {
    name: &'static str,
    case_number: &'static str,
    age: u8,
    status: &'static str,
    last_note: &'static str,
    case_worker: &'static str,
}

const ACTIVE_KIDS: [ActiveKid; 4] = [
    ActiveKid {
        name: "Sarah Johnson",
        case_number: "FC-2024-001",
        age: 14,
        status: "Active",
        last_note: "2 days ago",
        case_worker: "Emily Rodriguez",
    },
    ActiveKid {
        name: "Michael Chen",
        case_number: "FC-2024-002",
        age: 16,
        status: "Active",
        last_note: "1 day ago",
        case_worker: "David Thompson",
    },
    ActiveKid {
        name: "Lisa Wang",
        case_number: "FC-2024-003",
        age: 12,
        status: "Review",
        last_note: "5 days ago",
        case_worker: "Emily Rodriguez",
    },
    ActiveKid {
        name: "James Wilson",
        case_number: "FC-2024-004",
        age: 15,
        status: "Active",
        last_note: "3 days ago",
        case_worker: "Sarah Davis",
    },
];

/// (title, due, assignee)
const OVERDUE_TRAINING: [(&str, &str, &str); 3] = [
    ("Child Safety Protocols", "3 days ago", "Emily Rodriguez"),
    ("Documentation Standards", "1 week ago", "David Thompson"),
    ("Crisis Intervention", "2 weeks ago", "Sarah Davis"),
];

/// (note, kid, due, case worker)
const PAST_DUE_NOTES: [(&str, &str, &str, &str); 2] = [
    ("Monthly Review", "Sarah Johnson", "2 days ago", "Emily Rodriguez"),
    ("Behavioral Assessment", "Michael Chen", "1 week ago", "David Thompson"),
];

fn presence_icon(status: &str) -> &'static str {
    match status {
        "Online" => "✅",
        "Away" => "🕒",
        _ => "⛔",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let overview = format!(
        "You have {} active cases and {} overdue training items",
        ACTIVE_KIDS.len(),
        OVERDUE_TRAINING.len()
    );
    let dashboard_team: Vec<&TeamMember> = TEAM_MEMBERS.iter().take(4).collect();

    view! {
        <div class="account-page">
            <PageHeader title="Dashboard" description="Welcome back! Here's what's happening today.">
                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"➕ Add Kid"</Button>
                <Button size=ButtonSize::Sm>"👁 View All"</Button>
            </PageHeader>

            <Card class="today-card">
                <CardContent class="today-card__body">
                    <span class="today-card__icon">"📅"</span>
                    <div>
                        <h3 class="today-card__title">{format!("Today is {}", appointment_label(today()))}</h3>
                        <p class="today-card__text">{overview}</p>
                    </div>
                </CardContent>
            </Card>

            <div class="account-grid account-grid--wide-left">
                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"👶 Active Kids"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="row-list">
                            {ACTIVE_KIDS
                                .iter()
                                .map(|kid| view! {
                                    <div class="row-list__item">
                                        <div class="row-list__main">
                                            <div class="row-list__avatar">"👶"</div>
                                            <div>
                                                <h4 class="row-list__title">{kid.name}</h4>
                                                <p class="row-list__meta">
                                                    {format!("{} • Age {} • {}", kid.case_number, kid.age, kid.case_worker)}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="row-list__aside">
                                            <Badge tone=status_tone(kid.status)>{kid.status}</Badge>
                                            <span class="row-list__hint">{format!("Last note: {}", kid.last_note)}</span>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </CardContent>
                </Card>

                <div class="account-stack">
                    <Card class="alert-card alert-card--red">
                        <CardHeader>
                            <CardTitle class="card__title--icon">"⚠️ Overdue Training"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {OVERDUE_TRAINING
                                .iter()
                                .map(|(title, due, assignee)| view! {
                                    <div class="alert-card__item">
                                        <h4>{*title}</h4>
                                        <p>{format!("Due: {due}")}</p>
                                        <p class="alert-card__hint">{format!("Assigned to: {assignee}")}</p>
                                    </div>
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>

                    <Card class="alert-card alert-card--orange">
                        <CardHeader>
                            <CardTitle class="card__title--icon">"📄 Past Due Notes"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {PAST_DUE_NOTES
                                .iter()
                                .map(|(note, kid, due, worker)| view! {
                                    <div class="alert-card__item">
                                        <h4>{*note}</h4>
                                        <p>{format!("Kid: {kid}")}</p>
                                        <p class="alert-card__hint">{format!("Due: {due} • {worker}")}</p>
                                    </div>
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>
                </div>
            </div>

            <div class="account-grid">
                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"👥 Team Members"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="row-list">
                            {dashboard_team
                                .into_iter()
                                .map(|member| view! {
                                    <div class="row-list__item">
                                        <div class="row-list__main">
                                            <div class="row-list__avatar">"👤"</div>
                                            <div>
                                                <h4 class="row-list__title">{member.name}</h4>
                                                <p class="row-list__meta">{member.role}</p>
                                            </div>
                                        </div>
                                        <div class="row-list__aside">
                                            <span class="presence">
                                                {presence_icon(member.status)} " " {member.status}
                                            </span>
                                            <Badge outline=true>{format!("{} kids", member.kids_count)}</Badge>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"🏢 Organization"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <h3 class="org-summary__name">"Envesti Solutions"</h3>
                        <p class="org-summary__tagline">"Foster Care Compliance Management"</p>
                        <dl class="key-values">
                            <dt>"License:"</dt>
                            <dd>"FC-2024-001"</dd>
                            <dt>"State:"</dt>
                            <dd>"California"</dd>
                            <dt>"Active Cases:"</dt>
                            <dd>{ACTIVE_KIDS.len()}</dd>
                            <dt>"Team Members:"</dt>
                            <dd>"4"</dd>
                        </dl>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
