//! Team roster, recent activity, and performance overview.

use leptos::prelude::*;

use crate::components::stat_card::{Stat, StatGrid};
use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::util::status::{completion_percent, progress_width, status_tone};

pub(crate) struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub status: &'static str,
    pub kids_count: u32,
    pub completed_training: u32,
    pub pending_training: u32,
    pub initials: &'static str,
    pub supervisor: bool,
}

pub(crate) const TEAM_MEMBERS: [TeamMember; 6] = [
    TeamMember {
        name: "Emily Rodriguez",
        role: "Senior Case Worker",
        department: "Case Management",
        email: "emily.rodriguez@envesti.com",
        phone: "(555) 123-4567",
        status: "Online",
        kids_count: 8,
        completed_training: 12,
        pending_training: 1,
        initials: "ER",
        supervisor: true,
    },
    TeamMember {
        name: "David Thompson",
        role: "Case Worker",
        department: "Case Management",
        email: "david.thompson@envesti.com",
        phone: "(555) 234-5678",
        status: "Online",
        kids_count: 6,
        completed_training: 10,
        pending_training: 2,
        initials: "DT",
        supervisor: false,
    },
    TeamMember {
        name: "Sarah Davis",
        role: "Case Worker",
        department: "Case Management",
        email: "sarah.davis@envesti.com",
        phone: "(555) 345-6789",
        status: "Away",
        kids_count: 5,
        completed_training: 8,
        pending_training: 3,
        initials: "SD",
        supervisor: false,
    },
    TeamMember {
        name: "Michael Brown",
        role: "Supervisor",
        department: "Supervision",
        email: "michael.brown@envesti.com",
        phone: "(555) 456-7890",
        status: "Online",
        kids_count: 0,
        completed_training: 15,
        pending_training: 0,
        initials: "MB",
        supervisor: true,
    },
    TeamMember {
        name: "Lisa Wang",
        role: "Training Coordinator",
        department: "Compliance & Training",
        email: "lisa.wang@envesti.com",
        phone: "(555) 567-8901",
        status: "Online",
        kids_count: 0,
        completed_training: 18,
        pending_training: 0,
        initials: "LW",
        supervisor: false,
    },
    TeamMember {
        name: "James Wilson",
        role: "Administrative Assistant",
        department: "Administration",
        email: "james.wilson@envesti.com",
        phone: "(555) 678-9012",
        status: "Offline",
        kids_count: 0,
        completed_training: 6,
        pending_training: 4,
        initials: "JW",
        supervisor: false,
    },
];

const TEAM_STATS: [Stat; 4] = [
    Stat { title: "Total Team Members", value: "6", icon: "👥", change: Some("+1"), description: "This quarter" },
    Stat { title: "Active Cases", value: "19", icon: "👶", change: Some("+3"), description: "This month" },
    Stat { title: "Training Completion", value: "87%", icon: "🏅", change: Some("+5%"), description: "This quarter" },
    Stat { title: "Online Members", value: "4", icon: "✅", change: Some("+1"), description: "Currently" },
];

/// (icon, action, when)
const RECENT_ACTIVITIES: [(&str, &str, &str); 4] = [
    ("🏅", "Sarah Davis completed Child Safety Training", "2 hours ago"),
    ("👶", "New case assigned to Emily Rodriguez", "4 hours ago"),
    ("📄", "David Thompson submitted monthly report", "6 hours ago"),
    ("👥", "Michael Brown conducted team meeting", "1 day ago"),
];

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <PageHeader title="Team" description="Manage your team members and track their performance">
                <Button variant=ButtonVariant::Outline>"📄 Export Report"</Button>
                <Button>"➕ Add Member"</Button>
            </PageHeader>

            <StatGrid stats=&TEAM_STATS />

            <div class="account-grid account-grid--wide-left">
                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"👥 Team Members"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="row-list">
                            {TEAM_MEMBERS.iter().map(member_row).collect_view()}
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle class="card__title--icon">"📈 Recent Activities"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="activity-list">
                            {RECENT_ACTIVITIES
                                .iter()
                                .map(|(icon, action, when)| view! {
                                    <div class="activity-list__item">
                                        <span class="activity-list__icon">{*icon}</span>
                                        <div>
                                            <p class="activity-list__action">{*action}</p>
                                            <p class="activity-list__time">{*when}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </CardContent>
                </Card>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle class="card__title--icon">"🏅 Team Performance Overview"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="overview">
                        <div class="overview__column">
                            <h4 class="overview__title">"Training Status"</h4>
                            {TEAM_MEMBERS
                                .iter()
                                .map(|m| {
                                    let percent = completion_percent(m.completed_training, m.pending_training);
                                    let total = m.completed_training + m.pending_training;
                                    view! {
                                        <div class="overview__row">
                                            <span>{m.name}</span>
                                            <div class="overview__progress">
                                                <div class="progress">
                                                    <div class="progress__bar progress__bar--green" style=progress_width(percent)></div>
                                                </div>
                                                <span class="overview__count">{format!("{}/{total}", m.completed_training)}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="overview__column">
                            <h4 class="overview__title">"Case Load Distribution"</h4>
                            {TEAM_MEMBERS
                                .iter()
                                .filter(|m| m.kids_count > 0)
                                .map(|m| view! {
                                    <div class="overview__row">
                                        <span>{m.name}</span>
                                        <Badge outline=true>{format!("{} cases", m.kids_count)}</Badge>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <div class="overview__column">
                            <h4 class="overview__title">"Quick Contact"</h4>
                            {TEAM_MEMBERS
                                .iter()
                                .take(4)
                                .map(|m| view! {
                                    <div class="overview__row">
                                        <span>{m.name}</span>
                                        <div class="overview__contact">
                                            <a href=format!("mailto:{}", m.email) class="btn btn--ghost btn--sm" title=m.email>"✉️"</a>
                                            <a href=format!("tel:{}", m.phone) class="btn btn--ghost btn--sm" title=m.phone>"📞"</a>
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

fn member_row(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="row-list__item">
            <div class="row-list__main">
                <div class="row-list__avatar row-list__avatar--initials">{member.initials}</div>
                <div>
                    <div class="row-list__title-row">
                        <h4 class="row-list__title">{member.name}</h4>
                        {member.supervisor.then(|| view! { <Badge outline=true>"🛡️ Supervisor"</Badge> })}
                    </div>
                    <p class="row-list__meta">{member.role}</p>
                    <p class="row-list__hint">{member.department}</p>
                </div>
            </div>
            <div class="row-list__aside">
                <Badge tone=status_tone(member.status)>{member.status}</Badge>
                <p class="row-list__hint">
                    {format!("{} kids • {} training", member.kids_count, member.completed_training)}
                </p>
                {(member.pending_training > 0)
                    .then(|| view! { <p class="row-list__warning">{format!("{} pending", member.pending_training)}</p> })}
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm title="More">"⋯"</Button>
            </div>
        </div>
    }
}
