//! Case list for kids in care.

use leptos::prelude::*;

use crate::components::stat_card::{Stat, StatGrid};
use crate::components::ui::badge::Badge;
use crate::components::ui::button::Button;
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::util::status::status_tone;

const CASE_STATS: [Stat; 3] = [
    Stat { title: "Upcoming Cases", value: "3", icon: "➕", change: None, description: "This month" },
    Stat { title: "Assigned Cases", value: "8", icon: "🖱️", change: None, description: "Website" },
    Stat { title: "Overdue Notes", value: "3", icon: "📈", change: None, description: "Total value" },
];

struct Case {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    age: u8,
    case_number: &'static str,
    status: &'static str,
}

const CASES: [Case; 5] = [
    Case {
        name: "Sarah Johnson",
        email: "sarah.johnson@techcorp.com",
        phone: "(555) 123-4567",
        age: 14,
        case_number: "FC-2024-001",
        status: "Active",
    },
    Case {
        name: "Michael Chen",
        email: "mchen@innovateinc.com",
        phone: "(555) 234-5678",
        age: 16,
        case_number: "FC-2024-002",
        status: "Active",
    },
    Case {
        name: "Emily Rodriguez",
        email: "emily.r@startupco.com",
        phone: "(555) 345-6789",
        age: 12,
        case_number: "FC-2024-003",
        status: "Active",
    },
    Case {
        name: "David Thompson",
        email: "dthompson@enterprise.com",
        phone: "(555) 456-7890",
        age: 15,
        case_number: "FC-2024-004",
        status: "Active",
    },
    Case {
        name: "Lisa Wang",
        email: "lwang@growthtech.com",
        phone: "(555) 567-8901",
        age: 13,
        case_number: "FC-2024-005",
        status: "Active",
    },
];

#[component]
pub fn KidsPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <PageHeader title="Cases" description="Manage and track the kids in your care">
                <Button>"➕ Add Case"</Button>
            </PageHeader>

            <StatGrid stats=&CASE_STATS />

            <Card>
                <CardHeader>
                    <CardTitle class="card__title--icon">"👥 Recent Cases"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="table-wrap">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Age"</th>
                                    <th>"Case Number"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {CASES
                                    .iter()
                                    .map(|case| view! {
                                        <tr>
                                            <td>
                                                <div class="table__person">
                                                    <span class="table__avatar">"👤"</span>
                                                    <span class="table__name">{case.name}</span>
                                                </div>
                                            </td>
                                            <td>{format!("✉️ {}", case.email)}</td>
                                            <td>{format!("📞 {}", case.phone)}</td>
                                            <td>{case.age}</td>
                                            <td>
                                                <Badge outline=true>{case.case_number}</Badge>
                                            </td>
                                            <td>
                                                <Badge tone=status_tone(case.status)>{case.status}</Badge>
                                            </td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
