//! The viewer's organization: overview, metrics, details, and edit/create
//! dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come fresh from `/api/organization` on every mount. Saving goes
//! through `PUT` (edit) or `POST` (create, Super Admin only); the stored row
//! the server returns replaces the local copy. Any load or save failure
//! swaps the page body for a retry card.

use leptos::prelude::*;
use records::Organization;

use crate::components::modal::Modal;
use crate::components::organization_edit_form::OrganizationEditForm;
use crate::components::stat_card::{Stat, StatGrid};
use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::{PageHeader, StatusCard};
use crate::state::modal::ModalSize;
use crate::state::org_form::{OrgFormState, Submission};
use crate::state::organization::{OrganizationPageState, OrganizationView, address_line, founded_year};
use crate::util::status::status_tone;

const LICENSE_NUMBER: &str = "FC-2024-001";
const LAST_INSPECTION: &str = "2024-01-15";
const NEXT_INSPECTION: &str = "2024-07-15";

const COMPLIANCE_METRICS: [Stat; 4] = [
    Stat { title: "Compliance Score", value: "98%", icon: "🛡️", change: Some("+2%"), description: "This quarter" },
    Stat { title: "Active Cases", value: "24", icon: "👥", change: Some("+3"), description: "This month" },
    Stat { title: "Team Members", value: "12", icon: "🏢", change: Some("+1"), description: "This quarter" },
    Stat { title: "Training Hours", value: "1,247", icon: "🏅", change: Some("+156"), description: "This year" },
];

/// (name, head, members, description)
const INTERNAL_DEPARTMENTS: [(&str, &str, u32, &str); 4] = [
    ("Case Management", "Emily Rodriguez", 5, "Direct case work and child placement services"),
    ("Compliance & Training", "David Thompson", 3, "Ensuring regulatory compliance and staff training"),
    ("Administration", "Sarah Davis", 2, "Administrative support and documentation"),
    ("Supervision", "Michael Brown", 2, "Team supervision and quality assurance"),
];

/// (action, date, status, details)
const RECENT_ACTIVITIES: [(&str, &str, &str, &str); 4] = [
    ("Compliance inspection completed", "2024-01-15", "completed", "Annual state inspection passed with 98% score"),
    ("New team member onboarded", "2024-01-10", "completed", "Sarah Johnson joined Case Management team"),
    ("Training program updated", "2024-01-08", "completed", "Child safety protocols training refreshed"),
    ("License renewal submitted", "2024-01-05", "pending", "Annual license renewal application submitted"),
];

fn activity_icon(status: &str) -> &'static str {
    match status {
        "completed" => "✅",
        "overdue" => "📄",
        _ => "🕒",
    }
}

#[component]
pub fn OrganizationPage() -> impl IntoView {
    let state = RwSignal::new(OrganizationPageState::default());
    let form = RwSignal::new(OrgFormState::default());
    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::alive_until_cleanup();

    let load = Callback::new(move |()| {
        state.set(OrganizationPageState::default());
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_organization().await.map_err(|e| e.message);
                if alive.is_alive() {
                    state.update(|s| s.loaded(result));
                }
            });
        }
    });
    load.run(());

    let open_edit = Callback::new(move |()| {
        let Some(org) = state.with_untracked(|s| s.context.organization.clone()) else {
            return;
        };
        form.set(OrgFormState::edit(&org));
        state.update(|s| s.edit_open = true);
    });
    let open_create = Callback::new(move |()| {
        form.set(OrgFormState::create());
        state.update(|s| s.create_open = true);
    });
    let close_dialogs = Callback::new(move |()| {
        state.update(|s| {
            s.edit_open = false;
            s.create_open = false;
        });
    });

    let on_save = Callback::new(move |submission: Submission| {
        let create = form.with_untracked(|f| f.create_mode);
        state.update(OrganizationPageState::begin_save);
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = if create {
                    crate::net::api::create_organization(&submission.draft).await
                } else {
                    crate::net::api::save_organization(&submission.draft).await
                };
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(org) => state.update(|s| s.stored(org)),
                    Err(crate::net::api::ApiError { fields: Some(fields), .. }) => {
                        form.update(|f| f.errors = fields);
                        state.update(|s| s.saving = false);
                    }
                    Err(e) => {
                        leptos::logging::warn!("organization save failed: {e}");
                        state.update(|s| s.failed(e.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (create, submission);
    });

    let saving = Signal::derive(move || state.with(|s| s.saving));

    view! {
        <div class="account-page">
            {move || match state.with(OrganizationPageState::view) {
                OrganizationView::Loading => view! {
                    <PageHeader title="Organization" description="Loading organization data..." />
                    <div class="stat-grid">
                        {(0..4).map(|_| view! { <Card class="stat stat--skeleton"><div class="skeleton"></div></Card> }).collect_view()}
                    </div>
                }
                .into_any(),
                OrganizationView::Failed(message) => view! {
                    <PageHeader title="Organization" description="Error loading organization data" />
                    <StatusCard title="Unable to Load Organization" message=message on_retry=load />
                }
                .into_any(),
                OrganizationView::Empty { super_admin } => view! { <EmptyOrganization super_admin=super_admin open_create=open_create /> }.into_any(),
                OrganizationView::Ready(org) => {
                    let super_admin = state.with_untracked(OrganizationPageState::is_super_admin);
                    view! { <OrganizationOverview org=org super_admin=super_admin open_edit=open_edit open_create=open_create /> }.into_any()
                }
            }}

            <Modal
                open=Signal::derive(move || state.with(|s| s.edit_open))
                on_close=close_dialogs
                title="Edit Organization"
                size=ModalSize::Xl
            >
                <OrganizationEditForm form=form saving=saving on_save=on_save on_cancel=close_dialogs />
            </Modal>
            <Modal
                open=Signal::derive(move || state.with(|s| s.create_open))
                on_close=close_dialogs
                title="Create Organization"
                size=ModalSize::Xl
            >
                <OrganizationEditForm form=form saving=saving on_save=on_save on_cancel=close_dialogs />
            </Modal>
        </div>
    }
}

#[component]
fn EmptyOrganization(super_admin: bool, open_create: Callback<()>) -> impl IntoView {
    let (description, heading, text) = if super_admin {
        (
            "Create or manage your organization",
            "Ready to Create Your Organization?",
            "As a Super Admin, you can create a new organization to get started with managing your team and compliance requirements.",
        )
    } else {
        (
            "No organization found",
            "No Organization Associated",
            "You are not currently associated with any organization.",
        )
    };

    view! {
        <PageHeader title="Organization" description=description>
            {super_admin.then(|| view! {
                <Button on_click=Callback::new(move |_| open_create.run(()))>"🏢 Create Organization"</Button>
            })}
        </PageHeader>
        <Card>
            <CardContent class="empty-state">
                <div class="empty-state__icon">"🏢"</div>
                <h3 class="empty-state__title">{heading}</h3>
                <p class="empty-state__text">{text}</p>
                {super_admin.then(|| view! {
                    <Button size=ButtonSize::Lg on_click=Callback::new(move |_| open_create.run(()))>
                        "🏢 Create Organization"
                    </Button>
                })}
            </CardContent>
        </Card>
    }
}

#[component]
fn OrganizationOverview(
    org: Organization,
    super_admin: bool,
    open_edit: Callback<()>,
    open_create: Callback<()>,
) -> impl IntoView {
    let status = org.status.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "Active".to_owned());
    let description = org.description.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "No description available".to_owned());
    let state_province = org.state_province.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "Not specified".to_owned());
    let phone = org.phone_number.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "No phone number".to_owned());
    let email = org.email.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "No email address".to_owned());
    let name = org.name.clone();
    let address = address_line(&org);
    let founded = founded_year(&org);

    view! {
        <PageHeader title="Organization" description="Manage your organization settings and view key metrics">
            {super_admin.then(|| view! {
                <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| open_create.run(()))>
                    "🏢 Create New Organization"
                </Button>
            })}
            <Button variant=ButtonVariant::Outline>"📄 Export Report"</Button>
        </PageHeader>

        <Card class="org-hero">
            <CardContent class="org-hero__body">
                <div class="org-hero__icon">"🏢"</div>
                <div>
                    <h2 class="org-hero__name">{name}</h2>
                    <p class="org-hero__description">{description}</p>
                    <div class="org-hero__meta">
                        <span>{format!("🏅 License: {LICENSE_NUMBER}")}</span>
                        <span>{format!("📍 {state_province}")}</span>
                        <Badge tone=status_tone(&status)>{status.clone()}</Badge>
                    </div>
                </div>
            </CardContent>
        </Card>

        <StatGrid stats=&COMPLIANCE_METRICS />

        <div class="account-grid">
            <Card>
                <CardHeader class="card__header--row">
                    <CardTitle class="card__title--icon">"🏢 Organization Details"</CardTitle>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on_click=Callback::new(move |_| open_edit.run(()))>
                        "✏️ Edit"
                    </Button>
                </CardHeader>
                <CardContent>
                    <div class="detail-list">
                        <Detail icon="📍" label="Address" value=address />
                        <Detail icon="📞" label="Phone" value=phone />
                        <Detail icon="✉️" label="Email" value=email />
                        <Detail icon="📅" label="Founded" value=founded />
                    </div>
                    <div class="compliance-info">
                        <h4 class="compliance-info__title">"Compliance Information"</h4>
                        <dl class="key-values">
                            <dt>"Last Inspection:"</dt>
                            <dd>{LAST_INSPECTION}</dd>
                            <dt>"Next Inspection:"</dt>
                            <dd>{NEXT_INSPECTION}</dd>
                            <dt>"License Status:"</dt>
                            <dd>
                                <Badge tone="green">"Valid"</Badge>
                            </dd>
                        </dl>
                    </div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle class="card__title--icon">"👥 Departments"</CardTitle>
                </CardHeader>
                <CardContent>
                    {INTERNAL_DEPARTMENTS
                        .iter()
                        .map(|(name, head, members, text)| view! {
                            <div class="dept-item">
                                <div class="dept-item__header">
                                    <h4>{*name}</h4>
                                    <Badge outline=true>{format!("{members} members")}</Badge>
                                </div>
                                <p class="dept-item__description">{*text}</p>
                                <p class="dept-item__head">{format!("Head: {head}")}</p>
                            </div>
                        })
                        .collect_view()}
                </CardContent>
            </Card>
        </div>

        <Card>
            <CardHeader>
                <CardTitle class="card__title--icon">"📈 Recent Activities"</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="activity-list">
                    {RECENT_ACTIVITIES
                        .iter()
                        .map(|(action, date, status, details)| view! {
                            <div class="activity-list__item">
                                <span class="activity-list__icon">{activity_icon(status)}</span>
                                <div class="activity-list__body">
                                    <h4 class="activity-list__action">{*action}</h4>
                                    <p class="activity-list__details">{*details}</p>
                                </div>
                                <div class="activity-list__aside">
                                    <Badge tone=status_tone(status)>{*status}</Badge>
                                    <span class="activity-list__time">{*date}</span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn Detail(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-list__item">
            <span class="detail-list__icon">{icon}</span>
            <div>
                <p class="detail-list__label">{label}</p>
                <p class="detail-list__value">{value}</p>
            </div>
        </div>
    }
}
