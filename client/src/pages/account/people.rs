//! Organization member directory with search, role filter, and two layouts.

use leptos::prelude::*;
use records::profile::{role_badge_label, role_tone};
use records::{Profile, Role};

use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant, button_class};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::state::people::{PeopleLayout, PeoplePageState};
use crate::util::format::short_date;

#[component]
pub fn PeoplePage() -> impl IntoView {
    let state = RwSignal::new(PeoplePageState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = crate::util::alive::alive_until_cleanup();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_people().await.map_err(|e| e.message);
            if alive.is_alive() {
                state.update(|s| s.loaded(result));
            }
        });
    }

    let layout_button = move |layout: PeopleLayout, icon: &'static str, title: &'static str| {
        let variant = move || {
            if state.with(|s| s.layout == layout) { ButtonVariant::Default } else { ButtonVariant::Ghost }
        };
        view! {
            <button
                type="button"
                title=title
                class=move || button_class(variant(), ButtonSize::Sm, "")
                on:click=move |_| state.update(|s| s.layout = layout)
            >
                {icon}
            </button>
        }
    };

    view! {
        <div class="account-page">
            {move || {
                if state.with(|s| s.loading) {
                    return view! {
                        <div class="skeleton skeleton--title"></div>
                        <div class="card-grid">
                            {(0..6).map(|_| view! { <div class="skeleton skeleton--card"></div> }).collect_view()}
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = state.with(|s| s.error.clone()) {
                    return view! {
                        <h1 class="page-header__title">"People"</h1>
                        <Card>
                            <CardContent>
                                <p class="form-error">{format!("Error loading people: {message}")}</p>
                            </CardContent>
                        </Card>
                    }
                    .into_any();
                }
                view! {
                    <PageHeader title="People" description="Manage organization members and their roles">
                        <div class="segmented">
                            {layout_button(PeopleLayout::Cards, "▦", "Card view")}
                            {layout_button(PeopleLayout::Table, "☰", "Table view")}
                        </div>
                        <Button>"➕ Add Person"</Button>
                    </PageHeader>
                    <Summary state=state />
                    <Filters state=state />
                    <Directory state=state />
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn Summary(state: RwSignal<PeoplePageState>) -> impl IntoView {
    let summary = Memo::new(move |_| state.with(PeoplePageState::summary));
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="card__title--icon">"👥 Organization Summary"</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="summary-grid">
                    <SummaryCell value=Signal::derive(move || summary.get().total) label="Total People" tone="blue" />
                    <SummaryCell value=Signal::derive(move || summary.get().case_workers) label="Case Workers" tone="green" />
                    <SummaryCell value=Signal::derive(move || summary.get().supervisors) label="Supervisors" tone="purple" />
                    <SummaryCell value=Signal::derive(move || summary.get().admins) label="Admins" tone="orange" />
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn SummaryCell(value: Signal<usize>, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("summary-grid__cell summary-grid__cell--{tone}")>
            <div class="summary-grid__value">{move || value.get()}</div>
            <div class="summary-grid__label">{label}</div>
        </div>
    }
}

#[component]
fn Filters(state: RwSignal<PeoplePageState>) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="toolbar">
                <div class="toolbar__search">
                    <span class="toolbar__search-icon">"🔍"</span>
                    <input
                        type="text"
                        class="input toolbar__search-input"
                        placeholder="Search people by name, phone, or role..."
                        prop:value=move || state.with(|s| s.filter.search.clone())
                        on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                    />
                </div>
                <div class="toolbar__filters">
                    <select
                        class="select"
                        prop:value=move || state.with(|s| s.filter.role.value())
                        on:change=move |ev| state.update(|s| s.set_role(&event_target_value(&ev)))
                    >
                        <option value="all">"All Roles"</option>
                        {Role::ALL
                            .iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"Filter"</Button>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn Directory(state: RwSignal<PeoplePageState>) -> impl IntoView {
    let visible = Memo::new(move |_| state.with(PeoplePageState::visible));

    move || {
        if visible.with(Vec::is_empty) {
            let hint = state.with(PeoplePageState::empty_hint);
            return view! {
                <Card>
                    <CardContent class="empty-state">
                        <div class="empty-state__icon">"👥"</div>
                        <h3 class="empty-state__title">"No people found"</h3>
                        <p class="empty-state__text">{hint}</p>
                        <Button>"➕ Add First Person"</Button>
                    </CardContent>
                </Card>
            }
            .into_any();
        }
        match state.with(|s| s.layout) {
            PeopleLayout::Cards => view! {
                <div class="card-grid">{visible.get().into_iter().map(person_card).collect_view()}</div>
            }
            .into_any(),
            PeopleLayout::Table => view! {
                <Card>
                    <CardContent>
                        <div class="table-wrap">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Role"</th>
                                        <th>"Phone"</th>
                                        <th>"Organization"</th>
                                        <th>"Team"</th>
                                        <th>"Added"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{visible.get().into_iter().map(person_row).collect_view()}</tbody>
                            </table>
                        </div>
                    </CardContent>
                </Card>
            }
            .into_any(),
        }
    }
}

fn role_badge(role: Option<&str>) -> Option<AnyView> {
    let role = role.filter(|r| !r.is_empty())?;
    let tone = role_tone(Some(role)).as_str();
    let label = role_badge_label(role);
    Some(view! { <Badge tone=tone>{label}</Badge> }.into_any())
}

fn dash_or(value: Option<String>, icon: &'static str) -> AnyView {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => view! { <span>{format!("{icon} {v}")}</span> }.into_any(),
        None => view! { <span class="muted">"-"</span> }.into_any(),
    }
}

fn person_card(person: Profile) -> impl IntoView {
    let optional_line = |value: Option<String>, icon: &'static str| {
        value.filter(|v| !v.is_empty()).map(|v| view! { <div class="person__line">{format!("{icon} {v}")}</div> })
    };
    let display_name = person.display_name();
    let added = format!("Added {}", short_date(person.created_at.as_deref()));
    let phone = optional_line(person.phone_number.clone(), "📞");
    let role = role_badge(person.role.as_deref()).map(|badge| view! { <div class="person__line">{badge}</div> });
    let organization = optional_line(person.organization.clone(), "🏢");
    let team = optional_line(person.team.clone(), "👥");
    view! {
        <Card class="person">
            <CardHeader class="person__header">
                <div class="person__identity">
                    <div class="person__avatar">"👤"</div>
                    <div>
                        <h3 class="person__name">{display_name}</h3>
                        <p class="person__added">{added}</p>
                    </div>
                </div>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm title="More">"⋯"</Button>
            </CardHeader>
            <CardContent class="person__body">
                {phone}
                {role}
                {organization}
                {team}
                <div class="person__actions">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"✏️ Edit"</Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"🗑️ Remove"</Button>
                </div>
            </CardContent>
        </Card>
    }
}

fn person_row(person: Profile) -> impl IntoView {
    view! {
        <tr>
            <td>
                <div class="table__person">
                    <span class="table__avatar">"👤"</span>
                    <span class="table__name">{person.display_name()}</span>
                </div>
            </td>
            <td>
                {role_badge(person.role.as_deref())
                    .unwrap_or_else(|| view! { <span class="muted">"-"</span> }.into_any())}
            </td>
            <td>{dash_or(person.phone_number.clone(), "📞")}</td>
            <td>{dash_or(person.organization.clone(), "🏢")}</td>
            <td>{dash_or(person.team.clone(), "👥")}</td>
            <td>{short_date(person.created_at.as_deref())}</td>
            <td>
                <div class="table__actions">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"✏️ Edit"</Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"🗑️ Remove"</Button>
                </div>
            </td>
        </tr>
    }
}
