//! Department directory. Works from the sample set until departments get a
//! table of their own.

use leptos::prelude::*;
use records::Department;
use records::department::{DepartmentTotals, SAMPLE_DEPARTMENTS, format_usd, search};

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::pages::account::PageHeader;
use crate::util::format::short_date;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let totals = DepartmentTotals::from_departments(&SAMPLE_DEPARTMENTS);
    let visible = Memo::new(move |_| {
        term.with(|t| search(&SAMPLE_DEPARTMENTS, t).into_iter().copied().collect::<Vec<_>>())
    });

    view! {
        <div class="account-page">
            <PageHeader title="Departments" description="Manage your organization's departments">
                <Button>"➕ Add Department"</Button>
            </PageHeader>

            <div class="toolbar">
                <div class="toolbar__search">
                    <span class="toolbar__search-icon">"🔍"</span>
                    <input
                        type="text"
                        class="input toolbar__search-input"
                        placeholder="Search departments..."
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </div>
                <Button variant=ButtonVariant::Outline>"Filter"</Button>
            </div>

            <div class="stat-grid stat-grid--three">
                <TotalCard icon="🏢" label="Total Departments" value=totals.departments.to_string() />
                <TotalCard icon="👥" label="Total Employees" value=totals.employees.to_string() />
                <TotalCard icon="💰" label="Total Budget" value=format_usd(totals.budget) />
            </div>

            {move || {
                if visible.with(Vec::is_empty) {
                    let hint = if term.with(String::is_empty) {
                        "Get started by creating your first department."
                    } else {
                        "No departments match your search criteria."
                    };
                    view! {
                        <Card>
                            <CardContent class="empty-state">
                                <div class="empty-state__icon">"🏢"</div>
                                <h3 class="empty-state__title">"No departments found"</h3>
                                <p class="empty-state__text">{hint}</p>
                                <Button>"➕ Add Department"</Button>
                            </CardContent>
                        </Card>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || visible.get()
                                key=|d| d.id
                                children=|department| view! { <DepartmentCard department=department /> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TotalCard(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="total">
                <span class="total__icon">{icon}</span>
                <div>
                    <p class="total__label">{label}</p>
                    <p class="total__value">{value}</p>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn DepartmentCard(department: Department) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <Card class="department">
            <CardHeader class="department__header">
                <div>
                    <CardTitle>{department.name}</CardTitle>
                    <CardDescription>{department.description}</CardDescription>
                </div>
                <div class="menu">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        title="Actions"
                        on_click=Callback::new(move |_| menu_open.update(|open| *open = !*open))
                    >
                        "⋮"
                    </Button>
                    <Show when=move || menu_open.get()>
                        <ul class="menu__list" on:click=move |_| menu_open.set(false)>
                            <li class="menu__item">"👁️ View Details"</li>
                            <li class="menu__item">"✏️ Edit Department"</li>
                            <li class="menu__item menu__item--destructive">"🗑️ Delete Department"</li>
                        </ul>
                    </Show>
                </div>
            </CardHeader>
            <CardContent class="department__body">
                <Fact icon="👥" label="Head of Department" value=department.head_of_department.to_owned() />
                <Fact icon="👥" label="Employees" value=format!("{} members", department.employee_count) />
                <Fact icon="🏢" label="Annual Budget" value=format_usd(department.budget) />
                <p class="department__updated">
                    {format!("Last updated: {}", short_date(Some(department.updated_at)))}
                </p>
            </CardContent>
        </Card>
    }
}

#[component]
fn Fact(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="fact">
            <span class="fact__icon">{icon}</span>
            <div>
                <p class="fact__label">{label}</p>
                <p class="fact__value">{value}</p>
            </div>
        </div>
    }
}
