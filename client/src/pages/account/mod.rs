//! Signed-in account area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page here renders inside `layout::AccountLayout`. The server gate
//! already rejected anonymous requests; the layout keeps a client-side
//! redirect for sessions that expire while a page is open.

pub mod dashboard;
pub mod departments;
pub mod kids;
pub mod layout;
pub mod organization;
pub mod people;
pub mod profile;
pub mod team;
pub mod training;

use leptos::prelude::*;

/// Title row shared by the account pages. Children render as the actions on
/// the right.
#[component]
pub(crate) fn PageHeader(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__description">{description}</p>
            </div>
            {children.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
        </div>
    }
}

/// Centered message card used for loading and failure states.
#[component]
pub(crate) fn StatusCard(
    title: &'static str,
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    use crate::components::ui::button::Button;
    use crate::components::ui::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

    view! {
        <Card class="status-card">
            <CardHeader>
                <CardTitle>{title}</CardTitle>
                <CardDescription>{message}</CardDescription>
            </CardHeader>
            {on_retry.map(|retry| view! {
                <CardContent>
                    <Button on_click=Callback::new(move |_| retry.run(()))>"Try Again"</Button>
                </CardContent>
            })}
        </Card>
    }
}
