//! "Connect" badge that opens contact details and a short contact form.
//!
//! The form has no backend; a submit is logged and the fields reset.

use leptos::prelude::*;

use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::components::ui::input::{Input, Label};
use crate::menus::ContactItem;

#[component]
pub fn BadgeDropdown(badge_text: &'static str, items: &'static [ContactItem]) -> impl IntoView {
    let open = RwSignal::new(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!(
            "contact request: {} {} <{}>",
            first_name.get_untracked(),
            last_name.get_untracked(),
            email.get_untracked()
        );
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
    };

    view! {
        <div class="badge-dropdown">
            <button type="button" class="badge-dropdown__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                <Badge outline=true tone="green">
                    {badge_text}
                    <span class="badge-dropdown__chevron">"▾"</span>
                </Badge>
            </button>
            <Show when=move || open.get()>
                <div class="badge-dropdown__menu">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="badge-dropdown__item">
                                    <span class="badge-dropdown__label">{item.label}</span>
                                    {match item.href {
                                        Some(href) => view! {
                                            <a class="badge-dropdown__link" href=href>{item.text}</a>
                                        }
                                        .into_any(),
                                        None => view! { <span class="badge-dropdown__text">{item.text}</span> }.into_any(),
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="badge-dropdown__divider"></div>
                    <form class="badge-dropdown__form" on:submit=on_submit>
                        <Label for_id="connect-first-name">"First Name"</Label>
                        <Input value=first_name id="connect-first-name" placeholder="Enter first name" required=true />
                        <Label for_id="connect-last-name">"Last Name"</Label>
                        <Input value=last_name id="connect-last-name" placeholder="Enter last name" required=true />
                        <Label for_id="connect-email">"Email"</Label>
                        <Input
                            value=email
                            id="connect-email"
                            input_type="email"
                            placeholder="Enter email address"
                            required=true
                        />
                        <Button kind="submit" size=ButtonSize::Sm class="w-full">
                            "Connect"
                        </Button>
                        <LinkButton href="/schedule-meeting" variant=ButtonVariant::Ghost size=ButtonSize::Sm class="w-full">
                            "Schedule a Consultation"
                        </LinkButton>
                    </form>
                </div>
            </Show>
        </div>
    }
}
