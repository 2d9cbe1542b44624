//! Consultation booking page.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::cn;
use crate::components::ui::input::Label;
use crate::state::schedule::{
    ContactField, ScheduleState, TIME_SLOTS, WEEKDAY_HEADERS, appointment_label, month_calendar, today,
};

#[component]
pub fn ScheduleMeetingPage() -> impl IntoView {
    let state = RwSignal::new(ScheduleState::default());
    let today = today();
    let calendar = Memo::new(move |_| state.with(|s| month_calendar(today, s.selected_date)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some((date, time, form)) = state.try_update(ScheduleState::submit).flatten() {
            log!("scheduling consultation for {} at {time}: {form:?}", appointment_label(date));
        }
    };

    view! {
        <MarketingLayout>
            <div class="schedule">
                <div class="schedule__header">
                    <h1 class="schedule__title">"Schedule a Consultation"</h1>
                    <p class="schedule__subtitle">
                        "Book a personalized consultation with our team to discuss your training and development needs."
                    </p>
                </div>

                <div class="schedule__grid">
                    <div class="schedule__panel">
                        <h2 class="schedule__panel-title">"📅 Select Date & Time"</h2>
                        <h3 class="calendar__title">{move || calendar.with(|c| c.title.clone())}</h3>
                        <div class="calendar">
                            {WEEKDAY_HEADERS.iter().map(|d| view! { <div class="calendar__weekday">{*d}</div> }).collect_view()}
                            {move || {
                                calendar.with(|c| {
                                    let blanks = (0..c.leading_blanks)
                                        .map(|_| view! { <div class="calendar__blank"></div> })
                                        .collect_view();
                                    let days = c
                                        .days
                                        .iter()
                                        .map(|cell| {
                                            let cell = *cell;
                                            view! {
                                                <button
                                                    type="button"
                                                    class=cell.class()
                                                    disabled=cell.is_past
                                                    on:click=move |_| state.update(|s| s.select_date(&cell))
                                                >
                                                    {cell.day()}
                                                </button>
                                            }
                                        })
                                        .collect_view();
                                    view! { {blanks} {days} }
                                })
                            }}
                        </div>

                        <h3 class="schedule__slots-title">"🕒 Available Times"</h3>
                        <div class="schedule__slots">
                            {TIME_SLOTS
                                .iter()
                                .map(|slot| {
                                    let slot = *slot;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                let active = state.with(|s| s.selected_time == Some(slot));
                                                cn(&["slot", if active { "slot--active" } else { "" }])
                                            }
                                            on:click=move |_| state.update(|s| s.select_time(slot))
                                        >
                                            {slot}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="schedule__panel">
                        <h2 class="schedule__panel-title">"👤 Your Information"</h2>
                        <form class="schedule__form" on:submit=on_submit>
                            <div class="form-row">
                                {contact_field(state, ContactField::FirstName, "firstName", "First Name *", "text", "Enter first name", true)}
                                {contact_field(state, ContactField::LastName, "lastName", "Last Name *", "text", "Enter last name", true)}
                            </div>
                            {contact_field(state, ContactField::Email, "email", "Email Address *", "email", "Enter email address", true)}
                            {contact_field(state, ContactField::Phone, "phone", "Phone Number", "tel", "Enter phone number", false)}
                            {contact_field(state, ContactField::Company, "company", "Company", "text", "Enter company name", false)}
                            <div class="form-field">
                                <Label for_id="message">"Additional Information"</Label>
                                <textarea
                                    id="message"
                                    class="textarea"
                                    rows="4"
                                    placeholder="Tell us about your training needs or any specific questions..."
                                    prop:value=move || state.with(|s| s.form.message.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.form.set(ContactField::Message, value));
                                    }
                                ></textarea>
                            </div>
                            <Button
                                kind="submit"
                                variant=ButtonVariant::GradientHorizontal
                                size=ButtonSize::Lg
                                class="schedule__submit"
                                disabled=Signal::derive(move || !state.with(ScheduleState::can_submit))
                            >
                                "Schedule Consultation"
                            </Button>
                        </form>
                    </div>
                </div>

                <Show when=move || state.with(ScheduleState::has_selection)>
                    <div class="schedule__summary">
                        <h3>"Selected Appointment"</h3>
                        {move || state.with(|s| s.selected_date).map(|d| view! { <span>{format!("📅 {}", appointment_label(d))}</span> })}
                        {move || state.with(|s| s.selected_time).map(|t| view! { <span>{format!("🕒 {t}")}</span> })}
                    </div>
                </Show>
            </div>
        </MarketingLayout>
    }
}

#[allow(clippy::too_many_arguments)]
fn contact_field(
    state: RwSignal<ScheduleState>,
    field: ContactField,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <Label for_id=id>{label}</Label>
            <input
                id=id
                name=id
                type=input_type
                class="input"
                placeholder=placeholder
                required=required
                prop:value=move || state.with(|s| s.form.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.form.set(field, value));
                }
            />
        </div>
    }
}
