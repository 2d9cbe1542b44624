//! Text inputs bound to a `RwSignal<String>`, plus the field label.

use leptos::prelude::*;

use super::cn;

#[component]
pub fn Label(#[prop(optional, into)] for_id: String, children: Children) -> impl IntoView {
    view! { <label class="label" for=for_id>{children()}</label> }
}

#[component]
pub fn Input(
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] invalid: MaybeProp<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <input
            id=id
            type=input_type.unwrap_or("text")
            class=move || cn(&["input", if invalid.get().unwrap_or(false) { "input--invalid" } else { "" }, &class])
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Textarea(
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            class="input input--textarea"
            placeholder=placeholder
            rows=rows.unwrap_or(4).to_string()
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        ></textarea>
    }
}
