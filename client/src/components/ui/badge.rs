//! Pill badge. Tones match the `util::status` / role tone names.

use leptos::prelude::*;

use super::cn;

pub fn badge_class(outline: bool, tone: Option<&str>, extra: &str) -> String {
    let tone = tone.map(|t| format!("badge--{t}")).unwrap_or_default();
    cn(&["badge", if outline { "badge--outline" } else { "" }, &tone, extra])
}

#[component]
pub fn Badge(
    #[prop(optional)] outline: bool,
    #[prop(optional)] tone: Option<&'static str>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_class(outline, tone, &class)>{children()}</span> }
}
