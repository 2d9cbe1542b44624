//! Light/dark toggle backed by the `RwSignal<Theme>` context.

use leptos::prelude::*;

use crate::util::dark_mode::{self, Theme};

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            type="button"
            class="btn btn--ghost btn--icon theme-switcher"
            title="Toggle dark mode"
            on:click=move |_| theme.update(|t| *t = dark_mode::toggle(*t))
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
