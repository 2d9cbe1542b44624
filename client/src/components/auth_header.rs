//! Sticky header for the account area.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::ui::badge::Badge;
use crate::state::auth::AuthState;
use crate::state::sidebar::SidebarState;

/// Id of the mobile sidebar toggle; mousedowns on it do not count as
/// outside clicks.
pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";

#[component]
pub fn AuthHeader(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::alive_until_cleanup();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                if !alive.is_alive() {
                    return;
                }
                auth.update(AuthState::begin_sign_out);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <nav class="auth-header">
            <div class="auth-header__left">
                <button
                    id=SIDEBAR_TOGGLE_ID
                    type="button"
                    class="btn btn--ghost btn--icon auth-header__menu"
                    title="Toggle navigation"
                    on:click=move |_| sidebar.update(SidebarState::toggle)
                >
                    {move || if sidebar.get().mobile_open { "✕" } else { "☰" }}
                </button>
                <a href="/" class="auth-header__logo">
                    <img src="/envesti-logo.svg" alt="Envesti Solutions" width="163" height="47" />
                </a>
                <Badge class="auth-header__badge" tone="green">"Compliance"</Badge>
            </div>
            <div class="auth-header__right">
                <span class="auth-header__avatar" title=move || auth.get().email().unwrap_or_default().to_owned()>
                    {move || auth.get().avatar_letter()}
                </span>
                <ThemeSwitcher />
                <button type="button" class="btn btn--outline btn--sm auth-header__sign-out" on:click=on_sign_out>
                    "⎋"
                    <span class="auth-header__sign-out-label">"Sign Out"</span>
                </button>
            </div>
        </nav>
    }
}
