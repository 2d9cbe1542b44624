//! Placeholder for signed-in members while new tools are built.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProtectedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();
    crate::util::auth::install_unauth_redirect(auth, move |path, options| navigate(path, options));

    view! {
        <div class="coming-soon">
            <div class="coming-soon__inner">
                <h1 class="coming-soon__title">"Coming Soon"</h1>
                <p class="coming-soon__lead">"We're working hard to bring you something amazing."</p>
                <p>"Thank you for signing up! Our team is currently building the next generation of tools and features."</p>
                <div class="coming-soon__account">
                    "You're logged in as: "
                    <span class="coming-soon__email">{move || auth.with(|a| a.email().unwrap_or_default().to_owned())}</span>
                </div>
                <p class="coming-soon__note">"We'll notify you as soon as we're ready to launch."</p>
            </div>
        </div>
    }
}
