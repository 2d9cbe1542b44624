//! Shell around every account page: header, sidebar, routed content, footer.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::auth_header::AuthHeader;
use crate::components::sidebar::Sidebar;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::auth::AuthState;
use crate::state::sidebar::SidebarState;
use crate::util::auth::install_unauth_redirect;

const SUPABASE_URL: &str = "https://supabase.com/?utm_source=create-next-app&utm_medium=template&utm_term=nextjs";

#[component]
pub fn AccountLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, move |path, options| navigate(path, options));

    let sidebar = RwSignal::new(SidebarState::default());

    view! {
        <main class="account">
            <AuthHeader sidebar=sidebar />
            <div class="account__body">
                <Sidebar sidebar=sidebar />
                <div class="account__main">
                    <div class="account__content">
                        <Outlet />
                    </div>
                    <footer class="account__footer">
                        <p>
                            "Powered by "
                            <a href=SUPABASE_URL target="_blank" rel="noreferrer" class="account__footer-link">
                                "Supabase"
                            </a>
                        </p>
                        <ThemeSwitcher />
                    </footer>
                </div>
            </div>
        </main>
    }
}
