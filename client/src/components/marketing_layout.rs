//! Frame shared by every public page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_menu::NavMenu;

#[component]
pub fn MarketingLayout(children: Children) -> impl IntoView {
    view! {
        <main class="marketing">
            <NavMenu />
            <div class="marketing__body">
                <div class="marketing__content">{children()}</div>
                <Footer />
            </div>
        </main>
    }
}
