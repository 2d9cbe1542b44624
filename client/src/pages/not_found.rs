use leptos::prelude::*;

use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{ButtonVariant, LinkButton};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <MarketingLayout>
            <section class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__message">"The page you're looking for doesn't exist."</p>
                <LinkButton href="/" variant=ButtonVariant::GradientHorizontal>"Back to Home"</LinkButton>
            </section>
        </MarketingLayout>
    }
}
