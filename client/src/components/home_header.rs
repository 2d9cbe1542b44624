//! Full-bleed page header over a background photo.

use leptos::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::components::ui::button::{ButtonSize, CallToAction, CtaButton};

#[component]
pub fn HomeHeader(
    background_image: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] button: Option<CallToAction>,
) -> impl IntoView {
    view! {
        <div class="home-header">
            <img src=background_image alt="Header Background" class="home-header__image" />
            <div class="home-header__overlay"></div>
            <div class="home-header__content">
                <div class="home-header__inner">
                    <h1 class="home-header__title">
                        <HighlightedText text=title />
                    </h1>
                    <p class="home-header__subtitle">{subtitle}</p>
                    {button.map(|cta| view! { <CtaButton cta=cta.size(ButtonSize::Lg) class="home-header__cta" /> })}
                </div>
            </div>
        </div>
    }
}
