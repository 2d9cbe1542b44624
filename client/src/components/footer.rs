//! Marketing footer: link columns, newsletter signup, and credits.

use leptos::prelude::*;

use crate::components::ui::button::Button;
use crate::components::ui::input::Input;
use crate::menus::{COMPANY_LINKS, FooterLink, QUICK_LINKS, SOCIAL_LINKS};

fn link_column(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h3 class="footer__heading">{title}</h3>
            <ul class="footer__links">
                {links
                    .iter()
                    .map(|l| view! { <li><a href=l.href class="footer__link">{l.label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let email = RwSignal::new(String::new());

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("newsletter signup: {}", email.get_untracked());
        email.set(String::new());
    };

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__logo">
                    <img src="/envesti-logo.svg" alt="Envesti Solutions" width="163" height="47" />
                </div>
                <div class="footer__columns">
                    {link_column("Quick Links", &QUICK_LINKS)}
                    {link_column("Company", &COMPANY_LINKS)}
                    <div class="footer__column">
                        <h3 class="footer__heading">"Stay Connected"</h3>
                        <p class="footer__text">"Subscribe to our newsletter for the latest updates and insights."</p>
                        <form class="footer__form" on:submit=on_subscribe>
                            <Input value=email input_type="email" placeholder="Enter your email" required=true />
                            <Button kind="submit" class="w-full">"Subscribe"</Button>
                        </form>
                    </div>
                </div>
                <div class="footer__bottom">
                    <p class="footer__copyright">"© 2024 Envesti Solutions. All rights reserved."</p>
                    <p class="footer__credit">
                        "Developed by "
                        <a href="https://thebrokebros.com" target="_blank" rel="noreferrer">"The Broke Bros"</a>
                    </p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|l| view! { <a href=l.href class="footer__social-link">{l.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
