//! Fixed marketing header with desktop hover panels and a mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `MarketingLayout` on every public page. Menu content comes
//! from `menus::SITE_MENU`; transient state lives in `NavMenuState`.

use leptos::prelude::*;

use crate::components::badge_dropdown::BadgeDropdown;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::ui::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::ui::cn;
use crate::menus::{CONTACT_ITEMS, MenuItem, SITE_MENU};
use crate::state::nav_menu::NavMenuState;

#[component]
pub fn NavMenu() -> impl IntoView {
    let nav = RwSignal::new(NavMenuState::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                nav.update(|n| n.set_scroll(y));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let header_class = move || cn(&["nav", if nav.get().scrolled { "nav--scrolled" } else { "" }]);

    view! {
        <nav class=header_class>
            <div class="nav__bar">
                <div class="nav__brand">
                    <a href="/" class="nav__logo">
                        <img src="/envesti-logo.svg" alt="Envesti Solutions" width="163" height="47" />
                    </a>
                    <BadgeDropdown badge_text="Connect" items=&CONTACT_ITEMS />
                </div>

                <div class="nav__desktop">
                    {SITE_MENU.iter().map(|item| view! { <DesktopSection item=item nav=nav /> }).collect_view()}
                </div>

                <div class="nav__actions">
                    <LinkButton href="/login" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                        "Sign In"
                    </LinkButton>
                    <LinkButton href="/courses" variant=ButtonVariant::GradientHorizontal size=ButtonSize::Sm>
                        "Shop Envesti Courses"
                    </LinkButton>
                    <ThemeSwitcher />
                </div>

                <div class="nav__mobile-toggle">
                    <ThemeSwitcher />
                    <button
                        type="button"
                        class="btn btn--ghost btn--sm"
                        title="Menu"
                        on:click=move |_| nav.update(NavMenuState::toggle_menu)
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.get().menu_open>
                <MobileMenu nav=nav />
            </Show>
        </nav>
    }
}

#[component]
fn DesktopSection(item: &'static MenuItem, nav: RwSignal<NavMenuState>) -> impl IntoView {
    let open = move || nav.get().is_open(item.label);
    let hovered = move || nav.get().hovered_item;

    view! {
        <div class="nav__item">
            <button type="button" class="nav__trigger" on:click=move |_| nav.update(|n| n.toggle_dropdown(item.label))>
                {item.label}
                <span class="nav__chevron">"▾"</span>
            </button>
            <div class=move || cn(&["nav__panel", if open() { "nav__panel--open" } else { "" }])>
                <div class="nav__panel-highlight">
                    <h3 class="nav__panel-title">{move || item.panel_title(hovered())}</h3>
                    <p class="nav__panel-text">{move || item.panel_description(hovered())}</p>
                </div>
                <div class="nav__panel-links">
                    {item
                        .children
                        .iter()
                        .map(|child| {
                            view! {
                                <a
                                    href=child.href
                                    class="nav__panel-link"
                                    on:mouseenter=move |_| nav.update(|n| n.hover(Some(child.label)))
                                    on:mouseleave=move |_| nav.update(|n| n.hover(None))
                                >
                                    {child.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MobileMenu(nav: RwSignal<NavMenuState>) -> impl IntoView {
    let close = move |_| nav.update(NavMenuState::close_menu);

    view! {
        <div class="nav__mobile">
            {SITE_MENU
                .iter()
                .map(|item| {
                    view! {
                        <div class="nav__mobile-section">
                            <button
                                type="button"
                                class="nav__mobile-trigger"
                                on:click=move |_| nav.update(|n| n.toggle_dropdown(item.label))
                            >
                                {item.label}
                                <span class=move || {
                                    if nav.get().is_open(item.label) { "nav__chevron nav__chevron--open" } else { "nav__chevron" }
                                }>"▾"</span>
                            </button>
                            <Show when=move || nav.get().is_open(item.label)>
                                <div class="nav__mobile-links">
                                    {item
                                        .children
                                        .iter()
                                        .map(|child| view! {
                                            <a href=child.href class="nav__mobile-link" on:click=close>{child.label}</a>
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
            <div class="nav__mobile-actions">
                <a href="/login" class="btn btn--outline btn--sm w-full" on:click=close>"Sign In"</a>
                <a href="/courses" class="btn btn--gradient btn--sm w-full" on:click=close>"Shop Envesti Courses"</a>
            </div>
        </div>
    }
}
