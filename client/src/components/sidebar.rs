//! Account navigation: fixed rail on desktop, slide-in panel on mobile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries come from `menus::account_navigation`. Active styling compares
//! each href with the current pathname exactly. The mobile panel closes on
//! any route change and on a mousedown outside `#mobile-sidebar`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::ui::cn;
use crate::menus::{SidebarEntry, account_navigation, folder_icon, profile_entry};
use crate::state::sidebar::{MOBILE_SIDEBAR_ID, SidebarState, is_active, link_state};

#[component]
pub fn Sidebar(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    Effect::new(move |_| {
        pathname.track();
        sidebar.update(SidebarState::close);
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if sidebar.get_untracked().mobile_open {
                let inside = target_within(&ev, MOBILE_SIDEBAR_ID)
                    || target_within(&ev, crate::components::auth_header::SIDEBAR_TOGGLE_ID);
                sidebar.update(|s| s.pointer_down(inside));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || sidebar.get().mobile_open>
            <div class="sidebar-overlay"></div>
        </Show>
        <div
            id=MOBILE_SIDEBAR_ID
            class=move || cn(&["sidebar sidebar--mobile", if sidebar.get().mobile_open { "sidebar--open" } else { "" }])
        >
            <NavigationContent pathname=pathname />
        </div>
        <div class="sidebar sidebar--desktop">
            <NavigationContent pathname=pathname />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn target_within(ev: &web_sys::MouseEvent, id: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(container) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let node = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(node.as_ref())
}

#[component]
fn NavigationContent(pathname: Memo<String>) -> impl IntoView {
    let profile = profile_entry();
    let profile_href = profile.href.clone();
    let profile_name = profile.name.clone();
    let profile_key = profile.key;

    view! {
        <div class="sidebar__main">
            <h2 class="sidebar__heading">"Navigation"</h2>
            <nav class="sidebar__nav">
                {account_navigation().into_iter().map(|entry| view! { <SidebarItem entry=entry pathname=pathname /> }).collect_view()}
            </nav>
        </div>
        <div class="sidebar__footer">
            <nav>
                <a
                    href=profile_href
                    class=move || {
                        cn(&[
                            "sidebar__link",
                            if is_active(&profile, &pathname.get()) { "sidebar__link--active" } else { "" },
                        ])
                    }
                >
                    <span class="sidebar__icon">{folder_icon(profile_key)}</span>
                    <span class="sidebar__label">{profile_name}</span>
                    <span class="sidebar__chevron">"›"</span>
                </a>
            </nav>
        </div>
    }
}

#[component]
fn SidebarItem(entry: SidebarEntry, pathname: Memo<String>) -> impl IntoView {
    let children = entry.children.clone();
    let href = entry.href.clone();
    let name = entry.name.clone();
    let description = entry.description.clone();
    let key = entry.key;

    view! {
        <div class="sidebar__item">
            <a href=href title=description class=move || link_state(&entry, &pathname.get()).class()>
                <span class="sidebar__icon">{folder_icon(key)}</span>
                <span class="sidebar__label">{name}</span>
            </a>
            {(!children.is_empty()).then(|| view! {
                <div class="sidebar__children">
                    {children
                        .into_iter()
                        .map(|child| {
                            let href = child.href.clone();
                            let name = child.name.clone();
                            let key = child.key;
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        cn(&[
                                            "sidebar__sublink",
                                            if is_active(&child, &pathname.get()) { "sidebar__sublink--active" } else { "" },
                                        ])
                                    }
                                >
                                    <span class="sidebar__rule"></span>
                                    <span class="sidebar__icon">{folder_icon(key)}</span>
                                    <span class="sidebar__label">{name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
