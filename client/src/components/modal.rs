//! Overlay dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the account pages for the organization edit/create forms. While
//! open the page body stops scrolling; Escape and backdrop clicks call
//! `on_close`. A click bubbling up from inside the dialog reaches the backdrop
//! with a different target and is ignored. There is no focus trap and modals do not stack.

use leptos::prelude::*;

use crate::state::modal::{ModalSize, closes_on_click};
#[cfg(feature = "hydrate")]
use crate::state::modal::closes_on_key;
use crate::util::scroll_lock;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] size: ModalSize,
    #[prop(default = true)] show_close_button: bool,
    children: ChildrenFn,
) -> impl IntoView {
    Effect::new(move |_| scroll_lock::set_locked(open.get()));
    on_cleanup(|| scroll_lock::set_locked(false));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if closes_on_key(open.get_untracked(), &ev.key()) {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || open.get()>
            <div
                class="modal"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    let on_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
                    if closes_on_click(open.get_untracked(), on_backdrop) {
                        on_close.run(());
                    }
                }
            >
                <div class=size.class() role="dialog" aria-modal="true">
                    {(title.is_some() || show_close_button).then(|| view! {
                        <div class="modal__header">
                            <h2 class="modal__title">{title}</h2>
                            {show_close_button.then(|| view! {
                                <button
                                    type="button"
                                    class="modal__close"
                                    title="Close"
                                    on:click=move |_| on_close.run(())
                                >
                                    "✕"
                                </button>
                            })}
                        </div>
                    })}
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
