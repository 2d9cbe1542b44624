//! Continuously scrolling logo strip.
//!
//! SYSTEM CONTEXT
//! ==============
//! The strip renders the image list twice and slides left by `speed / 60`
//! pixels per frame, snapping back once half the track has scrolled past, so
//! the loop looks seamless.
//!
//! RESOURCE MODEL
//! ==============
//! The animation is a [`FrameLoop`](crate::util::frame_loop::FrameLoop) held
//! in a local `StoredValue`. Replacing the slot drops the previous loop, which
//! cancels its pending frame; `on_cleanup` empties the slot on unmount.

use leptos::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::components::ui::cn;
use crate::state::marquee::{ITEM_WIDTH_PX, looped_strip, transform};

pub const DEFAULT_HEADER_COLOR: &str = "#10b981";

#[component]
pub fn Carousel(
    #[prop(into)] images: Signal<Vec<&'static str>>,
    /// Pixels per second.
    #[prop(optional, into)]
    speed: MaybeProp<f64>,
    #[prop(optional)] header: Option<&'static str>,
    #[prop(optional)] subheader: Option<&'static str>,
    #[prop(optional)] header_color: Option<&'static str>,
    #[prop(optional)] variant: Option<&'static str>,
) -> impl IntoView {
    let track = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::marquee::{DEFAULT_SPEED, Marquee};
        use crate::util::frame_loop::{BrowserScheduler, FrameLoop};

        let running = StoredValue::new_local(None::<FrameLoop<BrowserScheduler>>);
        Effect::new(move |_| {
            let mut marquee = Marquee::new(speed.get().unwrap_or(DEFAULT_SPEED));
            images.track();
            let frame_loop = FrameLoop::start(BrowserScheduler::default(), move || {
                let Some(el) = track.get_untracked() else {
                    return;
                };
                let offset = marquee.step(f64::from(el.scroll_width()));
                let _ = el.style().set_property("transform", &transform(offset));
            });
            running.set_value(Some(frame_loop));
        });
        on_cleanup(move || running.set_value(None));
    }

    let variant_class = variant.map(|v| format!("carousel--{v}")).unwrap_or_default();
    let item_style = format!("width: {ITEM_WIDTH_PX}px");

    view! {
        <section class=cn(&["carousel", &variant_class])>
            {(header.is_some() || subheader.is_some()).then(|| view! {
                <div class="carousel__header">
                    {header.map(|h| view! { <h2 class="section__title">{h}</h2> })}
                    {subheader.map(|s| view! {
                        <p class="section__subtitle">
                            <HighlightedText text=s color=header_color.unwrap_or(DEFAULT_HEADER_COLOR) />
                        </p>
                    })}
                </div>
            })}
            <div class="carousel__viewport">
                <div class="carousel__fade carousel__fade--left"></div>
                <div class="carousel__fade carousel__fade--right"></div>
                <div class="carousel__track" node_ref=track style=format!("transform: {}", transform(0.0))>
                    {move || {
                        let item_style = item_style.clone();
                        looped_strip(&images.get())
                            .into_iter()
                            .map(|src| {
                                view! {
                                    <div class="carousel__item" style=item_style.clone()>
                                        <img src=src alt="Client logo" class="carousel__image" />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
