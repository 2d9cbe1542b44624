//! Marketing hero block.
//!
//! DESIGN
//! ======
//! Layout and text tone are pure functions of the props (`hero_layout`,
//! `TextTone::for_style`) so ordering rules are testable without a DOM. The
//! component itself holds no state.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::ui::button::{CallToAction, CtaButton};
use crate::components::ui::cn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroStyle {
    SolidGreen,
    GradientHorizontal,
    GradientVertical,
    GradientVerticalReverse,
    BackgroundImage,
    Transparent,
    #[default]
    None,
}

impl HeroStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::SolidGreen => "hero--solid-green",
            Self::GradientHorizontal => "hero--gradient-horizontal",
            Self::GradientVertical => "hero--gradient-vertical",
            Self::GradientVerticalReverse => "hero--gradient-vertical-reverse",
            Self::BackgroundImage => "hero--background-image",
            Self::Transparent => "hero--transparent",
            Self::None => "",
        }
    }

    /// Colored backgrounds put list chips and dividers on a translucent
    /// white wash.
    pub fn is_tinted(self) -> bool {
        !matches!(self, Self::BackgroundImage | Self::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    Gradient,
    Light,
    Foreground,
}

impl TextTone {
    pub fn for_style(style: HeroStyle) -> Self {
        match style {
            HeroStyle::Transparent => Self::Gradient,
            HeroStyle::BackgroundImage | HeroStyle::None => Self::Foreground,
            _ => Self::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Gradient => "hero__text--gradient",
            Self::Light => "hero__text--light",
            Self::Foreground => "hero__text--foreground",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroSlot {
    Image,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroLayout {
    ContentOnly,
    Row,
    /// Image first in the DOM, shown after the content.
    RowReverse,
    ImageAbove,
    ImageBelow,
}

impl HeroLayout {
    /// Slots in DOM order.
    pub fn slots(self) -> &'static [HeroSlot] {
        match self {
            Self::ContentOnly => &[HeroSlot::Content],
            Self::Row | Self::RowReverse | Self::ImageAbove => &[HeroSlot::Image, HeroSlot::Content],
            Self::ImageBelow => &[HeroSlot::Content, HeroSlot::Image],
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::ContentOnly | Self::ImageAbove | Self::ImageBelow => "hero--column",
            Self::Row => "hero--row",
            Self::RowReverse => "hero--row-reverse",
        }
    }
}

pub fn hero_layout(has_image: bool, position: ImagePosition) -> HeroLayout {
    if !has_image {
        return HeroLayout::ContentOnly;
    }
    match position {
        ImagePosition::Left => HeroLayout::Row,
        ImagePosition::Right => HeroLayout::RowReverse,
        ImagePosition::Top => HeroLayout::ImageAbove,
        ImagePosition::Bottom => HeroLayout::ImageBelow,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroListItem {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy)]
struct HeroContent {
    title: Option<&'static str>,
    subtitle: Option<&'static str>,
    description: Option<&'static str>,
    list: &'static [HeroListItem],
    button: Option<CallToAction>,
    style: HeroStyle,
}

fn render_content(content: HeroContent) -> AnyView {
    let tone = TextTone::for_style(content.style);
    let tinted = content.style.is_tinted();
    view! {
        <div class="hero__content">
            {(content.title.is_some() || content.subtitle.is_some()).then(|| view! {
                <div class="hero__heading">
                    {content.title.map(|t| view! { <h1 class=cn(&["hero__title", tone.class()])>{t}</h1> })}
                    {content.subtitle.map(|s| view! { <p class=cn(&["hero__subtitle", tone.class()])>{s}</p> })}
                </div>
            })}
            {content.description.map(|d| view! {
                <div class=if tinted { "hero__divider hero__divider--tinted" } else { "hero__divider" }></div>
                <p class=cn(&["hero__description", tone.class()])>{d}</p>
            })}
            {(!content.list.is_empty()).then(|| view! {
                <div class="hero__list">
                    {content.list.iter().map(|item| view! {
                        <div class=if tinted { "hero__chip hero__chip--tinted" } else { "hero__chip" }>
                            {item.icon} " " {item.text}
                        </div>
                    }).collect_view()}
                </div>
            })}
            {content.button.map(|cta| view! { <CtaButton cta=cta class="hero__cta" /> })}
        </div>
    }
    .into_any()
}

#[component]
pub fn Hero(
    #[prop(optional)] image: Option<&'static str>,
    #[prop(optional)] image_alt: Option<&'static str>,
    #[prop(optional)] image_position: ImagePosition,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional)] list: &'static [HeroListItem],
    #[prop(optional)] button: Option<CallToAction>,
    #[prop(optional)] style: HeroStyle,
    #[prop(optional)] background_image: Option<&'static str>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let layout = hero_layout(image.is_some(), image_position);
    let content = HeroContent { title, subtitle, description, list, button, style };

    let backdrop = (style == HeroStyle::BackgroundImage)
        .then_some(background_image)
        .flatten()
        .map(|src| {
            view! {
                <div class="hero__backdrop">
                    <img src=src alt="Background" class="hero__backdrop-image" />
                    <div class="hero__backdrop-overlay"></div>
                </div>
            }
        });

    view! {
        <div class=cn(&["hero", layout.class(), style.class(), &class])>
            {backdrop}
            {layout
                .slots()
                .iter()
                .map(|slot| match slot {
                    HeroSlot::Image => view! {
                        <div class="hero__media">
                            <img src=image.unwrap_or_default() alt=image_alt.unwrap_or("Hero image") class="hero__image" />
                        </div>
                    }
                    .into_any(),
                    HeroSlot::Content => render_content(content),
                })
                .collect_view()}
        </div>
    }
}
