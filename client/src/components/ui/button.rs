//! Buttons and button-styled links.

use leptos::prelude::*;

use super::cn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
    GradientHorizontal,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--default",
            Self::Secondary => "btn--secondary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Link => "btn--link",
            Self::Destructive => "btn--destructive",
            Self::GradientHorizontal => "btn--gradient",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Xl,
    Icon,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Sm => "btn--sm",
            Self::Lg => "btn--lg",
            Self::Xl => "btn--xl",
            Self::Icon => "btn--icon",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&["btn", variant.class(), size.class(), extra])
}

/// Link target rendered as a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub text: &'static str,
    pub href: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl CallToAction {
    pub const fn new(text: &'static str, href: &'static str) -> Self {
        Self { text, href, variant: ButtonVariant::Default, size: ButtonSize::Default }
    }

    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// `type` attribute; plain `button` unless set.
    #[prop(optional)]
    kind: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind.unwrap_or("button")
            class=button_class(variant, size, &class)
            title=title
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_class(variant, size, &class)>
            {children()}
        </a>
    }
}

/// Render a [`CallToAction`] as a link button.
#[component]
pub fn CtaButton(cta: CallToAction, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <LinkButton href=cta.href variant=cta.variant size=cta.size class=class>
            {cta.text}
        </LinkButton>
    }
}
