//! In-person training solution page.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};
use crate::components::hero::{Hero, HeroStyle, ImagePosition};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{ButtonSize, CallToAction};

const BENEFITS: [Feature; 3] = [
    Feature {
        icon: "🎯",
        title: "Personalized Attention",
        text: "Get direct feedback and personalized guidance from expert instructors.",
    },
    Feature {
        icon: "🤝",
        title: "Team Collaboration",
        text: "Foster team building and collaboration through interactive group activities.",
    },
    Feature {
        icon: "📚",
        title: "Hands-On Practice",
        text: "Apply knowledge immediately through practical exercises and real scenarios.",
    },
];

#[component]
pub fn InPersonPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Hero
                style=HeroStyle::Transparent
                title="In-Person Training Solutions"
                subtitle="Expert-led training sessions that transform your organization"
                description="Our in-person training programs provide hands-on learning experiences with certified instructors. We deliver customized curriculum development, interactive workshops, and real-world application exercises tailored to your industry and organizational needs."
                button=CallToAction::new("Schedule Training", "/schedule-meeting").size(ButtonSize::Lg)
                image="/images/in-person-hero.jpg"
                image_alt="In-person training session"
                image_position=ImagePosition::Bottom
            />
            <FeatureGrid
                title="Why Choose In-Person Training?"
                subtitle="Discover the benefits of face-to-face learning experiences that drive real change in your organization."
                features=&BENEFITS
            />
        </MarketingLayout>
    }
}
