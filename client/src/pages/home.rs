//! Landing page.

use leptos::prelude::*;

use crate::components::card_banner::{CardBanner, CardItem};
use crate::components::carousel::Carousel;
use crate::components::footer::Footer;
use crate::components::hero::{Hero, HeroListItem, HeroStyle, ImagePosition};
use crate::components::highlight_card::{HighlightCard, HighlightItem};
use crate::components::home_header::HomeHeader;
use crate::components::nav_menu::NavMenu;
use crate::components::ui::button::{ButtonVariant, CallToAction};

const GRADIENT: ButtonVariant = ButtonVariant::GradientHorizontal;

const CORE_SERVICES: [CardItem; 3] = [
    CardItem {
        image: "/images/in-person.jpg",
        image_caption: None,
        title: "In Person Training",
        description: "Comprehensive training programs designed to enhance skills and advance careers in your organization.",
        cta: CallToAction::new("Explore Programs", "/in-person").variant(GRADIENT),
    },
    CardItem {
        image: "/images/online-training.jpg",
        image_caption: None,
        title: "Online Training Hosting",
        description: "Streamlined onboarding processes that ensure new hires are productive from day one.",
        cta: CallToAction::new("Learn More", "/online-training").variant(GRADIENT),
    },
    CardItem {
        image: "/images/instruction-design.jpg",
        image_caption: None,
        title: "Instruction Design",
        description: "Custom training solutions tailored to your industry and organizational needs.",
        cta: CallToAction::new("Get Started", "/instruction-design").variant(GRADIENT),
    },
];

const INDUSTRIES: [HeroListItem; 6] = [
    HeroListItem { icon: "💡", text: "Foster Care Agencies" },
    HeroListItem { icon: "💡", text: "College and University" },
    HeroListItem { icon: "💡", text: "Non-Profits" },
    HeroListItem { icon: "💡", text: "Healthcare" },
    HeroListItem { icon: "💡", text: "Group Homes" },
    HeroListItem { icon: "💡", text: "Legal Services" },
];

const PLATFORM_TEXT: &str = "Our robust online training hosting solutions provide scalable, accessible learning experiences. We offer advanced LMS platforms, mobile-responsive content, progress tracking, and comprehensive analytics to optimize your training outcomes.";

const HIGHLIGHTS: [HighlightItem; 3] = [
    HighlightItem {
        text: "Engaging Curriculum",
        description: Some("Keep your learners focused and motivated."),
        detailed_description: "Our in-person training programs provide hands-on learning experiences with expert instructors. We offer customized curriculum development, interactive workshops, and real-world application exercises tailored to your industry and organizational needs.",
        image: "/images/engaging-curriculum.png",
        image_alt: None,
        button: CallToAction::new("Learn More", "/in-person").variant(GRADIENT),
    },
    HighlightItem {
        text: "Completely Customizable",
        description: Some("Designed for your unique needs and preferences."),
        detailed_description: PLATFORM_TEXT,
        image: "/images/online-training.jpg",
        image_alt: None,
        button: CallToAction::new("Explore Platform", "/online-training").variant(GRADIENT),
    },
    HighlightItem {
        text: "Promote A Culture of Learning",
        description: Some("Expand your organization's culture to include learning as a core value."),
        detailed_description: PLATFORM_TEXT,
        image: "/images/online-training.jpg",
        image_alt: None,
        button: CallToAction::new("Explore Platform", "/online-training").variant(GRADIENT),
    },
];

pub const CLIENT_LOGOS: [&str; 5] =
    ["/carousel/1.png", "/carousel/2.png", "/carousel/3.png", "/carousel/4.png", "/carousel/5.png"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="marketing marketing--home">
            <NavMenu />
            <div class="nav-spacer"></div>
            <HomeHeader
                background_image="/images/headerBackground.png"
                title="Elevate Onboarding & Professional Development with Envesti Solutions"
                subtitle="Create an engaging training environment for your learners."
                button=CallToAction::new("Learn More", "/about-us").variant(ButtonVariant::Secondary)
            />
            <div class="marketing__body">
                <div class="marketing__content">
                    <CardBanner
                        header="Our Core Services"
                        subheader="Envesti Solutions provides an entire suite of services to help organizations maintain compliance with state and federal regulations and provide training to their employees."
                        cards=&CORE_SERVICES
                    />
                    <Hero
                        style=HeroStyle::GradientHorizontal
                        title="Who We Are"
                        description="Envesti Solutions is an all-in-one training solution for organizations of all sizes. We provide in person and online training to maintain compliance standards for many different industries. Some of the industries we support include:"
                        list=&INDUSTRIES
                        button=CallToAction::new("Learn More", "/about-us").variant(GRADIENT)
                        image="/images/lightbulb.jpg"
                        image_alt="Lightbulb"
                        image_position=ImagePosition::Right
                    />
                    <Carousel
                        header="Organizations We've Worked With"
                        subheader="Envesti Solutions aims to bridge the gap between how employees are trained and how they perform on the job."
                        images=CLIENT_LOGOS.to_vec()
                        speed=60.0
                        variant="client-logos"
                    />
                    <HighlightCard
                        header="Transform Your Training"
                        subheader="Discover how Envesti Solutions can transform your training experience"
                        highlights=&HIGHLIGHTS
                    />
                    <Hero
                        style=HeroStyle::Transparent
                        title="Customizable Training"
                        description="We offer a wide range of training options to meet your unique needs. We can provide training for a single topic or a comprehensive training program for your organization."
                        image="/images/VideoAssessment.png"
                        image_alt="Video Assessment"
                        image_position=ImagePosition::Right
                        button=CallToAction::new("Learn More", "/online-training").variant(GRADIENT)
                    />
                </div>
                <Footer />
            </div>
        </main>
    }
}
