//! Online training solution page.

use leptos::prelude::*;

use crate::components::card_banner::{CardBanner, CardItem};
use crate::components::feature_grid::{Feature, FeatureGrid, FeatureList};
use crate::components::hero::{Hero, HeroStyle, ImagePosition};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{ButtonSize, ButtonVariant, CallToAction};

const ADVANTAGES: [Feature; 3] = [
    Feature { icon: "⏰", title: "Flexible Scheduling", text: "Learn at your own pace with 24/7 access to training materials." },
    Feature { icon: "💰", title: "Cost Effective", text: "Reduce travel costs and time away from work with online training." },
    Feature { icon: "📱", title: "Mobile Learning", text: "Access training anywhere, anytime on any device." },
];

const PLATFORM: [CardItem; 3] = [
    CardItem {
        image: "/images/VideoAssessment.png",
        image_caption: None,
        title: "Learning Management System",
        description: "Advanced LMS platform with comprehensive course management, progress tracking, and analytics.",
        cta: CallToAction::new("Explore LMS", "/lms"),
    },
    CardItem {
        image: "/images/MobileLearning.jpg",
        image_caption: None,
        title: "Mobile-First Design",
        description: "Responsive content that works seamlessly across all devices and screen sizes.",
        cta: CallToAction::new("Learn More", "/mobile").variant(ButtonVariant::Secondary),
    },
    CardItem {
        image: "/images/digitalProduct.png",
        image_caption: None,
        title: "Advanced Analytics",
        description: "Comprehensive reporting and insights to measure training effectiveness and ROI.",
        cta: CallToAction::new("View Demo", "/analytics").variant(ButtonVariant::Outline),
    },
];

const KEY_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎓",
        title: "Course Creation",
        text: "Easy-to-use tools for creating engaging, interactive courses with multimedia content.",
    },
    Feature {
        icon: "👥",
        title: "User Management",
        text: "Comprehensive user management with role-based access and permissions.",
    },
    Feature {
        icon: "📊",
        title: "Progress Tracking",
        text: "Monitor learner progress with detailed analytics and reporting tools.",
    },
    Feature {
        icon: "🔒",
        title: "Security & Compliance",
        text: "Enterprise-grade security with compliance tracking for regulated industries.",
    },
];

#[component]
pub fn OnlineTrainingPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Hero
                style=HeroStyle::Transparent
                title="Online Training Solutions"
                subtitle="Scalable learning experiences that drive results"
                description="Our robust online training hosting solutions provide scalable, accessible learning experiences for organizations of all sizes. We offer advanced LMS platforms, mobile-responsive content, progress tracking, and comprehensive analytics to optimize your training outcomes."
                button=CallToAction::new("Schedule a Consultation", "/schedule-meeting").size(ButtonSize::Lg)
                image="/images/online-training.jpg"
                image_alt="Online training platform"
                image_position=ImagePosition::Bottom
            />
            <FeatureGrid
                title="Why Choose Online Training?"
                subtitle="Discover the advantages of digital learning that adapts to your organization's needs and schedule."
                features=&ADVANTAGES
            />
            <CardBanner
                header="Our Online Training Platform"
                subheader="Envesti Solutions provides a comprehensive suite of online training tools designed to enhance learning outcomes and streamline your training processes."
                cards=&PLATFORM
            />
            <FeatureList
                title="Key Features"
                subtitle="Everything you need to deliver effective online training experiences."
                features=&KEY_FEATURES
            />
        </MarketingLayout>
    }
}
