//! Instructional design solution page.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid, FeatureList};
use crate::components::hero::{Hero, HeroStyle, ImagePosition};
use crate::components::highlight_card::{HighlightCard, HighlightItem};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{ButtonSize, ButtonVariant, CallToAction};

const PROCESS: [Feature; 4] = [
    Feature {
        icon: "🔍",
        title: "Analysis",
        text: "Understanding learner needs, goals, and context to inform design decisions.",
    },
    Feature {
        icon: "📝",
        title: "Design",
        text: "Creating learning objectives, content structure, and assessment strategies.",
    },
    Feature {
        icon: "🛠️",
        title: "Development",
        text: "Building engaging content, interactive elements, and multimedia resources.",
    },
    Feature {
        icon: "✅",
        title: "Evaluation",
        text: "Testing effectiveness and gathering feedback for continuous improvement.",
    },
];

const EXPERTISE: [HighlightItem; 3] = [
    HighlightItem {
        text: "Learning Theory Integration",
        description: Some("Based on proven educational research."),
        detailed_description: "Our instructional design is grounded in established learning theories including constructivism, cognitive load theory, and adult learning principles. We create experiences that align with how people naturally learn and retain information, ensuring maximum effectiveness and engagement.",
        image: "/images/engaging-curriculum.png",
        image_alt: None,
        button: CallToAction::new("Learn More", "/design/theory"),
    },
    HighlightItem {
        text: "Interactive Content Creation",
        description: Some("Engaging multimedia and interactive elements."),
        detailed_description: "We develop rich, interactive content that goes beyond static text and images. Our designs include simulations, branching scenarios, gamified elements, and multimedia resources that actively engage learners and promote deeper understanding and retention.",
        image: "/images/online-training.jpg",
        image_alt: None,
        button: CallToAction::new("View Examples", "/design/interactive").variant(ButtonVariant::Secondary),
    },
    HighlightItem {
        text: "Assessment & Evaluation",
        description: Some("Comprehensive measurement of learning outcomes."),
        detailed_description: "Our instructional design includes robust assessment strategies that measure not just knowledge acquisition, but also skill application and behavioral change. We create evaluation tools that provide actionable insights for both learners and organizations.",
        image: "/images/VideoAssessment.png",
        image_alt: None,
        button: CallToAction::new("Explore Tools", "/design/assessment").variant(ButtonVariant::Outline),
    },
];

const PRINCIPLES: [Feature; 4] = [
    Feature {
        icon: "🎯",
        title: "Learner-Centered Design",
        text: "Every design decision is made with the learner's needs, preferences, and context in mind.",
    },
    Feature {
        icon: "🔄",
        title: "Iterative Development",
        text: "Continuous testing and refinement based on learner feedback and performance data.",
    },
    Feature {
        icon: "📱",
        title: "Multi-Platform Compatibility",
        text: "Designs that work seamlessly across desktop, tablet, and mobile devices.",
    },
    Feature {
        icon: "📊",
        title: "Data-Driven Decisions",
        text: "Using analytics and learner data to continuously improve learning experiences.",
    },
];

#[component]
pub fn InstructionDesignPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Hero
                style=HeroStyle::Transparent
                title="Instructional Design Solutions"
                subtitle="Creating engaging learning experiences that drive results"
                description="Our instructional design expertise transforms complex information into engaging, effective learning experiences. We combine proven learning theories with modern design principles to create training programs that maximize retention and application."
                button=CallToAction::new("Get Started", "/schedule-meeting").size(ButtonSize::Lg)
                image="/images/instruction-design.jpg"
                image_alt="Instructional design process"
                image_position=ImagePosition::Bottom
            />
            <FeatureGrid
                title="Our Instructional Design Process"
                subtitle="A systematic approach to creating effective learning experiences that engage and educate."
                features=&PROCESS
                class="section--four-up"
            />
            <HighlightCard
                header="Instructional Design Expertise"
                subheader="Discover how our design process creates engaging learning experiences that drive real results"
                highlights=&EXPERTISE
            />
            <FeatureList
                title="Design Principles We Follow"
                subtitle="Core principles that guide our instructional design approach and ensure learning effectiveness."
                features=&PRINCIPLES
            />
        </MarketingLayout>
    }
}
