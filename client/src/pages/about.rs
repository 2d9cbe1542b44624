//! Company history, values, and services.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};
use crate::components::hero::{Hero, HeroStyle, ImagePosition};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::button::{ButtonSize, ButtonVariant, CallToAction, LinkButton};

const STORY: [(&str, &str); 3] = [
    (
        "Humble Beginnings",
        "Envesti Solutions was founded with a clear mission: to help foster care agencies maintain compliance with state regulators through effective training programs. We recognized that child care workers needed accessible, high-quality training to ensure the safety and well-being of children in their care.",
    ),
    (
        "Growth & Evolution",
        "As we successfully served the foster care community, we discovered that organizations across various industries faced similar challenges. They needed reliable, engaging training solutions that could adapt to their unique needs while maintaining the highest standards of quality and compliance.",
    ),
    (
        "Comprehensive Solutions",
        "Today, Envesti Solutions offers a full spectrum of training services, from professional development and leadership training to specialized courses like CPR certification. Our commitment to excellence and innovation has made us a trusted partner for organizations of all sizes.",
    ),
];

const VALUES: [Feature; 6] = [
    Feature {
        icon: "🎯",
        title: "Excellence",
        text: "We maintain the highest standards in all our training programs, ensuring quality and effectiveness in every course we deliver.",
    },
    Feature {
        icon: "🤝",
        title: "Partnership",
        text: "We work closely with our clients to understand their unique needs and develop customized training solutions that drive real results.",
    },
    Feature {
        icon: "💡",
        title: "Innovation",
        text: "We continuously evolve our training methods and technologies to provide cutting-edge learning experiences that engage and inspire.",
    },
    Feature {
        icon: "🛡️",
        title: "Compliance",
        text: "We understand the critical importance of regulatory compliance and ensure all our training programs meet or exceed industry standards.",
    },
    Feature {
        icon: "❤️",
        title: "Care",
        text: "We care deeply about the impact of our training on individuals, organizations, and the communities they serve.",
    },
    Feature {
        icon: "🌍",
        title: "Accessibility",
        text: "We believe quality training should be accessible to all organizations, regardless of size or industry.",
    },
];

const SERVICES: [Feature; 4] = [
    Feature {
        icon: "🏠",
        title: "Foster Care & Child Care Training",
        text: "Our foundation in foster care training continues to be a core service, helping agencies maintain compliance with state regulations and provide the best care for children.",
    },
    Feature {
        icon: "💼",
        title: "Professional Development",
        text: "Leadership training, communication skills, project management, and other essential professional skills that help organizations and individuals grow.",
    },
    Feature {
        icon: "🆘",
        title: "Safety & Certification",
        text: "CPR certification, workplace safety training, and other critical safety programs that protect employees and ensure regulatory compliance.",
    },
    Feature {
        icon: "🏥",
        title: "Industry-Specific Training",
        text: "Specialized training programs tailored to healthcare, education, non-profits, and other industries with unique compliance and training needs.",
    },
];

const STATS: [(&str, &str, &str); 4] = [
    ("📚", "100+", "Training Courses"),
    ("👥", "500+", "Organizations Served"),
    ("🌟", "10+", "Years Experience"),
    ("🎯", "50+", "Industries Supported"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Hero
                style=HeroStyle::GradientHorizontal
                title="About Envesti Solutions"
                subtitle="Empowering organizations through innovative training solutions"
                description="From our humble beginnings serving foster care agencies to becoming a comprehensive training partner for organizations nationwide, Envesti Solutions has been dedicated to excellence in professional development and compliance training."
                button=CallToAction::new("Our Services", "/in-person").variant(ButtonVariant::Secondary).size(ButtonSize::Lg)
                image="/images/in-person-hero.jpg"
                image_alt="Envesti Solutions team"
                image_position=ImagePosition::Right
            />

            <section class="section">
                <div class="section__inner">
                    <div class="section__header">
                        <h2 class="section__title">"Our Story"</h2>
                        <p class="section__subtitle">"A journey from specialized training to comprehensive learning solutions"</p>
                    </div>
                    <div class="story">
                        <div class="story__chapters">
                            {STORY
                                .iter()
                                .map(|(title, text)| view! {
                                    <div class="story__chapter">
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <div class="story__badge">
                            <div class="story__badge-icon">"🌱"</div>
                            <h4>"Growing Together"</h4>
                            <p>"From foster care training to comprehensive learning solutions"</p>
                        </div>
                    </div>
                </div>
            </section>

            <FeatureGrid title="Mission & Values" subtitle="The principles that guide everything we do" features=&VALUES />

            <FeatureGrid
                title="What We Do"
                subtitle="Comprehensive training solutions for every organization"
                features=&SERVICES
            />

            <section class="section">
                <div class="stats">
                    {STATS
                        .iter()
                        .map(|(icon, value, label)| view! {
                            <div class="stats__item">
                                <div class="stats__icon">{*icon}</div>
                                <h4 class="stats__value">{*value}</h4>
                                <p class="stats__label">{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-band">
                <h2>"Ready to Transform Your Training?"</h2>
                <p>"Join hundreds of organizations that trust Envesti Solutions for their training and compliance needs."</p>
                <div class="cta-band__actions">
                    <LinkButton href="/in-person" variant=ButtonVariant::GradientHorizontal size=ButtonSize::Lg>
                        "Explore Our Solutions"
                    </LinkButton>
                    <LinkButton href="/schedule-meeting" variant=ButtonVariant::Outline size=ButtonSize::Lg>
                        "Get in Touch"
                    </LinkButton>
                </div>
            </section>
        </MarketingLayout>
    }
}
