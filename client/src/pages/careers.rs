//! Open positions and benefits.

use leptos::prelude::*;

use crate::components::feature_grid::{Feature, FeatureGrid};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::components::ui::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

struct JobOpening {
    title: &'static str,
    department: &'static str,
    location: &'static str,
    kind: &'static str,
    experience: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
}

const OPENINGS: [JobOpening; 3] = [
    JobOpening {
        title: "Senior Instructional Designer",
        department: "Learning & Development",
        location: "Remote / Hybrid",
        kind: "Full-time",
        experience: "5+ years",
        description: "Design and develop engaging learning experiences for corporate clients. Create innovative instructional strategies and multimedia content.",
        requirements: &[
            "Master's degree in Instructional Design, Education, or related field",
            "Experience with e-learning authoring tools (Articulate, Captivate)",
            "Strong understanding of adult learning principles",
            "Portfolio of successful learning projects",
        ],
    },
    JobOpening {
        title: "Learning Technology Specialist",
        department: "Technology",
        location: "Remote",
        kind: "Full-time",
        experience: "3+ years",
        description: "Implement and optimize learning management systems. Provide technical support and training for digital learning platforms.",
        requirements: &[
            "Bachelor's degree in Computer Science or related field",
            "Experience with LMS platforms (Canvas, Blackboard, Moodle)",
            "Knowledge of SCORM, xAPI, and learning standards",
            "Strong troubleshooting and customer service skills",
        ],
    },
    JobOpening {
        title: "Corporate Trainer",
        department: "Training Delivery",
        location: "On-site / Travel Required",
        kind: "Full-time",
        experience: "2+ years",
        description: "Deliver engaging in-person and virtual training sessions. Customize training content for diverse corporate audiences.",
        requirements: &[
            "Bachelor's degree in Business, Communication, or related field",
            "Excellent presentation and facilitation skills",
            "Experience in corporate training or adult education",
            "Willingness to travel up to 50%",
        ],
    },
];

const BENEFITS: [Feature; 4] = [
    Feature {
        icon: "🩺",
        title: "Health & Wellness",
        text: "Comprehensive health insurance, dental, vision, and wellness programs",
    },
    Feature {
        icon: "📈",
        title: "Professional Development",
        text: "Continuous learning opportunities, conference attendance, and certification support",
    },
    Feature { icon: "⚖️", title: "Work-Life Balance", text: "Flexible work arrangements, generous PTO, and mental health days" },
    Feature {
        icon: "🎉",
        title: "Team Culture",
        text: "Collaborative environment, team building events, and recognition programs",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Submit Application", "Complete our online application form with your resume and cover letter"),
    ("Interview Process", "Meet with our team through phone, video, and in-person interviews"),
    ("Join the Team", "Welcome aboard! We'll help you get started and integrated"),
];

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <section class="page-hero">
                <h1 class="page-hero__title">"Join Our Team"</h1>
                <p class="page-hero__subtitle">
                    "Help us transform the future of corporate learning and development. We're looking for passionate individuals who want to make a difference."
                </p>
                <LinkButton href="#openings" variant=ButtonVariant::GradientHorizontal size=ButtonSize::Lg>
                    "View Open Positions"
                </LinkButton>
            </section>

            <FeatureGrid
                title="Why Work With Us?"
                subtitle="We're building a culture of innovation, collaboration, and continuous learning"
                features=&BENEFITS
            />

            <section class="section" id="openings">
                <div class="section__inner">
                    <div class="section__header">
                        <h2 class="section__title">"Current Openings"</h2>
                        <p class="section__subtitle">"Explore opportunities to join our growing team"</p>
                    </div>
                    <div class="job-list">
                        {OPENINGS
                            .iter()
                            .map(|job| view! {
                                <Card class="job">
                                    <CardHeader class="job__header">
                                        <div>
                                            <CardTitle>{job.title}</CardTitle>
                                            <CardDescription>
                                                {format!("{} • {} • {}", job.department, job.location, job.kind)}
                                            </CardDescription>
                                        </div>
                                        <div class="job__badges">
                                            <Badge>{job.experience}</Badge>
                                            <Badge outline=true>{job.kind}</Badge>
                                        </div>
                                    </CardHeader>
                                    <CardContent>
                                        <p class="job__description">{job.description}</p>
                                        <h4 class="job__requirements-title">"Requirements:"</h4>
                                        <ul class="job__requirements">
                                            {job.requirements.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                                        </ul>
                                        <Button variant=ButtonVariant::GradientHorizontal class="job__apply">"Apply Now"</Button>
                                    </CardContent>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section__inner">
                    <div class="section__header">
                        <h2 class="section__title">"How to Apply"</h2>
                        <p class="section__subtitle">"Our simple and transparent application process"</p>
                    </div>
                    <div class="steps">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| view! {
                                <div class="steps__item">
                                    <div class="steps__number">{i + 1}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta-band">
                <h2>"Ready to Make a Difference?"</h2>
                <p>
                    "If you don't see a position that fits your skills, we'd still love to hear from you. Send us your resume and let's discuss how you can contribute to our mission."
                </p>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Lg>"Send General Application"</Button>
            </section>
        </MarketingLayout>
    }
}
