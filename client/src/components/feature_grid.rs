//! Icon + title + text tiles used across the marketing pages.

use leptos::prelude::*;

use crate::components::ui::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::ui::cn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[component]
pub fn FeatureGrid(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    features: &'static [Feature],
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <section class=cn(&["section", &class])>
            <div class="section__inner">
                {(title.is_some() || subtitle.is_some()).then(|| view! {
                    <div class="section__header">
                        {title.map(|t| view! { <h2 class="section__title">{t}</h2> })}
                        {subtitle.map(|s| view! { <p class="section__subtitle">{s}</p> })}
                    </div>
                })}
                <div class="card-grid">
                    {features
                        .iter()
                        .map(|feature| {
                            view! {
                                <Card class="feature">
                                    <CardHeader>
                                        <span class="feature__icon">{feature.icon}</span>
                                        <CardTitle>{feature.title}</CardTitle>
                                    </CardHeader>
                                    <CardContent>
                                        <CardDescription>{feature.text}</CardDescription>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Two-column icon list on a tinted band. Features split evenly between the
/// columns, the left column taking the extra one.
#[component]
pub fn FeatureList(title: &'static str, subtitle: &'static str, features: &'static [Feature]) -> impl IntoView {
    let (left, right) = features.split_at(features.len().div_ceil(2));
    let column = |items: &'static [Feature]| {
        view! {
            <div class="feature-list__column">
                {items
                    .iter()
                    .map(|feature| view! {
                        <div class="feature-list__item">
                            <div class="feature-list__icon">{feature.icon}</div>
                            <div>
                                <h3 class="feature-list__title">{feature.title}</h3>
                                <p class="feature-list__text">{feature.text}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <section class="section section--tinted">
            <div class="section__inner">
                <div class="section__header">
                    <h2 class="section__title">{title}</h2>
                    <p class="section__subtitle">{subtitle}</p>
                </div>
                <div class="feature-list">{column(left)} {column(right)}</div>
            </div>
        </section>
    }
}
