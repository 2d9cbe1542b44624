//! Section header plus a grid of call-to-action cards.

use leptos::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::components::ui::button::{CallToAction, CtaButton};
use crate::components::ui::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::ui::cn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardItem {
    pub image: &'static str,
    pub image_caption: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub cta: CallToAction,
}

#[component]
pub fn CardBanner(
    header: &'static str,
    subheader: &'static str,
    cards: &'static [CardItem],
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <section class=cn(&["section", &class])>
            <div class="section__inner">
                <div class="section__header">
                    <h2 class="section__title">{header}</h2>
                    <p class="section__subtitle">
                        <HighlightedText text=subheader />
                    </p>
                </div>
                <div class="card-grid">
                    {cards
                        .iter()
                        .map(|card| {
                            view! {
                                <Card class="card--interactive">
                                    <CardHeader>
                                        <div class="card__media">
                                            <img src=card.image alt=card.title />
                                        </div>
                                        {card.image_caption.map(|c| view! { <p class="card__caption">{c}</p> })}
                                        <CardTitle>{card.title}</CardTitle>
                                    </CardHeader>
                                    <CardContent>
                                        <CardDescription>{card.description}</CardDescription>
                                    </CardContent>
                                    <CardFooter>
                                        <CtaButton cta=card.cta class="w-full" />
                                    </CardFooter>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
