//! Selectable highlight list with a detail card for the chosen entry.

use leptos::prelude::*;

use crate::components::ui::button::{CallToAction, CtaButton};
use crate::components::ui::card::{Card, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::ui::cn;
use crate::state::highlight::HighlightSelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightItem {
    pub text: &'static str,
    pub description: Option<&'static str>,
    pub detailed_description: &'static str,
    pub image: &'static str,
    pub image_alt: Option<&'static str>,
    pub button: CallToAction,
}

#[component]
pub fn HighlightCard(
    header: &'static str,
    subheader: &'static str,
    highlights: &'static [HighlightItem],
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let selection = RwSignal::new(HighlightSelection::new(highlights.len()));
    let selected = move || selection.get().current().and_then(|i| highlights.get(i));

    let entries = move || {
        highlights
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let active = move || selection.get().is_active(index);
                view! {
                    <button
                        type="button"
                        class=move || cn(&["highlight__entry", if active() { "highlight__entry--active" } else { "" }])
                        on:click=move |_| selection.update(|s| s.select(index))
                    >
                        <span class=move || {
                            if active() { "highlight__check highlight__check--active" } else { "highlight__check" }
                        }>"✔"</span>
                        <span class="highlight__entry-text">
                            <span class="highlight__entry-title">{item.text}</span>
                            {item.description.map(|d| view! { <span class="highlight__entry-description">{d}</span> })}
                        </span>
                    </button>
                }
            })
            .collect_view()
    };

    let detail = move || {
        selected().map(|item| {
            view! {
                <Card class="highlight__detail">
                    <div class="card__media">
                        <img src=item.image alt=item.image_alt.unwrap_or(item.text) />
                    </div>
                    <CardHeader>
                        <CardTitle>{item.text}</CardTitle>
                        <CardDescription>{item.detailed_description}</CardDescription>
                    </CardHeader>
                    <CardFooter>
                        <CtaButton cta=item.button class="w-full" />
                    </CardFooter>
                </Card>
            }
        })
    };

    view! {
        <section class=cn(&["section", &class])>
            <div class="section__inner highlight">
                <div class="highlight__list">
                    <div class="highlight__header">
                        <h2 class="section__title">{header}</h2>
                        <p class="section__subtitle">{subheader}</p>
                    </div>
                    <h3 class="highlight__mobile-prompt">"Select a Highlight"</h3>
                    {entries}
                </div>
                <div class="highlight__aside">{detail}</div>
            </div>
        </section>
    }
}
