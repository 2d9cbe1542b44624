//! Text with every occurrence of a phrase wrapped in a highlight span.

#[cfg(test)]
#[path = "highlighted_text_test.rs"]
mod highlighted_text_test;

use leptos::prelude::*;

/// Brand name highlighted across marketing copy.
pub const BRAND: &str = "Envesti Solutions";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

/// Split `text` around `phrase`, dropping empty plain pieces.
pub fn split_highlight<'a>(text: &'a str, phrase: &'a str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    if phrase.is_empty() {
        if !text.is_empty() {
            segments.push(Segment::Plain(text));
        }
        return segments;
    }
    let mut parts = text.split(phrase).peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            segments.push(Segment::Plain(part));
        }
        if parts.peek().is_some() {
            segments.push(Segment::Highlight(phrase));
        }
    }
    segments
}

#[component]
pub fn HighlightedText(
    text: &'static str,
    #[prop(optional)] phrase: Option<&'static str>,
    /// Inline color for the highlight; the stylesheet green otherwise.
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    split_highlight(text, phrase.unwrap_or(BRAND))
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(part) => view! { <span>{part}</span> }.into_any(),
            Segment::Highlight(part) => view! {
                <span class="brand-highlight" style=color.map(|c| format!("color: {c}"))>
                    {part}
                </span>
            }
            .into_any(),
        })
        .collect_view()
}
