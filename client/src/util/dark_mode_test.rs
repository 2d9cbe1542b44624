#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_is_light_outside_the_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn stored_values_parse_back() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
