use super::*;

#[test]
fn brand_is_split_out_of_surrounding_text() {
    assert_eq!(split_highlight("Why choose Envesti Solutions today", BRAND), vec![
        Segment::Plain("Why choose "),
        Segment::Highlight(BRAND),
        Segment::Plain(" today"),
    ]);
}

#[test]
fn leading_and_repeated_phrases() {
    assert_eq!(split_highlight("Envesti Solutions and Envesti Solutions", BRAND), vec![
        Segment::Highlight(BRAND),
        Segment::Plain(" and "),
        Segment::Highlight(BRAND),
    ]);
}

#[test]
fn text_without_phrase_stays_plain() {
    assert_eq!(split_highlight("Trusted partners", BRAND), vec![Segment::Plain("Trusted partners")]);
    assert_eq!(split_highlight("", BRAND), Vec::<Segment<'_>>::new());
    assert_eq!(split_highlight("abc", ""), vec![Segment::Plain("abc")]);
}
