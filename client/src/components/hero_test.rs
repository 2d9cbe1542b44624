use super::*;

#[test]
fn no_image_renders_content_only_for_any_position() {
    for position in [ImagePosition::Left, ImagePosition::Right, ImagePosition::Top, ImagePosition::Bottom] {
        let layout = hero_layout(false, position);
        assert_eq!(layout, HeroLayout::ContentOnly);
        assert_eq!(layout.slots(), &[HeroSlot::Content]);
    }
}

#[test]
fn image_positions_order_slots() {
    assert_eq!(hero_layout(true, ImagePosition::Left).slots(), &[HeroSlot::Image, HeroSlot::Content]);
    assert_eq!(hero_layout(true, ImagePosition::Top).slots(), &[HeroSlot::Image, HeroSlot::Content]);
    assert_eq!(hero_layout(true, ImagePosition::Bottom).slots(), &[HeroSlot::Content, HeroSlot::Image]);
}

#[test]
fn right_is_default_and_reverses_the_row() {
    let layout = hero_layout(true, ImagePosition::default());
    assert_eq!(layout, HeroLayout::RowReverse);
    assert_eq!(layout.class(), "hero--row-reverse");
    assert_eq!(layout.slots(), &[HeroSlot::Image, HeroSlot::Content]);
}

#[test]
fn text_tone_follows_style() {
    assert_eq!(TextTone::for_style(HeroStyle::Transparent), TextTone::Gradient);
    assert_eq!(TextTone::for_style(HeroStyle::SolidGreen), TextTone::Light);
    assert_eq!(TextTone::for_style(HeroStyle::GradientVerticalReverse), TextTone::Light);
    assert_eq!(TextTone::for_style(HeroStyle::BackgroundImage), TextTone::Foreground);
    assert_eq!(TextTone::for_style(HeroStyle::None), TextTone::Foreground);
}

#[test]
fn transparent_still_counts_as_tinted() {
    assert!(HeroStyle::Transparent.is_tinted());
    assert!(!HeroStyle::BackgroundImage.is_tinted());
    assert!(!HeroStyle::None.is_tinted());
}
