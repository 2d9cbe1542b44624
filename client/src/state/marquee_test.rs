use super::*;

#[test]
fn strip_repeats_images_once() {
    assert_eq!(looped_strip(&["A", "B", "C"]), ["A", "B", "C", "A", "B", "C"]);
    assert!(looped_strip::<&str>(&[]).is_empty());
}

#[test]
fn step_moves_left_by_speed_per_frame() {
    let mut marquee = Marquee::new(60.0);
    assert!((marquee.step(10_000.0) + 1.0).abs() < f64::EPSILON);
    assert!((marquee.step(10_000.0) + 2.0).abs() < f64::EPSILON);
}

#[test]
fn offset_resets_at_half_track_width() {
    let mut marquee = Marquee::new(60.0);
    marquee.offset = -49.5;
    assert!((marquee.step(100.0)).abs() < f64::EPSILON);
}

#[test]
fn offset_keeps_going_before_half_width() {
    let mut marquee = Marquee::new(60.0);
    marquee.offset = -40.0;
    assert!((marquee.step(100.0) + 41.0).abs() < f64::EPSILON);
}

#[test]
fn transform_renders_pixels() {
    assert_eq!(transform(-12.5), "translateX(-12.5px)");
    assert_eq!(transform(0.0), "translateX(0px)");
}
