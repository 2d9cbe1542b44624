use super::*;

#[test]
fn escape_closes_only_while_open() {
    assert!(closes_on_key(true, "Escape"));
    assert!(!closes_on_key(false, "Escape"));
    assert!(!closes_on_key(true, "Enter"));
}

#[test]
fn one_escape_press_closes_once() {
    let mut open = true;
    let mut closes = 0;
    for key in ["Escape", "Escape"] {
        if closes_on_key(open, key) {
            closes += 1;
            open = false;
        }
    }
    assert_eq!(closes, 1);
}

#[test]
fn default_size_is_md() {
    assert_eq!(ModalSize::default(), ModalSize::Md);
    assert!(ModalSize::default().class().ends_with("--md"));
    assert!(ModalSize::Full.class().ends_with("--full"));
}

#[test]
fn backdrop_click_closes() {
    assert!(closes_on_click(true, true));
}

#[test]
fn click_inside_content_does_not_close() {
    assert!(!closes_on_click(true, false));
}

#[test]
fn click_on_closed_modal_is_ignored() {
    assert!(!closes_on_click(false, true));
}
