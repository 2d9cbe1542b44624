use super::*;

#[test]
fn first_entry_is_selected_by_default() {
    let selection = HighlightSelection::new(3);
    assert_eq!(selection.current(), Some(0));
    assert!(selection.is_active(0));
}

#[test]
fn selecting_an_entry_shows_exactly_that_entry() {
    let mut selection = HighlightSelection::new(3);
    for i in 0..3 {
        selection.select(i);
        assert_eq!(selection.current(), Some(i));
        assert_eq!((0..3).filter(|&j| selection.is_active(j)).count(), 1);
    }
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut selection = HighlightSelection::new(2);
    selection.select(1);
    selection.select(5);
    assert_eq!(selection.current(), Some(1));
}

#[test]
fn empty_list_has_no_detail() {
    let selection = HighlightSelection::new(0);
    assert_eq!(selection.current(), None);
    assert!(!selection.is_active(0));
}
