#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn locked_body_hides_overflow() {
    assert_eq!(overflow_value(true), "hidden");
    assert_eq!(overflow_value(false), "unset");
}

#[test]
fn set_locked_is_noop_but_callable() {
    set_locked(true);
    set_locked(false);
}
