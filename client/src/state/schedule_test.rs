use time::macros::date;

use super::*;

#[test]
fn calendar_lays_out_month_from_sunday() {
    // October 2026 starts on a Thursday.
    let calendar = month_calendar(date!(2026 - 10 - 16), None);
    assert_eq!(calendar.title, "October 2026");
    assert_eq!(calendar.leading_blanks, 4);
    assert_eq!(calendar.days.len(), 31);
    assert_eq!(calendar.days[0].day(), 1);
}

#[test]
fn past_today_and_selected_are_flagged() {
    let today = date!(2026 - 10 - 16);
    let calendar = month_calendar(today, Some(date!(2026 - 10 - 20)));
    assert!(calendar.days[14].is_past);
    assert!(calendar.days[15].is_today);
    assert!(!calendar.days[15].is_past);
    assert!(calendar.days[19].is_selected);
    assert_eq!(calendar.days[19].class(), "calendar__day calendar__day--selected");
}

#[test]
fn past_days_cannot_be_selected() {
    let calendar = month_calendar(date!(2026 - 10 - 16), None);
    let mut state = ScheduleState::default();
    state.select_date(&calendar.days[0]);
    assert_eq!(state.selected_date, None);
    state.select_date(&calendar.days[20]);
    assert_eq!(state.selected_date, Some(date!(2026 - 10 - 21)));
}

#[test]
fn submit_requires_date_and_time() {
    let calendar = month_calendar(date!(2026 - 10 - 16), None);
    let mut state = ScheduleState::default();
    assert!(!state.can_submit());
    state.select_time(TIME_SLOTS[0]);
    assert!(!state.can_submit());
    assert_eq!(state.submit(), None);
    state.select_date(&calendar.days[16]);
    state.form.first_name = "Ada".to_owned();
    assert!(state.can_submit());
    let (date, time, form) = state.submit().unwrap();
    assert_eq!(date, date!(2026 - 10 - 17));
    assert_eq!(time, "9:00 AM");
    assert_eq!(form.first_name, "Ada");
    assert_eq!(state, ScheduleState::default());
}

#[test]
fn eight_slots_from_nine_to_four() {
    assert_eq!(TIME_SLOTS.len(), 8);
    assert_eq!(TIME_SLOTS[0], "9:00 AM");
    assert_eq!(TIME_SLOTS[7], "4:00 PM");
}

#[test]
fn appointment_label_spells_out_weekday() {
    assert_eq!(appointment_label(date!(2026 - 10 - 16)), "Friday, October 16, 2026");
}

#[test]
fn contact_fields_read_back_what_was_set() {
    let mut form = ContactForm::default();
    form.set(ContactField::Email, "ada@example.com".to_owned());
    form.set(ContactField::Message, "CPR for 12 staff".to_owned());
    assert_eq!(form.get(ContactField::Email), "ada@example.com");
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.get(ContactField::Message), "CPR for 12 staff");
    assert_eq!(form.get(ContactField::Phone), "");
}
