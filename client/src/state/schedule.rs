//! Consultation booking: month calendar, time slots, and contact form.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, util::days_in_year_month};

pub const TIME_SLOTS: [&str; 8] =
    ["9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM"];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_TITLE: &[FormatItem<'static>] = format_description!("[month repr:long] [year]");
const APPOINTMENT: &[FormatItem<'static>] =
    format_description!("[weekday repr:long], [month repr:long] [day padding:none], [year]");

/// One day button in the calendar grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub is_today: bool,
    pub is_past: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn class(&self) -> &'static str {
        if self.is_past {
            "calendar__day calendar__day--past"
        } else if self.is_today {
            "calendar__day calendar__day--today"
        } else if self.is_selected {
            "calendar__day calendar__day--selected"
        } else {
            "calendar__day"
        }
    }
}

/// The month containing `today`, laid out Sunday-first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthCalendar {
    pub title: String,
    /// Empty cells before the 1st.
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

pub fn month_calendar(today: Date, selected: Option<Date>) -> MonthCalendar {
    let year = today.year();
    let month = today.month();
    let leading_blanks = today.replace_day(1).map_or(0, |first| first.weekday().number_days_from_sunday());
    let days = (1..=days_in_year_month(year, month))
        .filter_map(|day| Date::from_calendar_date(year, month, day).ok())
        .map(|date| DayCell { date, is_today: date == today, is_past: date < today, is_selected: Some(date) == selected })
        .collect();
    MonthCalendar { title: today.format(MONTH_TITLE).unwrap_or_default(), leading_blanks, days }
}

/// The local calendar date in the browser, UTC on the server.
#[cfg(feature = "hydrate")]
pub fn today() -> Date {
    let now = js_sys::Date::new_0();
    let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
    let day = u8::try_from(now.get_date()).ok();
    let year = i32::try_from(now.get_full_year()).ok();
    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN),
        _ => Date::MIN,
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

/// "Friday, October 16, 2026".
pub fn appointment_label(date: Date) -> String {
    date.format(APPOINTMENT).unwrap_or_default()
}

/// Contact fields on the booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Message,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleState {
    pub selected_date: Option<Date>,
    pub selected_time: Option<&'static str>,
    pub form: ContactForm,
}

impl ScheduleState {
    /// Pick a day; past days are ignored.
    pub fn select_date(&mut self, cell: &DayCell) {
        if !cell.is_past {
            self.selected_date = Some(cell.date);
        }
    }

    pub fn select_time(&mut self, slot: &'static str) {
        self.selected_time = Some(slot);
    }

    pub fn can_submit(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    pub fn has_selection(&self) -> bool {
        self.selected_date.is_some() || self.selected_time.is_some()
    }

    /// Take the booking if complete and reset everything.
    pub fn submit(&mut self) -> Option<(Date, &'static str, ContactForm)> {
        let date = self.selected_date?;
        let time = self.selected_time?;
        let form = std::mem::take(&mut self.form);
        self.selected_date = None;
        self.selected_time = None;
        Some((date, time, form))
    }
}
