//! Locale formatting capability.
//!
//! The engine never formats dates itself; every label in a [`crate::RenderView`]
//! comes from a [`LocaleFormatter`]. [`EnglishFormatter`] is the default.

use chrono::Datelike;

use crate::calendar::{CalendarDay, TimeSlot};

pub trait LocaleFormatter {
    /// Month and year header for the window, e.g. "January 2024".
    fn month_label(&self, day: CalendarDay) -> String;

    /// Day of month shown in a column header, e.g. "10".
    fn day_number(&self, day: CalendarDay) -> String {
        day.date().day().to_string()
    }

    /// Weekday name shown in a column header, e.g. "Wednesday".
    fn weekday_label(&self, day: CalendarDay) -> String;

    /// Time of day shown on a slot, e.g. "09:00".
    fn time_label(&self, slot: TimeSlot) -> String;

    /// Full date shown on the empty-state link, e.g. "Monday, 15 January 2024".
    fn long_date_label(&self, slot: TimeSlot) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFormatter;

impl LocaleFormatter for EnglishFormatter {
    fn month_label(&self, day: CalendarDay) -> String {
        day.date().format("%B %Y").to_string()
    }

    fn weekday_label(&self, day: CalendarDay) -> String {
        day.date().format("%A").to_string()
    }

    fn time_label(&self, slot: TimeSlot) -> String {
        slot.at().format("%H:%M").to_string()
    }

    fn long_date_label(&self, slot: TimeSlot) -> String {
        slot.at().format("%A, %d %B %Y").to_string()
    }
}
