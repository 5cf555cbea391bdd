//! Tests for the sliding window of visible days.

use chrono::NaiveDate;
use slot_picker::{CalendarDay, DateWindow, PickerError, TimeSlot};

fn day(y: i32, m: u32, d: u32) -> CalendarDay {
    CalendarDay::from_ymd(y, m, d).unwrap()
}

#[test]
fn compute_returns_consecutive_days_from_anchor() {
    let window = DateWindow::compute(day(2024, 1, 10), 7).unwrap();

    assert_eq!(window.size(), 7);
    assert_eq!(window.anchor(), day(2024, 1, 10));
    assert_eq!(window.days()[0], day(2024, 1, 10));
    assert_eq!(window.days()[6], day(2024, 1, 16));
    assert_eq!(window.last(), day(2024, 1, 16));
}

#[test]
fn compute_normalizes_a_datetime_anchor_to_its_day() {
    let slot = TimeSlot::parse("2024-01-10T17:45:00").unwrap();
    let window = DateWindow::compute(slot, 3).unwrap();

    assert_eq!(window.anchor(), day(2024, 1, 10));
    assert_eq!(window.days(), &[day(2024, 1, 10), day(2024, 1, 11), day(2024, 1, 12)]);
}

#[test]
fn compute_rejects_zero_size() {
    let err = DateWindow::compute(day(2024, 1, 10), 0).unwrap_err();
    assert!(matches!(err, PickerError::InvalidWindow(0)));
}

#[test]
fn size_one_window_has_only_the_anchor() {
    let window = DateWindow::compute(day(2024, 2, 29), 1).unwrap();
    assert_eq!(window.days(), &[day(2024, 2, 29)]);
    assert_eq!(window.next_anchor().unwrap(), day(2024, 3, 1));
    assert_eq!(window.previous_anchor().unwrap(), day(2024, 2, 28));
}

#[test]
fn window_spans_year_boundary() {
    let window = DateWindow::compute(day(2023, 12, 29), 5).unwrap();
    assert_eq!(window.last(), day(2024, 1, 2));
    assert!(window.contains(day(2024, 1, 1)));
    assert!(!window.contains(day(2024, 1, 3)));
}

#[test]
fn next_anchor_is_day_after_last_visible() {
    let window = DateWindow::compute(day(2024, 1, 10), 7).unwrap();
    assert_eq!(window.next_anchor().unwrap(), day(2024, 1, 17));
}

#[test]
fn previous_anchor_moves_back_by_size() {
    let window = DateWindow::compute(day(2024, 1, 10), 7).unwrap();
    assert_eq!(window.previous_anchor().unwrap(), day(2024, 1, 3));
    assert_eq!(window.shift(-7).unwrap(), day(2024, 1, 3));
}

#[test]
fn jump_to_normalizes_to_calendar_day() {
    let slot = TimeSlot::parse("2024-03-05T08:30").unwrap();
    assert_eq!(DateWindow::jump_to(slot), day(2024, 3, 5));
}

#[test]
fn with_anchor_keeps_size() {
    let window = DateWindow::compute(day(2024, 1, 10), 4).unwrap();
    let moved = window.with_anchor(day(2024, 6, 1)).unwrap();
    assert_eq!(moved.size(), 4);
    assert_eq!(moved.last(), day(2024, 6, 4));
}

#[test]
fn window_past_end_of_date_range_is_rejected() {
    let near_end = CalendarDay::new(NaiveDate::MAX).add_days(-2);

    let err = DateWindow::compute(near_end, 7).unwrap_err();
    assert!(matches!(err, PickerError::DateOutOfRange(_)));

    let fits = DateWindow::compute(near_end, 3).unwrap();
    assert_eq!(fits.last(), CalendarDay::new(NaiveDate::MAX));
    for pair in fits.days().windows(2) {
        assert_eq!(pair[0].days_until(pair[1]), 1);
    }
}

#[test]
fn anchors_past_date_range_are_errors() {
    let at_end = DateWindow::compute(CalendarDay::new(NaiveDate::MAX), 1).unwrap();
    assert!(matches!(at_end.next_anchor(), Err(PickerError::DateOutOfRange(_))));

    let at_start = DateWindow::compute(CalendarDay::new(NaiveDate::MIN), 2).unwrap();
    assert!(matches!(at_start.previous_anchor(), Err(PickerError::DateOutOfRange(_))));
    assert!(matches!(
        at_start.with_anchor(CalendarDay::new(NaiveDate::MAX)),
        Err(PickerError::DateOutOfRange(_))
    ));
}
