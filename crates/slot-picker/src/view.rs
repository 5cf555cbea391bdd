//! Render-ready view derived from the window, the index and the selection.
//!
//! [`build_view`] is a pure function: the same inputs always produce the same
//! view, so hosts can re-render whenever any input changes and the view can be
//! checked without a rendering surface.

use serde::Serialize;

use crate::calendar::{CalendarDay, TimeSlot};
use crate::config::Messages;
use crate::format::LocaleFormatter;
use crate::index::SlotIndex;
use crate::selection::SelectionState;
use crate::window::DateWindow;

/// One bookable slot as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: TimeSlot,
    /// Millisecond identity, usable as an element id.
    pub id: i64,
    pub time_label: String,
    pub title: String,
    /// Whether the slot is currently selected.
    pub active: bool,
}

/// One visible day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub day: CalendarDay,
    pub day_number: String,
    pub weekday: String,
    pub slots: Vec<SlotView>,
}

/// Actionable link to the next available slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalloutLink {
    pub slot: TimeSlot,
    pub id: i64,
    pub label: String,
    pub title: String,
}

/// Shown instead of slots when every visible day is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyCallout {
    pub message: String,
    /// Present only when a next available slot is known.
    pub next_available: Option<CalloutLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderView {
    /// Month and year of the window's first day.
    pub month_label: String,
    pub days: Vec<DayView>,
    /// True iff every visible day is unknown or has no slots.
    pub all_empty: bool,
    pub next_available_slot: Option<TimeSlot>,
    pub empty_callout: Option<EmptyCallout>,
}

impl RenderView {
    /// Slot counts per visible day, in window order.
    pub fn slot_counts(&self) -> Vec<usize> {
        self.days.iter().map(|d| d.slots.len()).collect()
    }

    /// Slots marked active across the whole view.
    pub fn active_slots(&self) -> Vec<TimeSlot> {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .filter(|s| s.active)
            .map(|s| s.slot)
            .collect()
    }
}

/// True iff every day of `window` is empty in `index`.
pub fn is_all_empty(window: &DateWindow, index: &SlotIndex) -> bool {
    window.days().iter().all(|day| index.is_day_empty(*day))
}

/// Derive the view for the current state.
pub fn build_view(
    window: &DateWindow,
    index: &SlotIndex,
    selection: &SelectionState,
    formatter: &dyn LocaleFormatter,
    messages: &Messages,
) -> RenderView {
    let days = window
        .days()
        .iter()
        .map(|day| DayView {
            day: *day,
            day_number: formatter.day_number(*day),
            weekday: formatter.weekday_label(*day),
            slots: index
                .get(*day)
                .iter()
                .map(|slot| SlotView {
                    slot: *slot,
                    id: slot.id(),
                    time_label: formatter.time_label(*slot),
                    title: messages.slot_title.clone(),
                    active: selection.is_selected(*slot),
                })
                .collect(),
        })
        .collect();

    let all_empty = is_all_empty(window, index);
    let next_available_slot = index.next_available_slot();

    let empty_callout = all_empty.then(|| EmptyCallout {
        message: messages.no_slots.clone(),
        next_available: next_available_slot.map(|slot| CalloutLink {
            slot,
            id: slot.id(),
            label: formatter.long_date_label(slot),
            title: messages.check_availability_title.clone(),
        }),
    });

    RenderView {
        month_label: formatter.month_label(window.anchor()),
        days,
        all_empty,
        next_available_slot,
        empty_callout,
    }
}
