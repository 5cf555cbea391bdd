//! Capabilities supplied by the host.
//!
//! Each capability is a small trait with a blanket implementation for the
//! matching closure type, so hosts can pass either a type or a closure.

use crate::calendar::{CalendarDay, TimeSlot};
use crate::index::AvailabilityBatch;
use crate::selection::SelectionEvent;
use crate::view::RenderView;

/// Fetches availability for the window starting at `anchor`.
///
/// Returning `None` means the source had nothing to offer (offline, error,
/// no data); the engine leaves its index untouched in that case.
pub trait SlotSource {
    fn fetch(&mut self, anchor: CalendarDay) -> Option<AvailabilityBatch>;
}

impl<F> SlotSource for F
where
    F: FnMut(CalendarDay) -> Option<AvailabilityBatch>,
{
    fn fetch(&mut self, anchor: CalendarDay) -> Option<AvailabilityBatch> {
        self(anchor)
    }
}

/// Draws a view. Called after every completed navigation.
pub trait RenderTarget {
    fn render(&mut self, view: &RenderView);
}

impl<F> RenderTarget for F
where
    F: FnMut(&RenderView),
{
    fn render(&mut self, view: &RenderView) {
        self(view)
    }
}

/// Notified synchronously after every toggle with the full selection.
pub trait SelectionListener {
    fn on_selection_change(&mut self, event: &SelectionEvent, selection: &[TimeSlot]);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionEvent, &[TimeSlot]),
{
    fn on_selection_change(&mut self, event: &SelectionEvent, selection: &[TimeSlot]) {
        self(event, selection)
    }
}
