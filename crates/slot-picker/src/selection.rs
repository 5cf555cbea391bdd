//! Selected slots under a single- or multi-select policy.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::TimeSlot;

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub slot: TimeSlot,
    /// `true` when the slot became selected, `false` when it was unselected.
    pub is_new_select: bool,
}

/// Selected slots in the order they were picked.
///
/// With `multi_select` off, at most one slot is ever selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    multi_select: bool,
    selected: IndexSet<TimeSlot>,
}

impl SelectionState {
    pub fn new(multi_select: bool) -> Self {
        Self {
            multi_select,
            selected: IndexSet::new(),
        }
    }

    /// Start from an initial selection. In single-select mode only the first
    /// slot is kept.
    pub fn with_initial(multi_select: bool, initial: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut selected: IndexSet<TimeSlot> = initial.into_iter().collect();
        if !multi_select && selected.len() > 1 {
            warn!(
                given = selected.len(),
                "single-select picker given several initial slots; keeping the first"
            );
            selected.truncate(1);
        }
        Self {
            multi_select,
            selected,
        }
    }

    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn is_selected(&self, slot: TimeSlot) -> bool {
        self.selected.contains(&slot)
    }

    /// Flip membership of `slot`.
    ///
    /// Selecting a new slot in single-select mode clears the previous one first.
    pub fn toggle(&mut self, slot: TimeSlot) -> SelectionEvent {
        let is_new_select = if self.selected.shift_remove(&slot) {
            false
        } else {
            if !self.multi_select {
                self.selected.clear();
            }
            self.selected.insert(slot);
            true
        };
        debug!(
            %slot,
            is_new_select,
            selected = self.selected.len(),
            "toggled slot"
        );
        SelectionEvent {
            slot,
            is_new_select,
        }
    }

    /// Ordered snapshot of the current selection.
    pub fn snapshot(&self) -> Vec<TimeSlot> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
