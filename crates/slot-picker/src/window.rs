//! The sliding window of visible calendar days.

use serde::Serialize;

use crate::calendar::CalendarDay;
use crate::error::{PickerError, Result};

/// A contiguous, ascending run of `size` days starting at `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    anchor: CalendarDay,
    days: Vec<CalendarDay>,
}

impl DateWindow {
    /// Compute the window of `size` consecutive days starting at `anchor`.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidWindow` if `size` is zero, and
    /// `PickerError::DateOutOfRange` if the window would run past the
    /// representable date range.
    pub fn compute(anchor: impl Into<CalendarDay>, size: usize) -> Result<Self> {
        if size < 1 {
            return Err(PickerError::InvalidWindow(size));
        }
        let anchor = anchor.into();
        let days = (0..size as i64)
            .map(|offset| anchor.checked_add_days(offset))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                PickerError::DateOutOfRange(format!("{} days from {}", size, anchor))
            })?;
        Ok(Self { anchor, days })
    }

    pub fn anchor(&self) -> CalendarDay {
        self.anchor
    }

    pub fn size(&self) -> usize {
        self.days.len()
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Last visible day.
    pub fn last(&self) -> CalendarDay {
        self.days[self.days.len() - 1]
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.anchor <= day && day <= self.last()
    }

    /// Anchor obtained by moving the first visible day by `delta_days`.
    ///
    /// # Errors
    /// Returns `PickerError::DateOutOfRange` past the representable date range.
    pub fn shift(&self, delta_days: i64) -> Result<CalendarDay> {
        self.anchor.checked_add_days(delta_days).ok_or_else(|| {
            PickerError::DateOutOfRange(format!("{} shifted by {} days", self.anchor, delta_days))
        })
    }

    /// Anchor of the window immediately before this one.
    pub fn previous_anchor(&self) -> Result<CalendarDay> {
        self.shift(-(self.size() as i64))
    }

    /// Anchor of the window immediately after this one (last visible day + 1).
    pub fn next_anchor(&self) -> Result<CalendarDay> {
        self.shift(self.size() as i64)
    }

    /// Anchor for an arbitrary date, normalized to its calendar day.
    pub fn jump_to(date: impl Into<CalendarDay>) -> CalendarDay {
        date.into()
    }

    /// Recompute a window of the same size at a new anchor.
    pub fn with_anchor(&self, anchor: CalendarDay) -> Result<Self> {
        Self::compute(anchor, self.size())
    }
}
