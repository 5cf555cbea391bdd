//! Known availability, keyed by calendar day.
//!
//! A day present as a key is "known" even when its slot list is empty. That is
//! how the index tells "checked, nothing available" apart from "not yet
//! fetched", and it is what the navigation controller consults before asking
//! the slot source for more data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{CalendarDay, TimeSlot};

/// Availability returned by a slot source (or supplied at construction).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBatch {
    /// Slots grouped by the day they fall on.
    #[serde(default)]
    pub slots_by_day: BTreeMap<CalendarDay, Vec<TimeSlot>>,
    /// Earliest bookable slot known to the source, used by the empty-state callout.
    #[serde(default)]
    pub next_available_slot: Option<TimeSlot>,
}

impl AvailabilityBatch {
    /// Group a flat list of slots by day. Only days that have at least one slot
    /// become keys.
    pub fn from_slots(slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut slots_by_day: BTreeMap<CalendarDay, Vec<TimeSlot>> = BTreeMap::new();
        for slot in slots {
            slots_by_day.entry(slot.day()).or_default().push(slot);
        }
        for day_slots in slots_by_day.values_mut() {
            day_slots.sort();
        }
        Self {
            slots_by_day,
            next_available_slot: None,
        }
    }

    /// Group a flat list of slots by day and mark every day in `days` as known,
    /// so days without slots are recorded as known-empty.
    pub fn covering(days: &[CalendarDay], slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut batch = Self::from_slots(slots);
        for day in days {
            batch.slots_by_day.entry(*day).or_default();
        }
        batch
    }

    pub fn with_next_available(mut self, slot: Option<TimeSlot>) -> Self {
        self.next_available_slot = slot;
        self
    }

    pub fn with_day(mut self, day: CalendarDay, slots: Vec<TimeSlot>) -> Self {
        self.slots_by_day.insert(day, slots);
        self
    }
}

/// Availability known to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotIndex {
    days: BTreeMap<CalendarDay, Vec<TimeSlot>>,
    next_available_slot: Option<TimeSlot>,
}

impl SlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `day` has been recorded, even with zero slots.
    pub fn has(&self, day: CalendarDay) -> bool {
        self.days.contains_key(&day)
    }

    /// Slots for `day` in chronological order; empty when unknown.
    pub fn get(&self, day: CalendarDay) -> &[TimeSlot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True iff `day` is unknown or has no slots.
    pub fn is_day_empty(&self, day: CalendarDay) -> bool {
        self.get(day).is_empty()
    }

    pub fn next_available_slot(&self) -> Option<TimeSlot> {
        self.next_available_slot
    }

    /// Number of known days.
    pub fn known_days(&self) -> usize {
        self.days.len()
    }

    /// Merge a batch. Each day in the batch replaces whatever the index held
    /// for it; the hint is overwritten only when the batch carries one.
    ///
    /// Slots keyed under a day they do not fall on are discarded.
    pub fn merge(&mut self, batch: AvailabilityBatch) {
        let merged_days = batch.slots_by_day.len();
        for (day, mut slots) in batch.slots_by_day {
            let before = slots.len();
            slots.retain(|slot| slot.day() == day);
            if slots.len() != before {
                warn!(
                    %day,
                    discarded = before - slots.len(),
                    "discarding slots filed under the wrong day"
                );
            }
            slots.sort();
            slots.dedup();
            self.days.insert(day, slots);
        }
        if let Some(hint) = batch.next_available_slot {
            self.next_available_slot = Some(hint);
        }
        debug!(
            merged_days,
            known_days = self.days.len(),
            next_available = ?self.next_available_slot,
            "merged availability"
        );
    }
}
