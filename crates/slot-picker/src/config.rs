//! Construction-time configuration.
//!
//! Resolved once when a [`crate::SlotPicker`] is built; never shared or mutated
//! afterwards. Every field is optional in serialized form and falls back to the
//! documented default.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDay, TimeSlot};
use crate::error::Result;
use crate::index::AvailabilityBatch;

pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Host-visible strings used by the empty-state callout and slot tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Body of the empty-state callout.
    pub no_slots: String,
    /// Tooltip of the "next available slot" link.
    pub check_availability_title: String,
    /// Tooltip of every bookable slot.
    pub slot_title: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_slots: "No slots available".to_string(),
            check_availability_title: "Click here to check availability ".to_string(),
            slot_title: "Click here to book this slot".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Number of days visible at once. Must be at least 1.
    pub window_size: usize,
    /// Allow more than one selected slot at a time.
    pub multi_select: bool,
    /// First visible day.
    pub from_date: CalendarDay,
    /// Availability known before the first navigation.
    pub initial_availability: Option<AvailabilityBatch>,
    /// Slots selected at construction.
    pub initial_selection: Vec<TimeSlot>,
    pub messages: Messages,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            multi_select: false,
            from_date: CalendarDay::today(),
            initial_availability: None,
            initial_selection: Vec::new(),
            messages: Messages::default(),
        }
    }
}

impl PickerConfig {
    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn with_from_date(mut self, from_date: CalendarDay) -> Self {
        self.from_date = from_date;
        self
    }

    pub fn with_initial_availability(mut self, batch: AvailabilityBatch) -> Self {
        self.initial_availability = Some(batch);
        self
    }

    pub fn with_initial_selection(mut self, slots: Vec<TimeSlot>) -> Self {
        self.initial_selection = slots;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
