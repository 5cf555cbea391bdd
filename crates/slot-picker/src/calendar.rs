//! Calendar primitives: local calendar days and bookable instants.
//!
//! Both types are plain values. Date arithmetic returns new values and never
//! mutates the receiver. No timezone conversion is performed anywhere: a
//! [`TimeSlot`] is a local wall-clock instant and belongs to exactly one
//! [`CalendarDay`].

use std::fmt;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

const DAY_FORMAT: &str = "%Y-%m-%d";
const SLOT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// A date truncated to local midnight, identified by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a day from its components. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse `YYYY-MM-DD`, or any datetime accepted by [`TimeSlot::parse`]
    /// (normalized to its day).
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(s, DAY_FORMAT) {
            return Ok(Self(date));
        }
        TimeSlot::parse(s).map(|slot| slot.day())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Local midnight at the start of this day.
    pub fn midnight(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// Return the day `n` days away (negative `n` goes backward), or `None`
    /// when it falls outside the representable date range.
    pub fn checked_add_days(self, n: i64) -> Option<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Return the day `n` days away, saturating at the representable date
    /// range. Window arithmetic uses [`CalendarDay::checked_add_days`].
    pub fn add_days(self, n: i64) -> Self {
        match self.checked_add_days(n) {
            Some(day) => day,
            None if n >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDay {
    fn from(at: NaiveDateTime) -> Self {
        Self(at.date())
    }
}

impl From<TimeSlot> for CalendarDay {
    fn from(slot: TimeSlot) -> Self {
        slot.day()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

/// One bookable instant. Two slots are equal iff their instants are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(NaiveDateTime);

impl TimeSlot {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parse a local datetime such as `2024-01-10T09:00:00` or `2024-01-10T09:00`.
    ///
    /// RFC 3339 strings are accepted too; their offset is dropped and the
    /// wall-clock part is kept as-is.
    pub fn parse(s: &str) -> Result<Self> {
        for format in SLOT_FORMATS {
            if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(at));
            }
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.naive_local()))
            .map_err(|e| PickerError::InvalidDate(format!("'{}': {}", s, e)))
    }

    /// Rebuild a slot from its millisecond identity (see [`TimeSlot::id`]).
    pub fn from_id(id: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(id).map(|dt| Self(dt.naive_utc()))
    }

    pub fn at(self) -> NaiveDateTime {
        self.0
    }

    /// The calendar day this slot falls on.
    pub fn day(self) -> CalendarDay {
        CalendarDay(self.0.date())
    }

    /// Stable integer identity: milliseconds of the wall-clock instant since
    /// the epoch. Hosts use it as an element id.
    pub fn id(self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }
}

impl From<NaiveDateTime> for TimeSlot {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}
