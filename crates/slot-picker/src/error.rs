//! Error types for slot-picker operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindow(usize),

    #[error("Navigation rejected: another navigation is still in flight")]
    DuplicateNavigation,

    #[error("No navigation in flight")]
    NoNavigationInFlight,

    #[error("No next available slot is known")]
    NoNextAvailableSlot,

    /// A window would extend past the representable date range.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The configuration document was not valid JSON for [`crate::PickerConfig`].
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
