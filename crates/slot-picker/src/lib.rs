//! # slot-picker
//!
//! Scheduling and selection engine for an embeddable availability picker.
//!
//! The picker shows a sliding window of days, each with its bookable time
//! slots, and lets a user select one slot (or several, in multi-select mode).
//! This crate holds everything except the drawing: it computes the visible
//! window, keeps an index of known availability, asks the host for more when
//! the window slides onto unknown days, tracks the selection and derives a
//! render-ready view. Rendering, data fetching and selection callbacks are
//! host capabilities.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_picker::{AvailabilityBatch, CalendarDay, PickerConfig, SlotPicker, TimeSlot};
//!
//! let from = CalendarDay::from_ymd(2024, 1, 10).unwrap();
//! let nine = TimeSlot::parse("2024-01-10T09:00").unwrap();
//! let config = PickerConfig::default()
//!     .with_window_size(3)
//!     .with_from_date(from)
//!     .with_initial_availability(AvailabilityBatch::covering(&[from], [nine]));
//!
//! let mut picker = SlotPicker::new(config).unwrap();
//! assert_eq!(picker.view().slot_counts(), vec![1, 0, 0]);
//!
//! let event = picker.toggle(nine);
//! assert!(event.is_new_select);
//! assert_eq!(picker.selected(), vec![nine]);
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — `CalendarDay` and `TimeSlot` value types
//! - [`window`] — the sliding window of visible days
//! - [`index`] — known availability keyed by day
//! - [`selection`] — single/multi-select state
//! - [`view`] — pure derivation of the render-ready view
//! - [`picker`] — the engine and its navigation state machine
//! - [`source`] — host capabilities (slot source, render target, selection listener)
//! - [`format`] — locale formatting capability
//! - [`config`] — construction-time configuration
//! - [`telemetry`] — opt-in tracing subscriber setup
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod picker;
pub mod selection;
pub mod source;
pub mod telemetry;
pub mod view;
pub mod window;

pub use calendar::{CalendarDay, TimeSlot};
pub use config::{Messages, PickerConfig};
pub use error::PickerError;
pub use format::{EnglishFormatter, LocaleFormatter};
pub use index::{AvailabilityBatch, SlotIndex};
pub use picker::{NavigationKind, NavigationTicket, SlotPicker};
pub use selection::{SelectionEvent, SelectionState};
pub use source::{RenderTarget, SelectionListener, SlotSource};
pub use view::{build_view, RenderView};
pub use window::DateWindow;
