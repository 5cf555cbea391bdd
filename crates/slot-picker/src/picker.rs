//! The picker engine and its navigation controller.
//!
//! Navigation is a two-state machine: *Idle* and *Navigating*. A navigation
//! begins by computing the target window and reporting whether the slot source
//! must be asked for data; it finishes once that data (or its absence) is
//! merged, at which point the window is committed and the view rendered.
//! Hosts with an asynchronous source drive the two phases themselves
//! ([`SlotPicker::begin_next`] then [`SlotPicker::finish_navigation`]); hosts
//! with a synchronous source call [`SlotPicker::next`] and friends.
//!
//! Only one navigation may be in flight. Starting another one while
//! *Navigating* fails with [`PickerError::DuplicateNavigation`].

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::calendar::{CalendarDay, TimeSlot};
use crate::config::{Messages, PickerConfig};
use crate::error::{PickerError, Result};
use crate::format::{EnglishFormatter, LocaleFormatter};
use crate::index::{AvailabilityBatch, SlotIndex};
use crate::selection::{SelectionEvent, SelectionState};
use crate::source::{RenderTarget, SelectionListener, SlotSource};
use crate::view::{build_view, RenderView};
use crate::window::DateWindow;

/// Which user action started a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationKind {
    Previous,
    Next,
    GoTo,
}

/// A navigation in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTicket {
    pub kind: NavigationKind,
    /// First day of the target window; pass this to the slot source.
    pub anchor: CalendarDay,
    pub window: DateWindow,
    /// True when at least one day of the target window is not yet known.
    pub needs_fetch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NavigationState {
    Idle,
    Navigating(NavigationTicket),
}

pub struct SlotPicker {
    window: DateWindow,
    index: SlotIndex,
    selection: SelectionState,
    messages: Messages,
    state: NavigationState,
    formatter: Box<dyn LocaleFormatter>,
    source: Option<Box<dyn SlotSource>>,
    renderer: Option<Box<dyn RenderTarget>>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl SlotPicker {
    /// Build a picker from its configuration.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidWindow` if `config.window_size` is zero, or
    /// `PickerError::DateOutOfRange` if the first window runs past the date range.
    pub fn new(config: PickerConfig) -> Result<Self> {
        let window = DateWindow::compute(config.from_date, config.window_size)?;
        let mut index = SlotIndex::new();
        if let Some(batch) = config.initial_availability {
            index.merge(batch);
        }
        let selection = SelectionState::with_initial(config.multi_select, config.initial_selection);
        debug!(
            anchor = %window.anchor(),
            size = window.size(),
            multi_select = config.multi_select,
            "slot picker created"
        );
        Ok(Self {
            window,
            index,
            selection,
            messages: config.messages,
            state: NavigationState::Idle,
            formatter: Box::new(EnglishFormatter),
            source: None,
            renderer: None,
            listener: None,
        })
    }

    pub fn with_source(mut self, source: impl SlotSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_renderer(mut self, renderer: impl RenderTarget + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn with_selection_listener(mut self, listener: impl SelectionListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn with_formatter(mut self, formatter: impl LocaleFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn index(&self) -> &SlotIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_navigating(&self) -> bool {
        matches!(self.state, NavigationState::Navigating(_))
    }

    /// The view for the current state, without rendering it.
    pub fn view(&self) -> RenderView {
        build_view(
            &self.window,
            &self.index,
            &self.selection,
            self.formatter.as_ref(),
            &self.messages,
        )
    }

    /// Build the current view and hand it to the render target.
    pub fn render(&mut self) -> RenderView {
        let view = self.view();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&view);
        }
        trace!(anchor = %self.window.anchor(), all_empty = view.all_empty, "rendered");
        view
    }

    // ── Selection ──────────────────────────────────────────────────────────

    /// Toggle `slot` and notify the selection listener.
    pub fn toggle(&mut self, slot: TimeSlot) -> SelectionEvent {
        let event = self.selection.toggle(slot);
        if let Some(listener) = self.listener.as_mut() {
            let snapshot = self.selection.snapshot();
            listener.on_selection_change(&event, &snapshot);
        }
        event
    }

    pub fn is_selected(&self, slot: TimeSlot) -> bool {
        self.selection.is_selected(slot)
    }

    /// Selected slots in the order they were picked.
    pub fn selected(&self) -> Vec<TimeSlot> {
        self.selection.snapshot()
    }

    // ── Two-phase navigation ───────────────────────────────────────────────

    /// Start moving to the window before the current one.
    pub fn begin_previous(&mut self) -> Result<NavigationTicket> {
        let anchor = self.window.previous_anchor();
        self.begin(NavigationKind::Previous, anchor)
    }

    /// Start moving to the window after the current one.
    ///
    /// # Errors
    /// Returns `PickerError::DateOutOfRange` at the end of the date range; the
    /// picker stays idle on the current window.
    pub fn begin_next(&mut self) -> Result<NavigationTicket> {
        let anchor = self.window.next_anchor();
        self.begin(NavigationKind::Next, anchor)
    }

    /// Start moving to the window anchored at `date`.
    pub fn begin_go_to(&mut self, date: impl Into<CalendarDay>) -> Result<NavigationTicket> {
        let anchor = DateWindow::jump_to(date);
        self.begin(NavigationKind::GoTo, Ok(anchor))
    }

    /// Start moving to the window anchored at the next available slot's day.
    ///
    /// # Errors
    /// Returns `PickerError::NoNextAvailableSlot` when no hint is known.
    pub fn begin_go_to_next_available(&mut self) -> Result<NavigationTicket> {
        let slot = self
            .index
            .next_available_slot()
            .ok_or(PickerError::NoNextAvailableSlot)?;
        self.begin_go_to(slot)
    }

    /// Complete the navigation in flight with whatever the slot source returned.
    ///
    /// A batch is the source's answer for the whole target window: target days
    /// it leaves out and the index does not know yet are recorded as
    /// known-empty. `None` leaves the index untouched: the target days stay
    /// unknown and are shown as empty.
    ///
    /// # Errors
    /// Returns `PickerError::NoNavigationInFlight` when the picker is idle.
    pub fn finish_navigation(&mut self, batch: Option<AvailabilityBatch>) -> Result<RenderView> {
        let ticket = match std::mem::replace(&mut self.state, NavigationState::Idle) {
            NavigationState::Navigating(ticket) => ticket,
            NavigationState::Idle => return Err(PickerError::NoNavigationInFlight),
        };
        match batch {
            Some(mut batch) => {
                for day in ticket.window.days() {
                    if !self.index.has(*day) {
                        batch.slots_by_day.entry(*day).or_default();
                    }
                }
                self.index.merge(batch);
            }
            None if ticket.needs_fetch => warn!(
                anchor = %ticket.anchor,
                "slot source returned nothing; unknown days will show as empty"
            ),
            None => {}
        }
        self.window = ticket.window;
        debug!(
            kind = ?ticket.kind,
            anchor = %self.window.anchor(),
            "navigation finished"
        );
        Ok(self.render())
    }

    /// Drop the navigation in flight and keep the current window.
    ///
    /// # Errors
    /// Returns `PickerError::NoNavigationInFlight` when the picker is idle.
    pub fn abort_navigation(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, NavigationState::Idle) {
            NavigationState::Navigating(ticket) => {
                debug!(kind = ?ticket.kind, anchor = %ticket.anchor, "navigation aborted");
                Ok(())
            }
            NavigationState::Idle => Err(PickerError::NoNavigationInFlight),
        }
    }

    // ── Synchronous navigation ─────────────────────────────────────────────

    /// Show the previous window, fetching from the slot source if needed.
    pub fn previous(&mut self) -> Result<RenderView> {
        let ticket = self.begin_previous()?;
        self.complete_with_source(ticket)
    }

    /// Show the next window, fetching from the slot source if needed.
    pub fn next(&mut self) -> Result<RenderView> {
        let ticket = self.begin_next()?;
        self.complete_with_source(ticket)
    }

    /// Show the window anchored at `date`, fetching from the slot source if needed.
    pub fn go_to_date(&mut self, date: impl Into<CalendarDay>) -> Result<RenderView> {
        let ticket = self.begin_go_to(date)?;
        self.complete_with_source(ticket)
    }

    /// Follow the empty-state link to the next available slot.
    pub fn go_to_next_available(&mut self) -> Result<RenderView> {
        let ticket = self.begin_go_to_next_available()?;
        self.complete_with_source(ticket)
    }

    fn begin(
        &mut self,
        kind: NavigationKind,
        anchor: Result<CalendarDay>,
    ) -> Result<NavigationTicket> {
        if let NavigationState::Navigating(in_flight) = &self.state {
            warn!(
                requested = ?kind,
                in_flight = ?in_flight.kind,
                "rejecting navigation while another is in flight"
            );
            return Err(PickerError::DuplicateNavigation);
        }
        let anchor = anchor?;
        let window = self.window.with_anchor(anchor)?;
        let needs_fetch = window.days().iter().any(|day| !self.index.has(*day));
        debug!(?kind, %anchor, needs_fetch, "navigation started");
        let ticket = NavigationTicket {
            kind,
            anchor,
            window,
            needs_fetch,
        };
        self.state = NavigationState::Navigating(ticket.clone());
        Ok(ticket)
    }

    fn complete_with_source(&mut self, ticket: NavigationTicket) -> Result<RenderView> {
        let batch = if ticket.needs_fetch {
            self.source.as_mut().and_then(|source| source.fetch(ticket.anchor))
        } else {
            trace!(anchor = %ticket.anchor, "window fully known; skipping fetch");
            None
        };
        self.finish_navigation(batch)
    }
}

impl fmt::Debug for SlotPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotPicker")
            .field("window", &self.window)
            .field("index", &self.index)
            .field("selection", &self.selection)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
