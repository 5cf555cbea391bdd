//! WASM bindings for slot-picker.
//!
//! Exposes the picker engine to a JavaScript host via `wasm-bindgen`. All
//! complex values cross the boundary as JSON strings with camelCase keys.
//!
//! Fetching is driven by the host: `beginNext()` (or `beginPrevious()`,
//! `beginGoTo()`, `beginNextAvailable()`) returns a ticket saying which anchor
//! to fetch and whether a fetch is needed at all. The host awaits its own
//! request and hands the result to `finishNavigation()`, which returns the view
//! to draw. A second `begin*` call before `finishNavigation()` is rejected.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-picker-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-picker-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_picker_wasm.wasm
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slot_picker::view::{CalloutLink, DayView, EmptyCallout, SlotView};
use slot_picker::{
    AvailabilityBatch, CalendarDay, Messages, NavigationTicket, PickerConfig, RenderView,
    SelectionEvent, SlotPicker, TimeSlot,
};
use tracing::debug;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// One slot in the flat `{ slots: [{ begin }] }` shape.
#[derive(Deserialize)]
struct SlotInput {
    begin: String,
}

/// Availability as sent by the host, either grouped by day or flat.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct BatchInput {
    slots_by_day: Option<BTreeMap<String, Vec<String>>>,
    slots: Option<Vec<SlotInput>>,
    next_available_slot: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct MessagesInput {
    no_slots: Option<String>,
    check_availability_title: Option<String>,
    slot_title: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ConfigInput {
    window_size: Option<usize>,
    multi_select: Option<bool>,
    from_date: Option<String>,
    initial_availability: Option<BatchInput>,
    initial_selection: Vec<String>,
    messages: Option<MessagesInput>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotDto {
    slot: String,
    id: i64,
    time_label: String,
    title: String,
    active: bool,
}

impl From<&SlotView> for SlotDto {
    fn from(s: &SlotView) -> Self {
        Self {
            slot: s.slot.to_string(),
            id: s.id,
            time_label: s.time_label.clone(),
            title: s.title.clone(),
            active: s.active,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayDto {
    day: String,
    day_number: String,
    weekday: String,
    slots: Vec<SlotDto>,
}

impl From<&DayView> for DayDto {
    fn from(d: &DayView) -> Self {
        Self {
            day: d.day.to_string(),
            day_number: d.day_number.clone(),
            weekday: d.weekday.clone(),
            slots: d.slots.iter().map(SlotDto::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkDto {
    slot: String,
    id: i64,
    label: String,
    title: String,
}

impl From<&CalloutLink> for LinkDto {
    fn from(l: &CalloutLink) -> Self {
        Self {
            slot: l.slot.to_string(),
            id: l.id,
            label: l.label.clone(),
            title: l.title.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalloutDto {
    message: String,
    next_available: Option<LinkDto>,
}

impl From<&EmptyCallout> for CalloutDto {
    fn from(c: &EmptyCallout) -> Self {
        Self {
            message: c.message.clone(),
            next_available: c.next_available.as_ref().map(LinkDto::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewDto {
    month_label: String,
    days: Vec<DayDto>,
    all_empty: bool,
    next_available_slot: Option<String>,
    empty_callout: Option<CalloutDto>,
}

impl From<&RenderView> for ViewDto {
    fn from(v: &RenderView) -> Self {
        Self {
            month_label: v.month_label.clone(),
            days: v.days.iter().map(DayDto::from).collect(),
            all_empty: v.all_empty,
            next_available_slot: v.next_available_slot.map(|s| s.to_string()),
            empty_callout: v.empty_callout.as_ref().map(CalloutDto::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketDto {
    kind: String,
    anchor: String,
    days: Vec<String>,
    needs_fetch: bool,
}

impl From<&NavigationTicket> for TicketDto {
    fn from(t: &NavigationTicket) -> Self {
        Self {
            kind: format!("{:?}", t.kind).to_lowercase(),
            anchor: t.anchor.to_string(),
            days: t.window.days().iter().map(|d| d.to_string()).collect(),
            needs_fetch: t.needs_fetch,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleDto {
    slot: String,
    id: i64,
    is_new_select: bool,
    selection: Vec<String>,
}

impl ToggleDto {
    fn new(event: &SelectionEvent, selection: &[TimeSlot]) -> Self {
        Self {
            slot: event.slot.to_string(),
            id: event.slot.id(),
            is_new_select: event.is_new_select,
            selection: selection.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: JSON input -> engine types
// ---------------------------------------------------------------------------

fn parse_slot(s: &str) -> Result<TimeSlot, String> {
    TimeSlot::parse(s).map_err(|e| e.to_string())
}

/// Element ids arrive as JS numbers; only whole, finite values name a slot.
fn slot_from_id(id: f64) -> Result<TimeSlot, String> {
    if !id.is_finite() || id.fract() != 0.0 {
        return Err(format!("Invalid slot id: {}", id));
    }
    TimeSlot::from_id(id as i64).ok_or_else(|| format!("Invalid slot id: {}", id))
}

fn parse_day(s: &str) -> Result<CalendarDay, String> {
    CalendarDay::parse(s).map_err(|e| e.to_string())
}

fn to_batch(input: BatchInput) -> Result<AvailabilityBatch, String> {
    let mut batch = match input.slots {
        Some(flat) => AvailabilityBatch::from_slots(
            flat.iter()
                .map(|s| parse_slot(&s.begin))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => AvailabilityBatch::default(),
    };
    for (day, slots) in input.slots_by_day.unwrap_or_default() {
        let slots = slots
            .iter()
            .map(|s| parse_slot(s))
            .collect::<Result<Vec<_>, _>>()?;
        batch = batch.with_day(parse_day(&day)?, slots);
    }
    let hint = input.next_available_slot.as_deref().map(parse_slot).transpose()?;
    Ok(batch.with_next_available(hint))
}

fn parse_batch_json(json: &str) -> Result<AvailabilityBatch, String> {
    let input: BatchInput =
        serde_json::from_str(json).map_err(|e| format!("Invalid availability JSON: {}", e))?;
    to_batch(input)
}

fn parse_config_json(json: &str) -> Result<PickerConfig, String> {
    let input: ConfigInput =
        serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))?;

    let mut config = PickerConfig::default();
    if let Some(size) = input.window_size {
        config = config.with_window_size(size);
    }
    if let Some(multi) = input.multi_select {
        config = config.with_multi_select(multi);
    }
    if let Some(from) = input.from_date.as_deref() {
        config = config.with_from_date(parse_day(from)?);
    }
    if let Some(batch) = input.initial_availability {
        config = config.with_initial_availability(to_batch(batch)?);
    }
    let selection = input
        .initial_selection
        .iter()
        .map(|s| parse_slot(s))
        .collect::<Result<Vec<_>, _>>()?;
    config = config.with_initial_selection(selection);
    if let Some(m) = input.messages {
        let defaults = Messages::default();
        config = config.with_messages(Messages {
            no_slots: m.no_slots.unwrap_or(defaults.no_slots),
            check_availability_title: m
                .check_availability_title
                .unwrap_or(defaults.check_availability_title),
            slot_title: m.slot_title.unwrap_or(defaults.slot_title),
        });
    }
    debug!(
        window_size = config.window_size,
        from_date = %config.from_date,
        "parsed picker config"
    );
    Ok(config)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// A picker instance bound to one mounted widget.
#[wasm_bindgen(js_name = "SlotPicker")]
pub struct WasmSlotPicker {
    inner: SlotPicker,
}

#[wasm_bindgen(js_class = "SlotPicker")]
impl WasmSlotPicker {
    /// Create a picker from a JSON configuration object. Every field is
    /// optional: `windowSize` (7), `multiSelect` (false), `fromDate` (today),
    /// `initialAvailability`, `initialSelection` and `messages`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmSlotPicker, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => parse_config_json(json).map_err(js_err)?,
            None => PickerConfig::default(),
        };
        let inner = SlotPicker::new(config).map_err(js_err)?;
        Ok(Self { inner })
    }

    /// Current view as JSON.
    pub fn view(&self) -> Result<String, JsValue> {
        to_json(&ViewDto::from(&self.inner.view()))
    }

    #[wasm_bindgen(js_name = "beginPrevious")]
    pub fn begin_previous(&mut self) -> Result<String, JsValue> {
        let ticket = self.inner.begin_previous().map_err(js_err)?;
        to_json(&TicketDto::from(&ticket))
    }

    #[wasm_bindgen(js_name = "beginNext")]
    pub fn begin_next(&mut self) -> Result<String, JsValue> {
        let ticket = self.inner.begin_next().map_err(js_err)?;
        to_json(&TicketDto::from(&ticket))
    }

    /// Start jumping to `date` (`YYYY-MM-DD` or a datetime).
    #[wasm_bindgen(js_name = "beginGoTo")]
    pub fn begin_go_to(&mut self, date: &str) -> Result<String, JsValue> {
        let day = parse_day(date).map_err(js_err)?;
        let ticket = self.inner.begin_go_to(day).map_err(js_err)?;
        to_json(&TicketDto::from(&ticket))
    }

    #[wasm_bindgen(js_name = "beginNextAvailable")]
    pub fn begin_next_available(&mut self) -> Result<String, JsValue> {
        let ticket = self.inner.begin_go_to_next_available().map_err(js_err)?;
        to_json(&TicketDto::from(&ticket))
    }

    /// Complete the navigation in flight. Pass `undefined` when the fetch
    /// failed or was not needed. Returns the view to draw.
    #[wasm_bindgen(js_name = "finishNavigation")]
    pub fn finish_navigation(&mut self, batch_json: Option<String>) -> Result<String, JsValue> {
        let batch = batch_json
            .as_deref()
            .map(parse_batch_json)
            .transpose()
            .map_err(js_err)?;
        let view = self.inner.finish_navigation(batch).map_err(js_err)?;
        to_json(&ViewDto::from(&view))
    }

    #[wasm_bindgen(js_name = "abortNavigation")]
    pub fn abort_navigation(&mut self) -> Result<(), JsValue> {
        self.inner.abort_navigation().map_err(js_err)
    }

    /// Toggle a slot. Returns `{ slot, id, isNewSelect, selection }`.
    pub fn toggle(&mut self, slot: &str) -> Result<String, JsValue> {
        let slot = parse_slot(slot).map_err(js_err)?;
        let event = self.inner.toggle(slot);
        to_json(&ToggleDto::new(&event, &self.inner.selected()))
    }

    /// Toggle a slot by its millisecond id (the element id used in the view).
    #[wasm_bindgen(js_name = "toggleById")]
    pub fn toggle_by_id(&mut self, id: f64) -> Result<String, JsValue> {
        let slot = slot_from_id(id).map_err(js_err)?;
        let event = self.inner.toggle(slot);
        to_json(&ToggleDto::new(&event, &self.inner.selected()))
    }

    #[wasm_bindgen(js_name = "isSelected")]
    pub fn is_selected(&self, slot: &str) -> Result<bool, JsValue> {
        let slot = parse_slot(slot).map_err(js_err)?;
        Ok(self.inner.is_selected(slot))
    }

    /// Selected slots in pick order, as a JSON array of datetime strings.
    pub fn selection(&self) -> Result<String, JsValue> {
        let selected: Vec<String> = self.inner.selected().iter().map(|s| s.to_string()).collect();
        to_json(&selected)
    }

    #[wasm_bindgen(js_name = "isNavigating")]
    pub fn is_navigating(&self) -> bool {
        self.inner.is_navigating()
    }
}
