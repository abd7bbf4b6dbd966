//! Grid Pointer Utilities
//!
//! Delegated pointer handling for cell grids. One listener sits on the grid
//! container and each event is resolved to a small closed set of targets.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent};

/// Class carried by every grid cell
pub const CELL_CLASS: &str = "grid-cell";
/// Class carried by the marker overlay inside a claimed cell
pub const MARKER_CLASS: &str = "grid-marker";
/// Class carried by the overlay around an open form
pub const BACKDROP_CLASS: &str = "modal-backdrop";

/// Pointer target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// A grid cell (x, y)
    Cell(u32, u32),
    /// A marker overlay, carrying its parent cell (x, y)
    Marker(u32, u32),
    /// The backdrop around an open form
    Backdrop,
    /// Anything else
    Other,
}

impl PointerTarget {
    /// Cell coordinates for cells and markers
    pub fn cell(&self) -> Option<(u32, u32)> {
        match *self {
            PointerTarget::Cell(x, y) | PointerTarget::Marker(x, y) => Some((x, y)),
            _ => None,
        }
    }
}

/// Parse `data-x` / `data-y` attribute values
pub fn parse_coords(x: Option<&str>, y: Option<&str>) -> Option<(u32, u32)> {
    let x = x?.trim().parse().ok()?;
    let y = y?.trim().parse().ok()?;
    Some((x, y))
}

fn cell_coords(el: &Element) -> Option<(u32, u32)> {
    parse_coords(
        el.get_attribute("data-x").as_deref(),
        el.get_attribute("data-y").as_deref(),
    )
}

/// Resolve an element to a pointer target
pub fn resolve_element(el: &Element) -> PointerTarget {
    let classes = el.class_list();

    if classes.contains(MARKER_CLASS) {
        // Markers sit inside their cell
        return el
            .parent_element()
            .filter(|parent| parent.class_list().contains(CELL_CLASS))
            .and_then(|parent| cell_coords(&parent))
            .map(|(x, y)| PointerTarget::Marker(x, y))
            .unwrap_or(PointerTarget::Other);
    }
    if classes.contains(CELL_CLASS) {
        return cell_coords(el)
            .map(|(x, y)| PointerTarget::Cell(x, y))
            .unwrap_or(PointerTarget::Other);
    }
    if classes.contains(BACKDROP_CLASS) {
        return PointerTarget::Backdrop;
    }
    PointerTarget::Other
}

/// Resolve an event target to a pointer target
pub fn resolve_target(target: Option<EventTarget>) -> PointerTarget {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| resolve_element(&el))
        .unwrap_or(PointerTarget::Other)
}

/// Create delegated click handler, fires for cells and markers
pub fn make_on_cell_click<F>(on_cell: F) -> impl Fn(MouseEvent) + Copy + 'static
where
    F: Fn((u32, u32), &MouseEvent) + Copy + 'static,
{
    move |ev: MouseEvent| {
        if let Some(cell) = resolve_target(ev.target()).cell() {
            on_cell(cell, &ev);
        }
    }
}

/// Create delegated mouseover handler, fires when entering cells and markers
pub fn make_on_cell_enter<F>(on_cell: F) -> impl Fn(MouseEvent) + Copy + 'static
where
    F: Fn((u32, u32), &MouseEvent) + Copy + 'static,
{
    move |ev: MouseEvent| {
        if let Some(cell) = resolve_target(ev.target()).cell() {
            on_cell(cell, &ev);
        }
    }
}

/// Create delegated mouseout handler, fires when leaving cells and markers
pub fn make_on_cell_leave<F>(on_leave: F) -> impl Fn(MouseEvent) + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    move |ev: MouseEvent| {
        if resolve_target(ev.target()).cell().is_some() {
            on_leave();
        }
    }
}

/// Create click handler for a backdrop, ignores presses inside the form
pub fn make_on_backdrop_press<F>(on_backdrop: F) -> impl Fn(MouseEvent) + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    move |ev: MouseEvent| {
        if resolve_target(ev.target()) == PointerTarget::Backdrop {
            on_backdrop();
        }
    }
}
