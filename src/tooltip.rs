//! Tooltip Placement
//!
//! Where the claim tooltip goes relative to the pointer.

use crate::models::ClaimEntry;

/// Offset from the pointer to the tooltip corner
pub const TOOLTIP_OFFSET: f64 = 15.0;
/// Assumed tooltip width
pub const TOOLTIP_WIDTH: f64 = 250.0;
/// Assumed tooltip height
pub const TOOLTIP_HEIGHT: f64 = 60.0;

/// A shown tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub left: f64,
    pub top: f64,
    pub name: String,
    pub message: String,
}

impl TooltipView {
    pub fn for_entry(entry: &ClaimEntry, pointer: (f64, f64), viewport: (f64, f64)) -> Self {
        let (left, top) = place(pointer, viewport);
        Self {
            left,
            top,
            name: entry.name.clone(),
            message: entry.message.clone(),
        }
    }

    /// Inline style for the tooltip element
    pub fn style(&self) -> String {
        format!("display: block; left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Top-left corner of the tooltip for a pointer position
///
/// Flips to the other side of the pointer when it would overflow the right
/// or bottom edge. The left and top edges are not clamped.
pub fn place(pointer: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
    let (px, py) = pointer;
    let (vw, vh) = viewport;

    let mut left = px + TOOLTIP_OFFSET;
    let mut top = py + TOOLTIP_OFFSET;

    if left + TOOLTIP_WIDTH > vw {
        left = px - TOOLTIP_WIDTH;
    }
    if top + TOOLTIP_HEIGHT > vh {
        top = py - TOOLTIP_HEIGHT;
    }
    (left, top)
}
