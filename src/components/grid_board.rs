//! Grid Board Component
//!
//! The cell grid. Click and hover are handled once on the container and
//! resolved to cells with grid-pointer.

use std::collections::BTreeSet;

use grid_pointer::{make_on_cell_click, make_on_cell_enter, make_on_cell_leave};
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::context::use_grid_context;
use crate::grid::{self, GridPos, EMPTY_GLYPH, GRID_HEIGHT, MARKER_GLYPH};
use crate::store::{store_click, store_entry_at, store_marker_positions, use_grid_store, ClickOutcome};
use crate::tooltip::TooltipView;

/// Pointer in page coordinates and the viewport size
fn pointer_and_viewport(ev: &MouseEvent) -> ((f64, f64), (f64, f64)) {
    let pointer = (ev.page_x() as f64, ev.page_y() as f64);
    let viewport = web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64());
            let height = w.inner_height().ok().and_then(|v| v.as_f64());
            (width.unwrap_or(f64::INFINITY), height.unwrap_or(f64::INFINITY))
        })
        .unwrap_or((f64::INFINITY, f64::INFINITY));
    (pointer, viewport)
}

/// A single cell, with a marker while claimed
#[component]
fn GridCell(pos: GridPos, markers: Memo<BTreeSet<GridPos>>) -> impl IntoView {
    let claimed = move || markers.with(|m| m.contains(&pos));

    view! {
        <span class="grid-cell" data-x=pos.x.to_string() data-y=pos.y.to_string()>
            {EMPTY_GLYPH}
            {move || claimed().then(|| view! { <span class="grid-marker">{MARKER_GLYPH}</span> })}
        </span>
    }
}

/// The full grid, rows top to bottom
#[component]
pub fn GridBoard() -> impl IntoView {
    let store = use_grid_store();
    let ctx = use_grid_context();

    let markers = Memo::new(move |_| store_marker_positions(&store));

    let on_click = make_on_cell_click(move |(x, y), ev| {
        let Some(pos) = GridPos::new(x, y) else { return };
        match store_click(&store, pos) {
            ClickOutcome::ShowEntry(entry) => {
                let (pointer, viewport) = pointer_and_viewport(ev);
                ctx.show_tooltip(TooltipView::for_entry(&entry, pointer, viewport));
            }
            ClickOutcome::OpenForm(pos) => {
                web_sys::console::log_1(&format!("[GRID] Claim form opened at {}", pos).into());
            }
        }
    });

    let on_enter = make_on_cell_enter(move |(x, y), ev| {
        let Some(entry) = GridPos::new(x, y).and_then(|pos| store_entry_at(&store, pos)) else {
            return;
        };
        let (pointer, viewport) = pointer_and_viewport(ev);
        ctx.show_tooltip(TooltipView::for_entry(&entry, pointer, viewport));
    });

    let on_leave = make_on_cell_leave(move || ctx.hide_tooltip());

    view! {
        <div id="ascii-grid" class="ascii-grid" on:click=on_click on:mouseover=on_enter on:mouseout=on_leave>
            {(0..GRID_HEIGHT).map(|y| view! {
                <div class="grid-row">
                    {grid::row_cells(y).map(|pos| view! { <GridCell pos=pos markers=markers /> }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
