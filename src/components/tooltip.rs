//! Tooltip Component
//!
//! Floating name and message of a claimed cell.

use leptos::prelude::*;

use crate::context::use_grid_context;

#[component]
pub fn Tooltip() -> impl IntoView {
    let ctx = use_grid_context();

    move || {
        ctx.tooltip.get().map(|tip| {
            let style = tip.style();
            view! {
                <div id="tooltip" class="tooltip" style=style>
                    <strong>{tip.name}</strong>
                    <br />
                    {tip.message}
                </div>
            }
        })
    }
}
