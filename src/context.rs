//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::GridConfig;
use crate::tooltip::TooltipView;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct GridContext {
    /// Trigger to reload entries from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload entries from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Shown tooltip (None = hidden) - read
    pub tooltip: ReadSignal<Option<TooltipView>>,
    /// Shown tooltip (None = hidden) - write
    set_tooltip: WriteSignal<Option<TooltipView>>,
    /// Page configuration
    pub config: StoredValue<GridConfig>,
}

impl GridContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        tooltip: (ReadSignal<Option<TooltipView>>, WriteSignal<Option<TooltipView>>),
        config: GridConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            tooltip: tooltip.0,
            set_tooltip: tooltip.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of entries
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn show_tooltip(&self, view: TooltipView) {
        self.set_tooltip.set(Some(view));
    }

    pub fn hide_tooltip(&self) {
        self.set_tooltip.set(None);
    }
}

/// Get the grid context
pub fn use_grid_context() -> GridContext {
    use_context::<GridContext>().expect("GridContext should be provided")
}
