//! ASCII Grid Frontend App
//!
//! Root component: owns the client state and keeps the entry cache fresh.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ClaimModal, GridBoard, ProfileImage, Tooltip};
use crate::config::GridConfig;
use crate::context::GridContext;
use crate::store::{store_apply_load, store_entry_count, GridState};
use crate::tooltip::TooltipView;

#[component]
pub fn App() -> impl IntoView {
    let config = GridConfig::from_document();
    let title = config.title.clone();

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let tooltip = signal::<Option<TooltipView>>(None);
    let store = Store::new(GridState::new());

    // Provide context to all children
    let ctx = GridContext::new((reload_trigger, set_reload_trigger), tooltip, config);
    provide_context(ctx);
    provide_context(store);

    // Load entries on mount and after every claim
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let config = ctx.config.get_value();
        spawn_local(async move {
            match store_apply_load(&store, api::list_entries(&config).await) {
                Ok(count) => {
                    web_sys::console::log_1(&format!("[GRID] Loaded {} entries, trigger={}", count, trigger).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[GRID] Error loading grid entries: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="page-header">
                <ProfileImage />
                <h1>{title}</h1>
            </header>

            <GridBoard />

            <p class="entry-count">{move || format!("{} cells claimed", store_entry_count(&store))}</p>

            <ClaimModal />
            <Tooltip />
        </div>
    }
}
