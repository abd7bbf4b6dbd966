//! Claim Modal Component
//!
//! Form for claiming the selected cell with a name and message.

use gloo_timers::callback::Timeout;
use grid_pointer::make_on_backdrop_press;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_grid_context;
use crate::dialog::alert;
use crate::models::ClaimDraft;
use crate::store::{
    store_begin_submit, store_close_form, store_finish_submit, store_selected, use_grid_store, SubmitStep,
};

/// Claim form overlay, visible while a cell is selected
#[component]
pub fn ClaimModal() -> impl IntoView {
    let store = use_grid_store();
    let ctx = use_grid_context();

    let (name, set_name) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let name_ref = NodeRef::<leptos::html::Input>::new();

    let is_open = move || store_selected(&store).is_some();

    // Fresh, focused form every time it opens
    Effect::new(move |_| {
        if store_selected(&store).is_some() {
            set_name.set(String::new());
            set_message.set(String::new());
            Timeout::new(0, move || {
                if let Some(input) = name_ref.get_untracked() {
                    let _ = input.focus();
                }
            })
            .forget();
        }
    });

    let close = move || store_close_form(&store);
    let on_backdrop = make_on_backdrop_press(close);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ClaimDraft::new(name.get_untracked(), message.get_untracked());
        let claim = match store_begin_submit(&store, &draft) {
            SubmitStep::Send(claim) => claim,
            SubmitStep::Invalid(text) => {
                alert(&text);
                return;
            }
            SubmitStep::Closed => return,
        };

        let config = ctx.config.get_value();
        spawn_local(async move {
            let result = api::create_entry(&config, &claim).await;
            match &result {
                Ok(()) => web_sys::console::log_1(
                    &format!("[CLAIM] Claimed ({}, {}) for {}", claim.x, claim.y, claim.name).into(),
                ),
                Err(e) => web_sys::console::error_1(
                    &format!("[CLAIM] Submit for ({}, {}) failed: {}", claim.x, claim.y, e).into(),
                ),
            }
            if let Some(text) = store_finish_submit(&store, result, || ctx.reload()) {
                alert(&text);
            }
        });
    };

    view! {
        <div
            id="entryModal"
            class="modal-backdrop"
            style:display=move || if is_open() { "block" } else { "none" }
            on:click=on_backdrop
        >
            <div class="modal-content">
                <h2>
                    "Claim cell "
                    <span id="positionText">
                        {move || store_selected(&store).map(|pos| pos.to_string()).unwrap_or_default()}
                    </span>
                </h2>
                <form class="claim-form" on:submit=submit>
                    <input
                        id="nameInput"
                        type="text"
                        placeholder="Your name"
                        autocomplete="off"
                        node_ref=name_ref
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <textarea
                        id="messageInput"
                        placeholder="Leave a message..."
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-actions">
                        <button type="submit">"Claim"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
