//! Profile Image Component
//!
//! Header image that hides itself if it fails to load.

use leptos::prelude::*;

use crate::context::use_grid_context;

#[component]
pub fn ProfileImage() -> impl IntoView {
    let ctx = use_grid_context();
    let (failed, set_failed) = signal(false);

    ctx.config.with_value(|c| c.profile_image.clone()).map(move |src| {
        view! {
            <img
                class="profile-image"
                src=src
                alt=""
                style:display=move || if failed.get() { "none" } else { "inline-block" }
                on:error=move |_| {
                    web_sys::console::log_1(&"[GRID] Profile image failed to load, hiding it".into());
                    set_failed.set(true);
                }
            />
        }
    })
}
