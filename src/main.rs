#![allow(warnings)]
//! ASCII Grid Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod grid;
mod models;
mod store;
mod tooltip;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
