//! Browser Dialogs

use crate::error::js_error_message;

/// Blocking alert box
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            web_sys::console::error_1(&format!("[CLAIM] Alert failed: {}", js_error_message(&e)).into());
        }
    }
}
