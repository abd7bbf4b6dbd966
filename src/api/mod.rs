//! Grid Entry API
//!
//! Frontend bindings to the grid entry endpoints, over `fetch`.

mod entries;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::{js_error_message, ApiError};

// Re-export all public items
pub use entries::*;

fn network(err: JsValue) -> ApiError {
    ApiError::Network(js_error_message(&err))
}

/// Issue a request and decode the JSON body
async fn fetch_json<T: DeserializeOwned>(url: &str, init: &RequestInit) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let request = Request::new_with_str_and_init(url, init).map_err(network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let json = JsFuture::from(response.json().map_err(network)?)
        .await
        .map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

/// GET request
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    fetch_json(url, &init).await
}

/// POST request with a JSON body
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let headers = Headers::new().map_err(network)?;
    headers.set("Content-Type", "application/json").map_err(network)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    fetch_json(url, &init).await
}
