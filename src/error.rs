//! Error Types
//!
//! Typed failures for claim validation, network calls and page config.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Local claim form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Please fill in both name and message")]
    MissingFields,
}

/// Failure talking to the grid entry endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Text shown to the visitor when a submission fails
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(msg) => format!("Error: {}", msg),
            _ => "Failed to submit entry".to_string(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Malformed page config block
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Best-effort message for a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Rejected("Position already occupied".to_string()).user_message(),
            "Error: Position already occupied"
        );
        assert_eq!(ApiError::Network("offline".to_string()).user_message(), "Failed to submit entry");
        assert_eq!(
            ApiError::Status { status: 405, status_text: "Method Not Allowed".to_string() }.user_message(),
            "Failed to submit entry"
        );
        assert_eq!(ApiError::NoWindow.user_message(), "Failed to submit entry");
    }

    #[test]
    fn test_validation_text() {
        assert_eq!(ClaimError::MissingFields.to_string(), "Please fill in both name and message");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn js_errors_become_messages() {
        assert_eq!(js_error_message(&JsValue::from_str("blocked")), "blocked");
        let err: JsValue = js_sys::Error::new("alert is not allowed").into();
        assert_eq!(js_error_message(&err), "alert is not allowed");
    }
}
