//! Page Configuration
//!
//! Optional settings embedded in the host page as
//! `<script type="application/json" id="grid-config">`.

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the config script element
pub const CONFIG_ELEMENT_ID: &str = "grid-config";

const ENTRIES_PATH: &str = "/grid-entries";
const ENTRY_PATH: &str = "/grid-entry";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Prefix for the entry endpoints, empty for same origin
    pub api_base: String,
    /// Header image, hidden if it fails to load
    pub profile_image: Option<String>,
    pub title: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            profile_image: None,
            title: "ASCII Grid".to_string(),
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config block from the page, falling back to defaults
    pub fn from_document() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::error_1(&format!("[GRID] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    /// List endpoint
    pub fn entries_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), ENTRIES_PATH)
    }

    /// Create endpoint
    pub fn entry_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), ENTRY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.entries_url(), "/grid-entries");
        assert_eq!(config.entry_url(), "/grid-entry");
        assert_eq!(config.profile_image, None);
    }

    #[test]
    fn test_partial_json() {
        let config = GridConfig::from_json(r#"{"api_base":"https://grid.example/"}"#).unwrap();
        assert_eq!(config.entries_url(), "https://grid.example/grid-entries");
        assert_eq!(config.entry_url(), "https://grid.example/grid-entry");
        assert_eq!(config.title, "ASCII Grid");
    }

    #[test]
    fn test_full_json() {
        let json = r#"{"api_base":"/api","profile_image":"/static/me.png","title":"Wall"}"#;
        let config = GridConfig::from_json(json).unwrap();
        assert_eq!(config.profile_image.as_deref(), Some("/static/me.png"));
        assert_eq!(config.title, "Wall");
        assert_eq!(config.entries_url(), "/api/grid-entries");
    }

    #[test]
    fn test_malformed_json() {
        assert!(GridConfig::from_json("{not json").is_err());
        assert!(GridConfig::from_json(r#"{"title": 5}"#).is_err());
    }
}
