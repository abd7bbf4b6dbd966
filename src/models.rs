//! Frontend Models
//!
//! Data structures matching the grid entry endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ClaimError};
use crate::grid::GridPos;

/// Claimed cell (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub x: i64,
    pub y: i64,
    pub name: String,
    pub message: String,
}

impl ClaimEntry {
    /// Cell this entry occupies, None when outside the grid
    pub fn pos(&self) -> Option<GridPos> {
        GridPos::from_signed(self.x, self.y)
    }

    pub fn is_at(&self, pos: GridPos) -> bool {
        self.pos() == Some(pos)
    }
}

/// Create request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClaim {
    pub x: u32,
    pub y: u32,
    pub name: String,
    pub message: String,
}

impl NewClaim {
    /// The entry the server stores for this claim
    #[cfg(test)]
    pub fn into_entry(self) -> ClaimEntry {
        ClaimEntry {
            id: None,
            x: self.x.into(),
            y: self.y.into(),
            name: self.name,
            message: self.message,
        }
    }
}

/// Raw claim form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimDraft {
    pub name: String,
    pub message: String,
}

impl ClaimDraft {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Trim both fields and bind them to a cell
    pub fn validate(&self, pos: GridPos) -> Result<NewClaim, ClaimError> {
        let name = self.name.trim();
        let message = self.message.trim();
        if name.is_empty() || message.is_empty() {
            return Err(ClaimError::MissingFields);
        }
        Ok(NewClaim {
            x: pos.x,
            y: pos.y,
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

/// Create response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEntryResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateEntryResponse {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_default()))
        }
    }
}
