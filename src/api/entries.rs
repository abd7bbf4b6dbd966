//! Entry Endpoints
//!
//! List and create grid entries.

use crate::config::GridConfig;
use crate::error::ApiError;
use crate::models::{ClaimEntry, CreateEntryResponse, NewClaim};
use super::{get_json, post_json};

/// Fetch every claimed cell
pub async fn list_entries(config: &GridConfig) -> Result<Vec<ClaimEntry>, ApiError> {
    get_json(&config.entries_url()).await
}

/// Claim a cell; a server-side refusal comes back as `ApiError::Rejected`
pub async fn create_entry(config: &GridConfig, claim: &NewClaim) -> Result<(), ApiError> {
    let response: CreateEntryResponse = post_json(&config.entry_url(), claim).await?;
    response.into_result()
}
