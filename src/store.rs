//! Grid Client State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::grid::{self, GridPos};
use crate::models::{ClaimDraft, ClaimEntry, NewClaim};

/// Page-lifetime client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GridState {
    /// Every known claim, replaced wholesale on each list fetch
    pub entries: Vec<ClaimEntry>,
    /// Cell the claim form is open for (None = form closed)
    pub selected: Option<GridPos>,
}

/// What a click on a cell leads to
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Cell is claimed, show its entry
    ShowEntry(ClaimEntry),
    /// Cell is free, open the claim form for it
    OpenForm(GridPos),
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First entry claiming the cell
    pub fn entry_at(&self, pos: GridPos) -> Option<&ClaimEntry> {
        self.entries.iter().find(|entry| entry.is_at(pos))
    }

    pub fn click(&self, pos: GridPos) -> ClickOutcome {
        match self.entry_at(pos) {
            Some(entry) => ClickOutcome::ShowEntry(entry.clone()),
            None => ClickOutcome::OpenForm(pos),
        }
    }
}

/// First step of a claim submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// Form is closed, nothing to send
    Closed,
    /// Local validation failed, with the alert text
    Invalid(String),
    /// Send this claim
    Send(NewClaim),
}

/// Type alias for the store
pub type GridStore = Store<GridState>;

/// Get the grid store from context
pub fn use_grid_store() -> GridStore {
    expect_context::<GridStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the entry cache with a fresh list
pub fn store_replace_entries(store: &GridStore, entries: Vec<ClaimEntry>) {
    *store.entries().write() = entries;
}

/// Entry claiming the cell, without tracking
pub fn store_entry_at(store: &GridStore, pos: GridPos) -> Option<ClaimEntry> {
    store.read_untracked().entry_at(pos).cloned()
}

/// Resolve a click against the cache, opening the form for free cells
pub fn store_click(store: &GridStore, pos: GridPos) -> ClickOutcome {
    let outcome = store.read_untracked().click(pos);
    if let ClickOutcome::OpenForm(pos) = outcome {
        *store.selected().write() = Some(pos);
    }
    outcome
}

/// Cell the claim form is open for
pub fn store_selected(store: &GridStore) -> Option<GridPos> {
    *store.selected().read()
}

/// Cell the claim form is open for, without tracking
pub fn store_selected_untracked(store: &GridStore) -> Option<GridPos> {
    *store.selected().read_untracked()
}

/// Close the claim form
pub fn store_close_form(store: &GridStore) {
    *store.selected().write() = None;
}

/// Validate the form against the selected cell
pub fn store_begin_submit(store: &GridStore, draft: &ClaimDraft) -> SubmitStep {
    let Some(pos) = store_selected_untracked(store) else {
        return SubmitStep::Closed;
    };
    match draft.validate(pos) {
        Ok(claim) => SubmitStep::Send(claim),
        Err(e) => SubmitStep::Invalid(e.to_string()),
    }
}

/// Apply a create response
///
/// Success runs `reload` and closes the form. A failure leaves the form
/// open and returns the alert text.
pub fn store_finish_submit(store: &GridStore, result: Result<(), ApiError>, reload: impl FnOnce()) -> Option<String> {
    match result {
        Ok(()) => {
            reload();
            store_close_form(store);
            None
        }
        Err(e) => Some(e.user_message()),
    }
}

/// Apply a list response; on failure the last known-good entries stay
pub fn store_apply_load(store: &GridStore, result: Result<Vec<ClaimEntry>, ApiError>) -> Result<usize, ApiError> {
    let entries = result?;
    let count = entries.len();
    store_replace_entries(store, entries);
    Ok(count)
}

/// Number of cached entries
pub fn store_entry_count(store: &GridStore) -> usize {
    store.entries().read().len()
}

/// Claimed in-bounds cells
pub fn store_marker_positions(store: &GridStore) -> BTreeSet<GridPos> {
    grid::marker_positions(&store.entries().read())
}
