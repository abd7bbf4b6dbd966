//! UI Components
//!
//! Leptos components making up the grid page.

mod grid_board;
mod claim_modal;
mod tooltip;
mod profile_image;

pub use grid_board::GridBoard;
pub use claim_modal::ClaimModal;
pub use tooltip::Tooltip;
pub use profile_image::ProfileImage;
