//! promoshelf - cached brochure loading and list state for nearby offers.
//!
//! The crate wires the pieces defined in `promoshelf_core` together:
//!
//! - [`cache::MemoryCache`] keeps the last loaded brochure list.
//! - [`storage::cached::CachedBrochureRepository`] reads through that cache
//!   and falls back to a remote [`ShelfSource`](promoshelf_core::storage::ShelfSource).
//! - [`usecase::GetBrochures`] narrows the repository result by distance.
//! - [`state::ListStateController`] owns the observable [`state::ShelfState`]
//!   and refreshes it whenever the distance filter changes.

pub mod cache;
pub mod config;
pub mod output;
pub mod state;
pub mod storage;
pub mod usecase;

pub use config::Config;
pub use state::{ListStateController, ShelfState};
pub use usecase::GetBrochures;
