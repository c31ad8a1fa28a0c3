//! promoshelf_client - HTTP source for the promoshelf shelf endpoint.

pub mod client;
pub mod error;

pub use client::ShelfClient;
pub use error::{ClientError, Result};
