//! promoshelf_core - domain types, policies and collaborator traits.
//!
//! Everything in this crate is free of I/O: the HTTP source, the cache
//! backend and the state controller live in the `promoshelf_client` and
//! `promoshelf` crates and plug in through the traits defined here.

pub mod cache;
pub mod shelf;
pub mod storage;
