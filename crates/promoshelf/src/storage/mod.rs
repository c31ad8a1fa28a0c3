//! Repository implementations.

pub mod cached;
