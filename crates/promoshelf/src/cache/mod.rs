//! Cache backend implementations.
//!
//! This module provides concrete implementations of the cache traits
//! defined in `promoshelf_core::cache`. Only an in-process backend exists;
//! cached values do not survive the process.

mod memory;

pub use memory::MemoryCache;
