//! Cached repository decorators.
//!
//! The decorators implement the cache-aside pattern: read the cache first,
//! and on a miss (or a forced refresh) fetch from the remote source and
//! write the result back.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let source = Arc::new(ShelfClient::from_env());
//! let cache = Arc::new(MemoryCache::new());
//!
//! let repository = CachedBrochureRepository::new(source, cache);
//! ```

mod brochure;

pub use brochure::CachedBrochureRepository;
