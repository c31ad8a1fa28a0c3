//! Cached brochure repository.
//!
//! Wraps a `ShelfSource` with a single-slot cache holding the converted
//! brochure list.

use std::sync::Arc;

use async_trait::async_trait;

use promoshelf_core::cache::SlotCache;
use promoshelf_core::shelf::{brochures_from_shelf, Brochure};
use promoshelf_core::storage::{BrochureRepository, Result, ShelfSource};

/// Cached brochure repository.
///
/// Implements the cache-aside pattern:
/// - **Reads**: return the cached list unless it is missing or empty, or the
///   caller forces a refresh
/// - **Misses**: fetch from the source, convert, and write back to the cache
///
/// Cache failures never reach the caller. A failed read counts as a miss and
/// a failed write is dropped. Source failures are returned verbatim and leave
/// the cache untouched.
///
/// # Type Parameters
///
/// * `S` - The remote shelf source
/// * `C` - The cache implementation
pub struct CachedBrochureRepository<S, C>
where
    S: ShelfSource,
    C: SlotCache<Vec<Brochure>>,
{
    source: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> CachedBrochureRepository<S, C>
where
    S: ShelfSource,
    C: SlotCache<Vec<Brochure>>,
{
    /// Creates a new cached brochure repository.
    ///
    /// # Arguments
    ///
    /// * `source` - The remote source to read through to
    /// * `cache` - The cache holding the last loaded list
    pub fn new(source: Arc<S>, cache: Arc<C>) -> Self {
        Self { source, cache }
    }

    async fn load_from_source(&self) -> Result<Vec<Brochure>> {
        let items = self.source.fetch_shelf().await?;
        Ok(brochures_from_shelf(items))
    }
}

#[async_trait]
impl<S, C> BrochureRepository for CachedBrochureRepository<S, C>
where
    S: ShelfSource + 'static,
    C: SlotCache<Vec<Brochure>> + 'static,
{
    async fn get_brochures(&self, force_refresh: bool) -> Result<Vec<Brochure>> {
        // An unreadable cache is treated as an empty one
        let cached = self.cache.get().await.ok().flatten();

        if let Some(brochures) = cached {
            if !force_refresh && !brochures.is_empty() {
                tracing::trace!(count = brochures.len(), "Cache hit for brochures");
                return Ok(brochures);
            }
        }

        tracing::trace!(force_refresh, "Cache miss for brochures");
        let brochures = self.load_from_source().await?;

        // Write-back is best effort
        let _ = self.cache.set(brochures.clone()).await;

        tracing::debug!(
            count = brochures.len(),
            force_refresh,
            "Loaded brochures from remote source"
        );
        Ok(brochures)
    }
}
