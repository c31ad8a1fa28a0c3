use async_trait::async_trait;

use crate::shelf::{Brochure, ShelfItem};

use super::Result;

/// Remote source of raw shelf items.
#[async_trait]
pub trait ShelfSource: Send + Sync {
    /// Fetches every item on the shelf, in source order.
    async fn fetch_shelf(&self) -> Result<Vec<ShelfItem>>;
}

/// Repository of brochure records.
#[async_trait]
pub trait BrochureRepository: Send + Sync {
    /// Returns all brochures, bypassing any cached copy when `force_refresh`
    /// is set.
    async fn get_brochures(&self, force_refresh: bool) -> Result<Vec<Brochure>>;
}
