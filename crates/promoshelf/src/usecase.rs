//! Brochure loading narrowed by the distance filter.

use std::sync::Arc;

use promoshelf_core::shelf::{apply_distance_filter, Brochure};
use promoshelf_core::storage::{BrochureRepository, Result};

/// Loads brochures and keeps the ones within a distance.
#[derive(Clone)]
pub struct GetBrochures {
    repository: Arc<dyn BrochureRepository>,
}

impl GetBrochures {
    pub fn new(repository: Arc<dyn BrochureRepository>) -> Self {
        Self { repository }
    }

    /// Fetches brochures through the repository and applies the distance
    /// filter. Repository errors are returned unchanged.
    pub async fn execute(&self, distance_km: f64, force_refresh: bool) -> Result<Vec<Brochure>> {
        let brochures = self.repository.get_brochures(force_refresh).await?;
        Ok(apply_distance_filter(brochures, distance_km))
    }
}
