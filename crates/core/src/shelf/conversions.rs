use super::types::{Brochure, ShelfContent, ShelfItem};

impl ShelfContent {
    /// Converts a content block into a brochure record.
    fn into_brochure(self, premium: bool) -> Brochure {
        Brochure {
            id: self.id,
            publisher_name: self
                .publisher
                .and_then(|publisher| publisher.name)
                .unwrap_or_default(),
            brochure_image: self.brochure_image,
            distance: self.distance,
            premium,
        }
    }
}

/// Converts raw shelf items into brochures.
///
/// Items without a brochure content block are dropped. The relative order
/// of the remaining items is kept.
pub fn brochures_from_shelf(items: Vec<ShelfItem>) -> Vec<Brochure> {
    items
        .into_iter()
        .filter_map(|item| match item {
            ShelfItem::Brochure { content } => Some(content.into_brochure(false)),
            ShelfItem::BrochurePremium { content } => Some(content.into_brochure(true)),
            ShelfItem::Other => None,
        })
        .collect()
}
