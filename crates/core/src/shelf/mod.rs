mod conversions;
mod filter;
mod types;

pub use conversions::brochures_from_shelf;
pub use filter::{
    apply_distance_filter, within_distance, FilterCriteria, DEFAULT_DISTANCE_KM, MAX_DISTANCE_KM,
};
pub use types::{Brochure, EmbeddedContents, Publisher, ShelfContent, ShelfItem, ShelfResponse};
