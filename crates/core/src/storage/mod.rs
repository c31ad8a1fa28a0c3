mod error;
mod traits;

pub use error::{RemoteFetchError, Result};
pub use traits::{BrochureRepository, ShelfSource};
