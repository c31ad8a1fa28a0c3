use serde::{Deserialize, Serialize};

/// A brochure as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brochure {
    pub id: i64,
    pub publisher_name: String,
    pub brochure_image: Option<String>,
    pub distance: Option<f64>,
    pub premium: bool,
}

impl Brochure {
    /// Creates a non-premium brochure without image or distance.
    pub fn new(id: i64, publisher_name: impl Into<String>) -> Self {
        Self {
            id,
            publisher_name: publisher_name.into(),
            brochure_image: None,
            distance: None,
            premium: false,
        }
    }

    /// Sets the brochure image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.brochure_image = Some(image.into());
        self
    }

    /// Sets the distance in kilometers.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Marks the brochure as premium.
    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }
}

/// Top-level document returned by the shelf endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShelfResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedContents,
}

impl ShelfResponse {
    /// Consumes the response and returns its items in source order.
    pub fn into_items(self) -> Vec<ShelfItem> {
        self.embedded.contents
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmbeddedContents {
    pub contents: Vec<ShelfItem>,
}

/// A raw shelf item, tagged by `contentType`.
///
/// Only the two brochure variants carry displayable content. Every other
/// tag (banners, carousels, anything added server-side later) decodes to
/// [`ShelfItem::Other`] and its payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "contentType")]
pub enum ShelfItem {
    #[serde(rename = "brochure")]
    Brochure { content: ShelfContent },
    #[serde(rename = "brochurePremium")]
    BrochurePremium { content: ShelfContent },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfContent {
    pub id: i64,
    #[serde(default)]
    pub brochure_image: Option<String>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publisher {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
