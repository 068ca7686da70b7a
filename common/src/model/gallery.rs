use serde::{Deserialize, Serialize};

/// A single media entry shown under a compared vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}
