use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/vendors/by-slugs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorsBySlugsRequest {
    pub slugs: Vec<String>,
}

/// Query string of `GET /api/vendors/{vendor_id}/gallery`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}
