use serde::{Deserialize, Serialize};

use crate::model::gallery::GalleryItem;
use crate::model::vendor::VendorSummary;

/// Envelope returned by the vendor lookup action.
///
/// `success == false` is a business failure (for instance an unknown slug) and
/// carries a message meant for the user in `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<VendorSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VendorsResponse {
    pub fn found(data: Vec<VendorSummary>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryResponse {
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}
