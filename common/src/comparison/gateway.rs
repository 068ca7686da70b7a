use crate::responses::{GalleryResponse, VendorsResponse};

use super::error::GatewayError;

/// Remote lookup of full vendor snapshots by slug.
#[allow(async_fn_in_trait)]
pub trait VendorGateway {
    async fn fetch_vendors_by_slugs(
        &self,
        slugs: &[String],
    ) -> Result<VendorsResponse, GatewayError>;
}

/// Remote lookup of a vendor's media.
#[allow(async_fn_in_trait)]
pub trait GalleryGateway {
    async fn fetch_gallery_items(&self, vendor_id: &str) -> Result<GalleryResponse, GatewayError>;
}
