//! HTTP implementations of the comparison gateways, talking to the backend's
//! `/api/vendors` routes.

use common::comparison::{GalleryGateway, GatewayError, VendorGateway, GALLERY_LIMIT};
use common::model::vendor::VendorOption;
use common::requests::VendorsBySlugsRequest;
use common::responses::{GalleryResponse, VendorsResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const VENDORS_API: &str = "/api/vendors";

#[derive(Clone, Copy, Default)]
pub struct HttpGateway;

impl VendorGateway for HttpGateway {
    async fn fetch_vendors_by_slugs(
        &self,
        slugs: &[String],
    ) -> Result<VendorsResponse, GatewayError> {
        let body = VendorsBySlugsRequest {
            slugs: slugs.to_vec(),
        };
        let response = Request::post(&format!("{}/by-slugs", VENDORS_API))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

impl GalleryGateway for HttpGateway {
    async fn fetch_gallery_items(&self, vendor_id: &str) -> Result<GalleryResponse, GatewayError> {
        let vendor_id = String::from(js_sys::encode_uri_component(vendor_id));
        let response = Request::get(&format!(
            "{}/{}/gallery?limit={}",
            VENDORS_API, vendor_id, GALLERY_LIMIT
        ))
        .send()
        .await
        .map_err(transport)?;
        decode(response).await
    }
}

/// Loads the vendors offered in the slot select controls.
pub async fn fetch_vendor_options() -> Result<Vec<VendorOption>, GatewayError> {
    let response = Request::get(&format!("{}/options", VENDORS_API))
        .send()
        .await
        .map_err(transport)?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::UnexpectedStatus {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

fn transport(err: gloo_net::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
