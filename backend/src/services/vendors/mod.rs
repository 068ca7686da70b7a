//! # Vendor Service Module
//!
//! Routes under `/api/vendors` answering the comparison gateways from the
//! shared [`VendorCatalog`](crate::catalog::VendorCatalog).
//!
//! ## Sub-modules:
//! - `by_slugs`: full vendor snapshots for up to three slugs.
//! - `gallery`: media entries of a single vendor.
//! - `options`: the lightweight list feeding the slot select controls.

mod by_slugs;
mod gallery;
mod options;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all vendor-related API endpoints.
const API_PATH: &str = "/api/vendors";

/// Configures and returns the Actix `Scope` for all vendor routes.
///
/// # Registered Routes:
///
/// *   **`POST /by-slugs`**: body `VendorsBySlugsRequest`, answers a
///     `VendorsResponse` envelope. Business failures (nothing found, empty
///     request) are `200 OK` with `success: false`.
/// *   **`GET /options`**: every vendor as a `VendorOption`, sorted by name.
/// *   **`GET /{vendor_id}/gallery?limit=n`**: a `GalleryResponse`, or
///     `404 Not Found` for an unknown vendor.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/by-slugs", post().to(by_slugs::process))
        .route("/options", get().to(options::process))
        .route("/{vendor_id}/gallery", get().to(gallery::process))
}
