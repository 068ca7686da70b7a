//! # Vendor Gallery Service
//!
//! Backs `GET /api/vendors/{vendor_id}/gallery`. The client keeps at most ten
//! items per slot, so that is also the default page size here.

use crate::catalog::VendorCatalog;
use actix_web::{web, HttpResponse, Responder};
use common::comparison::GALLERY_LIMIT;
use common::requests::GalleryQuery;
use common::responses::GalleryResponse;

/// Upper bound on `limit`, whatever the caller asks for.
const MAX_LIMIT: usize = 50;

pub(crate) async fn process(
    vendor_id: web::Path<String>,
    query: web::Query<GalleryQuery>,
    catalog: web::Data<VendorCatalog>,
) -> impl Responder {
    if !catalog.contains_id(&vendor_id) {
        return HttpResponse::NotFound().body(format!("Vendor {} not found", vendor_id));
    }

    let limit = query.limit.unwrap_or(GALLERY_LIMIT).min(MAX_LIMIT);
    let items = catalog
        .gallery(&vendor_id)
        .iter()
        .take(limit)
        .cloned()
        .collect();

    HttpResponse::Ok().json(GalleryResponse { items })
}
