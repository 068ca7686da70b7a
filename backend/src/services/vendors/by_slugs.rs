//! # Vendor Lookup Service
//!
//! Backs `POST /api/vendors/by-slugs`. The comparison page calls it with a
//! single slug whenever a slot is picked, and with up to three slugs when it
//! restores a shared comparison URL.

use crate::catalog::VendorCatalog;
use actix_web::{web, HttpResponse, Responder};
use common::comparison::{NOT_FOUND_ERROR, SLOT_COUNT};
use common::requests::VendorsBySlugsRequest;
use common::responses::VendorsResponse;
use log::debug;

pub(crate) async fn process(
    request: web::Json<VendorsBySlugsRequest>,
    catalog: web::Data<VendorCatalog>,
) -> impl Responder {
    HttpResponse::Ok().json(lookup(&catalog, request.into_inner()))
}

/// Resolves the requested slugs, honouring at most one per comparison slot.
fn lookup(catalog: &VendorCatalog, request: VendorsBySlugsRequest) -> VendorsResponse {
    let slugs: Vec<String> = request
        .slugs
        .into_iter()
        .map(|slug| slug.trim().to_string())
        .filter(|slug| !slug.is_empty())
        .take(SLOT_COUNT)
        .collect();

    if slugs.is_empty() {
        return VendorsResponse::failure("No vendor slugs provided");
    }

    let vendors = catalog.by_slugs(&slugs);
    debug!("Resolved {} of {:?}", vendors.len(), slugs);

    if vendors.is_empty() {
        VendorsResponse::failure(NOT_FOUND_ERROR)
    } else {
        VendorsResponse::found(vendors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn returns_requested_vendor() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample()))
                .service(crate::services::vendors::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/vendors/by-slugs")
            .set_json(VendorsBySlugsRequest {
                slugs: vec!["rose-hall".into()],
            })
            .to_request();
        let body: VendorsResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        assert_eq!(body.data.unwrap()[0].id, "v1");
    }

    #[actix_web::test]
    async fn unknown_slug_is_a_business_failure() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample()))
                .service(crate::services::vendors::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/vendors/by-slugs")
            .set_json(VendorsBySlugsRequest {
                slugs: vec!["newvendor".into()],
            })
            .to_request();
        let body: VendorsResponse = test::call_and_read_body_json(&app, req).await;

        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Vendor not found"));
    }

    #[::core::prelude::v1::test]
    fn blank_request_is_rejected() {
        let response = lookup(
            &sample(),
            VendorsBySlugsRequest {
                slugs: vec![" ".into()],
            },
        );
        assert!(!response.success);
        assert!(response.data.is_none());
    }

    #[::core::prelude::v1::test]
    fn extra_slugs_are_ignored() {
        let response = lookup(
            &sample(),
            VendorsBySlugsRequest {
                slugs: vec![
                    "a".into(),
                    "b".into(),
                    "c".into(),
                    "rose-hall".into(),
                ],
            },
        );
        assert_eq!(response.error.as_deref(), Some(NOT_FOUND_ERROR));
    }
}
