use crate::catalog::VendorCatalog;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(catalog: web::Data<VendorCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.options())
}
