//! In-memory gateways and recorders shared by the comparison tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::gallery::GalleryItem;
use crate::model::vendor::VendorSummary;
use crate::responses::{GalleryResponse, VendorsResponse};

use super::error::GatewayError;
use super::gateway::{GalleryGateway, VendorGateway};
use super::store::{SlotListener, Slots};
use super::url::Navigator;

pub fn vendor(slug: &str) -> VendorSummary {
    VendorSummary {
        id: format!("id-{slug}"),
        slug: slug.to_string(),
        business_name: slug.to_uppercase(),
        logo_url: None,
        rating: Some(4.5),
        starting_price: Some(1500.0),
        address: None,
        categories: vec!["Venues".into()],
        subcategories: Vec::new(),
        occasions: vec!["Wedding".into()],
        is_sponsored: false,
        is_recommended: false,
    }
}

pub fn gallery(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|n| GalleryItem {
            id: format!("img-{n}"),
            url: format!("https://cdn.example.com/{n}.jpg"),
            title: None,
        })
        .collect()
}

/// Records every slot array it is handed.
pub struct RecordingListener {
    seen: Rc<RefCell<Vec<Slots>>>,
}

impl RecordingListener {
    pub fn new() -> (Self, Rc<RefCell<Vec<Slots>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        (Self { seen: seen.clone() }, seen)
    }
}

impl SlotListener for RecordingListener {
    fn slots_changed(&mut self, slots: &Slots) {
        self.seen.borrow_mut().push(slots.clone());
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub urls: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn replace(&self, url: &str) {
        self.urls.borrow_mut().push(url.to_string());
    }
}

/// Answers from a fixed map of slug to canned result.
#[derive(Default)]
pub struct FakeVendorGateway {
    pub responses: HashMap<String, Result<VendorsResponse, GatewayError>>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl VendorGateway for FakeVendorGateway {
    async fn fetch_vendors_by_slugs(
        &self,
        slugs: &[String],
    ) -> Result<VendorsResponse, GatewayError> {
        self.calls.borrow_mut().push(slugs.to_vec());
        let slug = slugs.first().cloned().unwrap_or_default();
        self.responses
            .get(&slug)
            .cloned()
            .unwrap_or_else(|| Ok(VendorsResponse::failure("Vendor not found")))
    }
}

#[derive(Default)]
pub struct FakeGalleryGateway {
    pub items: HashMap<String, Result<Vec<GalleryItem>, GatewayError>>,
    pub calls: RefCell<Vec<String>>,
}

impl GalleryGateway for FakeGalleryGateway {
    async fn fetch_gallery_items(&self, vendor_id: &str) -> Result<GalleryResponse, GatewayError> {
        self.calls.borrow_mut().push(vendor_id.to_string());
        match self.items.get(vendor_id) {
            Some(Ok(items)) => Ok(GalleryResponse {
                items: items.clone(),
            }),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(GalleryResponse::default()),
        }
    }
}
