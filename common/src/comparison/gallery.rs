use futures::future::join_all;
use log::warn;

use crate::model::gallery::GalleryItem;

use super::gateway::GalleryGateway;
use super::slot::SLOT_COUNT;
use super::store::Slots;

/// Most media items kept per slot, whatever the gateway returns.
pub const GALLERY_LIMIT: usize = 10;

pub type Galleries = [Vec<GalleryItem>; SLOT_COUNT];

/// Vendor id to fetch media for, per slot. Non-populated slots need none.
pub fn gallery_targets(slots: &Slots) -> [Option<String>; SLOT_COUNT] {
    std::array::from_fn(|index| {
        slots[index]
            .state()
            .vendor()
            .map(|vendor| vendor.id.clone())
    })
}

/// Fetches every target concurrently and waits for all of them.
///
/// A failing slot is logged and yields an empty list; it never affects the
/// other slots. Results are cut to [`GALLERY_LIMIT`].
pub async fn load_galleries<G: GalleryGateway>(
    gateway: &G,
    targets: &[Option<String>; SLOT_COUNT],
) -> Galleries {
    let results = join_all(
        targets
            .iter()
            .enumerate()
            .map(|(index, target)| load_slot(gateway, index, target.as_deref())),
    )
    .await;

    let mut results = results.into_iter();
    std::array::from_fn(|_| results.next().unwrap_or_default())
}

async fn load_slot<G: GalleryGateway>(
    gateway: &G,
    index: usize,
    vendor_id: Option<&str>,
) -> Vec<GalleryItem> {
    let Some(vendor_id) = vendor_id else {
        return Vec::new();
    };

    match gateway.fetch_gallery_items(vendor_id).await {
        Ok(response) => {
            let mut items = response.items;
            items.truncate(GALLERY_LIMIT);
            items
        }
        Err(err) => {
            warn!("gallery for vendor {vendor_id} in slot {index} unavailable: {err}");
            Vec::new()
        }
    }
}

/// A gallery refresh handed out by [`GalleryOrchestrator::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    pub generation: u64,
    pub targets: [Option<String>; SLOT_COUNT],
}

/// Media published for one slot, tagged with the vendor it was fetched for.
#[derive(Debug, Clone, Default, PartialEq)]
struct SlotGallery {
    vendor_id: Option<String>,
    items: Vec<GalleryItem>,
    loading: bool,
}

/// Holds the published galleries and arbitrates between overlapping refreshes.
///
/// Every slot change starts a refresh of all three slots. Only the newest
/// refresh may publish; older ones that settle late are ignored. Items stay
/// bound to the vendor they belong to: a slot whose vendor changes drops its
/// previous items as soon as the refresh starts.
#[derive(Debug, Default)]
pub struct GalleryOrchestrator {
    generation: u64,
    slots: [SlotGallery; SLOT_COUNT],
}

impl GalleryOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gallery(&self, index: usize) -> &[GalleryItem] {
        self.slots
            .get(index)
            .map(|gallery| gallery.items.as_slice())
            .unwrap_or(&[])
    }

    /// Vendor id the published items of slot `index` belong to.
    pub fn vendor_id(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.vendor_id.as_deref()
    }

    /// True while slot `index` waits for media of its current vendor.
    pub fn is_loading(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|gallery| gallery.loading)
    }

    pub fn begin(&mut self, slots: &Slots) -> GalleryRequest {
        self.generation += 1;
        let targets = gallery_targets(slots);
        for (gallery, target) in self.slots.iter_mut().zip(&targets) {
            if gallery.vendor_id != *target {
                gallery.vendor_id = target.clone();
                gallery.items.clear();
            }
            gallery.loading = target.is_some();
        }
        GalleryRequest {
            generation: self.generation,
            targets,
        }
    }

    /// Publishes `galleries` if `generation` is the latest refresh.
    pub fn finish(&mut self, generation: u64, galleries: Galleries) -> bool {
        if generation != self.generation {
            return false;
        }
        for (gallery, items) in self.slots.iter_mut().zip(galleries) {
            gallery.items = items;
            gallery.loading = false;
        }
        true
    }
}
