//! Vendor comparison state machine.
//!
//! Three fixed slots, each either empty or holding a vendor snapshot. The
//! pieces are wired as follows:
//!
//! - [`SlotStore`] owns the slots and exposes the single `set_slot` mutation.
//!   Every mutation derives a fresh array and is dispatched to the
//!   registered [`SlotListener`]s.
//! - [`SelectionController`] turns a user's pick into a store transition,
//!   rejects duplicates and hands out [`FetchTicket`]s for the vendor lookup.
//!   A per-slot generation counter discards responses that were overtaken by
//!   a newer pick.
//! - [`GalleryOrchestrator`] and [`load_galleries`] fan out one gallery
//!   request per populated slot and join them before publishing.
//! - [`UrlSynchronizer`] keeps the shareable URL a pure function of the
//!   populated slugs.
//!
//! Nothing here touches the network or the DOM. Gateways and navigation are
//! traits implemented by the frontend (and by in-memory fakes in tests).

mod controller;
mod error;
mod gallery;
mod gateway;
mod slot;
mod store;
mod url;

pub use controller::{
    Completion, FetchTicket, GENERIC_FETCH_ERROR, NOT_FOUND_ERROR, SelectionController, Selection,
    fetch_selection,
};
pub use error::{ComparisonError, GatewayError};
pub use gallery::{
    GALLERY_LIMIT, Galleries, GalleryOrchestrator, GalleryRequest, gallery_targets, load_galleries,
};
pub use gateway::{GalleryGateway, VendorGateway};
pub use slot::{Choice, EMPTY_SENTINEL, SLOT_COUNT, Slot, SlotState};
pub use store::{SlotListener, SlotStore, Slots};
pub use url::{
    Navigator, QUERY_PARAM, UrlSynchronizer, comparison_query, comparison_url,
    parse_comparison_query,
};

#[cfg(test)]
pub(crate) mod testing;
