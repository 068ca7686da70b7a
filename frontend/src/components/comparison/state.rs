//! Component state for the comparison page.

use common::comparison::{
    GalleryOrchestrator, SelectionController, SlotStore, UrlSynchronizer, SLOT_COUNT,
};
use yew::prelude::*;

use super::helpers::set_select_value;
use super::listeners::{BrowserHistory, GalleryRefresh};

/// Main state container for the `ComparisonSelector`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ComparisonSelector {
    /// Owns the slot store; every slot transition goes through it.
    pub controller: SelectionController,

    /// Galleries currently published for each slot.
    pub galleries: GalleryOrchestrator,

    /// One `<select>` per slot.
    pub select_refs: [NodeRef; SLOT_COUNT],
}

impl ComparisonSelector {
    /// Seeds the slots from the props and registers the store listeners.
    ///
    /// The initial `publish` makes the URL match the seeded slots and starts
    /// the first gallery load.
    pub fn new(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut store = SlotStore::seeded(props.initial_vendors.iter().cloned());
        store.subscribe(Box::new(UrlSynchronizer::new(
            props.base_path.to_string(),
            BrowserHistory,
        )));
        store.subscribe(Box::new(GalleryRefresh::new(ctx.link().clone())));
        store.publish();

        Self {
            controller: SelectionController::new(store),
            galleries: GalleryOrchestrator::new(),
            select_refs: Default::default(),
        }
    }

    pub fn set_control(&self, index: usize, value: &str) {
        if let Some(node_ref) = self.select_refs.get(index) {
            set_select_value(node_ref, value);
        }
    }

    pub fn sync_controls(&self) {
        for index in 0..SLOT_COUNT {
            self.set_control(index, &self.controller.control_value(index));
        }
    }
}
