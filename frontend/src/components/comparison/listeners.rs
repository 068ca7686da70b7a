//! Browser-side subscribers of the slot store.

use common::comparison::{Navigator, SlotListener, Slots};
use gloo_console::warn;
use wasm_bindgen::JsValue;
use yew::html::Scope;

use super::messages::Msg;
use super::state::ComparisonSelector;

/// Rewrites the current history entry with `replaceState`, which neither
/// reloads the page nor moves the scroll position.
pub struct BrowserHistory;

impl Navigator for BrowserHistory {
    fn replace(&self, url: &str) {
        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
            return;
        };
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
            warn!("Could not update the comparison URL", err);
        }
    }
}

/// Asks the component to refresh all galleries after any slot change.
pub struct GalleryRefresh {
    link: Scope<ComparisonSelector>,
}

impl GalleryRefresh {
    pub fn new(link: Scope<ComparisonSelector>) -> Self {
        Self { link }
    }
}

impl SlotListener for GalleryRefresh {
    fn slots_changed(&mut self, _slots: &Slots) {
        self.link.send_message(Msg::RefreshGalleries);
    }
}
