use std::collections::HashSet;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::slot::{EMPTY_SENTINEL, SLOT_COUNT};
use super::store::{SlotListener, Slots};

/// Query parameter carrying the compared slugs.
pub const QUERY_PARAM: &str = "vendors";

const SLUG: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Populated slugs in slot order, comma-joined. `None` when nothing is selected.
pub fn comparison_query(slots: &Slots) -> Option<String> {
    let slugs: Vec<String> = slots
        .iter()
        .filter_map(|slot| slot.state().slug())
        .map(|slug| utf8_percent_encode(slug, SLUG).to_string())
        .collect();

    if slugs.is_empty() {
        None
    } else {
        Some(slugs.join(","))
    }
}

pub fn comparison_url(base_path: &str, slots: &Slots) -> String {
    match comparison_query(slots) {
        Some(query) => format!("{base_path}?{QUERY_PARAM}={query}"),
        None => base_path.to_string(),
    }
}

/// Reads the requested slugs back out of a location search string.
///
/// Accepts the string with or without its leading `?`. Blank entries and the
/// empty sentinel are dropped, repeats are collapsed and at most
/// [`SLOT_COUNT`] slugs are returned.
pub fn parse_comparison_query(search: &str) -> Vec<String> {
    let Some(raw) = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix(QUERY_PARAM)?.strip_prefix('='))
    else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    raw.split(',')
        .map(|part| percent_decode_str(part).decode_utf8_lossy().trim().to_string())
        .filter(|slug| !slug.is_empty() && slug != EMPTY_SENTINEL)
        .filter(|slug| seen.insert(slug.clone()))
        .take(SLOT_COUNT)
        .collect()
}

/// Applies a URL to the browser history without a navigation.
pub trait Navigator {
    /// Replaces the current entry. Implementations must not reset scroll.
    fn replace(&self, url: &str);
}

/// Keeps the navigable URL in line with the populated slots.
pub struct UrlSynchronizer<N> {
    base_path: String,
    navigator: N,
    applied: Option<String>,
}

impl<N: Navigator> UrlSynchronizer<N> {
    pub fn new(base_path: impl Into<String>, navigator: N) -> Self {
        Self {
            base_path: base_path.into(),
            navigator,
            applied: None,
        }
    }

    pub fn sync(&mut self, slots: &Slots) {
        let url = comparison_url(&self.base_path, slots);
        if self.applied.as_deref() == Some(url.as_str()) {
            return;
        }
        self.navigator.replace(&url);
        self.applied = Some(url);
    }
}

impl<N: Navigator> SlotListener for UrlSynchronizer<N> {
    fn slots_changed(&mut self, slots: &Slots) {
        self.sync(slots);
    }
}
