use crate::model::vendor::VendorSummary;

/// Number of comparison positions. Fixed for the lifetime of a store.
pub const SLOT_COUNT: usize = 3;

/// Control value the select boxes use for "no vendor".
pub const EMPTY_SENTINEL: &str = "empty";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Loading,
    Populated(VendorSummary),
    Error(String),
}

impl SlotState {
    pub fn vendor(&self) -> Option<&VendorSummary> {
        match self {
            SlotState::Populated(vendor) => Some(vendor),
            _ => None,
        }
    }

    /// Slug of the held vendor. Only populated slots have one.
    pub fn slug(&self) -> Option<&str> {
        self.vendor().map(|vendor| vendor.slug.as_str())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SlotState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    index: usize,
    state: SlotState,
}

impl Slot {
    pub(crate) fn new(index: usize, state: SlotState) -> Self {
        Self { index, state }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }
}

/// What a raw control value asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<'a> {
    Clear,
    Vendor(&'a str),
}

impl<'a> Choice<'a> {
    /// Absent, blank and the `"empty"` sentinel all mean "clear the slot".
    pub fn parse(raw: Option<&'a str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(EMPTY_SENTINEL) => Choice::Clear,
            Some(slug) => Choice::Vendor(slug),
        }
    }
}
