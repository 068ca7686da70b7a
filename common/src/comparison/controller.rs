use log::{debug, warn};

use crate::responses::VendorsResponse;

use super::error::{ComparisonError, GatewayError};
use super::gateway::VendorGateway;
use super::slot::{Choice, SLOT_COUNT, SlotState};
use super::store::SlotStore;

/// Shown when the lookup failed for reasons the user cannot act on.
pub const GENERIC_FETCH_ERROR: &str = "Could not load vendor details. Please try again.";

/// Shown when the gateway answered but found nothing and gave no message.
pub const NOT_FOUND_ERROR: &str = "Vendor not found";

/// Handle for one in-flight vendor lookup.
///
/// The captured generation is compared against the slot's current one when
/// the response arrives; only the most recent pick may write the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub index: usize,
    pub slug: String,
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of a pick, telling the UI what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The slot was emptied.
    Cleared { index: usize },
    /// The slug already sits in `occupied_by`. Nothing changed and the
    /// control must go back to `control`.
    Rejected {
        index: usize,
        slug: String,
        occupied_by: usize,
        control: String,
    },
    /// The slot is loading; run the lookup and report back via `complete`.
    Fetch(FetchTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Populated { index: usize },
    /// The slot was reset to empty. `message` is meant for the user.
    Failed { index: usize, message: String },
    /// A newer pick owns the slot; the response was dropped.
    Stale { index: usize },
}

/// Drives slot transitions in response to user picks.
pub struct SelectionController {
    store: SlotStore,
    generations: [u64; SLOT_COUNT],
    pending: [Option<String>; SLOT_COUNT],
}

impl SelectionController {
    pub fn new(store: SlotStore) -> Self {
        Self {
            store,
            generations: [0; SLOT_COUNT],
            pending: Default::default(),
        }
    }

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SlotStore {
        &mut self.store
    }

    pub fn is_loading(&self, index: usize) -> bool {
        self.store
            .slot(index)
            .is_some_and(|slot| slot.state().is_loading())
    }

    /// Value the slot's select control should display.
    pub fn control_value(&self, index: usize) -> String {
        let Some(slot) = self.store.slot(index) else {
            return String::new();
        };

        match slot.state() {
            SlotState::Loading => self.pending[index].clone().unwrap_or_default(),
            SlotState::Populated(vendor) => vendor.slug.clone(),
            SlotState::Empty | SlotState::Error(_) => String::new(),
        }
    }

    /// Applies a pick of `raw` for slot `index`.
    ///
    /// Re-picking the slug a slot already holds is not a duplicate; it simply
    /// refreshes that slot's snapshot.
    pub fn select(&mut self, index: usize, raw: Option<&str>) -> Result<Selection, ComparisonError> {
        if index >= SLOT_COUNT {
            return Err(ComparisonError::SlotOutOfRange { index });
        }

        match Choice::parse(raw) {
            Choice::Clear => {
                self.bump(index, None);
                self.store.set_slot(index, SlotState::Empty)?;
                Ok(Selection::Cleared { index })
            }
            Choice::Vendor(slug) => {
                if let Some(occupied_by) = self.store.position_of(slug, index) {
                    return Ok(Selection::Rejected {
                        index,
                        slug: slug.to_string(),
                        occupied_by,
                        control: self.control_value(index),
                    });
                }

                let generation = self.bump(index, Some(slug.to_string()));
                self.store.set_slot(index, SlotState::Loading)?;
                Ok(Selection::Fetch(FetchTicket {
                    index,
                    slug: slug.to_string(),
                    generation,
                }))
            }
        }
    }

    /// Applies the lookup result for `ticket`.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<VendorsResponse, GatewayError>,
    ) -> Result<Completion, ComparisonError> {
        let index = ticket.index;
        if index >= SLOT_COUNT {
            return Err(ComparisonError::SlotOutOfRange { index });
        }
        if self.generations[index] != ticket.generation {
            debug!(
                "dropping stale lookup of {} for slot {index} (generation {} < {})",
                ticket.slug, ticket.generation, self.generations[index]
            );
            return Ok(Completion::Stale { index });
        }
        self.pending[index] = None;

        let message = match outcome {
            Ok(response) if response.success => {
                match response.data.and_then(|data| data.into_iter().next()) {
                    Some(vendor) => match self.store.position_of(&vendor.slug, index) {
                        None => {
                            self.store.set_slot(index, SlotState::Populated(vendor))?;
                            return Ok(Completion::Populated { index });
                        }
                        Some(other) => format!(
                            "{} is already being compared in slot {}.",
                            vendor.business_name,
                            other + 1
                        ),
                    },
                    None => non_blank(response.error).unwrap_or_else(|| NOT_FOUND_ERROR.to_string()),
                }
            }
            Ok(response) => {
                non_blank(response.error).unwrap_or_else(|| NOT_FOUND_ERROR.to_string())
            }
            Err(err) => {
                warn!("vendor lookup of {} for slot {index} failed: {err}", ticket.slug);
                GENERIC_FETCH_ERROR.to_string()
            }
        };

        self.store.set_slot(index, SlotState::Empty)?;
        Ok(Completion::Failed { index, message })
    }

    fn bump(&mut self, index: usize, pending: Option<String>) -> u64 {
        self.generations[index] += 1;
        self.pending[index] = pending;
        self.generations[index]
    }
}

/// Runs the single-slug lookup a ticket asks for.
pub async fn fetch_selection<G: VendorGateway>(
    gateway: &G,
    ticket: &FetchTicket,
) -> Result<VendorsResponse, GatewayError> {
    gateway
        .fetch_vendors_by_slugs(std::slice::from_ref(&ticket.slug))
        .await
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|message| !message.trim().is_empty())
}
