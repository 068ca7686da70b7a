use std::collections::HashSet;

use crate::model::vendor::VendorSummary;

use super::error::ComparisonError;
use super::slot::{EMPTY_SENTINEL, SLOT_COUNT, Slot, SlotState};

pub type Slots = [Slot; SLOT_COUNT];

/// Subscriber notified after every store mutation.
///
/// Notifications are coarse: a listener receives the whole array and is
/// expected to recompute whatever it derives from it.
pub trait SlotListener {
    fn slots_changed(&mut self, slots: &Slots);
}

/// Canonical holder of the comparison slots.
pub struct SlotStore {
    slots: Slots,
    listeners: Vec<Box<dyn SlotListener>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|index| Slot::new(index, SlotState::Empty)),
            listeners: Vec::new(),
        }
    }

    /// Builds a store from vendors resolved before mount.
    ///
    /// Slugs are trimmed the way picks are. Entries without an id or a usable
    /// slug are skipped, as are repeats of a slug already seeded. Anything past the first three valid vendors is
    /// dropped and missing positions stay empty.
    pub fn seeded(vendors: impl IntoIterator<Item = VendorSummary>) -> Self {
        let mut seen = HashSet::new();
        let mut accepted = vendors
            .into_iter()
            .map(|mut vendor| {
                let slug = vendor.slug.trim();
                if slug.len() != vendor.slug.len() {
                    vendor.slug = slug.to_string();
                }
                vendor
            })
            .filter(|vendor| is_seedable(vendor) && seen.insert(vendor.slug.clone()))
            .take(SLOT_COUNT);

        Self {
            slots: std::array::from_fn(|index| match accepted.next() {
                Some(vendor) => Slot::new(index, SlotState::Populated(vendor)),
                None => Slot::new(index, SlotState::Empty),
            }),
            listeners: Vec::new(),
        }
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn subscribe(&mut self, listener: Box<dyn SlotListener>) {
        self.listeners.push(listener);
    }

    /// Replaces the state of one slot and notifies every listener.
    ///
    /// The new array is derived from the previous one with a single position
    /// swapped, so listeners never observe a half-applied transition.
    pub fn set_slot(&mut self, index: usize, state: SlotState) -> Result<(), ComparisonError> {
        if index >= SLOT_COUNT {
            return Err(ComparisonError::SlotOutOfRange { index });
        }

        let mut next = self.slots.clone();
        next[index] = Slot::new(index, state);
        self.slots = next;
        self.publish();
        Ok(())
    }

    /// Dispatches the current slots to all listeners without changing them.
    pub fn publish(&mut self) {
        for listener in &mut self.listeners {
            listener.slots_changed(&self.slots);
        }
    }

    /// Index of the populated slot holding `slug`, ignoring `except`.
    pub fn position_of(&self, slug: &str, except: usize) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| slot.index() != except && slot.state().slug() == Some(slug))
            .map(Slot::index)
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

fn is_seedable(vendor: &VendorSummary) -> bool {
    !vendor.id.trim().is_empty() && !vendor.slug.is_empty() && vendor.slug != EMPTY_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::testing::{RecordingListener, vendor};

    #[test]
    fn new_store_has_three_empty_slots() {
        let store = SlotStore::new();
        assert_eq!(store.slots().len(), SLOT_COUNT);
        for (index, slot) in store.slots().iter().enumerate() {
            assert_eq!(slot.index(), index);
            assert_eq!(slot.state(), &SlotState::Empty);
        }
    }

    #[test]
    fn seeding_truncates_and_pads() {
        let store = SlotStore::seeded(vec![vendor("a"), vendor("b")]);
        assert_eq!(store.slots()[0].state().slug(), Some("a"));
        assert_eq!(store.slots()[1].state().slug(), Some("b"));
        assert_eq!(store.slots()[2].state(), &SlotState::Empty);

        let store = SlotStore::seeded(["a", "b", "c", "d"].map(vendor));
        assert_eq!(store.slots()[2].state().slug(), Some("c"));
        assert_eq!(store.slots().len(), SLOT_COUNT);
    }

    #[test]
    fn seeding_skips_invalid_and_duplicate_entries() {
        let mut missing_id = vendor("x");
        missing_id.id = String::new();

        let store = SlotStore::seeded(vec![
            vendor("empty"),
            missing_id,
            vendor("a"),
            vendor("a"),
            vendor("b"),
        ]);

        assert_eq!(store.slots()[0].state().slug(), Some("a"));
        assert_eq!(store.slots()[1].state().slug(), Some("b"));
        assert_eq!(store.slots()[2].state(), &SlotState::Empty);
    }

    #[test]
    fn seeded_slugs_are_trimmed() {
        let mut padded = vendor("a");
        padded.slug = " a ".into();

        let store = SlotStore::seeded(vec![padded, vendor("a"), vendor("b")]);

        assert_eq!(store.slots()[0].state().slug(), Some("a"));
        assert_eq!(store.slots()[1].state().slug(), Some("b"));
        assert_eq!(store.position_of("a", 2), Some(0));
    }

    #[test]
    fn set_slot_replaces_one_position() {
        let mut store = SlotStore::seeded(vec![vendor("a"), vendor("b")]);
        store.set_slot(1, SlotState::Loading).unwrap();

        assert_eq!(store.slots()[0].state().slug(), Some("a"));
        assert!(store.slots()[1].state().is_loading());
        assert_eq!(store.slots()[1].index(), 1);
    }

    #[test]
    fn set_slot_rejects_out_of_range_index() {
        let mut store = SlotStore::new();
        let err = store.set_slot(3, SlotState::Loading).unwrap_err();
        assert_eq!(err, ComparisonError::SlotOutOfRange { index: 3 });
    }

    #[test]
    fn listeners_see_every_mutation() {
        let (listener, seen) = RecordingListener::new();
        let mut store = SlotStore::new();
        store.subscribe(Box::new(listener));

        store.set_slot(0, SlotState::Loading).unwrap();
        store.set_slot(0, SlotState::Populated(vendor("a"))).unwrap();
        store.publish();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0][0].state().is_loading());
        assert_eq!(seen[1][0].state().slug(), Some("a"));
        assert_eq!(seen[2], seen[1]);
    }

    #[test]
    fn position_of_ignores_the_asking_slot() {
        let store = SlotStore::seeded(vec![vendor("a")]);
        assert_eq!(store.position_of("a", 0), None);
        assert_eq!(store.position_of("a", 2), Some(0));
        assert_eq!(store.position_of("b", 2), None);
    }
}
