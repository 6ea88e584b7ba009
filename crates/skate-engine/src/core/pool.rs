//! Fixed-capacity object pool.
//!
//! Items are created once and toggled active/inactive; nothing is allocated or
//! freed while the game runs. Releasing a slot recycles its item back to its
//! spawn state, so a slot that comes back out of the pool always starts clean.

use crate::core::rng::Rng;

/// Items that can be returned to their spawn state.
pub trait Recycle {
    /// Reset to the state the item had when it was first put in the pool.
    fn recycle(&mut self);
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    active: bool,
}

/// A fixed set of reusable items, each either active (in play) or inactive (waiting).
#[derive(Debug, Clone)]
pub struct Pool<T: Recycle> {
    slots: Vec<Slot<T>>,
    /// Scratch list of inactive indices, reused across spawns.
    candidates: Vec<usize>,
}

impl<T: Recycle> Pool<T> {
    /// Build a pool from pre-made items. Every slot starts inactive and recycled.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let slots: Vec<Slot<T>> = items
            .into_iter()
            .map(|mut item| {
                item.recycle();
                Slot { item, active: false }
            })
            .collect();
        let candidates = Vec::with_capacity(slots.len());
        Self { slots, candidates }
    }

    /// Total number of slots. Never changes after construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently in play.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.active)
    }

    /// Activate a uniformly random inactive slot and return its index.
    /// Returns None when every slot is already active.
    pub fn activate_random(&mut self, rng: &mut Rng) -> Option<usize> {
        self.candidates.clear();
        self.candidates.extend(
            self.slots
                .iter()
                .enumerate()
                .filter(|(_, s)| !s.active)
                .map(|(i, _)| i),
        );
        if self.candidates.is_empty() {
            return None;
        }
        let index = self.candidates[rng.next_index(self.candidates.len())];
        self.slots[index].active = true;
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|s| &s.item)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|s| &mut s.item)
    }

    /// Iterate over every item, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().map(|s| &s.item)
    }

    /// Iterate over active items with their slot indices.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &s.item))
    }

    /// Iterate mutably over active items with their slot indices.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &mut s.item))
    }

    /// Return a slot to the pool. Returns true if it was active.
    pub fn release(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.active => {
                slot.item.recycle();
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    /// Release every active slot whose item matches `pred`. Returns how many were released.
    pub fn release_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let mut released = 0;
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            if pred(&slot.item) {
                slot.item.recycle();
                slot.active = false;
                released += 1;
            }
        }
        released
    }

    /// Release every slot.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.item.recycle();
            slot.active = false;
        }
    }
}
