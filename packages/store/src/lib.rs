#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Bounded stores for estimates a user holds on to.
//!
//! The UI layers share two explicit store objects instead of scattering
//! list manipulation across call sites: a saved list keyed by estimate
//! id (newest first) and a comparison list capped at four entries with
//! idempotent membership. Both are single-session stores; estimates are
//! held purely as opaque value objects.

use homesight_models::PropertyEstimate;

/// Maximum number of properties that can be compared side by side.
pub const COMPARISON_CAPACITY: usize = 4;

/// Saved properties, newest first, keyed by estimate id.
#[derive(Debug, Clone, Default)]
pub struct SavedList {
    items: Vec<PropertyEstimate>,
}

impl SavedList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Saves an estimate at the front of the list.
    ///
    /// Re-saving an id replaces the old copy rather than duplicating
    /// it.
    pub fn add(&mut self, estimate: PropertyEstimate) {
        self.items.retain(|existing| existing.id != estimate.id);
        self.items.insert(0, estimate);
    }

    /// Removes an estimate by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|estimate| estimate.id != id);
        self.items.len() != before
    }

    /// Looks up a saved estimate by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PropertyEstimate> {
        self.items.iter().find(|estimate| estimate.id == id)
    }

    /// Whether an id is saved.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyEstimate> {
        self.items.iter()
    }

    /// Number of saved estimates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a SavedList {
    type Item = &'a PropertyEstimate;
    type IntoIter = std::slice::Iter<'a, PropertyEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Side-by-side comparison list, capped at [`COMPARISON_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct ComparisonList {
    items: Vec<PropertyEstimate>,
}

impl ComparisonList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds an estimate, returning whether it was admitted.
    ///
    /// A duplicate id or a full list is a no-op returning `false`.
    pub fn add(&mut self, estimate: PropertyEstimate) -> bool {
        if self.items.len() >= COMPARISON_CAPACITY || self.contains(&estimate.id) {
            return false;
        }
        self.items.push(estimate);
        true
    }

    /// Removes an estimate by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|estimate| estimate.id != id);
        self.items.len() != before
    }

    /// Whether an id is in the comparison.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|estimate| estimate.id == id)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyEstimate> {
        self.items.iter()
    }

    /// Number of entries, never above [`COMPARISON_CAPACITY`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another estimate can be admitted.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.items.len() < COMPARISON_CAPACITY
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a ComparisonList {
    type Item = &'a PropertyEstimate;
    type IntoIter = std::slice::Iter<'a, PropertyEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
