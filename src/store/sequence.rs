//! Ordered storage with id lookup.
//!
//! Order lives in a `Vec`; a `HashMap` from id to index answers "where is X"
//! without a scan. Every splice re-indexes only the affected range.

use std::collections::HashMap;

use super::Entity;

#[derive(Debug, Clone)]
pub struct OrderedSequence<T: Entity> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> OrderedSequence<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.position(id).map(|i| &self.items[i])
    }

    /// Mutable access for field edits. Callers must not change the item's id.
    pub(crate) fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        let i = self.position(id)?;
        self.items.get_mut(i)
    }

    pub(crate) fn push(&mut self, item: T) {
        debug_assert!(!self.contains(&item.id()), "duplicate id {}", item.id());
        self.index.insert(item.id(), self.items.len());
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> Option<T> {
        let i = self.index.remove(id)?;
        let item = self.items.remove(i);
        self.reindex(i, self.items.len());
        Some(item)
    }

    /// Inserts at `at`, clamped to the end of the sequence.
    pub(crate) fn insert(&mut self, at: usize, item: T) {
        let at = at.min(self.items.len());
        debug_assert!(!self.contains(&item.id()), "duplicate id {}", item.id());
        self.items.insert(at, item);
        self.reindex(at, self.items.len());
    }

    /// Removes the item at `from` and reinserts it at `to` (post-removal index).
    pub(crate) fn move_index(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        self.reindex(from.min(to), from.max(to) + 1);
    }

    /// Removes every item matching `remove`, returning them in sequence order.
    pub(crate) fn drain_where(&mut self, mut remove: impl FnMut(&T) -> bool) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| remove(item));
        self.items = kept;
        self.index.clear();
        self.reindex(0, self.items.len());
        removed
    }

    fn reindex(&mut self, start: usize, end: usize) {
        for (offset, item) in self.items[start..end].iter().enumerate() {
            self.index.insert(item.id(), start + offset);
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
