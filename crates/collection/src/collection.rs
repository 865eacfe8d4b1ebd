//! Collection - an ordered map from `Key` to value with PHP array semantics.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::PathConfig;
use crate::enumerable::Enumerable;
use crate::key::Key;

/// Ordered, mutable container of entries.
///
/// Entries keep insertion order. Appending without a key assigns the next
/// free integer index, which is one past the largest index ever stored; it
/// does not move back when entries are removed.
#[derive(Clone)]
pub struct Collection<V> {
    list: IndexMap<Key, V>,
    next_index: usize,
    config: Arc<PathConfig>,
}

impl<V> Collection<V> {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::with_config(Arc::new(PathConfig::default()))
    }

    /// Creates an empty collection sharing the given path settings
    pub fn with_config(config: Arc<PathConfig>) -> Self {
        Self {
            list: IndexMap::new(),
            next_index: 0,
            config,
        }
    }

    /// Creates a collection holding `items`, each under a fresh index
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut collection = Self::new();
        collection.collect(items);
        collection
    }

    pub fn config(&self) -> &Arc<PathConfig> {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The index the next append will use
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns `true` when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.list
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position))
    }

    pub(crate) fn entries(&self) -> &IndexMap<Key, V> {
        &self.list
    }

    /// Appends under the next free index.
    ///
    /// Once the index space is exhausted the next index stays at
    /// `usize::MAX`; an append onto that occupied slot is refused and the
    /// stored entry is left alone.
    pub(crate) fn append(&mut self, value: V) {
        let key = Key::Index(self.next_index);
        if self.list.contains_key(&key) {
            log::warn!("cannot append: next index {key} is already occupied");
            return;
        }
        self.list.insert(key, value);
        self.next_index = self.next_index.saturating_add(1);
    }

    pub(crate) fn insert(&mut self, key: Key, value: V) {
        if let Key::Index(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        log::trace!("setting entry at key {key}");
        self.list.insert(key, value);
    }

    pub(crate) fn delete(&mut self, key: &Key) -> Option<V> {
        let removed = self.list.shift_remove(key);
        if removed.is_none() {
            log::trace!("removal of absent key {key} ignored");
        }
        removed
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Enumerable for Collection<V> {
    type Item = V;
    type Family<W> = Collection<W>;

    fn spawn<W>(&self) -> Collection<W> {
        Collection::with_config(Arc::clone(&self.config))
    }

    fn collection(&self) -> &Collection<V> {
        self
    }

    fn collection_mut(&mut self) -> &mut Collection<V> {
        self
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.list.iter()).finish()
    }
}

// Order matters: two collections are equal when they hold the same entries
// in the same order.
impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.list.len() == other.list.len() && self.list.iter().eq(other.list.iter())
    }
}

impl<V> Index<usize> for Collection<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.list[&Key::Index(index)]
    }
}

impl<V> Index<&str> for Collection<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        &self.list[&Key::from(key)]
    }
}

impl<V> Index<&Key> for Collection<V> {
    type Output = V;

    fn index(&self, key: &Key) -> &V {
        &self.list[key]
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(items: Vec<V>) -> Self {
        Self::with_items(items)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(items: [V; N]) -> Self {
        Self::with_items(items)
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::with_items(iter)
    }
}

impl<V> FromIterator<(Key, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (key, value) in iter {
            collection.insert(key, value);
        }
        collection
    }
}

impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
