//! Enumerable - the fluent operation set shared by every collection type.
//!
//! A type opts in by exposing its inner [`Collection`] and by knowing how to
//! create an empty instance of its own kind (`spawn`). Every transform builds
//! its result through `spawn`, so a wrapper type gets wrapper results back.
//!
//! Key behaviour across transforms:
//!
//! | operation                         | result keys                 |
//! |-----------------------------------|-----------------------------|
//! | `map`, `filter`, `sort`, `values` | renumbered `0..n`           |
//! | `nth`                             | renumbered `0..n`           |
//! | `slice`, `take`                   | original keys kept          |

use std::borrow::Borrow;
use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::collection::Collection;
use crate::data_path::{self, Path};
use crate::error::{CollectionError, CollectionResult};
use crate::key::{IntoKeys, Key};
use crate::number::{AsNumber, Number};
use crate::value::Value;

pub trait Enumerable: Sized {
    /// Type of the stored values
    type Item;

    /// The same kind of container holding another item type
    type Family<W>: Enumerable<Item = W>;

    /// Creates an empty instance of the receiver's own kind.
    fn spawn<W>(&self) -> Self::Family<W>;

    fn collection(&self) -> &Collection<Self::Item>;

    fn collection_mut(&mut self) -> &mut Collection<Self::Item>;

    /// Appends every item under a fresh index.
    fn collect<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in items {
            self.add(item);
        }
        self
    }

    fn add(&mut self, item: Self::Item) -> &mut Self {
        self.offset_set(None, item);
        self
    }

    fn push(&mut self, item: Self::Item) -> &mut Self {
        self.offset_set(None, item);
        self
    }

    /// Stores `item` under an explicit key, replacing any existing value.
    fn set(&mut self, key: impl Into<Key>, item: Self::Item) -> &mut Self {
        self.offset_set(Some(key.into()), item);
        self
    }

    /// Removes the entry at `key`; absent keys are ignored.
    fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        self.offset_unset(key);
        self
    }

    /// Looks up the entry stored under index `index`.
    ///
    /// This is a key lookup, not a position: after removals index 0 may be
    /// gone while the collection is not empty.
    fn get(&self, index: usize) -> CollectionResult<&Self::Item> {
        self.offset_get(Key::Index(index))
    }

    fn all(&self) -> &IndexMap<Key, Self::Item> {
        self.collection().entries()
    }

    fn is_empty(&self) -> bool {
        self.collection().is_empty()
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn count(&self) -> usize {
        self.collection().len()
    }

    /// Returns `true` when every given key is present.
    fn has<K: IntoKeys>(&self, keys: K) -> bool {
        keys.into_keys()
            .into_iter()
            .all(|key| self.offset_exists(key))
    }

    fn iter(&self) -> indexmap::map::Iter<'_, Key, Self::Item> {
        self.collection().entries().iter()
    }

    fn keys(&self) -> indexmap::map::Keys<'_, Key, Self::Item> {
        self.collection().entries().keys()
    }

    fn offset_exists(&self, key: impl Into<Key>) -> bool {
        self.collection().entries().contains_key(&key.into())
    }

    fn offset_get(&self, key: impl Into<Key>) -> CollectionResult<&Self::Item> {
        let key = key.into();
        match self.collection().entries().get(&key) {
            Some(item) => Ok(item),
            None => {
                log::debug!("lookup of absent key {key}");
                Err(CollectionError::KeyNotFound(key))
            }
        }
    }

    /// Writes `item` at `key`, or appends it when `key` is `None`.
    fn offset_set(&mut self, key: Option<Key>, item: Self::Item) {
        match key {
            Some(key) => self.collection_mut().insert(key, item),
            None => self.collection_mut().append(item),
        }
    }

    fn offset_unset(&mut self, key: impl Into<Key>) {
        self.collection_mut().delete(&key.into());
    }

    fn map<W, F>(&self, mut callback: F) -> Self::Family<W>
    where
        F: FnMut(&Self::Item) -> W,
    {
        let mut result: Self::Family<W> = self.spawn();
        result.collect(self.collection().entries().values().map(|item| callback(item)));
        result
    }

    fn filter<F>(&self, mut predicate: F) -> Self::Family<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut result: Self::Family<Self::Item> = self.spawn();
        result.collect(
            self.collection()
                .entries()
                .values()
                .filter(|item| predicate(item))
                .cloned(),
        );
        result
    }

    /// Sorts ascending by value and renumbers.
    fn sort(&self) -> Self::Family<Self::Item>
    where
        Self::Item: Clone + PartialOrd,
    {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Sorts with `compare` and renumbers. The sort is stable.
    fn sort_by<F>(&self, mut compare: F) -> Self::Family<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut entries: Vec<&Self::Item> = self.collection().entries().values().collect();
        entries.sort_by(|a, b| compare(a, b));

        let mut result: Self::Family<Self::Item> = self.spawn();
        result.collect(entries.into_iter().cloned());
        result
    }

    /// Calls `callback` for each entry in order until it returns `false`.
    fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&Self::Item, &Key) -> bool,
    {
        for (key, item) in self.collection().entries() {
            if !callback(item, key) {
                break;
            }
        }
        self
    }

    /// Takes a run of entries by position, keeping their keys.
    ///
    /// A negative `offset` counts from the end. A missing `length` runs to
    /// the end; a negative one stops that many entries before the end.
    fn slice(&self, offset: i64, length: Option<i64>) -> Self::Family<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut result: Self::Family<Self::Item> = self.spawn();
        let (start, len) = slice_bounds(self.count(), offset, length);
        for (key, item) in self.collection().entries().iter().skip(start).take(len) {
            result.offset_set(Some(key.clone()), item.clone());
        }
        result
    }

    /// First `limit` entries, or the last `|limit|` when negative.
    fn take(&self, limit: i64) -> Self::Family<Self::Item>
    where
        Self::Item: Clone,
    {
        if limit < 0 {
            return self.slice(limit, Some(limit.saturating_abs()));
        }
        self.slice(0, Some(limit))
    }

    fn values(&self) -> Self::Family<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut result: Self::Family<Self::Item> = self.spawn();
        result.collect(self.collection().entries().values().cloned());
        result
    }

    /// Keeps every entry whose position `p` satisfies `p % step == offset`.
    fn nth(&self, step: i64, offset: i64) -> CollectionResult<Self::Family<Self::Item>>
    where
        Self::Item: Clone,
    {
        if step == 0 {
            return Err(CollectionError::InvalidStep(step));
        }

        let mut result: Self::Family<Self::Item> = self.spawn();
        let mut position: i64 = 0;
        for item in self.collection().entries().values() {
            if position % step == offset {
                result.add(item.clone());
            }
            position += 1;
        }
        Ok(result)
    }

    fn reduce<A, F>(&self, callback: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.collection().entries().values().fold(initial, callback)
    }

    /// Runs `callback` with the wrapped value when `value` is `Some` and
    /// hands back whatever it returns. `None` leaves the receiver untouched.
    fn when<T, R, F>(&mut self, value: Option<T>, callback: F) -> Option<R>
    where
        F: FnOnce(&mut Self, T) -> R,
    {
        value.map(|value| callback(self, value))
    }

    /// Like `when`, with `default` producing the result for `None`.
    fn when_else<T, R, F, G>(&mut self, value: Option<T>, callback: F, default: G) -> R
    where
        F: FnOnce(&mut Self, T) -> R,
        G: FnOnce(&mut Self) -> R,
    {
        match value {
            Some(value) => callback(self, value),
            None => default(self),
        }
    }

    fn sum(&self) -> Number
    where
        Self::Item: AsNumber,
    {
        self.collection()
            .entries()
            .values()
            .map(AsNumber::as_number)
            .sum()
    }

    fn sum_by<N, F>(&self, mut callback: F) -> Number
    where
        N: AsNumber,
        F: FnMut(&Self::Item) -> N,
    {
        self.reduce(|total, item| total + callback(item).as_number(), Number::ZERO)
    }

    /// Sums the value found at `path` inside every item.
    ///
    /// Items without the path count as zero. A path that resolves to an
    /// array (through a wildcard) contributes the sum of its elements.
    fn sum_path(&self, path: impl Into<Path>) -> Number
    where
        Self::Item: Borrow<Value>,
    {
        let retriever = self.value_retriever(path);
        self.reduce(
            |total, item| {
                let target = <Self::Item as Borrow<Value>>::borrow(item);
                total + data_path::numeric_total(&retriever(target))
            },
            Number::ZERO,
        )
    }

    /// Builds a function that resolves `path` against an item.
    fn value_retriever(&self, path: impl Into<Path>) -> Box<dyn Fn(&Value) -> Value> {
        let segments = path.into().split(self.collection().config());
        let wildcard = self.collection().config().wildcard.clone();
        Box::new(move |item: &Value| data_path::data_get(item, &segments, &wildcard, &Value::Null))
    }

    /// Resolves `path` against `target`, falling back to `default`.
    fn data_get(&self, target: &Value, path: impl Into<Path>, default: Value) -> Value {
        data_path::resolve_path(target, path, default, self.collection().config())
    }

    /// Serializes the entries as JSON text.
    fn to_json(&self) -> CollectionResult<String>
    where
        Self::Item: Serialize,
    {
        Ok(serde_json::to_string(self.collection())?)
    }

    fn to_json_value(&self) -> CollectionResult<serde_json::Value>
    where
        Self::Item: Serialize,
    {
        Ok(serde_json::to_value(self.collection())?)
    }
}

/// Start position and entry count for a slice over `count` entries.
fn slice_bounds(count: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    if offset > count {
        return (0, 0);
    }
    let start = if offset < 0 {
        count.saturating_add(offset).max(0)
    } else {
        offset
    };
    let available = count - start;
    let len = match length {
        None => available,
        Some(length) if length < 0 => available.saturating_add(length),
        Some(length) => length.min(available),
    };
    if len <= 0 {
        return (0, 0);
    }
    (start as usize, len as usize)
}
