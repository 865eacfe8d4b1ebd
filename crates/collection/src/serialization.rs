//! Serde support for `Collection`.
//!
//! A collection whose keys are exactly `0..len` in order serializes as a
//! sequence. Anything else (names, gaps, out-of-order indices) serializes as
//! a map with string keys.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::Collection;
use crate::key::Key;

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.entries().values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.entries() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

struct CollectionVisitor<V> {
    marker: PhantomData<fn() -> Collection<V>>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence or a map")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut collection: Collection<V> = Collection::new();
        while let Some(value) = seq.next_element()? {
            collection.append(value);
        }
        Ok(collection)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut collection: Collection<V> = Collection::new();
        while let Some((key, value)) = map.next_entry::<Key, V>()? {
            collection.insert(key, value);
        }
        Ok(collection)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor {
            marker: PhantomData,
        })
    }
}
