//! Collection behaviour tests.
//!
//! Covers construction, mutation, lookup and every fluent transform,
//! including how keys carry through each of them.

use ordered_collection::*;

fn values_of<V: Clone>(collection: &Collection<V>) -> Vec<V> {
    collection.all().values().cloned().collect()
}

fn keys_of<V>(collection: &Collection<V>) -> Vec<Key> {
    collection.keys().cloned().collect()
}

fn indices(range: std::ops::Range<usize>) -> Vec<Key> {
    range.map(Key::Index).collect()
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_construct_with_items() {
        let collection = Collection::with_items(vec!["a", "b", "c"]);
        assert_eq!(collection.count(), 3);
        assert_eq!(keys_of(&collection), indices(0..3));
        assert_eq!(values_of(&collection), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_construct_empty() {
        let collection: Collection<String> = Collection::with_items(Vec::new());
        assert!(collection.is_empty());
        assert!(!collection.is_not_empty());
    }

    #[test]
    fn test_collect_appends_and_chains() {
        let mut collection = Collection::from(vec![1]);
        collection.collect(vec![2, 3]).add(4);
        assert_eq!(values_of(&collection), vec![1, 2, 3, 4]);
        assert_eq!(keys_of(&collection), indices(0..4));
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut collection: Collection<i32> = (1..=3).collect();
        collection.extend([4, 5]);
        assert_eq!(values_of(&collection), vec![1, 2, 3, 4, 5]);
    }
}

#[cfg(test)]
mod mutation_tests {
    use super::*;

    #[test]
    fn test_add_and_push_are_equivalent() {
        let mut added = Collection::new();
        added.add("x").add("y");
        let mut pushed = Collection::new();
        pushed.push("x").push("y");
        assert_eq!(added, pushed);
    }

    #[test]
    fn test_remove_leaves_gap() {
        let mut collection = Collection::from(vec![10, 20, 30]);
        collection.remove(1usize);

        assert_eq!(collection.count(), 2);
        assert_eq!(keys_of(&collection), vec![Key::Index(0), Key::Index(2)]);
        assert!(collection.get(1).is_err());
        assert_eq!(collection.get(2).unwrap(), &30);
    }

    #[test]
    fn test_add_never_overwrites_the_largest_index() {
        let mut collection = Collection::new();
        collection.set(usize::MAX.to_string(), "kept");
        collection.add("appended").push("pushed");

        assert_eq!(collection.count(), 1);
        assert_eq!(collection.get(usize::MAX).unwrap(), &"kept");
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut collection = Collection::from(vec![1, 2]);
        let before = collection.clone();
        collection.remove(9usize).remove("missing");
        assert_eq!(collection, before);
    }

    #[test]
    fn test_append_after_removal_does_not_reuse_index() {
        let mut collection = Collection::from(vec![1, 2, 3]);
        collection.remove(2usize).add(4);
        assert_eq!(
            keys_of(&collection),
            vec![Key::Index(0), Key::Index(1), Key::Index(3)]
        );
    }

    #[test]
    fn test_explicit_keys() {
        let mut collection = Collection::new();
        collection.set("name", "neo").set(5usize, "five").push("six");

        assert_eq!(collection.offset_get("name").unwrap(), &"neo");
        assert_eq!(collection.get(6).unwrap(), &"six");
        assert_eq!(collection["name"], "neo");
        assert_eq!(collection[5], "five");
    }

    #[test]
    fn test_numeric_string_key_is_an_index() {
        let mut collection = Collection::new();
        collection.set("3", 'a');
        assert!(collection.offset_exists(3usize));
        assert_eq!(collection.get(3).unwrap(), &'a');
    }

    #[test]
    fn test_offset_protocol() {
        let mut collection = Collection::new();
        collection.offset_set(None, 1);
        collection.offset_set(Some(Key::from("k")), 2);
        assert!(collection.offset_exists("k"));

        collection.offset_unset("k");
        assert!(!collection.offset_exists("k"));
        assert_eq!(
            collection.offset_get("k"),
            Err(CollectionError::KeyNotFound(Key::from("k")))
        );
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_get_missing_key_fails() {
        let collection = Collection::from(vec![1]);
        assert_eq!(
            collection.get(5).unwrap_err(),
            CollectionError::KeyNotFound(Key::Index(5))
        );
    }

    #[test]
    fn test_get_uses_stored_key_not_position() {
        let mut collection = Collection::from(vec!["a", "b", "c"]);
        collection.remove(0usize);
        assert!(collection.get(0).is_err());
        assert_eq!(collection.get(1).unwrap(), &"b");
    }

    #[test]
    fn test_has_single_and_multiple_keys() {
        let mut collection = Collection::new();
        collection.set("a", 1).set("b", 2).add(3);

        assert!(collection.has("a"));
        assert!(collection.has(["a", "b"]));
        assert!(collection.has(vec![Key::from("b"), Key::Index(0)]));
        assert!(!collection.has(["a", "z"]));

        collection.remove("b");
        assert!(!collection.has(["a", "b"]));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let collection = Collection::from(vec![1, 2, 3]);
        let first: Vec<_> = collection.iter().map(|(_, v)| *v).collect();
        let second: Vec<_> = (&collection).into_iter().map(|(_, v)| *v).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2, 3]);
    }

    #[test]
    fn test_each_stops_on_false() {
        let collection = Collection::from(vec![1, 2, 3, 4]);
        let mut seen = Vec::new();
        collection.each(|value, key| {
            seen.push((key.clone(), *value));
            *value < 2
        });
        assert_eq!(seen, vec![(Key::Index(0), 1), (Key::Index(1), 2)]);
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn test_map_renumbers_and_keeps_receiver() {
        let mut collection = Collection::new();
        collection.set("a", 1).set("b", 2);

        let mapped = collection.map(|n| n * 10);
        assert_eq!(values_of(&mapped), vec![10, 20]);
        assert_eq!(keys_of(&mapped), indices(0..2));
        assert_eq!(values_of(&collection), vec![1, 2]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let collection = Collection::from(vec![1, 2]);
        let labels = collection.map(|n| format!("#{n}"));
        assert_eq!(values_of(&labels), vec!["#1".to_string(), "#2".to_string()]);
    }

    #[test]
    fn test_filter_preserves_order_and_renumbers() {
        let collection = Collection::from(vec![5, 2, 8, 1, 9]);
        let big = collection.filter(|n| *n > 4);
        assert_eq!(values_of(&big), vec![5, 8, 9]);
        assert_eq!(keys_of(&big), indices(0..3));
    }

    #[test]
    fn test_sort_default_and_comparator() {
        let collection = Collection::from(vec![3, 1, 2]);
        assert_eq!(values_of(&collection.sort()), vec![1, 2, 3]);
        assert_eq!(keys_of(&collection.sort()), indices(0..3));

        let descending = collection.sort_by(|a, b| b.cmp(a));
        assert_eq!(values_of(&descending), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_mixes_numbers_and_numeric_strings() {
        let collection = Collection::from(vec![
            Value::from("10"),
            Value::Int(9),
            Value::from("2.5"),
            Value::Float(3.0),
        ]);
        assert_eq!(
            values_of(&collection.sort()),
            vec![
                Value::from("2.5"),
                Value::Float(3.0),
                Value::Int(9),
                Value::from("10"),
            ]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let collection = Collection::from(vec![(1, 'b'), (0, 'x'), (1, 'a')]);
        let sorted = collection.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(values_of(&sorted), vec![(0, 'x'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_slice_keeps_keys() {
        let collection = Collection::from(vec!["a", "b", "c", "d", "e"]);

        let middle = collection.slice(1, Some(2));
        assert_eq!(values_of(&middle), vec!["b", "c"]);
        assert_eq!(keys_of(&middle), vec![Key::Index(1), Key::Index(2)]);

        let tail = collection.slice(-2, None);
        assert_eq!(values_of(&tail), vec!["d", "e"]);
        assert_eq!(keys_of(&tail), vec![Key::Index(3), Key::Index(4)]);

        let trimmed = collection.slice(1, Some(-1));
        assert_eq!(values_of(&trimmed), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_slice_whole_collection_is_identical() {
        let mut collection = Collection::new();
        collection.set("x", 1).add(2).set(7usize, 3);
        let copy = collection.slice(0, Some(collection.count() as i64));
        assert_eq!(copy, collection);
    }

    #[test]
    fn test_take() {
        let collection = Collection::from(vec![1, 2, 3, 4, 5]);

        let head = collection.take(2);
        assert_eq!(values_of(&head), vec![1, 2]);
        assert_eq!(keys_of(&head), indices(0..2));

        let last = collection.take(-2);
        assert_eq!(values_of(&last), vec![4, 5]);
        assert_eq!(keys_of(&last), vec![Key::Index(3), Key::Index(4)]);

        assert_eq!(collection.take(10).count(), 5);
        assert_eq!(collection.take(-10).count(), 5);
        assert!(collection.take(0).is_empty());
    }

    #[test]
    fn test_values_reindexes() {
        let mut collection = Collection::new();
        collection.set("a", 'x').set(9usize, 'y');
        let values = collection.values();
        assert_eq!(keys_of(&values), indices(0..2));
        assert_eq!(values_of(&values), vec!['x', 'y']);
        assert_eq!(values.next_index(), 2);
    }

    #[test]
    fn test_nth() {
        let collection = Collection::from(vec![10, 20, 30, 40, 50]);
        assert_eq!(values_of(&collection.nth(2, 0).unwrap()), vec![10, 30, 50]);
        assert_eq!(values_of(&collection.nth(2, 1).unwrap()), vec![20, 40]);
        assert_eq!(values_of(&collection.nth(1, 0).unwrap()), vec![10, 20, 30, 40, 50]);
        assert!(collection.nth(2, 5).unwrap().is_empty());
    }

    #[test]
    fn test_nth_uses_position_not_key() {
        let mut collection = Collection::from(vec![10, 20, 30, 40]);
        collection.remove(0usize);
        assert_eq!(values_of(&collection.nth(2, 0).unwrap()), vec![20, 40]);
    }

    #[test]
    fn test_reduce() {
        let collection = Collection::from(vec!["a", "b", "c"]);
        let joined = collection.reduce(
            |mut acc: String, s| {
                acc.push_str(s);
                acc
            },
            String::new(),
        );
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_when() {
        let mut collection = Collection::from(vec![1]);
        let count = collection.when(Some(2), |c, extra| c.add(extra).count());
        assert_eq!(count, Some(2));

        let skipped = collection.when(None::<i32>, |c, extra| {
            c.add(extra);
        });
        assert!(skipped.is_none());

        collection.when_else(
            None::<i32>,
            |c, extra| {
                c.add(extra);
            },
            |c| {
                c.add(0);
            },
        );
        assert_eq!(values_of(&collection), vec![1, 2, 0]);
    }

    #[test]
    fn test_when_returns_derived_collection() {
        let mut collection = Collection::from(vec![5, 1, 8, 3]);

        let above = collection
            .when(Some(2), |c, floor| c.filter(|n| *n > floor))
            .unwrap();
        assert_eq!(values_of(&above), vec![5, 8, 3]);

        let sorted = collection.when_else(None::<bool>, |c, _| c.values(), |c| c.sort());
        assert_eq!(values_of(&sorted), vec![1, 3, 5, 8]);
        assert_eq!(values_of(&collection), vec![5, 1, 8, 3]);
    }

    #[test]
    fn test_chaining_transforms() {
        let collection = Collection::from((1..=10).collect::<Vec<i32>>());
        let result = collection
            .filter(|n| n % 2 == 0)
            .map(|n| n * n)
            .sort_by(|a, b| b.cmp(a))
            .take(3);
        assert_eq!(values_of(&result), vec![100, 64, 36]);
    }
}

#[cfg(test)]
mod sum_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sum_plain_values() {
        assert_eq!(Collection::from(vec![1, 2, 3]).sum(), Number::Int(6));
        assert_eq!(Collection::from(vec![0.5, 1.0]).sum(), Number::Float(1.5));
        assert_eq!(Collection::<i32>::new().sum(), Number::ZERO);
    }

    #[test]
    fn test_sum_with_callback() {
        let collection = Collection::from(vec![1, 2, 3]);
        assert_eq!(collection.sum_by(|x| x * 2), Number::Int(12));
    }

    #[test]
    fn test_sum_with_path() {
        let collection: Collection<Value> = Collection::from(vec![
            Value::from(json!({"a": {"b": 2}})),
            Value::from(json!({"a": {"b": 3}})),
        ]);
        assert_eq!(collection.sum_path("a.b"), Number::Int(5));
    }

    #[test]
    fn test_sum_path_skips_missing_and_coerces_strings() {
        let collection: Collection<Value> = Collection::from(vec![
            Value::from(json!({"price": "2.5"})),
            Value::from(json!({"other": 1})),
            Value::from(json!({"price": 4})),
        ]);
        assert_eq!(collection.sum_path("price"), Number::Float(6.5));
    }

    #[test]
    fn test_sum_path_through_wildcard() {
        let collection: Collection<Value> = Collection::from(vec![
            Value::from(json!({"lines": [{"qty": 1}, {"qty": 2}]})),
            Value::from(json!({"lines": [{"qty": 3}]})),
        ]);
        assert_eq!(collection.sum_path("lines.*.qty"), Number::Int(6));
    }

    #[test]
    fn test_data_get_with_default() {
        let collection: Collection<Value> = Collection::new();
        let target = Value::from(json!({"a": [{"b": 1}]}));
        assert_eq!(collection.data_get(&target, "a.0.b", Value::Null), Value::Int(1));
        assert_eq!(
            collection.data_get(&target, "a.1.b", Value::from("none")),
            Value::from("none")
        );
    }
}
