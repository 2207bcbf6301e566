//! Whether a collection holds more than one element.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Count items matching `predicate`, stopping as soon as a second match is seen.
pub fn count_exceeds_one<I, F>(items: I, mut predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).nth(1).is_some()
}

/// Whether more than one element is present.
pub trait Many {
    fn many(&self) -> bool;
}

/// Whether more than one element satisfies a predicate.
pub trait ManyBy<T> {
    fn many_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;
}

/// Whether more than one entry satisfies a key/value predicate.
pub trait ManyEntries<K, V> {
    fn many_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool;
}

impl<T> Many for [T] {
    fn many(&self) -> bool {
        self.len() > 1
    }
}

impl<T> Many for Vec<T> {
    fn many(&self) -> bool {
        self.len() > 1
    }
}

impl<T> ManyBy<T> for [T] {
    fn many_by<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        count_exceeds_one(self.iter(), |item| predicate(*item))
    }
}

impl<T> ManyBy<T> for Vec<T> {
    fn many_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().many_by(predicate)
    }
}

impl<K, V, S> Many for HashMap<K, V, S> {
    fn many(&self) -> bool {
        self.len() > 1
    }
}

impl<K, V, S> ManyEntries<K, V> for HashMap<K, V, S> {
    fn many_by<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        count_exceeds_one(self.iter(), |(key, value)| predicate(*key, *value))
    }
}

impl<K, V> Many for BTreeMap<K, V> {
    fn many(&self) -> bool {
        self.len() > 1
    }
}

impl<K, V> ManyEntries<K, V> for BTreeMap<K, V> {
    fn many_by<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        count_exceeds_one(self.iter(), |(key, value)| predicate(*key, *value))
    }
}

impl Many for Map<String, Value> {
    fn many(&self) -> bool {
        self.len() > 1
    }
}

impl ManyEntries<String, Value> for Map<String, Value> {
    fn many_by<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&String, &Value) -> bool,
    {
        count_exceeds_one(self.iter(), |(key, value)| predicate(*key, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn many_is_true_with_more_than_one_element() {
        assert!(vec![1, 2].many());
        assert!(!vec![1].many());
        assert!(!Vec::<i32>::new().many());
    }

    #[test]
    fn many_by_counts_matching_elements() {
        assert!(vec![1, 2, 3].many_by(|n| n % 2 == 1));
        assert!(!vec![1, 2, 4].many_by(|n| n % 2 == 1));
    }

    #[test]
    fn many_by_on_maps_sees_key_and_value() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        assert!(map.many());
        assert!(map.many_by(|_, value| *value > 1));
        assert!(!map.many_by(|key, _| *key == "a"));
    }

    #[test]
    fn many_on_json_objects() {
        let object = json!({"a": 1, "b": null});
        let map = object.as_object().unwrap();

        assert!(map.many());
        assert!(!map.many_by(|_, value| value.is_null()));
    }
}
