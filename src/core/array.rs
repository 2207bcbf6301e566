//! Vector helpers: compaction, set-like arithmetic, statistics and sentences.

use serde_json::Value;
use std::fmt::{Debug, Display};

use crate::defaults;
use crate::error::{Error, Result};
use crate::utils::vacant::Vacant;

pub trait ArrayExt<T> {
    /// True when `other` is non-empty and adds nothing new to a duplicate-free self.
    fn is_combinatorial(&self, other: &[T]) -> bool
    where
        T: PartialEq;

    /// Copy without absent or empty elements.
    fn compress(&self) -> Vec<T>
    where
        T: Vacant + Clone;

    /// Drop absent or empty elements in place; true when anything was removed.
    fn compress_mut(&mut self) -> bool
    where
        T: Vacant;

    /// Copy without any occurrence of the given elements.
    fn excluding(&self, elements: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Copy with the given elements appended.
    fn including(&self, elements: &[T]) -> Vec<T>
    where
        T: Clone;

    /// Copy with `elements` placed between every pair of neighbours.
    fn intersperse(&self, elements: &[T]) -> Vec<T>
    where
        T: Clone;

    fn maximum<K, F>(&self, key: F) -> Option<K>
    where
        K: Ord,
        F: Fn(&T) -> K;

    fn minimum<K, F>(&self, key: F) -> Option<K>
    where
        K: Ord,
        F: Fn(&T) -> K;

    /// Arithmetic mean, zero when empty.
    fn mean(&self) -> f64
    where
        T: Copy + Into<f64>;

    /// Copy padded with `value` up to `max` elements.
    fn pad(&self, value: T, max: usize) -> Vec<T>
    where
        T: Clone;

    /// Replace the element at `index` with `elements`.
    ///
    /// An index equal to the length appends; anything beyond is an error.
    fn replace_at<I>(&mut self, index: usize, elements: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>;

    /// Each element paired with its circular predecessor and successor.
    fn ring(&self) -> Vec<[&T; 3]>;

    /// Replace the first occurrence of `target` with `replacements`.
    fn supplant(&mut self, target: &T, replacements: &[T]) -> &mut Self
    where
        T: PartialEq + Clone;

    /// Replace every occurrence of `target` with `replacements`.
    fn supplant_if(&mut self, target: &T, replacements: &[T]) -> &mut Self
    where
        T: PartialEq + Clone;

    fn to_sentence(&self) -> String
    where
        T: Display;

    fn to_sentence_with(&self, conjunction: &str, delimiter: &str) -> String
    where
        T: Display;

    /// Like `to_sentence`, rendering each element with its debug form.
    fn to_usage(&self) -> String
    where
        T: Debug;

    fn to_usage_with(&self, conjunction: &str, delimiter: &str) -> String
    where
        T: Debug;

    /// First `Some` produced by `f`, evaluated lazily.
    fn filter_find<R, F>(&self, f: F) -> Option<R>
    where
        F: FnMut(&T) -> Option<R>;
}

impl<T> ArrayExt<T> for Vec<T> {
    fn is_combinatorial(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        if other.is_empty() {
            return false;
        }

        let mut union: Vec<&T> = Vec::with_capacity(self.len() + other.len());
        for item in self.iter().chain(other) {
            if !union.contains(&item) {
                union.push(item);
            }
        }

        union.len() == self.len()
    }

    fn compress(&self) -> Vec<T>
    where
        T: Vacant + Clone,
    {
        self.iter().filter(|item| !item.is_vacant()).cloned().collect()
    }

    fn compress_mut(&mut self) -> bool
    where
        T: Vacant,
    {
        let before = self.len();
        self.retain(|item| !item.is_vacant());
        self.len() != before
    }

    fn excluding(&self, elements: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        self.iter()
            .filter(|item| !elements.contains(item))
            .cloned()
            .collect()
    }

    fn including(&self, elements: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = self.clone();
        result.extend_from_slice(elements);
        result
    }

    fn intersperse(&self, elements: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.len() * (elements.len() + 1));
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                result.extend_from_slice(elements);
            }
            result.push(item.clone());
        }
        result
    }

    fn maximum<K, F>(&self, key: F) -> Option<K>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.iter().map(key).max()
    }

    fn minimum<K, F>(&self, key: F) -> Option<K>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.iter().map(key).min()
    }

    fn mean(&self) -> f64
    where
        T: Copy + Into<f64>,
    {
        if self.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.iter().map(|item| (*item).into()).sum();
        sum / self.len() as f64
    }

    fn pad(&self, value: T, max: usize) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = self.clone();
        if max > result.len() {
            result.resize(max, value);
        }
        result
    }

    fn replace_at<I>(&mut self, index: usize, elements: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        let length = self.len();
        if index > length {
            return Err(Error::validation_invalid_argument(
                "index",
                format!("Index {} is beyond length {}", index, length),
                None,
            ));
        }

        let end = (index + 1).min(length);
        drop(self.splice(index..end, elements));
        Ok(self)
    }

    fn ring(&self) -> Vec<[&T; 3]> {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return Vec::new();
        };

        let wrapped: Vec<&T> = std::iter::once(last)
            .chain(self.iter())
            .chain(std::iter::once(first))
            .collect();

        wrapped
            .windows(3)
            .map(|window| [window[0], window[1], window[2]])
            .collect()
    }

    fn supplant(&mut self, target: &T, replacements: &[T]) -> &mut Self
    where
        T: PartialEq + Clone,
    {
        if let Some(position) = self.iter().position(|item| item == target) {
            drop(self.splice(position..=position, replacements.iter().cloned()));
        }
        self
    }

    fn supplant_if(&mut self, target: &T, replacements: &[T]) -> &mut Self
    where
        T: PartialEq + Clone,
    {
        let mut result = Vec::with_capacity(self.len());
        for item in self.drain(..) {
            if item == *target {
                result.extend_from_slice(replacements);
            } else {
                result.push(item);
            }
        }
        *self = result;
        self
    }

    fn to_sentence(&self) -> String
    where
        T: Display,
    {
        let sentences = &defaults::defaults().sentences;
        self.to_sentence_with(&sentences.conjunction, &sentences.delimiter)
    }

    fn to_sentence_with(&self, conjunction: &str, delimiter: &str) -> String
    where
        T: Display,
    {
        let words: Vec<String> = self.iter().map(|item| item.to_string()).collect();
        sentence(&words, conjunction, delimiter)
    }

    fn to_usage(&self) -> String
    where
        T: Debug,
    {
        let sentences = &defaults::defaults().sentences;
        self.to_usage_with(&sentences.conjunction, &sentences.delimiter)
    }

    fn to_usage_with(&self, conjunction: &str, delimiter: &str) -> String
    where
        T: Debug,
    {
        let words: Vec<String> = self.iter().map(|item| format!("{:?}", item)).collect();
        sentence(&words, conjunction, delimiter)
    }

    fn filter_find<R, F>(&self, f: F) -> Option<R>
    where
        F: FnMut(&T) -> Option<R>,
    {
        self.iter().find_map(f)
    }
}

fn sentence(words: &[String], conjunction: &str, delimiter: &str) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [init @ .., last] => format!(
            "{}{}{} {}",
            init.join(delimiter),
            delimiter,
            conjunction,
            last
        ),
    }
}

/// Key lookups across a list of JSON records.
pub trait RecordsExt {
    /// Value of `keys` in the first record: a single value for one key, an array for many.
    fn pick(&self, keys: &[&str]) -> Option<Value>;

    /// Value of `keys` in every record: single values for one key, arrays for many.
    fn pluck(&self, keys: &[&str]) -> Vec<Value>;
}

impl RecordsExt for [Value] {
    fn pick(&self, keys: &[&str]) -> Option<Value> {
        let first = self.first()?;
        match keys {
            [] => None,
            [key] => Some(lookup(first, key)),
            _ => Some(Value::Array(keys.iter().map(|key| lookup(first, key)).collect())),
        }
    }

    fn pluck(&self, keys: &[&str]) -> Vec<Value> {
        match keys {
            [] => Vec::new(),
            [key] => self.iter().map(|record| lookup(record, key)).collect(),
            _ => self
                .iter()
                .map(|record| Value::Array(keys.iter().map(|key| lookup(record, key)).collect()))
                .collect(),
        }
    }
}

fn lookup(record: &Value, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_combinatorial_checks_subset_without_new_elements() {
        let array = vec!["a", "b", "c"];

        assert!(array.is_combinatorial(&["a", "b", "c"]));
        assert!(array.is_combinatorial(&["c", "a", "b"]));
        assert!(array.is_combinatorial(&["c"]));
        assert!(array.is_combinatorial(&["c", "b"]));
        assert!(!array.is_combinatorial(&["x"]));
        assert!(!array.is_combinatorial(&["z", "b", "c"]));
        assert!(!array.is_combinatorial(&["a", "b", "c", "d"]));
        assert!(!array.is_combinatorial(&[]));
    }

    #[test]
    fn compress_removes_null_and_empty_values() {
        let array = vec![json!(1), json!(null), json!(""), json!(2)];

        assert_eq!(array.compress(), vec![json!(1), json!(2)]);
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn compress_removes_empty_collections() {
        let array = vec![json!(1), json!("blueberry"), json!(null), json!([]), json!({})];

        assert_eq!(array.compress(), vec![json!(1), json!("blueberry")]);
    }

    #[test]
    fn compress_mut_reports_whether_anything_changed() {
        let mut array = vec![Some("a".to_string()), None, Some(String::new())];
        assert!(array.compress_mut());
        assert_eq!(array, vec![Some("a".to_string())]);

        assert!(!array.compress_mut());
        assert!(!Vec::<Option<String>>::new().compress_mut());
    }

    #[test]
    fn excluding_removes_every_occurrence() {
        let array = vec![1, 2, 3, 4, 5];

        assert_eq!(array.excluding(&[3, 4, 5]), vec![1, 2]);
        assert_eq!(array.excluding(&[1, 3, 5]), vec![2, 4]);
        assert_eq!(array.excluding(&[1, 1]), vec![2, 3, 4, 5]);
        assert_eq!(array.excluding(&[]), array);
        assert_eq!(vec![1, 2, 1].excluding(&[1]), vec![2]);
    }

    #[test]
    fn including_appends_elements() {
        let array = vec![1, 2, 3];

        assert_eq!(array.including(&[4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(array.including(&[0, 6]), vec![1, 2, 3, 0, 6]);
        assert_eq!(array.including(&[1]), vec![1, 2, 3, 1]);
        assert_eq!(array.including(&[]), array);
    }

    #[test]
    fn intersperse_places_elements_between_neighbours() {
        let array = vec!["1", "2", "3"];

        assert_eq!(array.intersperse(&[]), vec!["1", "2", "3"]);
        assert_eq!(array.intersperse(&["a"]), vec!["1", "a", "2", "a", "3"]);
        assert_eq!(
            array.intersperse(&["a", "b"]),
            vec!["1", "a", "b", "2", "a", "b", "3"]
        );
        assert!(Vec::<&str>::new().intersperse(&["a"]).is_empty());
    }

    #[test]
    fn maximum_and_minimum_extract_keys() {
        #[derive(Debug)]
        struct Point {
            x: i32,
        }

        let records = vec![Point { x: 1 }, Point { x: 3 }, Point { x: 2 }];

        assert_eq!(records.maximum(|point| point.x), Some(3));
        assert_eq!(records.minimum(|point| point.x), Some(1));
        assert_eq!(Vec::<Point>::new().maximum(|point| point.x), None);
    }

    #[test]
    fn mean_uses_decimal_precision() {
        assert_eq!(Vec::<i32>::new().mean(), 0.0);
        assert_eq!(vec![0].mean(), 0.0);
        assert_eq!(vec![5].mean(), 5.0);
        assert_eq!(vec![1, 2].mean(), 1.5);
        assert_eq!(vec![1.25, 1.5, 2.5].mean(), 1.75);
        assert_eq!(vec![1, 2, 3].mean(), 2.0);
    }

    #[test]
    fn pad_fills_up_to_maximum() {
        assert_eq!(vec![1].pad(0, 1), vec![1]);
        assert_eq!(vec![1, 2].pad(0, 1), vec![1, 2]);
        assert_eq!(vec![1, 2].pad(0, 3), vec![1, 2, 0]);
        assert_eq!(vec![1, 2].pad(0, 0), vec![1, 2]);
    }

    #[test]
    fn replace_at_swaps_elements() {
        let mut array = vec!["a", "b", "c"];
        array.replace_at(0, ["x"]).unwrap();
        assert_eq!(array, vec!["x", "b", "c"]);

        let mut array = vec!["a", "b", "c"];
        array.replace_at(1, ["x", "y"]).unwrap();
        assert_eq!(array, vec!["a", "x", "y", "c"]);

        let mut array = vec!["a", "b", "c"];
        array.replace_at(2, ["x"]).unwrap();
        assert_eq!(array, vec!["a", "b", "x"]);

        let mut array = vec!["a", "b", "c"];
        array.replace_at(3, ["x"]).unwrap();
        assert_eq!(array, vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn replace_at_beyond_length_is_an_error() {
        let mut array = vec!["a", "b", "c"];
        let err = array.replace_at(5, ["x"]).unwrap_err();

        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(array, vec!["a", "b", "c"]);
    }

    #[test]
    fn ring_wraps_around() {
        let array = vec![1, 2, 3];

        assert_eq!(
            array.ring(),
            vec![[&3, &1, &2], [&1, &2, &3], [&2, &3, &1]]
        );
        assert_eq!(vec![1].ring(), vec![[&1, &1, &1]]);
        assert!(Vec::<i32>::new().ring().is_empty());
    }

    #[test]
    fn supplant_replaces_first_occurrence() {
        let mut array = vec!["a", "b", "c", "a"];
        array.supplant(&"a", &["z"]);
        assert_eq!(array, vec!["z", "b", "c", "a"]);

        let mut array = vec!["a", "b", "c", "a"];
        array.supplant(&"a", &["z", "y"]);
        assert_eq!(array, vec!["z", "y", "b", "c", "a"]);

        let mut array = vec!["a"];
        array.supplant(&"q", &["z"]);
        assert_eq!(array, vec!["a"]);
    }

    #[test]
    fn supplant_if_replaces_every_occurrence() {
        let mut array = vec!["a", "b", "c", "a"];
        array.supplant_if(&"a", &["z"]);
        assert_eq!(array, vec!["z", "b", "c", "z"]);

        let mut array = vec!["a", "b", "c", "a"];
        array.supplant_if(&"a", &["z", "y"]);
        assert_eq!(array, vec!["z", "y", "b", "c", "z", "y"]);
    }

    #[test]
    fn to_sentence_with_joins_items() {
        assert_eq!(Vec::<String>::new().to_sentence_with("and", ", "), "");
        assert_eq!(vec!["a"].to_sentence_with("and", ", "), "a");
        assert_eq!(vec!["a", "b"].to_sentence_with("and", ", "), "a and b");
        assert_eq!(vec!["1", "b", "c"].to_sentence_with("and", ", "), "1, b, and c");
        assert_eq!(
            vec!["eins", "zwei", "drei"].to_sentence_with("und", " "),
            "eins zwei und drei"
        );
        assert_eq!(vec![1.5, 2.0].to_sentence_with("or", ", "), "1.5 or 2");
    }

    #[test]
    fn to_usage_with_uses_debug_form() {
        assert_eq!(vec!["a"].to_usage_with("and", ", "), r#""a""#);
        assert_eq!(
            vec!["a", "b", "c"].to_usage_with("and", ", "),
            r#""a", "b", and "c""#
        );
        assert_eq!(
            vec![Some(1), None].to_usage_with("or", " "),
            "Some(1) or None"
        );
    }

    #[test]
    fn filter_find_answers_first_transformed_match() {
        let words = vec!["one", "2", "three", "4"];

        assert_eq!(words.filter_find(|word| word.parse::<i32>().ok()), Some(2));
        assert_eq!(vec!["x"].filter_find(|word| word.parse::<i32>().ok()), None);
    }

    #[test]
    fn pick_reads_first_record() {
        let records = vec![
            json!({"name": "a", "label": "A"}),
            json!({"name": "b", "label": "B"}),
        ];

        assert_eq!(records.pick(&["name"]), Some(json!("a")));
        assert_eq!(records.pick(&["name", "label"]), Some(json!(["a", "A"])));
        assert_eq!(records.pick(&[]), None);
        assert_eq!(Vec::<Value>::new().pick(&["test"]), None);
    }

    #[test]
    fn pluck_reads_every_record() {
        let records = vec![
            json!({"name": "a", "label": "A"}),
            json!({"name": "b", "label": "B"}),
            json!({"name": "c", "label": "C"}),
        ];

        assert_eq!(records.pluck(&["name"]), vec![json!("a"), json!("b"), json!("c")]);
        assert_eq!(
            records.pluck(&["name", "label"]),
            vec![json!(["a", "A"]), json!(["b", "B"]), json!(["c", "C"])]
        );
        assert!(records.pluck(&[]).is_empty());
        assert!(Vec::<Value>::new().pluck(&["test"]).is_empty());
    }
}
