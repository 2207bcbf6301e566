//! Map helpers over JSON objects and typed maps.
//!
//! ```
//! use primext::HashExt;
//! use serde_json::json;
//!
//! let left = json!({"a": {"b": 1}});
//! let right = json!({"a": {"c": 2}});
//! let merged = left.as_object().unwrap().deep_merge(right.as_object().unwrap());
//!
//! assert_eq!(serde_json::Value::Object(merged), json!({"a": {"b": 1, "c": 2}}));
//! ```

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use crate::defaults;
use crate::error::{Error, Result};
use crate::utils::diff;
use crate::utils::vacant::Vacant;

/// A key and the function applied to its value by `transform_with`.
pub type Transform<'a> = (&'a str, &'a dyn Fn(Value) -> Value);

/// Target casing for `deep_case_keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Snake,
    Camel,
    Pascal,
    Kebab,
    ShoutySnake,
}

impl KeyCase {
    pub fn apply(&self, key: &str) -> String {
        match self {
            KeyCase::Snake => key.to_snake_case(),
            KeyCase::Camel => key.to_lower_camel_case(),
            KeyCase::Pascal => key.to_upper_camel_case(),
            KeyCase::Kebab => key.to_kebab_case(),
            KeyCase::ShoutySnake => key.to_shouty_snake_case(),
        }
    }
}

pub trait HashExt {
    /// Copy without entries whose value is null or empty.
    fn compress(&self) -> Map<String, Value>;

    /// Drop entries whose value is null or empty; true when anything was removed.
    fn compress_mut(&mut self) -> bool;

    /// Merge `other` into a copy, merging nested objects present on both sides.
    fn deep_merge(&self, other: &Map<String, Value>) -> Map<String, Value>;

    fn deep_merge_mut(&mut self, other: &Map<String, Value>) -> &mut Self;

    /// Merge where existing entries win over `other`.
    fn reverse_merge(&self, other: &Map<String, Value>) -> Map<String, Value>;

    fn reverse_merge_mut(&mut self, other: &Map<String, Value>) -> &mut Self;

    /// Copy without the given keys.
    fn except(&self, keys: &[&str]) -> Map<String, Value>;

    /// Apply `f` to this object and, recursively, to every nested object value.
    fn recurse<F>(&self, f: &F) -> Map<String, Value>
    where
        F: Fn(Map<String, Value>) -> Map<String, Value>;

    /// Rewrite keys at every nesting level.
    fn deep_transform_keys<F>(&self, f: &F) -> Map<String, Value>
    where
        F: Fn(&str) -> String;

    fn deep_case_keys(&self, case: KeyCase) -> Map<String, Value>;

    /// Differing entries as `[mine, theirs]`.
    ///
    /// When the key sets differ, every entry pairs with `null` instead.
    fn diff(&self, other: &Map<String, Value>) -> Map<String, Value>;

    fn fetch_value(&self, key: &str) -> Result<&Value>;

    /// Value for `key`, or `default` when missing or null.
    fn fetch_value_or(&self, key: &str, default: Value) -> Value;

    fn fetch_value_or_else<F>(&self, key: &str, default: F) -> Value
    where
        F: FnOnce() -> Value;

    /// Flatten nested objects into keys joined by the configured delimiter.
    fn flatten_keys(&self) -> Map<String, Value>;

    fn flatten_keys_with(&self, prefix: Option<&str>, delimiter: &str) -> Map<String, Value>;

    fn flatten_keys_mut(&mut self, prefix: Option<&str>, delimiter: &str) -> &mut Self;

    /// Apply each function to its key's value, skipping keys that are absent.
    fn transform_with(&self, operations: &[Transform<'_>]) -> Map<String, Value>;

    fn transform_with_mut(&mut self, operations: &[Transform<'_>]) -> &mut Self;

    /// Call `f` with the values of `keys`, in order.
    fn use_keys<R, F>(&self, keys: &[&str], f: F) -> R
    where
        F: FnOnce(Vec<Option<&Value>>) -> R;

    /// Nested slot at `path`, creating empty objects along the way.
    fn vivify(&mut self, path: &[&str]) -> Result<&mut Value>;

    /// Value for `key`, inserting `default` first when missing.
    fn entry_or(&mut self, key: &str, default: Value) -> &mut Value;
}

impl HashExt for Map<String, Value> {
    fn compress(&self) -> Map<String, Value> {
        self.iter()
            .filter(|(_, value)| !value.is_vacant())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn compress_mut(&mut self) -> bool {
        let before = self.len();
        self.retain(|_, value| !value.is_vacant());
        self.len() != before
    }

    fn deep_merge(&self, other: &Map<String, Value>) -> Map<String, Value> {
        let mut result = self.clone();
        result.deep_merge_mut(other);
        result
    }

    fn deep_merge_mut(&mut self, other: &Map<String, Value>) -> &mut Self {
        for (key, value) in other {
            if let (Some(Value::Object(mine)), Value::Object(theirs)) = (self.get_mut(key), value) {
                mine.deep_merge_mut(theirs);
                continue;
            }
            self.insert(key.clone(), value.clone());
        }
        self
    }

    fn reverse_merge(&self, other: &Map<String, Value>) -> Map<String, Value> {
        let mut result = self.clone();
        result.reverse_merge_mut(other);
        result
    }

    fn reverse_merge_mut(&mut self, other: &Map<String, Value>) -> &mut Self {
        for (key, value) in other {
            if !self.contains_key(key) {
                self.insert(key.clone(), value.clone());
            }
        }
        self
    }

    fn except(&self, keys: &[&str]) -> Map<String, Value> {
        self.iter()
            .filter(|(key, _)| !keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn recurse<F>(&self, f: &F) -> Map<String, Value>
    where
        F: Fn(Map<String, Value>) -> Map<String, Value>,
    {
        f(self.clone())
            .into_iter()
            .map(|(key, value)| match value {
                Value::Object(nested) => (key, Value::Object(nested.recurse(f))),
                other => (key, other),
            })
            .collect()
    }

    fn deep_transform_keys<F>(&self, f: &F) -> Map<String, Value>
    where
        F: Fn(&str) -> String,
    {
        self.recurse(&|map: Map<String, Value>| {
            map.into_iter().map(|(key, value)| (f(&key), value)).collect()
        })
    }

    fn deep_case_keys(&self, case: KeyCase) -> Map<String, Value> {
        self.deep_transform_keys(&|key: &str| case.apply(key))
    }

    fn diff(&self, other: &Map<String, Value>) -> Map<String, Value> {
        let same_keys = self.len() == other.len() && self.keys().all(|key| other.contains_key(key));

        if same_keys {
            diff::differences(self, other)
        } else {
            diff::unmatched(self)
        }
    }

    fn fetch_value(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| Error::key_not_found(key, self.keys().cloned().collect()))
    }

    fn fetch_value_or(&self, key: &str, default: Value) -> Value {
        self.fetch_value_or_else(key, || default)
    }

    fn fetch_value_or_else<F>(&self, key: &str, default: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        match self.get(key) {
            Some(value) if !value.is_null() => value.clone(),
            _ => default(),
        }
    }

    fn flatten_keys(&self) -> Map<String, Value> {
        self.flatten_keys_with(None, &defaults::defaults().keys.flatten_delimiter)
    }

    fn flatten_keys_with(&self, prefix: Option<&str>, delimiter: &str) -> Map<String, Value> {
        let mut result = Map::new();
        flatten_into(self, prefix, delimiter, &mut result);
        result
    }

    fn flatten_keys_mut(&mut self, prefix: Option<&str>, delimiter: &str) -> &mut Self {
        *self = self.flatten_keys_with(prefix, delimiter);
        self
    }

    fn transform_with(&self, operations: &[Transform<'_>]) -> Map<String, Value> {
        let mut result = self.clone();
        result.transform_with_mut(operations);
        result
    }

    fn transform_with_mut(&mut self, operations: &[Transform<'_>]) -> &mut Self {
        for (key, function) in operations {
            if let Some(value) = self.get_mut(*key) {
                *value = function(value.take());
            }
        }
        self
    }

    fn use_keys<R, F>(&self, keys: &[&str], f: F) -> R
    where
        F: FnOnce(Vec<Option<&Value>>) -> R,
    {
        f(keys.iter().map(|key| self.get(*key)).collect())
    }

    fn vivify(&mut self, path: &[&str]) -> Result<&mut Value> {
        let Some((last, parents)) = path.split_last() else {
            return Err(Error::validation_invalid_argument(
                "path",
                "Path cannot be empty",
                None,
            ));
        };

        let mut current = self;
        for key in parents {
            let slot = current
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match slot {
                Value::Object(map) => map,
                _ => {
                    return Err(Error::validation_invalid_argument(
                        "path",
                        format!("Value at {} is not an object", key),
                        Some(path.iter().map(|part| part.to_string()).collect()),
                    ))
                }
            };
        }

        Ok(current
            .entry(last.to_string())
            .or_insert_with(|| Value::Object(Map::new())))
    }

    fn entry_or(&mut self, key: &str, default: Value) -> &mut Value {
        self.entry(key.to_string()).or_insert(default)
    }
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    delimiter: &str,
    result: &mut Map<String, Value>,
) {
    for (key, value) in map {
        let flat_key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, delimiter, key),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_into(nested, Some(&flat_key), delimiter, result),
            other => {
                result.insert(flat_key, other.clone());
            }
        }
    }
}

/// Helpers for typed `HashMap`/`BTreeMap` values.
pub trait MapExt<K, V> {
    type Stringified;

    /// Copy without entries whose value is absent or empty.
    fn compress(&self) -> Self
    where
        V: Vacant + Clone;

    /// Copy with every key rendered through `Display`.
    fn stringify_keys(&self) -> Self::Stringified
    where
        V: Clone;
}

impl<K, V> MapExt<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    type Stringified = HashMap<String, V>;

    fn compress(&self) -> Self
    where
        V: Vacant + Clone,
    {
        self.iter()
            .filter(|(_, value)| !value.is_vacant())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn stringify_keys(&self) -> Self::Stringified
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord + Clone + Display,
{
    type Stringified = BTreeMap<String, V>;

    fn compress(&self) -> Self
    where
        V: Vacant + Clone,
    {
        self.iter()
            .filter(|(_, value)| !value.is_vacant())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn stringify_keys(&self) -> Self::Stringified
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }
}
