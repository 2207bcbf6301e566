//! Structural difference between two key/value objects.

use serde_json::{Map, Value};

/// Keys whose values differ, each mapped to `[left, right]`.
///
/// Keys present on one side only pair their value with `null`.
pub fn differences(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::new();

    for (key, value) in left {
        let other = right.get(key).unwrap_or(&Value::Null);
        if value != other {
            result.insert(key.clone(), Value::Array(vec![value.clone(), other.clone()]));
        }
    }

    for (key, value) in right {
        if !left.contains_key(key) && !value.is_null() {
            result.insert(key.clone(), Value::Array(vec![Value::Null, value.clone()]));
        }
    }

    result
}

/// Every key of `left` mapped to `[value, null]`.
pub fn unmatched(left: &Map<String, Value>) -> Map<String, Value> {
    left.iter()
        .map(|(key, value)| (key.clone(), Value::Array(vec![value.clone(), Value::Null])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn identical_objects_have_no_differences() {
        let left = object(json!({"a": 1, "b": 2}));

        assert!(differences(&left, &left.clone()).is_empty());
    }

    #[test]
    fn changed_values_pair_left_and_right() {
        let left = object(json!({"a": 1, "b": 2}));
        let right = object(json!({"a": 1, "b": 3}));

        assert_eq!(Value::Object(differences(&left, &right)), json!({"b": [2, 3]}));
    }

    #[test]
    fn missing_keys_pair_with_null() {
        let left = object(json!({"a": 1}));
        let right = object(json!({"b": 2}));

        assert_eq!(
            Value::Object(differences(&left, &right)),
            json!({"a": [1, null], "b": [null, 2]})
        );
    }

    #[test]
    fn unmatched_pairs_every_value_with_null() {
        let left = object(json!({"a": 1, "b": 2}));

        assert_eq!(
            Value::Object(unmatched(&left)),
            json!({"a": [1, null], "b": [2, null]})
        );
    }
}
