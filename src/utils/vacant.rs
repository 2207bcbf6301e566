//! "Nil or empty" detection used by the compaction helpers.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A value that is absent or empty.
///
/// Compaction drops vacant values. Scalars (numbers, booleans, chars) are never vacant.
pub trait Vacant {
    fn is_vacant(&self) -> bool;
}

impl<T: Vacant + ?Sized> Vacant for &T {
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

impl<T: Vacant> Vacant for Option<T> {
    fn is_vacant(&self) -> bool {
        match self {
            Some(value) => value.is_vacant(),
            None => true,
        }
    }
}

impl<T: Vacant + ?Sized> Vacant for Box<T> {
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

impl Vacant for str {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Vacant for String {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for [T] {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for Vec<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for VecDeque<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Vacant for HashMap<K, V, S> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Vacant for BTreeMap<K, V> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Vacant for HashSet<T, S> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for BTreeSet<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Vacant for Map<String, Value> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Vacant for Value {
    fn is_vacant(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

macro_rules! never_vacant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Vacant for $ty {
                fn is_vacant(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_vacant!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_null_and_empty_containers_are_vacant() {
        assert!(json!(null).is_vacant());
        assert!(json!("").is_vacant());
        assert!(json!([]).is_vacant());
        assert!(json!({}).is_vacant());
    }

    #[test]
    fn json_scalars_are_not_vacant() {
        assert!(!json!(0).is_vacant());
        assert!(!json!(false).is_vacant());
        assert!(!json!(" ").is_vacant());
    }

    #[test]
    fn option_is_vacant_when_none_or_inner_vacant() {
        assert!(None::<String>.is_vacant());
        assert!(Some(String::new()).is_vacant());
        assert!(!Some("x".to_string()).is_vacant());
        assert!(!Some(0).is_vacant());
    }
}
