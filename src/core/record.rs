//! Member-wise helpers for serde records.
//!
//! A record is any type that round-trips through a JSON object. Members are read
//! and written through that object form, so renamed fields use their serialized
//! names.
//!
//! Records opt in with an empty impl:
//!
//! ```
//! use primext::RecordExt;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl RecordExt for Point {}
//!
//! let point = Point { x: 1, y: 2 }.merge(&serde_json::json!({"y": 5})).unwrap();
//! assert_eq!(point, Point { x: 1, y: 5 });
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::utils::diff;

pub trait RecordExt: Serialize + DeserializeOwned + Sized {
    /// Serialized members of this record.
    fn members(&self) -> Result<Map<String, Value>> {
        to_object(self, "record")
    }

    /// Build a record from member/value pairs.
    fn from_keywords(keywords: Map<String, Value>) -> Result<Self> {
        from_object(keywords, "from keywords")
    }

    /// Copy with members replaced by those of `patch`.
    ///
    /// Every member of `patch` must exist on the record.
    fn merge<P: Serialize>(&self, patch: &P) -> Result<Self> {
        let mut members = self.members()?;
        overlay(&mut members, to_object(patch, "patch")?)?;
        from_object(members, "merge")
    }

    fn merge_mut<P: Serialize>(&mut self, patch: &P) -> Result<&mut Self> {
        *self = self.merge(patch)?;
        Ok(self)
    }

    /// Copy with members taken from `other`.
    ///
    /// `key_map` pairs a member of this record with the member of `other` it
    /// copies from; members missing on `other` are skipped.
    fn transmute<O: Serialize>(&self, other: &O, key_map: &[(&str, &str)]) -> Result<Self> {
        let source = to_object(other, "transmute source")?;

        let patch: Map<String, Value> = key_map
            .iter()
            .filter_map(|(mine, theirs)| {
                source
                    .get(*theirs)
                    .map(|value| (mine.to_string(), value.clone()))
            })
            .collect();

        self.merge(&patch)
    }

    fn transmute_mut<O: Serialize>(&mut self, other: &O, key_map: &[(&str, &str)]) -> Result<&mut Self> {
        *self = self.transmute(other, key_map)?;
        Ok(self)
    }

    /// Copy with every member value passed through `f`.
    fn revalue<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&str, Value) -> Value,
    {
        let members = self
            .members()?
            .into_iter()
            .map(|(key, value)| {
                let revalued = f(&key, value);
                (key, revalued)
            })
            .collect();

        from_object(members, "revalue")
    }

    fn revalue_mut<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnMut(&str, Value) -> Value,
    {
        *self = self.revalue(f)?;
        Ok(self)
    }

    /// Copy where each member named in `attributes` becomes `f(current, given)`.
    fn revalue_with<F>(&self, attributes: &Map<String, Value>, mut f: F) -> Result<Self>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut members = self.members()?;

        for (key, given) in attributes {
            match members.get_mut(key) {
                Some(current) => *current = f(current.take(), given),
                None => return Err(unknown_member(key, &members)),
            }
        }

        from_object(members, "revalue")
    }

    fn revalue_with_mut<F>(&mut self, attributes: &Map<String, Value>, f: F) -> Result<&mut Self>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        *self = self.revalue_with(attributes, f)?;
        Ok(self)
    }

    /// Differing members as `[mine, theirs]`.
    fn diff(&self, other: &Self) -> Result<Map<String, Value>> {
        Ok(diff::differences(&self.members()?, &other.members()?))
    }
}

fn to_object<T: Serialize + ?Sized>(value: &T, field: &str) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some(format!("serialize {}", field))))?;

    match value {
        Value::Object(members) => Ok(members),
        other => Err(Error::validation_invalid_argument(
            field,
            format!("Expected an object with members, got {}", other),
            None,
        )),
    }
}

fn from_object<T: DeserializeOwned>(members: Map<String, Value>, context: &str) -> Result<T> {
    serde_json::from_value(Value::Object(members))
        .map_err(|e| Error::validation_invalid_json(e, Some(context.to_string())))
}

fn overlay(members: &mut Map<String, Value>, patch: Map<String, Value>) -> Result<()> {
    if let Some(key) = patch.keys().find(|key| !members.contains_key(*key)) {
        return Err(unknown_member(key, members));
    }

    members.extend(patch);
    Ok(())
}

fn unknown_member(key: &str, members: &Map<String, Value>) -> Error {
    Error::validation_invalid_argument(
        "member",
        format!("Unknown member: {}", key),
        Some(members.keys().cloned().collect()),
    )
}
