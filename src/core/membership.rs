//! Reverse membership: ask an item whether it is inside a container.
//!
//! ```
//! use primext::InExt;
//!
//! assert!(3.is_in(&(1..5)));
//! assert!("b".is_in("abc"));
//! assert!("x".is_in(&vec!["x", "y"]));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::{Range, RangeInclusive};

/// Containers that can answer whether they hold `item`.
///
/// Maps answer for their keys, ranges for coverage and strings for substrings.
pub trait Includes<Q: ?Sized> {
    fn includes(&self, item: &Q) -> bool;
}

impl<T, Q> Includes<Q> for [T]
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn includes(&self, item: &Q) -> bool {
        self.iter().any(|element| Borrow::<Q>::borrow(element) == item)
    }
}

impl<T, Q> Includes<Q> for Vec<T>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn includes(&self, item: &Q) -> bool {
        self.as_slice().includes(item)
    }
}

impl<T, Q, const N: usize> Includes<Q> for [T; N]
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn includes(&self, item: &Q) -> bool {
        self.as_slice().includes(item)
    }
}

impl<T, Q, S> Includes<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn includes(&self, item: &Q) -> bool {
        self.contains(item)
    }
}

impl<T, Q> Includes<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn includes(&self, item: &Q) -> bool {
        self.contains(item)
    }
}

impl<K, V, Q, S> Includes<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn includes(&self, item: &Q) -> bool {
        self.contains_key(item)
    }
}

impl<K, V, Q> Includes<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn includes(&self, item: &Q) -> bool {
        self.contains_key(item)
    }
}

impl<T: PartialOrd> Includes<T> for Range<T> {
    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialOrd> Includes<T> for RangeInclusive<T> {
    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl Includes<str> for str {
    fn includes(&self, item: &str) -> bool {
        self.contains(item)
    }
}

impl Includes<char> for str {
    fn includes(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

impl Includes<str> for String {
    fn includes(&self, item: &str) -> bool {
        self.as_str().includes(item)
    }
}

pub trait InExt {
    fn is_in<C>(&self, container: &C) -> bool
    where
        C: Includes<Self> + ?Sized;
}

impl<T: ?Sized> InExt for T {
    fn is_in<C>(&self, container: &C) -> bool
    where
        C: Includes<Self> + ?Sized,
    {
        container.includes(self)
    }
}
