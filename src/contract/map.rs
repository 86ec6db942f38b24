//! Contracts on keyed subjects.
//!
//! The [`Keyed`] trait is the seam between the evaluator and concrete map
//! types; `HashMap` and `BTreeMap` are wired up here, and downstream crates
//! can implement it for their own associative containers.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

/// A subject with key/value entries.
pub trait Keyed {
    /// The key type.
    type Key: fmt::Debug;
    /// The value type.
    type Value: fmt::Debug;

    /// Look up the value stored under a key.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Number of entries.
    fn entry_count(&self) -> usize;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<M: Keyed> Contract<M> {
    /// Assert the map contains an entry under the given key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use affirm::expect;
    ///
    /// let map = HashMap::from([("host", "localhost")]);
    /// expect(map).contains_key(&"host");
    /// ```
    pub fn contains_key(self, key: &M::Key) -> Self {
        self.verify(ErrorCode::contract("map", "contains_key"), |subject| {
            if subject.lookup(key).is_some() {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected map to contain key {key:?}, but it has no such entry"
                    ))
                    .with("key", format!("{key:?}")),
                )
            }
        })
    }

    /// Assert the map has no entry under the given key.
    pub fn lacks_key(self, key: &M::Key) -> Self {
        self.verify(ErrorCode::contract("map", "lacks_key"), |subject| {
            match subject.lookup(key) {
                None => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected map to lack key {key:?}, but found it mapped to {value:?}"
                    ))
                    .with("key", format!("{key:?}"))
                    .with("actual", format!("{value:?}")),
                ),
            }
        })
    }

    /// Assert the map stores exactly the expected value under the key.
    pub fn contains_entry(self, key: &M::Key, expected: &M::Value) -> Self
    where
        M::Value: PartialEq,
    {
        self.verify(ErrorCode::contract("map", "contains_entry"), |subject| {
            match subject.lookup(key) {
                Some(value) if value == expected => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected key {key:?} to map to {expected:?}, but found {value:?}"
                    ))
                    .with("key", format!("{key:?}"))
                    .with("expected", format!("{expected:?}"))
                    .with("actual", format!("{value:?}")),
                ),
                None => Some(
                    Failure::new(format!(
                        "expected key {key:?} to map to {expected:?}, but the key is absent"
                    ))
                    .with("key", format!("{key:?}"))
                    .with("expected", format!("{expected:?}")),
                ),
            }
        })
    }

    /// Assert the map has exactly the given number of entries.
    pub fn has_entries(self, expected: usize) -> Self {
        self.verify(ErrorCode::contract("map", "has_entries"), |subject| {
            let count = subject.entry_count();
            if count == expected {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected map of {expected} entries, but found {count}"
                    ))
                    .with("expected", expected.to_string())
                    .with("actual", count.to_string()),
                )
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::contract::check;

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2)])
    }

    #[test]
    fn test_contains_key() {
        assert!(!check(sample()).contains_key(&"a").has_failed());

        let error = check(sample()).contains_key(&"z").to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/map/contains_key");
        assert_eq!(error.context_value("key"), Some("\"z\""));
    }

    #[test]
    fn test_lacks_key() {
        assert!(!check(sample()).lacks_key(&"z").has_failed());

        let error = check(sample()).lacks_key(&"a").to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/map/lacks_key");
        assert_eq!(error.context_value("actual"), Some("1"));
    }

    #[test]
    fn test_contains_entry() {
        assert!(!check(sample()).contains_entry(&"b", &2).has_failed());

        let error = check(sample())
            .contains_entry(&"b", &9)
            .to_void_result()
            .unwrap_err();
        assert_eq!(error.code().path(), "contract/map/contains_entry");
        assert_eq!(error.context_value("expected"), Some("9"));
        assert_eq!(error.context_value("actual"), Some("2"));

        let error = check(sample())
            .contains_entry(&"z", &1)
            .to_void_result()
            .unwrap_err();
        assert!(error.message().ends_with("the key is absent"));
    }

    #[test]
    fn test_has_entries() {
        assert!(!check(sample()).has_entries(2).has_failed());
        assert!(check(sample()).has_entries(3).has_failed());
    }

    #[test]
    fn test_btree_map_is_keyed_too() {
        let map = BTreeMap::from([(1, "one"), (2, "two")]);
        assert!(!check(map).contains_entry(&2, &"two").has_failed());
    }
}
