//! Contracts on slice-like subjects.
//!
//! Implemented for any `C: AsRef<[T]>`, covering `Vec<T>`, arrays, and
//! slices.

use std::fmt;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl<C> Contract<C> {
    /// Assert the sequence contains the expected item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(vec![1, 2, 3]).contains_item(&2);
    /// ```
    pub fn contains_item<T>(self, expected: &T) -> Self
    where
        C: AsRef<[T]>,
        T: PartialEq + fmt::Debug,
    {
        self.verify(
            ErrorCode::contract("sequence", "contains_item"),
            |subject| {
                let items = subject.as_ref();
                if items.contains(expected) {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected sequence to contain {expected:?}, but none of its {} items match",
                            items.len()
                        ))
                        .with("expected", format!("{expected:?}"))
                        .with("count", items.len().to_string()),
                    )
                }
            },
        )
    }

    /// Assert the sequence does not contain the given item.
    pub fn lacks_item<T>(self, unexpected: &T) -> Self
    where
        C: AsRef<[T]>,
        T: PartialEq + fmt::Debug,
    {
        self.verify(ErrorCode::contract("sequence", "lacks_item"), |subject| {
            let items = subject.as_ref();
            match items.iter().position(|item| item == unexpected) {
                None => None,
                Some(index) => Some(
                    Failure::new(format!(
                        "expected sequence to lack {unexpected:?}, but found it at index {index}"
                    ))
                    .with("unexpected", format!("{unexpected:?}"))
                    .with("index", index.to_string()),
                ),
            }
        })
    }

    /// Assert the sequence has exactly the given number of items.
    pub fn has_count<T>(self, expected: usize) -> Self
    where
        C: AsRef<[T]>,
        T: fmt::Debug,
    {
        self.verify(ErrorCode::contract("sequence", "has_count"), |subject| {
            let count = subject.as_ref().len();
            if count == expected {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected sequence of {expected} items, but found {count}"
                    ))
                    .with("expected", expected.to_string())
                    .with("actual", count.to_string()),
                )
            }
        })
    }

    /// Assert the sequence is not empty.
    pub fn has_items<T>(self) -> Self
    where
        C: AsRef<[T]>,
        T: fmt::Debug,
    {
        self.verify(ErrorCode::contract("sequence", "has_items"), |subject| {
            if !subject.as_ref().is_empty() {
                None
            } else {
                Some(Failure::new(
                    "expected sequence to have items, but found none",
                ))
            }
        })
    }

    /// Assert the sequence is empty.
    pub fn has_no_items<T>(self) -> Self
    where
        C: AsRef<[T]>,
        T: fmt::Debug,
    {
        self.verify(ErrorCode::contract("sequence", "has_no_items"), |subject| {
            let items = subject.as_ref();
            if items.is_empty() {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected an empty sequence, but found {} items",
                        items.len()
                    ))
                    .with("actual", items.len().to_string()),
                )
            }
        })
    }

    /// Assert every item satisfies the predicate.
    ///
    /// The description names the per-item property and is used in the
    /// failure message along with the first offending item.
    pub fn each<T, P>(self, description: &str, predicate: P) -> Self
    where
        C: AsRef<[T]>,
        T: fmt::Debug,
        P: Fn(&T) -> bool,
    {
        let description = description.to_string();
        self.verify(ErrorCode::contract("sequence", "each"), |subject| {
            let items = subject.as_ref();
            match items.iter().position(|item| !predicate(item)) {
                None => None,
                Some(index) => Some(
                    Failure::new(format!(
                        "expected every item to {description}, but item {index} ({:?}) does not",
                        items[index]
                    ))
                    .with("predicate", description)
                    .with("index", index.to_string()),
                ),
            }
        })
    }

    /// Assert at least one item satisfies the predicate.
    pub fn any_item<T, P>(self, description: &str, predicate: P) -> Self
    where
        C: AsRef<[T]>,
        T: fmt::Debug,
        P: Fn(&T) -> bool,
    {
        let description = description.to_string();
        self.verify(ErrorCode::contract("sequence", "any_item"), |subject| {
            let items = subject.as_ref();
            if items.iter().any(|item| predicate(item)) {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected some item to {description}, but none of the {} items do",
                        items.len()
                    ))
                    .with("predicate", description)
                    .with("count", items.len().to_string()),
                )
            }
        })
    }
}
