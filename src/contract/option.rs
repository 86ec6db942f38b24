//! Contracts on optional subjects.
//!
//! Absence is modeled explicitly: a `None` subject never faults, it either
//! satisfies `is_none` or fails the other predicates with a specific code.

use std::fmt;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl<T: fmt::Debug> Contract<Option<T>> {
    /// Assert the subject holds a value.
    pub fn is_some(self) -> Self {
        self.verify(ErrorCode::contract("option", "is_some"), |subject| {
            if subject.is_some() {
                None
            } else {
                Some(
                    Failure::new("expected subject to hold a value, but found None")
                        .with("actual", "None"),
                )
            }
        })
    }

    /// Assert the subject holds no value.
    pub fn is_none(self) -> Self {
        self.verify(ErrorCode::contract("option", "is_none"), |subject| {
            match subject {
                None => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected subject to be None, but found Some({value:?})"
                    ))
                    .with("actual", format!("Some({value:?})")),
                ),
            }
        })
    }
}

impl<T: fmt::Debug + PartialEq> Contract<Option<T>> {
    /// Assert the subject holds exactly the expected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect("a,b,c".split(',').next()).contains_value("a");
    /// ```
    pub fn contains_value(self, expected: T) -> Self {
        self.verify(
            ErrorCode::contract("option", "contains_value"),
            move |subject| match subject {
                Some(value) if *value == expected => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected subject to hold {expected:?}, but found {value:?}"
                    ))
                    .with("expected", format!("{expected:?}"))
                    .with("actual", format!("{value:?}")),
                ),
                None => Some(
                    Failure::new(format!(
                        "expected subject to hold {expected:?}, but found None"
                    ))
                    .with("expected", format!("{expected:?}"))
                    .with("actual", "None"),
                ),
            },
        )
    }
}
