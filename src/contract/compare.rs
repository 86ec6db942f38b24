//! Equality and ordering contracts for any comparable subject.

use std::fmt;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl<T: PartialEq + fmt::Debug> Contract<T> {
    /// Assert the subject equals the expected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect("four".len()).equals(4);
    /// ```
    pub fn equals(self, expected: T) -> Self {
        self.verify(ErrorCode::contract("compare", "equals"), move |subject| {
            if *subject == expected {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected subject to equal {expected:?}, but found {subject:?}"
                    ))
                    .with("expected", format!("{expected:?}"))
                    .with("actual", format!("{subject:?}")),
                )
            }
        })
    }

    /// Assert the subject differs from the given value.
    pub fn differs_from(self, other: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "differs_from"),
            move |subject| {
                if *subject != other {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to differ from {other:?}, but both are {subject:?}"
                        ))
                        .with("unexpected", format!("{other:?}")),
                    )
                }
            },
        )
    }
}

impl<T: PartialOrd + fmt::Debug> Contract<T> {
    /// Assert the subject is strictly greater than the bound.
    pub fn is_greater_than(self, bound: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "is_greater_than"),
            move |subject| {
                if *subject > bound {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to be greater than {bound:?}, but found {subject:?}"
                        ))
                        .with("bound", format!("{bound:?}"))
                        .with("actual", format!("{subject:?}")),
                    )
                }
            },
        )
    }

    /// Assert the subject is greater than or equal to the bound.
    pub fn is_at_least(self, bound: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "is_at_least"),
            move |subject| {
                if *subject >= bound {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to be at least {bound:?}, but found {subject:?}"
                        ))
                        .with("bound", format!("{bound:?}"))
                        .with("actual", format!("{subject:?}")),
                    )
                }
            },
        )
    }

    /// Assert the subject is strictly less than the bound.
    pub fn is_less_than(self, bound: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "is_less_than"),
            move |subject| {
                if *subject < bound {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to be less than {bound:?}, but found {subject:?}"
                        ))
                        .with("bound", format!("{bound:?}"))
                        .with("actual", format!("{subject:?}")),
                    )
                }
            },
        )
    }

    /// Assert the subject is less than or equal to the bound.
    pub fn is_at_most(self, bound: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "is_at_most"),
            move |subject| {
                if *subject <= bound {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to be at most {bound:?}, but found {subject:?}"
                        ))
                        .with("bound", format!("{bound:?}"))
                        .with("actual", format!("{subject:?}")),
                    )
                }
            },
        )
    }

    /// Assert the subject lies in the inclusive range `[lower, upper]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(7).is_between(1, 10);
    /// ```
    pub fn is_between(self, lower: T, upper: T) -> Self {
        self.verify(
            ErrorCode::contract("compare", "is_between"),
            move |subject| {
                if *subject >= lower && *subject <= upper {
                    None
                } else {
                    Some(
                        Failure::new(format!(
                            "expected subject to be between {lower:?} and {upper:?}, but found {subject:?}"
                        ))
                        .with("lower", format!("{lower:?}"))
                        .with("upper", format!("{upper:?}"))
                        .with("actual", format!("{subject:?}")),
                    )
                }
            },
        )
    }
}
