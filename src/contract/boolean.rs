//! Contracts on boolean subjects.

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl Contract<bool> {
    /// Assert the subject is `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(1 < 2).is_true();
    /// ```
    pub fn is_true(self) -> Self {
        self.verify(ErrorCode::contract("boolean", "is_true"), |subject| {
            if *subject {
                None
            } else {
                Some(
                    Failure::new("expected subject to be true, but found false")
                        .with("expected", "true")
                        .with("actual", "false"),
                )
            }
        })
    }

    /// Assert the subject is `false`.
    pub fn is_false(self) -> Self {
        self.verify(ErrorCode::contract("boolean", "is_false"), |subject| {
            if !*subject {
                None
            } else {
                Some(
                    Failure::new("expected subject to be false, but found true")
                        .with("expected", "false")
                        .with("actual", "true"),
                )
            }
        })
    }
}
