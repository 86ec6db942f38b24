//! Contracts on the outcome of a possibly-panicking operation.
//!
//! `expect_caught`/`check_caught` run the operation under
//! `std::panic::catch_unwind` and wrap the single observed outcome, either
//! the returned value or the captured panic message, as a [`Caught`]
//! subject.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, UnwindSafe};

use super::engine::{Contract, Failure, Mode};
use crate::error::{ContractViolation, ErrorCode};

/// The observed outcome of a captured operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Caught<R> {
    /// The operation returned normally with this value.
    Returned(R),
    /// The operation panicked; the payload rendered as a message.
    Panicked(String),
}

impl<R> Caught<R> {
    /// Whether a panic was captured.
    pub fn is_panic(&self) -> bool {
        matches!(self, Caught::Panicked(_))
    }

    /// The captured panic message, if any.
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            Caught::Panicked(message) => Some(message),
            Caught::Returned(_) => None,
        }
    }
}

/// Run an operation and open a panic-mode contract on its outcome.
///
/// # Example
///
/// ```rust
/// use affirm::expect_caught;
///
/// expect_caught(|| "fine").returned();
/// expect_caught(|| -> u32 { panic!("boom") }).panicked_with("boom");
/// ```
pub fn expect_caught<R, F>(operation: F) -> Contract<Caught<R>>
where
    F: FnOnce() -> R + UnwindSafe,
{
    Contract::new(capture(operation), Mode::Panic)
}

/// Run an operation and open a record-mode contract on its outcome.
pub fn check_caught<R, F>(operation: F) -> Contract<Caught<R>>
where
    F: FnOnce() -> R + UnwindSafe,
{
    Contract::new(capture(operation), Mode::Record)
}

fn capture<R, F>(operation: F) -> Caught<R>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match catch_unwind(operation) {
        Ok(value) => Caught::Returned(value),
        Err(payload) => Caught::Panicked(payload_message(payload)),
    }
}

/// Render a panic payload as a message string.
///
/// Plain string payloads come from `panic!`; a [`ContractViolation`] comes
/// from this crate's own fallback raiser.
pub(crate) fn payload_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    if let Some(violation) = payload.downcast_ref::<ContractViolation>() {
        return violation.message.clone();
    }
    "non-string panic payload".to_string()
}

impl<R: fmt::Debug> Contract<Caught<R>> {
    /// Assert the operation returned without panicking.
    pub fn returned(self) -> Self {
        self.verify(ErrorCode::contract("caught", "returned"), |subject| {
            match subject {
                Caught::Returned(_) => None,
                Caught::Panicked(message) => Some(
                    Failure::new(format!(
                        "expected operation to return, but it panicked with {message:?}"
                    ))
                    .with("panic", message.as_str()),
                ),
            }
        })
    }

    /// Assert the operation panicked.
    pub fn panicked(self) -> Self {
        self.verify(ErrorCode::contract("caught", "panicked"), |subject| {
            match subject {
                Caught::Panicked(_) => None,
                Caught::Returned(value) => Some(
                    Failure::new(format!(
                        "expected operation to panic, but it returned {value:?}"
                    ))
                    .with("actual", format!("{value:?}")),
                ),
            }
        })
    }

    /// Assert the operation panicked and the message contains the fragment.
    pub fn panicked_with(self, fragment: &str) -> Self {
        self.verify(ErrorCode::contract("caught", "panicked_with"), |subject| {
            match subject {
                Caught::Panicked(message) if message.contains(fragment) => None,
                Caught::Panicked(message) => Some(
                    Failure::new(format!(
                        "expected panic message to contain {fragment:?}, but found {message:?}"
                    ))
                    .with("expected", fragment)
                    .with("actual", message.as_str()),
                ),
                Caught::Returned(value) => Some(
                    Failure::new(format!(
                        "expected operation to panic with {fragment:?}, but it returned {value:?}"
                    ))
                    .with("expected", fragment)
                    .with("actual", format!("{value:?}")),
                ),
            }
        })
    }
}
