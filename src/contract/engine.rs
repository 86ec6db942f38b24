//! The dual-mode contract evaluator.
//!
//! This module provides the core types for evaluating contracts:
//! - `expect()` - Entry point for panic-mode contracts (test assertions)
//! - `check()` - Entry point for record-mode contracts (validation)
//! - `Contract` - Holds the subject and routes failures per mode
//! - `Subject` - Blanket extension trait adding `.must()` / `.should()`

use crate::error::{Error, ErrorCode};
use crate::harness;

/// How a contract routes a violated assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Raise immediately through the detected test harness.
    Panic,
    /// Record the first failure and keep chaining inertly.
    Record,
}

/// Details of one violated assertion, produced by a family's assess closure.
///
/// The evaluator turns this into an [`Error`] by attaching the code and the
/// caller's `because` reason.
pub(crate) struct Failure {
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Failure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
        }
    }

    pub(crate) fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }
}

/// Create a panic-mode contract on a subject.
///
/// Every violated assertion raises immediately through the detected test
/// harness; the chain never observes a failed state.
///
/// # Example
///
/// ```rust
/// use affirm::expect;
///
/// expect(2 + 2).equals(4);
/// expect("affirm").starts_with("aff").ends_with("rm");
/// ```
pub fn expect<T>(subject: T) -> Contract<T> {
    Contract::new(subject, Mode::Panic)
}

/// Create a record-mode contract on a subject.
///
/// Violations never panic: the first failure is recorded, later assertions
/// in the chain become no-ops, and the outcome surfaces through
/// [`Contract::to_result`] or [`Contract::to_void_result`].
///
/// # Example
///
/// ```rust
/// use affirm::check;
///
/// let verified = check(4).is_between(1, 10).to_result();
/// assert_eq!(verified, Ok(4));
///
/// let failed = check(0).is_between(1, 10).to_void_result();
/// assert!(failed.is_err());
/// ```
pub fn check<T>(subject: T) -> Contract<T> {
    Contract::new(subject, Mode::Record)
}

/// Extension trait putting both entry points on every value.
///
/// `subject.must()` is panic mode, `subject.should()` is record mode; both
/// are resolved statically from the subject's type.
///
/// # Example
///
/// ```rust
/// use affirm::Subject;
///
/// true.must().is_true();
/// let verified = "hello".should().contains("ell").to_void_result();
/// assert!(verified.is_ok());
/// ```
pub trait Subject: Sized {
    /// Start a panic-mode contract chain on this value.
    fn must(self) -> Contract<Self> {
        expect(self)
    }

    /// Start a record-mode contract chain on this value.
    fn should(self) -> Contract<Self> {
        check(self)
    }
}

impl<T> Subject for T {}

/// A contract over one subject value.
///
/// Wraps exactly one subject for the life of a fluent chain. Assertion
/// methods consume and return the contract so chains read linearly; the
/// failure mode is fixed at construction and the first recorded failure is
/// sticky.
#[derive(Debug, Clone)]
pub struct Contract<T> {
    subject: T,
    mode: Mode,
    failure: Option<Error>,
    because: Option<String>,
}

impl<T> Contract<T> {
    pub(crate) fn new(subject: T, mode: Mode) -> Self {
        Self {
            subject,
            mode,
            failure: None,
            because: None,
        }
    }

    /// Evaluate one assertion against the subject.
    ///
    /// The assess closure returns `None` when the predicate holds, or the
    /// failure details otherwise. A chain that has already failed skips the
    /// closure entirely and keeps its first error (first-failure-wins); in
    /// panic mode a failure raises before returning control.
    pub(crate) fn verify<P>(mut self, code: ErrorCode, assess: P) -> Self
    where
        P: FnOnce(&T) -> Option<Failure>,
    {
        if self.failure.is_some() {
            return self;
        }

        let Some(failure) = assess(&self.subject) else {
            return self;
        };

        let mut message = failure.message;
        if let Some(reason) = self.because.as_deref() {
            if !reason.is_empty() {
                message.push_str(", ");
                message.push_str(reason);
            }
        }

        let mut error = Error::new(code, message);
        for (key, value) in failure.context {
            error = error.with_context(key, value);
        }
        if let Some(reason) = self.because.clone() {
            error = error.with_context("because", reason);
        }

        match self.mode {
            Mode::Panic => harness::raise(error.message()),
            Mode::Record => {
                self.failure = Some(error);
                self
            }
        }
    }

    /// Attach a justification to failures raised later in the chain.
    ///
    /// The reason is appended to the failure message and recorded under the
    /// `because` context key. A reason that does not already start with
    /// "because" gets the prefix; a blank reason yields an empty context
    /// entry and leaves the message untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::check;
    ///
    /// let error = check(false)
    ///     .because("the feature flag gates startup")
    ///     .is_true()
    ///     .to_void_result()
    ///     .unwrap_err();
    ///
    /// assert!(error.message().ends_with("because the feature flag gates startup"));
    /// ```
    pub fn because(mut self, reason: &str) -> Self {
        self.because = Some(format_because(reason));
        self
    }

    /// Chaining accessor. Returns the same contract and carries no state of
    /// its own; purely syntactic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(7).is_greater_than(0).and().is_less_than(10);
    /// ```
    pub fn and(self) -> Self {
        self
    }

    /// Whether a failure has been recorded. Always `false` in panic mode,
    /// where a failure raises before returning control.
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The first recorded failure, if any.
    pub fn last_error(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// Borrow the subject under contract.
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Consume the contract and recover the subject, discarding any
    /// recorded failure.
    pub fn into_subject(self) -> T {
        self.subject
    }

    /// Convert to a result carrying the subject on success.
    pub fn to_result(self) -> Result<T, Error> {
        match self.failure {
            None => Ok(self.subject),
            Some(error) => Err(error),
        }
    }

    /// Convert to a result discarding the subject on success.
    pub fn to_void_result(self) -> Result<(), Error> {
        match self.failure {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }

    /// Assert a caller-supplied predicate over the subject.
    ///
    /// The description names what the predicate checks and is used in the
    /// failure message, so pick something that reads after "expected
    /// subject to ...".
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect(12).satisfies("be divisible by three", |n| n % 3 == 0);
    /// ```
    pub fn satisfies<P>(self, description: &str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let description = description.to_string();
        self.verify(ErrorCode::contract("subject", "satisfies"), |subject| {
            if predicate(subject) {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected subject to {description}, but the predicate did not hold"
                    ))
                    .with("predicate", description),
                )
            }
        })
    }
}

/// Format an optional caller-supplied justification.
///
/// Blank input yields an empty string (not an error); anything else is
/// normalized to start with "because".
fn format_because(reason: &str) -> String {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with("because") {
        trimmed.to_string()
    } else {
        format!("because {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_because_adds_prefix() {
        assert_eq!(format_because("the cache is warm"), "because the cache is warm");
    }

    #[test]
    fn test_format_because_keeps_existing_prefix() {
        assert_eq!(
            format_because("because the cache is warm"),
            "because the cache is warm"
        );
    }

    #[test]
    fn test_format_because_blank_is_empty() {
        assert_eq!(format_because(""), "");
        assert_eq!(format_because("   "), "");
    }

    #[test]
    fn test_blank_because_still_records_context_entry() {
        let error = check(false)
            .because("  ")
            .is_true()
            .to_void_result()
            .unwrap_err();

        assert_eq!(error.message(), "expected subject to be true, but found false");
        assert_eq!(error.context_value("because"), Some(""));
    }

    #[test]
    fn test_satisfies_passes() {
        let contract = check(10).satisfies("be even", |n| n % 2 == 0);
        assert!(!contract.has_failed());
    }

    #[test]
    fn test_satisfies_records_description() {
        let error = check(7)
            .satisfies("be even", |n| n % 2 == 0)
            .to_void_result()
            .unwrap_err();

        assert_eq!(error.code().path(), "contract/subject/satisfies");
        assert_eq!(error.context_value("predicate"), Some("be even"));
    }

    #[test]
    fn test_skipped_assertion_does_not_run_predicate() {
        let mut probed = false;
        let contract = check(1)
            .satisfies("fail first", |_| false)
            .satisfies("never probed", |_| {
                probed = true;
                true
            });

        assert!(contract.has_failed());
        assert!(!probed);
    }

    #[test]
    fn test_into_subject_recovers_value() {
        let contract = check("payload").satisfies("fail", |_| false);
        assert!(contract.has_failed());
        assert_eq!(contract.into_subject(), "payload");
    }
}
