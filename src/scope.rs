//! Aggregation of independent contract checks.
//!
//! A single chain stops at its first violation; a scope does the opposite.
//! Every check runs unconditionally and every failure is collected, in call
//! order, so callers validating several independent fields get the complete
//! report instead of the first complaint.
//!
//! # Example
//!
//! ```rust
//! use affirm::{check, Scope};
//!
//! let name = "";
//! let port = 70000_u32;
//!
//! let report = Scope::new()
//!     .check(move || check(name).is_not_empty().to_void_result())
//!     .check(move || check(port).is_at_most(65535).to_void_result())
//!     .run();
//!
//! let errors = report.unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use crate::error::Error;

/// Run every check and collect every failure.
///
/// Checks execute exactly once each, in the given order, regardless of
/// earlier failures. Returns `Ok(())` when none fail (vacuously for an
/// empty sequence) and otherwise the failures in call order.
///
/// # Example
///
/// ```rust
/// use affirm::{check, scope};
///
/// let values = ["alpha", "", "gamma"];
/// let report = scope::all(
///     values.map(|value| move || check(value).is_not_empty().to_void_result()),
/// );
///
/// assert_eq!(report.unwrap_err().len(), 1);
/// ```
pub fn all<I, F>(checks: I) -> Result<(), Vec<Error>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), Error>,
{
    let mut errors = Vec::new();
    for check in checks {
        if let Err(error) = check() {
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Builder collecting heterogeneous checks for one [`all`] run.
///
/// Useful when the checks are assembled incrementally or have different
/// closure types.
///
/// # Example
///
/// ```rust
/// use affirm::{check, Scope};
///
/// let report = Scope::new()
///     .check(|| check(true).is_true().to_void_result())
///     .check(|| check("id-7").starts_with("id-").to_void_result())
///     .run();
///
/// assert!(report.is_ok());
/// ```
#[derive(Default)]
pub struct Scope {
    checks: Vec<Box<dyn FnOnce() -> Result<(), Error>>>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a check. Nothing runs until [`run`](Self::run).
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: FnOnce() -> Result<(), Error> + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Number of queued checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are queued.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every queued check and collect every failure.
    pub fn run(self) -> Result<(), Vec<Error>> {
        all(self.checks)
    }
}
