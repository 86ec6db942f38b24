//! Structured contract errors and their hierarchical codes.
//!
//! Every failed assertion produces an [`Error`] carrying a stable
//! machine-readable [`ErrorCode`], a human-readable message, and an
//! insertion-ordered set of context pairs. Consumers match on codes, not on
//! message text: messages may be reworded between versions, codes may not.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// Separator used when rendering a code as a single path string.
const SEPARATOR: char = '/';

/// A hierarchical, machine-readable identifier for a contract failure.
///
/// Codes form a stable taxonomy rooted at `contract`, with one segment per
/// assertion family and one per method, e.g. `contract/boolean/is_true`.
/// Equality is structural over the segments, so a code can be matched
/// exactly or by prefix:
///
/// ```rust
/// use affirm::ErrorCode;
///
/// let code = ErrorCode::contract("boolean", "is_true");
/// assert_eq!(code.path(), "contract/boolean/is_true");
/// assert!(code.starts_with(&ErrorCode::root("contract").child("boolean")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    segments: Vec<Cow<'static, str>>,
}

impl ErrorCode {
    /// Create a single-segment root code.
    pub fn root(segment: impl Into<Cow<'static, str>>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Append a child segment, producing a more specific code.
    pub fn child(mut self, segment: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Build a code under the shared `contract` root.
    ///
    /// All assertion families register their codes through this constructor
    /// so the taxonomy stays uniform: `contract/<family>/<method>`.
    pub fn contract(family: &'static str, method: &'static str) -> Self {
        Self {
            segments: vec![
                Cow::Borrowed("contract"),
                Cow::Borrowed(family),
                Cow::Borrowed(method),
            ],
        }
    }

    /// Parse a code from its path form. Empty segments are discarded;
    /// a path with no segments at all yields `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<Cow<'static, str>> = path
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(|s| Cow::Owned(s.to_string()))
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Render the code as a `/`-joined path string.
    pub fn path(&self) -> String {
        self.segments.join(&SEPARATOR.to_string())
    }

    /// Iterate the code's segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_ref())
    }

    /// Whether this code sits at or below `prefix` in the taxonomy.
    ///
    /// Useful for matching a whole family ("any boolean failure") rather
    /// than one specific method.
    pub fn starts_with(&self, prefix: &ErrorCode) -> bool {
        prefix.segments.len() <= self.segments.len()
            && self
                .segments
                .iter()
                .zip(&prefix.segments)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

/// A recorded contract failure.
///
/// Carries the stable code, the rendered message, and any context pairs the
/// failing assertion attached (typically `expected` and `actual`, plus the
/// caller's `because` reason). Context preserves insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl Error {
    /// Create an error with no context.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Append a context pair, keeping insertion order.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// The stable machine-readable code.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All context pairs in insertion order.
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Look up a single context value by key. First insertion wins.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Panic payload raised in panic mode when no test harness is recognized.
///
/// Callers outside a test runner can still use `expect()`-style contracts:
/// the violation unwinds with this typed payload, which a surrounding
/// `catch_unwind` can downcast to recover the message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("contract failed: {message}")]
pub struct ContractViolation {
    /// The failed assertion's message.
    pub message: String,
}
