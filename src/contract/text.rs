//! Contracts on string-like subjects.
//!
//! Implemented for any `S: AsRef<str>`, so `&str`, `String`, and
//! `Cow<'_, str>` subjects all get the same predicate set. Length is
//! measured in characters, not bytes.

use glob::Pattern;
use regex::Regex;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl<S: AsRef<str>> Contract<S> {
    /// Assert the text contains the given fragment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect("hello world").contains("lo wo");
    /// ```
    pub fn contains(self, fragment: &str) -> Self {
        self.verify(ErrorCode::contract("text", "contains"), |subject| {
            let actual = subject.as_ref();
            if actual.contains(fragment) {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected text to contain {fragment:?}, but found {actual:?}"
                    ))
                    .with("expected", fragment)
                    .with("actual", actual),
                )
            }
        })
    }

    /// Assert the text starts with the given prefix.
    pub fn starts_with(self, prefix: &str) -> Self {
        self.verify(ErrorCode::contract("text", "starts_with"), |subject| {
            let actual = subject.as_ref();
            if actual.starts_with(prefix) {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected text to start with {prefix:?}, but found {actual:?}"
                    ))
                    .with("expected", prefix)
                    .with("actual", actual),
                )
            }
        })
    }

    /// Assert the text ends with the given suffix.
    pub fn ends_with(self, suffix: &str) -> Self {
        self.verify(ErrorCode::contract("text", "ends_with"), |subject| {
            let actual = subject.as_ref();
            if actual.ends_with(suffix) {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected text to end with {suffix:?}, but found {actual:?}"
                    ))
                    .with("expected", suffix)
                    .with("actual", actual),
                )
            }
        })
    }

    /// Assert the text has exactly the given character count.
    pub fn has_length(self, expected: usize) -> Self {
        self.verify(ErrorCode::contract("text", "has_length"), |subject| {
            let actual = subject.as_ref();
            let count = actual.chars().count();
            if count == expected {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected text of {expected} characters, but {actual:?} has {count}"
                    ))
                    .with("expected", expected.to_string())
                    .with("actual", count.to_string()),
                )
            }
        })
    }

    /// Assert the text is empty.
    pub fn is_empty(self) -> Self {
        self.verify(ErrorCode::contract("text", "is_empty"), |subject| {
            let actual = subject.as_ref();
            if actual.is_empty() {
                None
            } else {
                Some(
                    Failure::new(format!("expected empty text, but found {actual:?}"))
                        .with("actual", actual),
                )
            }
        })
    }

    /// Assert the text is not empty.
    pub fn is_not_empty(self) -> Self {
        self.verify(ErrorCode::contract("text", "is_not_empty"), |subject| {
            if !subject.as_ref().is_empty() {
                None
            } else {
                Some(Failure::new(
                    "expected non-empty text, but found the empty string",
                ))
            }
        })
    }

    /// Assert the text matches a regular expression.
    ///
    /// An invalid pattern is reported as a failure of this assertion, not a
    /// panic, with the compile error in context.
    pub fn matches(self, pattern: &str) -> Self {
        self.verify(ErrorCode::contract("text", "matches"), |subject| {
            let actual = subject.as_ref();
            match Regex::new(pattern) {
                Ok(re) if re.is_match(actual) => None,
                Ok(_) => Some(
                    Failure::new(format!(
                        "expected text to match pattern {pattern:?}, but found {actual:?}"
                    ))
                    .with("pattern", pattern)
                    .with("actual", actual),
                ),
                Err(e) => Some(
                    Failure::new(format!("invalid pattern {pattern:?}: {e}"))
                        .with("pattern", pattern),
                ),
            }
        })
    }

    /// Assert the text matches a pattern, trying glob, then regex, then
    /// literal comparison.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect("src/config.json").like("**/*.json");
    /// expect("npm install").like(r"^npm (install|i)$");
    /// ```
    pub fn like(self, pattern: &str) -> Self {
        self.verify(ErrorCode::contract("text", "like"), |subject| {
            let actual = subject.as_ref();

            // Try glob pattern first
            if let Ok(glob) = Pattern::new(pattern) {
                if glob.matches(actual) {
                    return None;
                }
            }

            // Try regex
            if let Ok(re) = Regex::new(pattern) {
                if re.is_match(actual) {
                    return None;
                }
            }

            // Exact match fallback
            if actual == pattern {
                return None;
            }

            Some(
                Failure::new(format!(
                    "expected text like {pattern:?}, but found {actual:?}"
                ))
                .with("pattern", pattern)
                .with("actual", actual),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::check;

    #[test]
    fn test_contains() {
        assert!(!check("hello world").contains("lo wo").has_failed());

        let error = check("hello").contains("bye").to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/text/contains");
        assert_eq!(error.context_value("expected"), Some("bye"));
        assert_eq!(error.context_value("actual"), Some("hello"));
    }

    #[test]
    fn test_starts_and_ends() {
        assert!(!check("affirm").starts_with("aff").has_failed());
        assert!(!check("affirm").ends_with("firm").has_failed());
        assert!(check("affirm").starts_with("firm").has_failed());
        assert!(check("affirm").ends_with("aff").has_failed());
    }

    #[test]
    fn test_owned_strings_work() {
        let subject = String::from("owned");
        assert!(!check(subject).contains("own").has_failed());
    }

    #[test]
    fn test_has_length_counts_characters() {
        assert!(!check("日本語").has_length(3).has_failed());

        let error = check("日本語").has_length(9).to_void_result().unwrap_err();
        assert_eq!(error.context_value("actual"), Some("3"));
    }

    #[test]
    fn test_empty_checks() {
        assert!(!check("").is_empty().has_failed());
        assert!(!check("x").is_not_empty().has_failed());
        assert!(check("x").is_empty().has_failed());
        assert!(check("").is_not_empty().has_failed());
    }

    #[test]
    fn test_matches_regex() {
        assert!(!check("Success: 42 items").matches(r"Success: \d+ items").has_failed());
        assert!(check("no numbers").matches(r"\d+").has_failed());
    }

    #[test]
    fn test_matches_invalid_pattern_is_a_failure() {
        let error = check("anything").matches("(unclosed").to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/text/matches");
        assert!(error.message().starts_with("invalid pattern"));
    }

    #[test]
    fn test_like_glob() {
        assert!(!check(".env").like("*.env").has_failed());
        assert!(!check("src/config.json").like("**/config.json").has_failed());
        assert!(check("test.txt").like("*.env").has_failed());
    }

    #[test]
    fn test_like_regex() {
        assert!(!check("npm install").like(r"^npm (install|i)$").has_failed());
        assert!(!check("npm i").like(r"^npm (install|i)$").has_failed());
        assert!(check("npm run").like(r"^npm (install|i)$").has_failed());
    }

    #[test]
    fn test_like_exact_fallback() {
        assert!(!check("/tmp/test.txt").like("/tmp/test.txt").has_failed());
    }
}
