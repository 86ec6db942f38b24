//! Contracts on `Result` subjects.

use std::fmt;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

impl<T: fmt::Debug, E: fmt::Debug> Contract<Result<T, E>> {
    /// Assert the subject is `Ok`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::expect;
    ///
    /// expect("42".parse::<u32>()).is_ok();
    /// ```
    pub fn is_ok(self) -> Self {
        self.verify(ErrorCode::contract("outcome", "is_ok"), |subject| {
            match subject {
                Ok(_) => None,
                Err(e) => Some(
                    Failure::new(format!("expected subject to be Ok, but found Err({e:?})"))
                        .with("actual", format!("Err({e:?})")),
                ),
            }
        })
    }

    /// Assert the subject is `Err`.
    pub fn is_err(self) -> Self {
        self.verify(ErrorCode::contract("outcome", "is_err"), |subject| {
            match subject {
                Err(_) => None,
                Ok(value) => Some(
                    Failure::new(format!(
                        "expected subject to be Err, but found Ok({value:?})"
                    ))
                    .with("actual", format!("Ok({value:?})")),
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::check;

    #[test]
    fn test_is_ok() {
        let subject: Result<i32, String> = Ok(1);
        assert!(!check(subject).is_ok().has_failed());
    }

    #[test]
    fn test_is_ok_records_error_debug() {
        let subject: Result<i32, String> = Err("boom".to_string());
        let error = check(subject).is_ok().to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/outcome/is_ok");
        assert_eq!(error.context_value("actual"), Some("Err(\"boom\")"));
    }

    #[test]
    fn test_is_err() {
        let subject: Result<i32, String> = Err("boom".to_string());
        assert!(!check(subject).is_err().has_failed());

        let subject: Result<i32, String> = Ok(7);
        let error = check(subject).is_err().to_void_result().unwrap_err();
        assert_eq!(error.code().path(), "contract/outcome/is_err");
        assert_eq!(error.context_value("actual"), Some("Ok(7)"));
    }
}
