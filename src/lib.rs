//! # affirm
//!
//! A fluent contract DSL with dual failure modes.
//!
//! Every contract wraps one subject and exposes chained predicate methods.
//! The same predicates run in two modes: panic mode raises through whichever
//! test harness hosts the process, record mode stores the first violation
//! and converts to a `Result` with a stable machine-readable error code.
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm::{check, expect};
//!
//! // Panic mode: assertions for tests
//! expect(2 + 2).equals(4);
//! expect("hello world").contains("world").and().has_length(11);
//!
//! // Record mode: validation that never panics
//! let port = check(8080_u32).is_between(1, 65535).to_result();
//! assert_eq!(port, Ok(8080));
//!
//! let error = check("").is_not_empty().to_void_result().unwrap_err();
//! assert_eq!(error.code().path(), "contract/text/is_not_empty");
//! ```
//!
//! ## Extension Style
//!
//! ```rust
//! use affirm::Subject;
//!
//! "config.toml".must().ends_with(".toml");
//! let verified = 42_u32.should().is_at_least(1).to_void_result();
//! assert!(verified.is_ok());
//! ```
//!
//! ## Collecting Every Failure
//!
//! A chain stops at its first violation; [`Scope`] runs independent checks
//! to completion and reports all of them:
//!
//! ```rust
//! use affirm::{check, Scope};
//!
//! let report = Scope::new()
//!     .check(|| check("").is_not_empty().to_void_result())
//!     .check(|| check(0).is_greater_than(1).to_void_result())
//!     .run();
//!
//! assert_eq!(report.unwrap_err().len(), 2);
//! ```
//!
//! ## Capturing Panics
//!
//! ```rust,ignore
//! use affirm::expect_caught;
//!
//! expect_caught(|| risky_operation()).panicked_with("out of range");
//! ```

pub mod contract;
pub mod error;
pub mod harness;
pub mod report;
pub mod scope;

// Core types
pub use contract::{check, expect, Contract, Subject};
pub use error::{ContractViolation, Error, ErrorCode};

// Panic capture
pub use contract::{check_caught, expect_caught, Caught};

// Async completion capture (feature-gated)
#[cfg(feature = "async")]
pub use contract::{check_completion, expect_completion};

// Map seam
pub use contract::Keyed;

// Harness detection
pub use harness::Harness;

// Scope aggregation
pub use scope::Scope;

// Failure rendering
pub use report::Reporter;
