//! Test-harness detection for panic-mode failures.
//!
//! Panic-mode contracts raise through whatever test harness is hosting the
//! process, without compile-time coupling to any of them. The harness is
//! resolved from a fixed, ordered table of environment probes and cached for
//! the process lifetime; outside any recognized runner, failures unwind with
//! the crate's own [`ContractViolation`] payload so `expect()`-style usage
//! keeps working in plain binaries.

use std::sync::OnceLock;

use crate::error::ContractViolation;

/// The test harness hosting the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harness {
    /// cargo-nextest.
    Nextest,
    /// The built-in `cargo test` runner.
    Libtest,
    /// No recognized runner; raise the crate's own violation payload.
    Fallback,
}

impl Harness {
    /// Get the short identifier for this harness.
    pub fn as_str(&self) -> &'static str {
        match self {
            Harness::Nextest => "nextest",
            Harness::Libtest => "libtest",
            Harness::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the probe table: an environment variable whose presence
/// identifies a harness.
struct Probe {
    env: &'static str,
    harness: Harness,
}

/// Probes are checked in declared order and the first match wins, so
/// resolution stays deterministic when several variables are present at
/// once. nextest runs inside a cargo environment, which is why it must be
/// probed before the cargo/libtest entries.
const PROBES: &[Probe] = &[
    Probe {
        env: "NEXTEST",
        harness: Harness::Nextest,
    },
    Probe {
        env: "CARGO_MANIFEST_DIR",
        harness: Harness::Libtest,
    },
    Probe {
        env: "RUST_TEST_THREADS",
        harness: Harness::Libtest,
    },
];

static DETECTED: OnceLock<Harness> = OnceLock::new();

/// Resolve the hosting harness, probing the environment at most once per
/// process. The cached answer is reused for every later failure; a changed
/// environment after the first probe is not re-detected.
pub fn detect() -> Harness {
    *DETECTED.get_or_init(|| detect_with(|var| std::env::var(var).ok()))
}

/// Resolve a harness from an injected environment lookup.
///
/// This is the pure half of [`detect`]: given the same lookup it always
/// returns the same answer, which keeps resolution testable without touching
/// process state.
pub fn detect_with<F>(lookup: F) -> Harness
where
    F: Fn(&str) -> Option<String>,
{
    for probe in PROBES {
        if lookup(probe.env).is_some() {
            return probe.harness;
        }
    }
    Harness::Fallback
}

/// Raise a contract failure through the detected harness. Never returns.
pub(crate) fn raise(message: &str) -> ! {
    raise_in(detect(), message)
}

/// Raise through a specific harness.
///
/// Recognized runners get a plain string panic so they render the message
/// natively; the fallback unwinds with a typed [`ContractViolation`] that a
/// surrounding `catch_unwind` can downcast.
pub(crate) fn raise_in(harness: Harness, message: &str) -> ! {
    match harness {
        Harness::Nextest | Harness::Libtest => panic!("contract failed: {message}"),
        Harness::Fallback => std::panic::panic_any(ContractViolation {
            message: message.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(vars: &'a [&'a str]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            vars.iter()
                .find(|v| **v == var)
                .map(|_| "1".to_string())
        }
    }

    #[test]
    fn test_detect_nextest() {
        assert_eq!(detect_with(env_of(&["NEXTEST"])), Harness::Nextest);
    }

    #[test]
    fn test_detect_libtest_via_cargo() {
        assert_eq!(
            detect_with(env_of(&["CARGO_MANIFEST_DIR"])),
            Harness::Libtest
        );
    }

    #[test]
    fn test_detect_libtest_via_test_threads() {
        assert_eq!(
            detect_with(env_of(&["RUST_TEST_THREADS"])),
            Harness::Libtest
        );
    }

    #[test]
    fn test_detect_fallback_with_empty_environment() {
        assert_eq!(detect_with(env_of(&[])), Harness::Fallback);
    }

    #[test]
    fn test_first_probe_wins_when_several_match() {
        // Both nextest and cargo variables present: declared order decides,
        // not load order or alphabetical order.
        assert_eq!(
            detect_with(env_of(&["CARGO_MANIFEST_DIR", "NEXTEST", "RUST_TEST_THREADS"])),
            Harness::Nextest
        );
    }

    #[test]
    fn test_detect_is_stable_across_calls() {
        assert_eq!(detect(), detect());
    }

    #[test]
    #[should_panic(expected = "contract failed: expected subject to be true")]
    fn test_libtest_raise_formats_message() {
        raise_in(Harness::Libtest, "expected subject to be true, but found false");
    }

    #[test]
    fn test_fallback_raise_carries_typed_payload() {
        let payload = std::panic::catch_unwind(|| {
            raise_in(Harness::Fallback, "expected subject to be true, but found false");
        })
        .unwrap_err();

        let violation = payload
            .downcast::<ContractViolation>()
            .expect("fallback should unwind with a ContractViolation");
        assert_eq!(
            violation.message,
            "expected subject to be true, but found false"
        );
    }

    #[test]
    fn test_harness_display() {
        assert_eq!(format!("{}", Harness::Nextest), "nextest");
        assert_eq!(format!("{}", Harness::Libtest), "libtest");
        assert_eq!(format!("{}", Harness::Fallback), "fallback");
    }
}
