//! Tests for the fluent contract API across families.

use super::*;
use crate::contract::caught::payload_message;
use crate::error::ErrorCode;

#[test]
fn test_expect_passing_chain() {
    // Should not panic
    expect("hello world")
        .contains("hello")
        .and()
        .starts_with("hell")
        .and()
        .has_length(11);
}

#[test]
fn test_expect_mixed_families_on_numbers() {
    expect(12).equals(12);
    expect(12).is_greater_than(10).and().is_at_most(12);
    expect(vec![1, 2, 3]).contains_item(&3).and().has_count(3);
}

#[test]
#[should_panic(expected = "contract failed")]
fn test_expect_failure_panics() {
    expect("hello").contains("bye");
}

#[test]
#[should_panic(expected = "contract failed")]
fn test_expect_failure_panics_mid_chain() {
    // The second assertion violates; the third must never run.
    expect(5).is_greater_than(0).is_greater_than(10).equals(5);
}

#[test]
fn test_panic_message_carries_expectation_text() {
    let payload = std::panic::catch_unwind(|| {
        expect(false).is_true();
    })
    .unwrap_err();

    let message = payload_message(payload);
    assert!(message.contains("expected subject to be true, but found false"));
}

#[test]
fn test_check_success_yields_subject() {
    let verified = check(41).is_greater_than(40).to_result();
    assert_eq!(verified, Ok(41));
}

#[test]
fn test_check_failure_yields_error_with_code() {
    let error = check(41).is_greater_than(100).to_result().unwrap_err();
    assert_eq!(error.code().path(), "contract/compare/is_greater_than");
}

#[test]
fn test_first_failure_wins() {
    // Three assertions, the first fails: the later two are skipped and must
    // not overwrite the stored error.
    let contract = check(0)
        .is_greater_than(10)
        .equals(99)
        .is_less_than(-5);

    let error = contract.last_error().unwrap();
    assert_eq!(error.code().path(), "contract/compare/is_greater_than");
    assert_eq!(error.context_value("bound"), Some("10"));
}

#[test]
fn test_failed_chain_stays_failed() {
    let contract = check(1).equals(2).equals(1);
    assert!(contract.has_failed());
    assert_eq!(
        contract.last_error().unwrap().code().path(),
        "contract/compare/equals"
    );
}

#[test]
fn test_void_result_exposes_same_code_as_last_error() {
    let contract = check("abc").contains("zzz");
    let direct = contract.last_error().unwrap().code().clone();
    let converted = contract.to_void_result().unwrap_err();
    assert_eq!(converted.code(), &direct);
}

#[test]
fn test_because_is_appended_to_message_and_context() {
    let error = check(3)
        .because("three retries exhaust the budget")
        .is_at_most(2)
        .to_void_result()
        .unwrap_err();

    assert_eq!(
        error.message(),
        "expected subject to be at most 2, but found 3, because three retries exhaust the budget"
    );
    assert_eq!(
        error.context_value("because"),
        Some("because three retries exhaust the budget")
    );
}

#[test]
fn test_subject_extension_trait() {
    true.must().is_true();

    let verified = "config".should().starts_with("con").to_void_result();
    assert!(verified.is_ok());

    let error = 5_i32.should().equals(6).to_void_result().unwrap_err();
    assert_eq!(error.code().path(), "contract/compare/equals");
}

#[test]
fn test_codes_share_the_contract_root() {
    let root = ErrorCode::root("contract");

    let errors = [
        check(false).is_true().to_void_result().unwrap_err(),
        check("x").is_empty().to_void_result().unwrap_err(),
        check(Some(1)).is_none().to_void_result().unwrap_err(),
        check(vec![1]).has_no_items().to_void_result().unwrap_err(),
    ];

    for error in &errors {
        assert!(error.code().starts_with(&root), "code {}", error.code());
    }
}

#[test]
fn test_chain_continues_inertly_after_failure() {
    // A failed record-mode chain still hands back a usable wrapper.
    let contract = check("short").has_length(99).contains("s").is_not_empty();
    assert!(contract.has_failed());
    assert_eq!(contract.subject(), &"short");
}

#[test]
fn test_caught_outcome_chains_into_result() {
    let verified = check_caught(|| "ok").returned().to_void_result();
    assert!(verified.is_ok());

    let error = check_caught(|| -> &str { panic!("kaboom") })
        .returned()
        .to_void_result()
        .unwrap_err();
    assert_eq!(error.code().path(), "contract/caught/returned");
}
