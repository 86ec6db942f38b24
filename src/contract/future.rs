//! Contracts on the outcome of an asynchronous operation.
//!
//! The entry points await natural completion of one caller-supplied future
//! (no timeout, no cancellation) and capture exactly one outcome, the
//! returned value or the panic that unwound it, as a [`Caught`] subject.
//! Requires the `async` feature.

use std::future::Future;
use std::panic::UnwindSafe;

use futures::FutureExt;

use super::caught::{payload_message, Caught};
use super::engine::{Contract, Mode};

/// Await an operation and open a panic-mode contract on its outcome.
///
/// # Example
///
/// ```rust,ignore
/// use std::panic::AssertUnwindSafe;
/// use affirm::expect_completion;
///
/// expect_completion(AssertUnwindSafe(async { fetch().await })).await.returned();
/// ```
pub async fn expect_completion<F>(operation: F) -> Contract<Caught<F::Output>>
where
    F: Future + UnwindSafe,
{
    Contract::new(capture_completion(operation).await, Mode::Panic)
}

/// Await an operation and open a record-mode contract on its outcome.
pub async fn check_completion<F>(operation: F) -> Contract<Caught<F::Output>>
where
    F: Future + UnwindSafe,
{
    Contract::new(capture_completion(operation).await, Mode::Record)
}

async fn capture_completion<F>(operation: F) -> Caught<F::Output>
where
    F: Future + UnwindSafe,
{
    match operation.catch_unwind().await {
        Ok(value) => Caught::Returned(value),
        Err(payload) => Caught::Panicked(payload_message(payload)),
    }
}
