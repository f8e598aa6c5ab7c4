//! Hand-made proofs for exercising the rules in tests.
//!
//! Compiled for this crate's own tests and, through the `test-support`
//! feature, for integration tests. Nothing here is part of the logic: the
//! disproofs below are *assumed*, not derived.

use crate::prop::{False, Implies, Not, Proposition, True};

/// `True → True`, returning the canonical unit proof.
#[must_use]
pub fn always_true() -> Implies<True, True> {
    Implies::new(|unit: True| unit)
}

/// `A → B` that ignores its premise and returns a clone of `value`.
#[must_use]
pub fn always<A: Proposition, B: Proposition>(value: B) -> Implies<A, B> {
    Implies::new(move |_: A| value.clone())
}

/// A disproof of `A` that is assumed rather than constructed.
///
/// For an inhabited `A` no real disproof exists, so the returned
/// implication aborts when applied. Reaching it means a test derived a
/// contradiction from premises that were never true.
///
/// # Panics
///
/// The returned implication panics with a message naming `label` whenever
/// it is applied.
#[must_use]
pub fn assumed_disproof<A: Proposition>(label: &'static str) -> Not<A> {
    Implies::new(move |_: A| -> False { panic!("assumed disproof `{label}` was invoked") })
}
