//! Shared test helpers for integration tests.

use conlogic::truth::{TautologyError, Truth, TruthTable};

/// Builds a truth table, failing the test if `N` is over the limit.
///
/// # Panics
///
/// Panics if the table cannot be enumerated.
pub fn table<const N: usize, F>(
    variables: [&'static str; N],
    label: &str,
    formula: F,
) -> TruthTable<N>
where
    F: Fn([Truth; N]) -> Truth,
{
    TruthTable::build(variables, label, formula)
        .unwrap_or_else(|error: TautologyError| panic!("failed to build table {label}: {error}"))
}

