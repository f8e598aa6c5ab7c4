//! Exhaustive enumeration of valuations.
//!
//! A formula over `N` variables is a function `[Truth; N] -> Truth`. With
//! only `2^N` inputs, validity is decided by trying every one of them.

use std::fmt;

use super::error::TautologyError;
use super::value::Truth;

/// The largest number of variables the checker will enumerate.
pub const MAX_VARIABLES: usize = 16;

/// Iterator over all `2^N` valuations of `N` variables.
///
/// The first variable is the most significant: valuations start with all
/// variables `True` and end with all `False`, the order of a
/// conventional truth table.
///
/// # Examples
///
///     use conlogic::truth::{Truth, Valuations};
///
///     let rows: Vec<[Truth; 2]> = Valuations::<2>::new()?.collect();
///     assert_eq!(rows.len(), 4);
///     assert_eq!(rows.first(), Some(&[Truth::True, Truth::True]));
///     assert_eq!(rows.last(), Some(&[Truth::False, Truth::False]));
///     # Ok::<(), conlogic::truth::TautologyError>(())
#[derive(Debug, Clone)]
pub struct Valuations<const N: usize> {
    next: usize,
    rows: usize,
}

impl<const N: usize> Valuations<N> {
    /// Starts the enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`TautologyError::TooManyVariables`] when `N` exceeds
    /// [`MAX_VARIABLES`].
    pub const fn new() -> Result<Self, TautologyError> {
        if N > MAX_VARIABLES {
            return Err(TautologyError::TooManyVariables {
                requested: N,
                max: MAX_VARIABLES,
            });
        }
        Ok(Self {
            next: 0,
            rows: 1 << N,
        })
    }

    /// Total number of valuations, `2^N`.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }
}

impl<const N: usize> Iterator for Valuations<N> {
    type Item = [Truth; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.rows {
            return None;
        }
        let row = self.next;
        self.next += 1;
        Some(valuation_for_row(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.next;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Valuations<N> {}

/// Bit `N - 1 - i` of `row` decides variable `i`; a clear bit means true.
fn valuation_for_row<const N: usize>(row: usize) -> [Truth; N] {
    std::array::from_fn(|index| {
        let shift = N - 1 - index;
        Truth::from_bool((row >> shift) & 1 == 0)
    })
}

/// Checks that `formula` is true under every valuation of its variables.
///
/// # Errors
///
/// Returns [`TautologyError::Falsified`] carrying the first falsifying
/// valuation in enumeration order, or
/// [`TautologyError::TooManyVariables`] when `N` exceeds
/// [`MAX_VARIABLES`].
///
/// # Examples
///
///     use conlogic::truth::{Truth, check_tautology};
///
///     assert!(check_tautology(|[a, b, c]: [Truth; 3]| Truth::syllogism(a, b, c)).is_ok());
///     assert!(check_tautology(|[a, b]: [Truth; 2]| a.implies(b)).is_err());
pub fn check_tautology<const N: usize, F>(formula: F) -> Result<(), TautologyError>
where
    F: Fn([Truth; N]) -> Truth,
{
    for valuation in Valuations::<N>::new()? {
        if !formula(valuation).is_true() {
            return Err(TautologyError::Falsified {
                valuation: valuation.to_vec(),
            });
        }
    }
    Ok(())
}

/// Decides whether `formula` holds under every valuation.
///
/// A falsifying valuation yields `Ok(false)`; use [`check_tautology`] to
/// learn which one.
///
/// # Errors
///
/// Returns [`TautologyError::TooManyVariables`] when `N` exceeds
/// [`MAX_VARIABLES`]. Such a formula is neither confirmed nor refuted.
pub fn is_tautology<const N: usize, F>(formula: F) -> Result<bool, TautologyError>
where
    F: Fn([Truth; N]) -> Truth,
{
    match check_tautology(formula) {
        Ok(()) => Ok(true),
        Err(TautologyError::Falsified { .. }) => Ok(false),
        Err(error) => Err(error),
    }
}

/// A fully evaluated truth table.
///
/// Renders with one header line (`A B | label`) followed by one line per
/// valuation in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable<const N: usize> {
    variables: [&'static str; N],
    label: String,
    rows: Vec<([Truth; N], Truth)>,
}

impl<const N: usize> TruthTable<N> {
    /// Evaluates `formula` under every valuation of `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`TautologyError::TooManyVariables`] when `N` exceeds
    /// [`MAX_VARIABLES`].
    pub fn build<F>(
        variables: [&'static str; N],
        label: impl Into<String>,
        formula: F,
    ) -> Result<Self, TautologyError>
    where
        F: Fn([Truth; N]) -> Truth,
    {
        let rows = Valuations::<N>::new()?
            .map(|valuation| (valuation, formula(valuation)))
            .collect();
        Ok(Self {
            variables,
            label: label.into(),
            rows,
        })
    }

    /// Every row as `(valuation, result)`.
    #[must_use]
    pub fn rows(&self) -> &[([Truth; N], Truth)] {
        &self.rows
    }

    /// Returns `true` when every row evaluates to `True`.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|(_, result)| result.is_true())
    }

    /// Valuations under which the formula is false.
    pub fn falsifying(&self) -> impl Iterator<Item = &[Truth; N]> {
        self.rows
            .iter()
            .filter(|(_, result)| !result.is_true())
            .map(|(valuation, _)| valuation)
    }
}

impl<const N: usize> fmt::Display for TruthTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.variables.join(" "), self.label)?;
        for (valuation, result) in &self.rows {
            let cells: Vec<String> = valuation.iter().map(ToString::to_string).collect();
            writeln!(f, "{} | {result}", cells.join(" "))?;
        }
        Ok(())
    }
}
