//! Classical two-valued logic, checked by exhaustion.
//!
//! This layer is independent of [`crate::prop`]. There, an implication is a
//! function between proofs; here, every connective maps truth values to a
//! truth value, and a formula is a tautology when it evaluates to
//! [`Truth::True`] under all `2^n` valuations of its `n` variables.
//!
//! The same truth tables exist twice: as `const fn` methods on [`Truth`]
//! and as trait impls over [`TrueType`] and [`FalseType`] in [`types`],
//! where the compiler evaluates them.

mod diagnostic;
mod error;
mod table;
pub mod types;
mod value;

pub use diagnostic::{TruthDiagnostic, TruthDiagnosticCode};
pub use error::TautologyError;
pub use table::{MAX_VARIABLES, TruthTable, Valuations, check_tautology, is_tautology};
pub use types::{FalseType, TrueType, TruthType};
pub use value::Truth;
