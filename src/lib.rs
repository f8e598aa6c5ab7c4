//! `conlogic`: constructive propositional logic checked by the Rust type
//! system.
//!
//! Propositions are types and proofs are values. A proposition holds when a
//! value of its type can be built without fabricating data, so every
//! theorem in this crate is certified the moment it compiles:
//!
//! - [`prop`] encodes `True`, `False` and the connectives.
//! - [`rules`] realizes the inference rules of intuitionistic logic as
//!   generic proof constructors.
//! - [`classical`] transforms proofs of one classical axiom into another.
//! - [`truth`] is an independent two-valued evaluator that checks
//!   tautologies by enumerating every valuation.
//! - [`peano`] computes natural-number arithmetic in the type system.
//!
//! # Examples
//!
//!     use conlogic::prop::{Implies, True};
//!     use conlogic::rules::{modus_ponens, syllogism};
//!
//!     let always_true: Implies<True, True> = Implies::new(|t| t);
//!     let chained = syllogism(always_true.clone(), always_true);
//!     assert_eq!(modus_ponens(True, &chained), True);

mod certify;

/// Classical axioms and the proofs that they imply one another.
pub mod classical;
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
/// Type-level Peano naturals.
pub mod peano;
/// Propositions and logical connectives.
pub mod prop;
/// Generic proof constructors for the rules of constructive logic.
pub mod rules;
/// Two-valued truth tables and exhaustive tautology checking.
pub mod truth;

pub use certify::certify;
