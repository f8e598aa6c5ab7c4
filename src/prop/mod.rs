//! Propositions as types.
//!
//! A proposition is any type; it is *proved* by producing one of its
//! values. [`True`] has exactly one value and [`False`] has none, so a
//! value of type [`False`] can only exist in code that is never reached.
//!
//! The connectives are ordinary generic types:
//!
//! | Connective | Type | Proof |
//! |---|---|---|
//! | A → B | [`Implies<A, B>`] | a total function from proofs of A to proofs of B |
//! | A ∧ B | [`And<A, B>`] | a proof of each side |
//! | A ∨ B | [`Or<A, B>`] | a proof of one side, tagged with which |
//! | ¬A | [`Not<A>`] | a proof of A → False |

mod connective;
mod implies;

pub use connective::{And, Or};
pub use implies::{Implies, Not};

/// Bound satisfied by every type usable as a proposition in proof
/// constructors.
///
/// Proofs are captured by the closures that make up larger proofs and may
/// be used more than once, so they must be clonable and own their data.
pub trait Proposition: Clone + 'static {}

impl<T: Clone + 'static> Proposition for T {}

/// The trivially provable proposition.
///
/// `True` is its own canonical proof.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// The unprovable proposition.
///
/// `False` has no values. Holding one means the surrounding code is
/// unreachable, which is what lets a proof of `False` stand in for any
/// other proof.
///
/// ```compile_fail
/// let _ = conlogic::prop::False;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum False {}

impl False {
    /// Eliminates an impossible value: from falsehood, anything follows.
    #[must_use]
    pub const fn absurd<A>(self) -> A {
        match self {}
    }
}
