//! Inference rules of intuitionistic propositional logic.
//!
//! Every rule is a generic function. Rules without premises return the
//! rule itself as a proof (for example [`and_intro`] returns a proof of
//! `A → (B → A ∧ B)` for every `A` and `B`); rules with premises take the
//! premise proofs and return the conclusion. Instantiating a rule at
//! concrete types can only fail at compile time.
//!
//! Rules are grouped by the connective they introduce or eliminate.

mod conjunction;
mod disjunction;
mod implication;
mod negation;

pub use conjunction::{and_commute, and_elim_left, and_elim_right, and_intro};
pub use disjunction::{or_commute, or_elim, or_intro_left, or_intro_right};
pub use implication::{
    exportation, identity, importation, modus_ponens, permute, prove_syllogism,
    prove_syllogism_curried, syllogism,
};
pub use negation::{
    contraposition, de_morgan_1, de_morgan_2, de_morgan_3, double_negation_intro,
    non_contradiction, principle_of_explosion, reductio_ad_absurdum, triple_negation_elim,
};
