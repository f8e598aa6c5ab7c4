//! Rules for implication: application, composition and currying.

use crate::prop::{And, Implies, Proposition};

/// Modus ponens: from `a : A` and `f : A → B`, conclude `B`.
///
/// # Examples
///
///     use conlogic::prop::{Implies, True};
///     use conlogic::rules::modus_ponens;
///
///     let always_true: Implies<True, True> = Implies::new(|t| t);
///     assert_eq!(modus_ponens(True, &always_true), True);
#[must_use]
pub fn modus_ponens<A, B>(a: A, f: &Implies<A, B>) -> B {
    f.apply(a)
}

/// `A → A`.
#[must_use]
pub fn identity<A: Proposition>() -> Implies<A, A> {
    Implies::new(|a: A| a)
}

/// Hypothetical syllogism: from `A → B` and `B → C`, conclude `A → C`.
#[must_use]
pub fn syllogism<A, B, C>(ab: Implies<A, B>, bc: Implies<B, C>) -> Implies<A, C>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(move |a: A| bc.apply(ab.apply(a)))
}

/// `((A → B) ∧ (B → C)) → (A → C)`: syllogism as a theorem.
#[must_use]
pub fn prove_syllogism<A, B, C>() -> Implies<And<Implies<A, B>, Implies<B, C>>, Implies<A, C>>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(|premises: And<Implies<A, B>, Implies<B, C>>| {
        syllogism(premises.left, premises.right)
    })
}

/// `(A → B) → ((B → C) → (A → C))`: syllogism as a curried theorem.
#[must_use]
pub fn prove_syllogism_curried<A, B, C>()
-> Implies<Implies<A, B>, Implies<Implies<B, C>, Implies<A, C>>>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(|ab: Implies<A, B>| {
        Implies::new(move |bc: Implies<B, C>| syllogism(ab.clone(), bc))
    })
}

/// Permutation: from `A → (B → C)`, conclude `B → (A → C)`.
#[must_use]
pub fn permute<A, B, C>(f: Implies<A, Implies<B, C>>) -> Implies<B, Implies<A, C>>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(move |b: B| {
        let curried = f.clone();
        Implies::new(move |a: A| curried.apply(a).apply(b.clone()))
    })
}

/// Exportation: from `(A ∧ B) → C`, conclude `A → (B → C)`.
#[must_use]
pub fn exportation<A, B, C>(f: Implies<And<A, B>, C>) -> Implies<A, Implies<B, C>>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(move |a: A| {
        let paired = f.clone();
        Implies::new(move |b: B| paired.apply(And::new(a.clone(), b)))
    })
}

/// Importation: from `A → (B → C)`, conclude `(A ∧ B) → C`.
#[must_use]
pub fn importation<A, B, C>(f: Implies<A, Implies<B, C>>) -> Implies<And<A, B>, C>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(move |premises: And<A, B>| f.apply(premises.left).apply(premises.right))
}
