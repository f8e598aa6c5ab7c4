//! Rules for negation and falsehood.
//!
//! `Not<A>` is `Implies<A, False>`, so every rule here is a specialization
//! of an implication rule with `False` as the consequent somewhere.

use super::{
    and_elim_left, and_elim_right, modus_ponens, or_elim, or_intro_left, or_intro_right, syllogism,
};
use crate::prop::{And, False, Implies, Not, Or, Proposition};

/// Double-negation introduction: `A → ¬¬A`.
///
/// Given `a`, any disproof of `A` applied to `a` yields `False`.
#[must_use]
pub fn double_negation_intro<A: Proposition>() -> Implies<A, Not<Not<A>>> {
    Implies::new(|a: A| Implies::new(move |not_a: Not<A>| not_a.apply(a.clone())))
}

/// Ex falso quodlibet: `False → A`.
///
/// The body is an empty match. No value of [`False`] exists, so the
/// returned implication can never actually be applied.
#[must_use]
pub fn principle_of_explosion<A: Proposition>() -> Implies<False, A> {
    Implies::new(|contradiction: False| contradiction.absurd())
}

/// Contraposition: `(A → B) → (¬B → ¬A)`.
#[must_use]
pub fn contraposition<A, B>() -> Implies<Implies<A, B>, Implies<Not<B>, Not<A>>>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(|forward: Implies<A, B>| {
        Implies::new(move |not_b: Not<B>| syllogism(forward.clone(), not_b))
    })
}

/// First De Morgan law: `¬(A ∨ B) → (¬A ∧ ¬B)`.
///
/// Each half is the disproof of the disjunction composed with the matching
/// injection.
#[must_use]
pub fn de_morgan_1<A, B>() -> Implies<Not<Or<A, B>>, And<Not<A>, Not<B>>>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(|not_either: Not<Or<A, B>>| {
        And::new(
            syllogism(or_intro_left(), not_either.clone()),
            syllogism(or_intro_right(), not_either),
        )
    })
}

/// Second De Morgan law: `(¬A ∧ ¬B) → ¬(A ∨ B)`.
///
/// Or-elimination with `False` as the common conclusion; the two halves of
/// the premise are exactly the handlers it needs.
#[must_use]
pub fn de_morgan_2<A, B>() -> Implies<And<Not<A>, Not<B>>, Not<Or<A, B>>>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(|both: And<Not<A>, Not<B>>| {
        let not_a = and_elim_left().apply(both.clone());
        let not_b = and_elim_right().apply(both);
        Implies::new(move |either: Or<A, B>| {
            or_elim::<A, B, False>()
                .apply(either)
                .apply(not_a.clone())
                .apply(not_b.clone())
        })
    })
}

/// `(¬A ∨ ¬B) → ¬(A ∧ B)`, the constructive half of the dual De Morgan law.
#[must_use]
pub fn de_morgan_3<A, B>() -> Implies<Or<Not<A>, Not<B>>, Not<And<A, B>>>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(|either: Or<Not<A>, Not<B>>| {
        Implies::new(move |both: And<A, B>| match either.clone() {
            Or::Left(not_a) => not_a.apply(both.left),
            Or::Right(not_b) => not_b.apply(both.right),
        })
    })
}

/// Reductio ad absurdum: `(A → B) → ((A → ¬B) → ¬A)`.
///
/// Assuming `a`, both `B` and `¬B` follow, and together they give `False`.
#[must_use]
pub fn reductio_ad_absurdum<A, B>() -> Implies<Implies<A, B>, Implies<Implies<A, Not<B>>, Not<A>>>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(|a_to_b: Implies<A, B>| {
        Implies::new(move |a_to_not_b: Implies<A, Not<B>>| {
            let proves_b = a_to_b.clone();
            Implies::new(move |a: A| {
                let b = modus_ponens(a.clone(), &proves_b);
                let not_b = modus_ponens(a, &a_to_not_b);
                modus_ponens(b, &not_b)
            })
        })
    })
}

/// Law of non-contradiction: `¬(A ∧ ¬A)`.
#[must_use]
pub fn non_contradiction<A: Proposition>() -> Not<And<A, Not<A>>> {
    Implies::new(|both: And<A, Not<A>>| both.right.apply(both.left))
}

/// `¬¬¬A → ¬A`: the contrapositive of double-negation introduction.
#[must_use]
pub fn triple_negation_elim<A: Proposition>() -> Implies<Not<Not<Not<A>>>, Not<A>> {
    contraposition::<A, Not<Not<A>>>().apply(double_negation_intro())
}
