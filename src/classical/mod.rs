//! Classical axioms and the proofs that they imply one another.
//!
//! None of the axioms below is provable in constructive logic on its own.
//! Each transformer assumes an *instance* of one axiom and builds an
//! instance of another, so that adding any one of them yields the same
//! (classical) logic.
//!
//! | From | To | Transformer |
//! |---|---|---|
//! | excluded middle | double-negation elimination | [`prove_dne_from_lem`] |
//! | double-negation elimination | Peirce's law | [`prove_peirce_from_dne`] |
//! | Peirce's law | double-negation elimination | [`prove_dne_from_peirce`] |
//! | double-negation elimination | excluded middle | [`prove_lem_from_dne`] |

use crate::prop::{False, Implies, Not, Or, Proposition};
use crate::rules::{de_morgan_1, identity, modus_ponens, or_elim, principle_of_explosion};

/// Law of excluded middle: `A ∨ ¬A`.
pub type ExcludedMiddle<A> = Or<A, Not<A>>;

/// Double-negation elimination: `¬¬A → A`.
pub type DoubleNegationElim<A> = Implies<Not<Not<A>>, A>;

/// Peirce's law: `((A → B) → A) → A`.
pub type Peirce<A, B> = Implies<Implies<Implies<A, B>, A>, A>;

/// LEM → DNE: from `A ∨ ¬A`, build `¬¬A → A`.
///
/// If the left disjunct holds it is the answer. If `¬A` holds, it meets
/// the assumed `¬¬A` to give `False`, and explosion gives `A`.
///
/// # Examples
///
///     use conlogic::classical::prove_dne_from_lem;
///     use conlogic::prop::Or;
///     use conlogic::rules::double_negation_intro;
///
///     let dne = prove_dne_from_lem(Or::Left(42_u32));
///     assert_eq!(dne.apply(double_negation_intro().apply(0)), 42);
#[must_use]
pub fn prove_dne_from_lem<A: Proposition>(lem: ExcludedMiddle<A>) -> DoubleNegationElim<A> {
    Implies::new(move |not_not_a: Not<Not<A>>| {
        let from_not_a = Implies::new(move |not_a: Not<A>| {
            let contradiction = modus_ponens(not_a, &not_not_a);
            principle_of_explosion::<A>().apply(contradiction)
        });
        or_elim::<A, Not<A>, A>()
            .apply(lem.clone())
            .apply(identity())
            .apply(from_not_a)
    })
}

/// DNE → Peirce: from `¬¬A → A`, build `((A → B) → A) → A`.
///
/// Given the premise `f`, a proof of `¬¬A` is built by assuming `¬A`: an
/// `A → B` that always explodes is fed to `f`, and the `A` it returns
/// refutes the assumption. The DNE instance then turns `¬¬A` into `A`.
#[must_use]
pub fn prove_peirce_from_dne<A, B>(dne: DoubleNegationElim<A>) -> Peirce<A, B>
where
    A: Proposition,
    B: Proposition,
{
    Implies::new(move |f: Implies<Implies<A, B>, A>| {
        let not_not_a: Not<Not<A>> = Implies::new(move |not_a: Not<A>| {
            let refutes_a = not_a.clone();
            let a_to_b = Implies::new(move |a: A| {
                principle_of_explosion::<B>().apply(modus_ponens(a, &refutes_a))
            });
            modus_ponens(f.apply(a_to_b), &not_a)
        });
        dne.apply(not_not_a)
    })
}

/// Peirce → DNE: from Peirce's law at `B = False`, build `¬¬A → A`.
///
/// With `B = False`, `A → B` is literally `¬A`, so the instance already
/// has type `((¬A) → A) → A`. It is applied to a `¬A → A` that explodes
/// using the assumed `¬¬A`.
#[must_use]
pub fn prove_dne_from_peirce<A: Proposition>(peirce: Peirce<A, False>) -> DoubleNegationElim<A> {
    let specialized: Implies<Implies<Not<A>, A>, A> = peirce;
    Implies::new(move |not_not_a: Not<Not<A>>| {
        let not_a_to_a = Implies::new(move |not_a: Not<A>| {
            principle_of_explosion::<A>().apply(modus_ponens(not_a, &not_not_a))
        });
        specialized.apply(not_a_to_a)
    })
}

/// `¬¬(A ∨ ¬A)`: excluded middle cannot be refuted, even constructively.
///
/// A refutation of `A ∨ ¬A` splits into `¬A` and `¬¬A`, which contradict
/// each other.
#[must_use]
pub fn excluded_middle_irrefutable<A: Proposition>() -> Not<Not<ExcludedMiddle<A>>> {
    Implies::new(|not_lem: Not<ExcludedMiddle<A>>| {
        let halves = de_morgan_1::<A, Not<A>>().apply(not_lem);
        modus_ponens(halves.left, &halves.right)
    })
}

/// DNE → LEM: double-negation elimination at `A ∨ ¬A` yields `A ∨ ¬A`.
#[must_use]
pub fn prove_lem_from_dne<A: Proposition>(
    dne: &DoubleNegationElim<ExcludedMiddle<A>>,
) -> ExcludedMiddle<A> {
    dne.apply(excluded_middle_irrefutable())
}

/// LEM → Peirce, composed through double-negation elimination.
///
/// The excluded-middle instance is turned into `¬¬A → A` by
/// [`prove_dne_from_lem`], whose case split decides the result, and that
/// is handed to [`prove_peirce_from_dne`].
#[must_use]
pub fn prove_peirce_from_lem<A, B>(lem: ExcludedMiddle<A>) -> Peirce<A, B>
where
    A: Proposition,
    B: Proposition,
{
    prove_peirce_from_dne(prove_dne_from_lem(lem))
}
