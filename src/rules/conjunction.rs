//! Rules for conjunction.

use crate::prop::{And, Implies, Proposition};

/// And-introduction: `A → (B → A ∧ B)`.
///
/// # Examples
///
///     use conlogic::prop::True;
///     use conlogic::rules::and_intro;
///
///     let both = and_intro::<True, u8>().apply(True).apply(9);
///     assert_eq!((both.left, both.right), (True, 9));
#[must_use]
pub fn and_intro<A: Proposition, B: Proposition>() -> Implies<A, Implies<B, And<A, B>>> {
    Implies::new(|a: A| Implies::new(move |b: B| And::new(a.clone(), b)))
}

/// And-elimination, left: `A ∧ B → A`.
#[must_use]
pub fn and_elim_left<A: Proposition, B: Proposition>() -> Implies<And<A, B>, A> {
    Implies::new(|both: And<A, B>| both.left)
}

/// And-elimination, right: `A ∧ B → B`.
#[must_use]
pub fn and_elim_right<A: Proposition, B: Proposition>() -> Implies<And<A, B>, B> {
    Implies::new(|both: And<A, B>| both.right)
}

/// `A ∧ B → B ∧ A`.
#[must_use]
pub fn and_commute<A: Proposition, B: Proposition>() -> Implies<And<A, B>, And<B, A>> {
    Implies::new(|both: And<A, B>| And::new(both.right, both.left))
}
