//! Rules for disjunction.

use crate::prop::{Implies, Or, Proposition};

/// Or-introduction, left: `A → A ∨ B`.
#[must_use]
pub fn or_intro_left<A: Proposition, B: Proposition>() -> Implies<A, Or<A, B>> {
    Implies::new(|a: A| Or::Left(a))
}

/// Or-introduction, right: `B → A ∨ B`.
#[must_use]
pub fn or_intro_right<A: Proposition, B: Proposition>() -> Implies<B, Or<A, B>> {
    Implies::new(|b: B| Or::Right(b))
}

/// Or-elimination: `(A ∨ B) → ((A → C) → ((B → C) → C))`.
///
/// The handler that runs is chosen by which variant of the disjunction is
/// populated, so the rule stays correct when `A` and `B` are the same type.
///
/// # Examples
///
///     use conlogic::prop::{Implies, Or};
///     use conlogic::rules::or_elim;
///
///     let on_left: Implies<u8, &str> = Implies::new(|_| "left");
///     let on_right: Implies<u8, &str> = Implies::new(|_| "right");
///     let chosen = or_elim().apply(Or::Right(0)).apply(on_left).apply(on_right);
///     assert_eq!(chosen, "right");
#[must_use]
pub fn or_elim<A, B, C>() -> Implies<Or<A, B>, Implies<Implies<A, C>, Implies<Implies<B, C>, C>>>
where
    A: Proposition,
    B: Proposition,
    C: Proposition,
{
    Implies::new(|either: Or<A, B>| {
        Implies::new(move |on_left: Implies<A, C>| {
            let case = either.clone();
            Implies::new(move |on_right: Implies<B, C>| match case.clone() {
                Or::Left(a) => on_left.apply(a),
                Or::Right(b) => on_right.apply(b),
            })
        })
    })
}

/// `A ∨ B → B ∨ A`.
#[must_use]
pub fn or_commute<A: Proposition, B: Proposition>() -> Implies<Or<A, B>, Or<B, A>> {
    Implies::new(|either: Or<A, B>| match either {
        Or::Left(a) => Or::Right(a),
        Or::Right(b) => Or::Left(b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(label: &'static str) -> Implies<i32, String> {
        Implies::new(move |n: i32| format!("{label}:{n}"))
    }

    #[test]
    fn injections_fix_the_tag() {
        assert!(or_intro_left::<u8, u8>().apply(1).is_left());
        assert!(or_intro_right::<u8, u8>().apply(1).is_right());
    }

    #[test]
    fn or_elim_runs_the_left_handler_for_a_left_proof() {
        let result = or_elim().apply(Or::Left(5)).apply(tag("left")).apply(tag("right"));
        assert_eq!(result, "left:5");
    }

    #[test]
    fn or_elim_runs_the_right_handler_for_a_right_proof() {
        let result = or_elim().apply(Or::Right(6)).apply(tag("left")).apply(tag("right"));
        assert_eq!(result, "right:6");
    }

    #[test]
    fn or_commute_swaps_the_tag() {
        let swapped = or_commute().apply(Or::<u8, char>::Left(3));
        assert_eq!(swapped, Or::Right(3));
    }
}
