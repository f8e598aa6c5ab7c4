//! Conjunction and disjunction.

/// A proof of "A and B": a proof of each side, held side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct And<A, B> {
    /// Proof of the left conjunct.
    pub left: A,
    /// Proof of the right conjunct.
    pub right: B,
}

impl<A, B> And<A, B> {
    /// Pairs two proofs.
    #[must_use]
    pub const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

/// A proof of "A or B": a proof of exactly one side, tagged with which.
///
/// Knowing *which* disjunct holds is part of the proof. Case analysis is
/// by variant, never by inspecting the proof inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Or<A, B> {
    /// The left disjunct holds.
    Left(A),
    /// The right disjunct holds.
    Right(B),
}

impl<A, B> Or<A, B> {
    /// Returns `true` when the left disjunct is the one proved.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` when the right disjunct is the one proved.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Case analysis: runs `on_left` or `on_right` depending on which
    /// disjunct is populated.
    pub fn either<C>(self, on_left: impl FnOnce(A) -> C, on_right: impl FnOnce(B) -> C) -> C {
        match self {
            Self::Left(a) => on_left(a),
            Self::Right(b) => on_right(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_exposes_both_components() {
        let pair = And::new(1_u8, "two");
        assert_eq!(pair.left, 1);
        assert_eq!(pair.right, "two");
    }

    #[test]
    fn or_reports_its_tag() {
        let left: Or<u8, char> = Or::Left(3);
        let right: Or<u8, char> = Or::Right('x');
        assert!(left.is_left() && !left.is_right());
        assert!(right.is_right() && !right.is_left());
    }

    #[test]
    fn either_dispatches_on_the_populated_variant_even_for_equal_types() {
        let left: Or<u8, u8> = Or::Left(7);
        let right: Or<u8, u8> = Or::Right(7);
        assert_eq!(left.either(|_| "left", |_| "right"), "left");
        assert_eq!(right.either(|_| "left", |_| "right"), "right");
    }
}
