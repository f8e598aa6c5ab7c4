//! Two-valued truth and the classical connectives.

use std::fmt;
use std::ops;

/// A classical truth value.
///
/// Every connective is a total `const fn` written as an explicit truth
/// table, so results can be asserted at compile time as well as at run
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Truth {
    /// Truth.
    True,
    /// Falsehood.
    False,
}

impl Truth {
    /// Both truth values, `True` first.
    pub const ALL: [Self; 2] = [Self::True, Self::False];

    /// Converts a `bool`.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// Returns `true` for [`Truth::True`].
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Conjunction.
    #[must_use]
    pub const fn and(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::True, Self::True) => Self::True,
            _ => Self::False,
        }
    }

    /// Disjunction.
    #[must_use]
    pub const fn or(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::False, Self::False) => Self::False,
            _ => Self::True,
        }
    }

    /// Negation.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }

    /// Material implication.
    ///
    /// A false antecedent makes the implication true whatever the
    /// consequent; a true antecedent makes it exactly the consequent.
    /// This is a truth value, unlike [`crate::prop::Implies`], which is a
    /// function between proofs.
    #[must_use]
    pub const fn implies(self, rhs: Self) -> Self {
        match self {
            Self::False => Self::True,
            Self::True => rhs,
        }
    }

    /// Material equivalence: implication in both directions.
    #[must_use]
    pub const fn equiv(self, rhs: Self) -> Self {
        self.implies(rhs).and(rhs.implies(self))
    }

    /// `((a → b) ∧ (b → c)) → (a → c)`.
    #[must_use]
    pub const fn syllogism(a: Self, b: Self, c: Self) -> Self {
        a.implies(b).and(b.implies(c)).implies(a.implies(c))
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Truth> for bool {
    fn from(value: Truth) -> Self {
        value.is_true()
    }
}

impl ops::Not for Truth {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl ops::BitAnd for Truth {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl ops::BitOr for Truth {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::True => "T",
            Self::False => "F",
        })
    }
}

const _: () = assert!(Truth::syllogism(Truth::False, Truth::True, Truth::False).is_true());
const _: () = assert!(Truth::False.implies(Truth::False).is_true());
const _: () = assert!(!Truth::True.equiv(Truth::False).is_true());
const _: () = assert!(Truth::False.equiv(Truth::False).is_true());
