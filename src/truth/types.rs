//! Truth tables evaluated by the trait solver.
//!
//! [`TrueType`] and [`FalseType`] are truth values lifted to types. Each
//! connective is a trait whose `Output` is chosen by a separate impl per
//! row of its truth table, so `AndOf<TrueType, FalseType>` *is* the type
//! `FalseType` and a wrong table entry is a compile error at the
//! assertions at the bottom of this module.

use super::value::Truth;

/// A truth value at the type level.
pub trait TruthType {
    /// The run-time value this type stands for.
    const VALUE: Truth;
}

/// Type-level truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrueType;

/// Type-level falsehood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FalseType;

impl TruthType for TrueType {
    const VALUE: Truth = Truth::True;
}

impl TruthType for FalseType {
    const VALUE: Truth = Truth::False;
}

/// Conjunction of `Self` and `Rhs`.
pub trait And<Rhs: TruthType>: TruthType {
    /// The resulting truth value.
    type Output: TruthType;
}

/// Disjunction of `Self` and `Rhs`.
pub trait Or<Rhs: TruthType>: TruthType {
    /// The resulting truth value.
    type Output: TruthType;
}

/// Negation of `Self`.
pub trait Not: TruthType {
    /// The resulting truth value.
    type Output: TruthType;
}

/// Material implication from `Self` to `Rhs`.
pub trait Implies<Rhs: TruthType>: TruthType {
    /// The resulting truth value.
    type Output: TruthType;
}

/// Material equivalence of `Self` and `Rhs`.
pub trait Equiv<Rhs: TruthType>: TruthType {
    /// The resulting truth value.
    type Output: TruthType;
}

impl And<TrueType> for TrueType {
    type Output = TrueType;
}

impl And<FalseType> for TrueType {
    type Output = FalseType;
}

impl<Rhs: TruthType> And<Rhs> for FalseType {
    type Output = FalseType;
}

impl<Rhs: TruthType> Or<Rhs> for TrueType {
    type Output = TrueType;
}

impl Or<TrueType> for FalseType {
    type Output = TrueType;
}

impl Or<FalseType> for FalseType {
    type Output = FalseType;
}

impl Not for TrueType {
    type Output = FalseType;
}

impl Not for FalseType {
    type Output = TrueType;
}

impl<Rhs: TruthType> Implies<Rhs> for TrueType {
    type Output = Rhs;
}

impl<Rhs: TruthType> Implies<Rhs> for FalseType {
    type Output = TrueType;
}

impl<Lhs, Rhs> Equiv<Rhs> for Lhs
where
    Lhs: Implies<Rhs>,
    Rhs: Implies<Lhs>,
    ImpliesOf<Lhs, Rhs>: And<ImpliesOf<Rhs, Lhs>>,
{
    type Output = AndOf<ImpliesOf<Lhs, Rhs>, ImpliesOf<Rhs, Lhs>>;
}

/// `A ∧ B`.
pub type AndOf<A, B> = <A as And<B>>::Output;
/// `A ∨ B`.
pub type OrOf<A, B> = <A as Or<B>>::Output;
/// `¬A`.
pub type NotOf<A> = <A as Not>::Output;
/// `A → B`.
pub type ImpliesOf<A, B> = <A as Implies<B>>::Output;
/// `A ↔ B`.
pub type EquivOf<A, B> = <A as Equiv<B>>::Output;
/// `((A → B) ∧ (B → C)) → (A → C)`.
pub type Syllogism<A, B, C> =
    ImpliesOf<AndOf<ImpliesOf<A, B>, ImpliesOf<B, C>>, ImpliesOf<A, C>>;

crate::assert_type_eq!(AndOf<TrueType, TrueType>, TrueType);
crate::assert_type_eq!(AndOf<TrueType, FalseType>, FalseType);
crate::assert_type_eq!(AndOf<FalseType, TrueType>, FalseType);
crate::assert_type_eq!(AndOf<FalseType, FalseType>, FalseType);

crate::assert_type_eq!(OrOf<TrueType, TrueType>, TrueType);
crate::assert_type_eq!(OrOf<TrueType, FalseType>, TrueType);
crate::assert_type_eq!(OrOf<FalseType, TrueType>, TrueType);
crate::assert_type_eq!(OrOf<FalseType, FalseType>, FalseType);

crate::assert_type_eq!(NotOf<TrueType>, FalseType);
crate::assert_type_eq!(NotOf<FalseType>, TrueType);

crate::assert_type_eq!(ImpliesOf<TrueType, TrueType>, TrueType);
crate::assert_type_eq!(ImpliesOf<TrueType, FalseType>, FalseType);
crate::assert_type_eq!(ImpliesOf<FalseType, TrueType>, TrueType);
crate::assert_type_eq!(ImpliesOf<FalseType, FalseType>, TrueType);

crate::assert_type_eq!(EquivOf<TrueType, TrueType>, TrueType);
crate::assert_type_eq!(EquivOf<TrueType, FalseType>, FalseType);
crate::assert_type_eq!(EquivOf<FalseType, TrueType>, FalseType);
crate::assert_type_eq!(EquivOf<FalseType, FalseType>, TrueType);

// Syllogism is a tautology: all eight valuations.
crate::assert_type_eq!(Syllogism<TrueType, TrueType, TrueType>, TrueType);
crate::assert_type_eq!(Syllogism<TrueType, TrueType, FalseType>, TrueType);
crate::assert_type_eq!(Syllogism<TrueType, FalseType, TrueType>, TrueType);
crate::assert_type_eq!(Syllogism<TrueType, FalseType, FalseType>, TrueType);
crate::assert_type_eq!(Syllogism<FalseType, TrueType, TrueType>, TrueType);
crate::assert_type_eq!(Syllogism<FalseType, TrueType, FalseType>, TrueType);
crate::assert_type_eq!(Syllogism<FalseType, FalseType, TrueType>, TrueType);
crate::assert_type_eq!(Syllogism<FalseType, FalseType, FalseType>, TrueType);

#[cfg(test)]
mod tests {
    use super::*;

    /// Invokes `$check!` once per valuation of its type-level arguments.
    macro_rules! each_valuation {
        ($check:ident; 1) => {
            each_valuation!(@emit $check; []; TrueType, FalseType);
        };
        ($check:ident; 2) => {
            each_valuation!(@emit $check; [TrueType]; TrueType, FalseType);
            each_valuation!(@emit $check; [FalseType]; TrueType, FalseType);
        };
        ($check:ident; 3) => {
            each_valuation!(@emit $check; [TrueType, TrueType]; TrueType, FalseType);
            each_valuation!(@emit $check; [TrueType, FalseType]; TrueType, FalseType);
            each_valuation!(@emit $check; [FalseType, TrueType]; TrueType, FalseType);
            each_valuation!(@emit $check; [FalseType, FalseType]; TrueType, FalseType);
        };
        (@emit $check:ident; $fixed:tt; $($last:ident),+) => {
            $( each_valuation!(@call $check; $fixed; $last); )+
        };
        (@call $check:ident; [$($fixed:ident),*]; $last:ident) => {
            $check!($($fixed,)* $last)
        };
    }

    macro_rules! unary_row_agrees {
        ($a:ident) => {{
            let a = <$a as TruthType>::VALUE;
            assert_eq!(<NotOf<$a>>::VALUE, a.negate(), "¬{a}");
        }};
    }

    macro_rules! binary_row_agrees {
        ($a:ident, $b:ident) => {{
            let (a, b) = (<$a as TruthType>::VALUE, <$b as TruthType>::VALUE);
            assert_eq!(<AndOf<$a, $b>>::VALUE, a.and(b), "{a} ∧ {b}");
            assert_eq!(<OrOf<$a, $b>>::VALUE, a.or(b), "{a} ∨ {b}");
            assert_eq!(<ImpliesOf<$a, $b>>::VALUE, a.implies(b), "{a} → {b}");
            assert_eq!(<EquivOf<$a, $b>>::VALUE, a.equiv(b), "{a} ↔ {b}");
        }};
    }

    macro_rules! syllogism_row_agrees {
        ($a:ident, $b:ident, $c:ident) => {{
            let (a, b, c) = (
                <$a as TruthType>::VALUE,
                <$b as TruthType>::VALUE,
                <$c as TruthType>::VALUE,
            );
            assert_eq!(
                <Syllogism<$a, $b, $c>>::VALUE,
                Truth::syllogism(a, b, c),
                "syllogism({a}, {b}, {c})"
            );
            assert_eq!(<Syllogism<$a, $b, $c>>::VALUE, Truth::True);
        }};
    }

    #[test]
    fn negation_table_agrees_with_run_time_negation() {
        each_valuation!(unary_row_agrees; 1);
    }

    #[test]
    fn binary_tables_agree_with_run_time_connectives() {
        each_valuation!(binary_row_agrees; 2);
    }

    #[test]
    fn syllogism_agrees_with_run_time_syllogism_on_every_valuation() {
        each_valuation!(syllogism_row_agrees; 3);
    }
}
