//! Natural numbers and their arithmetic, computed by the trait solver.
//!
//! A number is a type: [`Zero`] or the successor [`Succ`] of another
//! number. Addition and multiplication are traits whose `Output` is chosen
//! by recursion on the left operand, so `Sum<One, Two>` normalizes to the
//! very type `Three` and the equations at the bottom of this module are
//! checked on every build.
//!
//! # Examples
//!
//!     use conlogic::peano::{Nat, Product, Sum, Three, Two};
//!
//!     assert_eq!(<Sum<Two, Three>>::VALUE, 5);
//!     assert_eq!(<Product<Two, Three>>::VALUE, 6);

use std::marker::PhantomData;

/// A type-level natural number.
pub trait Nat {
    /// The number as a run-time value.
    const VALUE: usize;
}

/// The number zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

/// The successor of `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Succ<N>(PhantomData<N>);

impl Nat for Zero {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Addition of `Rhs` to `Self`.
pub trait Add<Rhs: Nat>: Nat {
    /// The sum.
    type Output: Nat;
}

/// Multiplication of `Self` by `Rhs`.
pub trait Mul<Rhs: Nat>: Nat {
    /// The product.
    type Output: Nat;
}

// 0 + m = m
impl<Rhs: Nat> Add<Rhs> for Zero {
    type Output = Rhs;
}

// S(n) + m = S(n + m)
impl<N, Rhs> Add<Rhs> for Succ<N>
where
    N: Add<Rhs>,
    Rhs: Nat,
{
    type Output = Succ<Sum<N, Rhs>>;
}

// 0 * m = 0
impl<Rhs: Nat> Mul<Rhs> for Zero {
    type Output = Self;
}

// S(n) * m = n * m + m
impl<N, Rhs> Mul<Rhs> for Succ<N>
where
    N: Mul<Rhs>,
    Product<N, Rhs>: Add<Rhs>,
    Rhs: Nat,
{
    type Output = Sum<Product<N, Rhs>, Rhs>;
}

/// `A + B`.
pub type Sum<A, B> = <A as Add<B>>::Output;
/// `A × B`.
pub type Product<A, B> = <A as Mul<B>>::Output;

/// 1.
pub type One = Succ<Zero>;
/// 2.
pub type Two = Succ<One>;
/// 3.
pub type Three = Succ<Two>;
/// 4.
pub type Four = Succ<Three>;

// Zero is a right identity for addition.
crate::assert_type_eq!(Sum<Zero, Zero>, Zero);
crate::assert_type_eq!(Sum<One, Zero>, One);
crate::assert_type_eq!(Sum<Two, Zero>, Two);

crate::assert_type_eq!(Sum<One, Two>, Three);
crate::assert_type_eq!(Product<Two, Two>, Four);
