//! Compile-time certification of theorem types.
//!
//! A proof is only worth something once its type is pinned to the theorem
//! it claims to prove. [`certify`] pins a value inside an expression and
//! [`assert_type_eq!`](crate::assert_type_eq) pins a type at item level.
//! Either one rejects the build on a mismatch.

/// Returns `proof` unchanged after forcing it to have type `P`.
///
/// Write the theorem as the turbofish argument; the build fails if the
/// proof proves anything else.
///
/// # Examples
///
///     use conlogic::certify;
///     use conlogic::prop::{Implies, Not};
///     use conlogic::rules::double_negation_intro;
///
///     let dni = certify::<Implies<u8, Not<Not<u8>>>>(double_negation_intro());
///     assert!(format!("{dni:?}").starts_with("Implies<"));
///
/// A proof of the wrong theorem does not compile:
///
/// ```compile_fail
/// use conlogic::certify;
/// use conlogic::prop::{And, Implies};
/// use conlogic::rules::and_elim_left;
///
/// let _ = certify::<Implies<And<u8, bool>, bool>>(and_elim_left::<u8, bool>());
/// ```
#[must_use]
pub const fn certify<P>(proof: P) -> P {
    proof
}

/// Asserts at compile time that two types are identical.
///
/// Expands to an anonymous constant, so it may appear wherever an item
/// may. Associated-type projections are normalized before comparison.
///
/// # Examples
///
///     use conlogic::assert_type_eq;
///     use conlogic::prop::{False, Implies, Not};
///
///     assert_type_eq!(Not<u8>, Implies<u8, False>);
///
/// ```compile_fail
/// use conlogic::assert_type_eq;
/// use conlogic::prop::{False, Implies, Not};
///
/// assert_type_eq!(Not<u8>, Implies<False, u8>);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($left:ty, $right:ty $(,)?) => {
        const _: () = {
            let _: ::core::marker::PhantomData<$left> = ::core::marker::PhantomData::<$right>;
        };
    };
}
