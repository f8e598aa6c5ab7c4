//! Shared helpers for the integration tests of the workspace.
//!
//! Proof values are opaque closures, so tests mostly compare *types*: a
//! proof is the right one when its type is the theorem. These helpers make
//! that comparison available as a run-time `bool` for use in assertions.

use std::any::{TypeId, type_name};

/// Returns `true` when `T` and `U` are the same type.
#[must_use]
pub fn same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Returns `true` when `value` has type `T`.
#[must_use]
pub fn has_type<T: ?Sized + 'static, V: ?Sized + 'static>(_value: &V) -> bool {
    same_type::<T, V>()
}

/// Returns the compiler's name for the type of `value`.
#[must_use]
pub fn type_name_of<V: ?Sized>(_value: &V) -> &'static str {
    type_name::<V>()
}
