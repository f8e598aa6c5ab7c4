//! Implication and negation.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use super::False;

/// A proof of "A implies B": a total function turning any proof of `A`
/// into a proof of `B`.
///
/// The function sits behind a shared handle, so cloning an implication is
/// cheap and never requires `A` or `B` to be clonable. Because the type is
/// nameable, the full type of any composite theorem can be written out and
/// compared.
///
/// # Examples
///
///     use conlogic::prop::{Implies, True};
///
///     let always_true: Implies<True, True> = Implies::new(|_| True);
///     assert_eq!(always_true.apply(True), True);
pub struct Implies<A, B>(Rc<dyn Fn(A) -> B>);

/// A proof of "not A", which is exactly a proof of "A implies False".
pub type Not<A> = Implies<A, False>;

impl<A, B> Implies<A, B> {
    /// Wraps a function as an implication proof.
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self(Rc::new(f))
    }

    /// Applies the implication to a proof of its antecedent.
    #[must_use]
    pub fn apply(&self, a: A) -> B {
        (self.0)(a)
    }
}

impl<A, B> Clone for Implies<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Implies<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Implies<{}, {}>", type_name::<A>(), type_name::<B>())
    }
}
