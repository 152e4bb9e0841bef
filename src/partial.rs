use std::fmt;
use std::marker::PhantomData;

use crate::predicate::Predicate;

/// A matcher that can be built from a lookup key plus one remaining argument.
pub trait Specialize: Predicate + Sized {
    /// The argument still required once the key is fixed.
    type Arg;

    /// Builds the matcher for `key` and `arg`.
    fn specialize(key: &str, arg: Self::Arg) -> Self;
}

/// A matcher constructor with its lookup key already fixed.
///
/// Use it to build a small library of named policies without repeating the
/// attribute or environment key at every call site.
///
/// # Examples
///
/// ```
/// use auth_predicates::{Predicate, Principal, RequestContext, ValueIn};
///
/// let member_of = ValueIn::partial("groups");
/// let admins = member_of.apply("admin");
///
/// let ctx = RequestContext::new("req-1")
///     .with_identity(Principal::new().with("groups", vec!["admin"]));
/// assert_eq!(admins.evaluate(&ctx), Ok(true));
/// assert_eq!(member_of.apply("editor").evaluate(&ctx), Ok(false));
/// ```
pub struct Partial<P> {
    key: String,
    _marker: PhantomData<fn() -> P>,
}

impl<P: Specialize> Partial<P> {
    /// Fixes the lookup key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The fixed lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Builds a matcher from the remaining argument.
    pub fn apply(&self, arg: impl Into<P::Arg>) -> P {
        P::specialize(&self.key, arg.into())
    }

    /// Converts the template into a plain constructor closure.
    pub fn into_fn(self) -> impl Fn(P::Arg) -> P {
        move |arg| P::specialize(&self.key, arg)
    }
}

impl<P> Clone for Partial<P> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Partial<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial")
            .field("predicate", &std::any::type_name::<P>())
            .field("key", &self.key)
            .finish()
    }
}
