//! The predicate capability and its composition helpers.

use std::fmt;

use crate::error::Error;
use crate::logic::{All, Any, Not};
use crate::request::IdentityContext;

/// A reusable, lazily-evaluated access-control policy.
///
/// A predicate has no stored truth value: every call to
/// [`evaluate`](Predicate::evaluate) reads the context it is given, so a user
/// logging in or out between two checks is always observed.
///
/// The provided `evaluate` body carries no logic and fails with
/// [`Error::NotImplemented`]. Concrete predicates override it and always
/// return `Ok`.
///
/// # Examples
///
/// ```
/// use auth_predicates::{IdentityContext, Predicate};
///
/// #[derive(Debug)]
/// struct HasEmail;
///
/// impl Predicate for HasEmail {
///     fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, auth_predicates::Error> {
///         Ok(ctx
///             .resolved_identity()
///             .is_some_and(|user| user.attribute("email").is_some()))
///     }
/// }
/// ```
pub trait Predicate: fmt::Debug + Send + Sync {
    /// Evaluates the policy against the current identity and request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotImplemented`] if the implementor does not override
    /// this method.
    fn evaluate(&self, _ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Err(Error::not_implemented::<Self>())
    }
}

/// A boxed, type-erased predicate.
pub type BoxPredicate = Box<dyn Predicate>;

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        (**self).evaluate(ctx)
    }
}

impl<P: Predicate + ?Sized> Predicate for std::sync::Arc<P> {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        (**self).evaluate(ctx)
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        (**self).evaluate(ctx)
    }
}

/// The bare predicate capability with no evaluation logic.
///
/// Evaluating it is always a programming error; it only exists as a
/// placeholder while a policy is being assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractPredicate;

impl Predicate for AbstractPredicate {}

/// Combinator methods available on every predicate.
pub trait PredicateExt: Predicate + Sized + 'static {
    /// Erases the concrete type.
    fn boxed(self) -> BoxPredicate {
        Box::new(self)
    }

    /// Negates this predicate.
    fn not(self) -> Not {
        Not::new(self)
    }

    /// Requires both this predicate and `other`.
    fn and(self, other: impl Predicate + 'static) -> All {
        All::new().with(self).with(other)
    }

    /// Requires this predicate or `other`.
    fn or(self, other: impl Predicate + 'static) -> Any {
        Any::new().with(self).with(other)
    }
}

impl<P: Predicate + Sized + 'static> PredicateExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Always, Never};
    use crate::request::RequestContext;

    #[derive(Debug)]
    struct Unfinished;

    impl Predicate for Unfinished {}

    #[test]
    fn abstract_predicate_fails_loudly() {
        let ctx = RequestContext::new("req-1");
        let err = AbstractPredicate.evaluate(&ctx).unwrap_err();
        assert!(matches!(err, Error::NotImplemented { predicate } if predicate.ends_with("AbstractPredicate")));
    }

    #[test]
    fn non_overriding_implementor_fails() {
        let ctx = RequestContext::new("req-2");
        let err = Unfinished.evaluate(&ctx).unwrap_err();
        assert!(matches!(err, Error::NotImplemented { predicate } if predicate.ends_with("Unfinished")));
    }

    #[test]
    fn boxed_and_shared_predicates_delegate() {
        let ctx = RequestContext::new("req-3");
        let boxed: BoxPredicate = Always.boxed();
        assert_eq!(boxed.evaluate(&ctx), Ok(true));

        let shared = std::sync::Arc::new(Never);
        assert_eq!(shared.evaluate(&ctx), Ok(false));
        assert_eq!((&Always).evaluate(&ctx), Ok(true));
    }

    #[test]
    fn ext_methods_build_composites() {
        let ctx = RequestContext::new("req-4");
        assert_eq!(Always.and(Never).evaluate(&ctx), Ok(false));
        assert_eq!(Always.or(Never).evaluate(&ctx), Ok(true));
        assert_eq!(Never.not().evaluate(&ctx), Ok(true));
    }
}
