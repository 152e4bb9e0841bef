use std::borrow::Cow;
use std::fmt;

use crate::error::Error;
use crate::identity::Identity;
use crate::predicate::Predicate;
use crate::request::{Environ, IdentityContext};

/// A predicate backed by an arbitrary function of the identity and request.
///
/// The function runs on every evaluation; nothing is cached. An identity slot
/// that has not been resolved is passed as `None`.
///
/// # Examples
///
/// ```
/// use auth_predicates::{CustomPredicate, Predicate, Principal, RequestContext};
///
/// let has_email = CustomPredicate::new("has_email", |user, _environ| {
///     user.is_some_and(|u| u.attribute("email").is_some())
/// });
///
/// let ctx = RequestContext::new("req-1")
///     .with_identity(Principal::new().with("email", "a@example.com"));
/// assert_eq!(has_email.evaluate(&ctx), Ok(true));
/// ```
pub struct CustomPredicate<F> {
    label: Cow<'static, str>,
    conditional: F,
}

impl<F> CustomPredicate<F>
where
    F: Fn(Option<&dyn Identity>, &Environ) -> bool + Send + Sync,
{
    /// Wraps `conditional`; `label` names the policy in logs.
    pub fn new(label: impl Into<Cow<'static, str>>, conditional: F) -> Self {
        Self {
            label: label.into(),
            conditional,
        }
    }

    /// Wraps `conditional`, labelled with the function's type name.
    pub fn from_fn(conditional: F) -> Self {
        Self::new(std::any::type_name::<F>(), conditional)
    }

    /// The label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<F> fmt::Debug for CustomPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomPredicate").field(&self.label).finish()
    }
}

impl<F> Predicate for CustomPredicate<F>
where
    F: Fn(Option<&dyn Identity>, &Environ) -> bool + Send + Sync,
{
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        let result = (self.conditional)(ctx.resolved_identity(), ctx.request_environ());
        tracing::trace!(
            request_id = %ctx.request_id(),
            predicate = %self.label,
            result,
            "custom predicate evaluated"
        );
        Ok(result)
    }
}
