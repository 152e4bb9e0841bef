use std::sync::Arc;

use crate::{
    audit::{self, AuditEvent, AuditOutcome, AuditTrail},
    error::{Violation, ViolationKind},
    predicate::{BoxPredicate, Predicate},
    request::IdentityContext,
};

/// The dispatch gate in front of a protected operation.
///
/// A gate holds one predicate, evaluates it once per call, and turns a false
/// result into a [`Violation`]. Callers without a resolved identity get
/// [`ViolationKind::Unauthenticated`] so they can be sent to log in; callers
/// with one get [`ViolationKind::Forbidden`].
///
/// # Examples
///
/// ```
/// use auth_predicates::{Authenticated, PolicyGate, Principal, RequestContext, ViolationKind};
///
/// let gate = PolicyGate::new(Authenticated).for_action("dashboard");
///
/// let anonymous = RequestContext::new("req-1");
/// let err = gate.check(&anonymous).unwrap_err();
/// assert_eq!(err.kind, ViolationKind::Unauthenticated);
///
/// let alice = RequestContext::new("req-2").with_identity(Principal::new().with("name", "alice"));
/// assert!(gate.check(&alice).is_ok());
/// ```
#[derive(Debug)]
pub struct PolicyGate {
    predicate: BoxPredicate,
    action: Option<String>,
    principal_attr: String,
    trail: Option<Arc<AuditTrail>>,
}

impl PolicyGate {
    /// Creates a gate that allows calls only while `predicate` holds.
    pub fn new(predicate: impl Predicate + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            action: None,
            principal_attr: "name".to_string(),
            trail: None,
        }
    }

    /// Labels the protected operation in violations, logs, and audit events.
    pub fn for_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the identity attribute used as the principal label (default `name`).
    pub fn with_principal_attr(mut self, attr: impl Into<String>) -> Self {
        self.principal_attr = attr.into();
        self
    }

    /// Records every decision in `trail` in addition to logging it.
    pub fn with_trail(mut self, trail: Arc<AuditTrail>) -> Self {
        self.trail = Some(trail);
        self
    }

    /// The predicate guarding this gate.
    pub fn predicate(&self) -> &dyn Predicate {
        self.predicate.as_ref()
    }

    /// Evaluates the predicate for the current request.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated` if the predicate is false and nobody is logged in
    /// - `Forbidden` if the predicate is false for a resolved identity
    /// - `Misconfigured` if the predicate could not be evaluated
    pub fn check(&self, ctx: &dyn IdentityContext) -> Result<(), Violation> {
        let request_id = ctx.request_id();
        let action = self.action.as_deref().unwrap_or("<unlabelled>");

        let (outcome, result) = match self.predicate.evaluate(ctx) {
            Ok(true) => {
                tracing::debug!(request_id = %request_id, action, predicate = ?self.predicate, "access granted");
                (AuditOutcome::Granted, Ok(()))
            }
            Ok(false) => {
                tracing::warn!(request_id = %request_id, action, predicate = ?self.predicate, "access denied");
                (AuditOutcome::Denied, Err(self.denial(ctx)))
            }
            Err(err) => {
                tracing::error!(
                    request_id = %request_id,
                    action,
                    predicate = ?self.predicate,
                    error = %err,
                    "policy could not be evaluated"
                );
                (
                    AuditOutcome::Error,
                    Err(Violation::new(ViolationKind::Misconfigured, err.to_string())),
                )
            }
        };

        if let Some(trail) = &self.trail {
            let policy = format!("{:?}", self.predicate);
            let principal = self.principal_label(ctx);
            let mut event = AuditEvent::new(request_id, principal, outcome, policy);
            if let Some(action) = &self.action {
                event = event.with_action(action.clone());
            }
            audit::emit_and_record(event, trail);
        }

        result
    }

    /// Runs `op` only if [`check`](Self::check) passes.
    ///
    /// # Errors
    ///
    /// Returns the violation from `check`; `op` is not called in that case.
    pub fn guard<T>(&self, ctx: &dyn IdentityContext, op: impl FnOnce() -> T) -> Result<T, Violation> {
        self.check(ctx)?;
        Ok(op())
    }

    fn denial(&self, ctx: &dyn IdentityContext) -> Violation {
        if ctx.resolved_identity().is_none() {
            Violation::new(ViolationKind::Unauthenticated, "Authentication required")
        } else {
            Violation::new(
                ViolationKind::Forbidden {
                    action: self.action.clone(),
                },
                "Access denied by policy",
            )
        }
    }

    fn principal_label(&self, ctx: &dyn IdentityContext) -> Option<String> {
        let value = ctx.resolved_identity()?.attribute(&self.principal_attr)?;
        Some(match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        })
    }
}
