//! Audit event schema and types.

use std::fmt;

/// Outcome of an audited authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The predicate held and the operation was allowed
    Granted,
    /// The predicate did not hold
    Denied,
    /// The predicate could not be evaluated
    Error,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Granted => write!(f, "granted"),
            AuditOutcome::Denied => write!(f, "denied"),
            AuditOutcome::Error => write!(f, "error"),
        }
    }
}

/// A single authorization decision made by a gate.
///
/// # Example
///
/// ```
/// use auth_predicates::audit::{AuditEvent, AuditOutcome};
///
/// let event = AuditEvent::new("req-123", Some("alice"), AuditOutcome::Granted, "Authenticated")
///     .with_action("delete_user");
///
/// assert_eq!(event.request_id(), "req-123");
/// assert_eq!(event.principal(), Some("alice"));
/// assert_eq!(event.action(), Some("delete_user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Request identifier for correlation
    request_id: String,
    /// Label of the resolved identity; None when anonymous
    principal: Option<String>,
    outcome: AuditOutcome,
    /// Operation the gate protects, if labelled
    action: Option<String>,
    /// Debug rendering of the predicate that was evaluated
    policy: String,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(
        request_id: impl Into<String>,
        principal: Option<impl Into<String>>,
        outcome: AuditOutcome,
        policy: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            principal: principal.map(Into::into),
            outcome,
            action: None,
            policy: policy.into(),
        }
    }

    /// Sets the operation being authorized.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the principal label, if authenticated.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    /// Returns the decision outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the action, if set.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the evaluated policy description.
    pub fn policy(&self) -> &str {
        &self.policy
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[outcome={}, request_id={}, principal={}",
            self.outcome,
            self.request_id,
            self.principal.as_deref().unwrap_or("<none>")
        )?;

        if let Some(action) = &self.action {
            write!(f, ", action={}", action)?;
        }

        write!(f, ", policy={}]", self.policy)
    }
}
