use std::fmt;

/// Errors that can occur while evaluating or enforcing predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A predicate was evaluated that carries no evaluation logic.
    ///
    /// This is a programming error: the policy was built from the bare
    /// predicate capability, or from an implementor that never overrides
    /// [`Predicate::evaluate`](crate::Predicate::evaluate).
    NotImplemented {
        /// Type name of the predicate that was evaluated
        predicate: &'static str,
    },
    /// The dispatch gate rejected the operation
    Violation(Violation),
}

impl Error {
    /// Creates a "not implemented" error for the given predicate type.
    pub fn not_implemented<P: ?Sized>() -> Self {
        Error::NotImplemented {
            predicate: std::any::type_name::<P>(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotImplemented { predicate } => {
                write!(f, "Predicate `{}` does not implement evaluate", predicate)
            }
            Error::Violation(v) => write!(f, "Policy violation: {}", v),
        }
    }
}

impl std::error::Error for Error {}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// A rejected authorization decision with details about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of policy violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The predicate failed and no identity is resolved; the caller should log in
    Unauthenticated,
    /// The predicate failed for a resolved identity
    Forbidden {
        /// The action that was refused, if the gate was labelled
        action: Option<String>,
    },
    /// The predicate could not be evaluated at all
    Misconfigured,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthenticated => write!(f, "Unauthenticated"),
            ViolationKind::Forbidden { action: Some(action) } => {
                write!(f, "Forbidden for '{}'", action)
            }
            ViolationKind::Forbidden { action: None } => write!(f, "Forbidden"),
            ViolationKind::Misconfigured => write!(f, "Misconfigured policy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Placeholder;

    #[test]
    fn not_implemented_names_the_type() {
        let err = Error::not_implemented::<Placeholder>();
        match &err {
            Error::NotImplemented { predicate } => assert!(predicate.ends_with("Placeholder")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("does not implement evaluate"));
    }

    #[test]
    fn violation_display_includes_kind_and_message() {
        let v = Violation::new(
            ViolationKind::Forbidden {
                action: Some("delete".to_string()),
            },
            "not an admin",
        );
        assert_eq!(v.to_string(), "Forbidden for 'delete': not an admin");

        let err: Error = v.into();
        assert!(err.to_string().starts_with("Policy violation:"));
    }

    #[test]
    fn unlabelled_forbidden_display() {
        assert_eq!(
            ViolationKind::Forbidden { action: None }.to_string(),
            "Forbidden"
        );
        assert_eq!(ViolationKind::Unauthenticated.to_string(), "Unauthenticated");
    }
}
