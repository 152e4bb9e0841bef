use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::identity::Identity;

/// Per-request environment mapping (transport metadata such as `REMOTE_ADDR`).
pub type Environ = BTreeMap<String, String>;

/// Source of the identity and request state a predicate is evaluated against.
///
/// Predicates never reach for ambient or thread-local state; everything they
/// observe comes through this trait. Implement it on your framework's request
/// type, or use [`RequestContext`].
pub trait IdentityContext {
    /// The identity resolved for the current request, if any.
    fn current_identity(&self) -> Option<&dyn Identity>;

    /// The current request's environment mapping.
    fn request_environ(&self) -> &Environ;

    /// Identifier used to correlate log and audit entries.
    fn request_id(&self) -> &str {
        ""
    }

    /// Returns the identity only if it has actually been resolved.
    fn resolved_identity(&self) -> Option<&dyn Identity> {
        self.current_identity().filter(|identity| identity.is_resolved())
    }
}

/// Metadata about an incoming request: its id, identity, and environment.
///
/// # Examples
///
/// ```
/// use auth_predicates::{IdentityContext, Principal, RequestContext};
///
/// let ctx = RequestContext::new("req-123")
///     .with_identity(Principal::new().with("name", "alice"))
///     .with_environ("REMOTE_ADDR", "127.0.0.1");
///
/// assert_eq!(ctx.request_id(), "req-123");
/// assert!(ctx.resolved_identity().is_some());
/// assert_eq!(ctx.request_environ().get("REMOTE_ADDR").map(String::as_str), Some("127.0.0.1"));
/// ```
#[derive(Clone, Default)]
pub struct RequestContext {
    request_id: String,
    identity: Option<Arc<dyn Identity>>,
    environ: Environ,
}

impl RequestContext {
    /// Creates an anonymous context with an empty environment.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            identity: None,
            environ: Environ::new(),
        }
    }

    /// Attaches the identity resolved for this request.
    pub fn with_identity(mut self, identity: impl Identity + 'static) -> Self {
        self.identity = Some(Arc::new(identity));
        self
    }

    /// Attaches an identity shared with other contexts.
    pub fn with_shared_identity(mut self, identity: Arc<dyn Identity>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Adds a single environment entry.
    pub fn with_environ(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environ.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole environment mapping.
    pub fn with_environ_map(mut self, environ: Environ) -> Self {
        self.environ = environ;
        self
    }

    /// Drops the identity, e.g. after logout.
    pub fn clear_identity(&mut self) {
        self.identity = None;
    }
}

impl IdentityContext for RequestContext {
    fn current_identity(&self) -> Option<&dyn Identity> {
        self.identity.as_deref()
    }

    fn request_environ(&self) -> &Environ {
        &self.environ
    }

    fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &self.request_id)
            .field("identity", &self.identity)
            .field("environ_keys", &self.environ.keys().collect::<Vec<_>>())
            .finish()
    }
}
