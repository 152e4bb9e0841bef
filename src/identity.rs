use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::value::Value;

/// An authenticated user or service identity as seen by predicates.
///
/// Implement this for your own user model to evaluate predicates against it
/// without copying attributes into a [`Principal`].
pub trait Identity: fmt::Debug + Send + Sync {
    /// Looks up an attribute by name, returning `None` if it is not set.
    fn attribute(&self, name: &str) -> Option<&Value>;

    /// Returns false for a slot that exists but has not been populated.
    ///
    /// Identity-state predicates treat an unresolved identity exactly like a
    /// missing one.
    fn is_resolved(&self) -> bool {
        true
    }
}

/// A concrete identity record holding named attributes.
///
/// # Examples
///
/// ```
/// use auth_predicates::{Identity, Principal, Value};
///
/// let user = Principal::new()
///     .with("name", "user")
///     .with("groups", vec!["admin"]);
///
/// assert_eq!(user.attribute("name"), Some(&Value::from("user")));
/// assert!(user.attribute("email").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    attributes: BTreeMap<String, Value>,
}

impl Principal {
    /// Creates a principal with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute and returns the principal for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets an attribute in place, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Returns the attribute names in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl Identity for Principal {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// An identity slot that is populated at most once, on demand.
///
/// Request pipelines often install the slot before the user lookup has run.
/// Until [`LazyPrincipal::resolve`] is called the slot reports itself as
/// unresolved and exposes no attributes.
#[derive(Debug, Default)]
pub struct LazyPrincipal {
    cell: OnceLock<Principal>,
}

impl LazyPrincipal {
    /// Creates an empty, unresolved slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the slot.
    ///
    /// Returns the rejected principal if the slot was already resolved.
    pub fn resolve(&self, principal: Principal) -> Result<(), Principal> {
        self.cell.set(principal)
    }

    /// Returns the resolved principal, if any.
    pub fn get(&self) -> Option<&Principal> {
        self.cell.get()
    }
}

impl From<Principal> for LazyPrincipal {
    fn from(principal: Principal) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(principal);
        Self { cell }
    }
}

impl Identity for LazyPrincipal {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.cell.get().and_then(|p| p.attribute(name))
    }

    fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}
