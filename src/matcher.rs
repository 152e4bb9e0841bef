//! Attribute and environment matchers.
//!
//! A missing attribute or environment key never raises; it simply cannot
//! match any allowed value, so the matcher evaluates to false.

use crate::error::Error;
use crate::partial::{Partial, Specialize};
use crate::predicate::Predicate;
use crate::request::IdentityContext;
use crate::value::{AllowedValues, Value};

/// True if an identity attribute equals one of the allowed values.
///
/// # Examples
///
/// ```
/// use auth_predicates::{AttrIn, Predicate, Principal, RequestContext};
///
/// let higher_ups = AttrIn::new("username", ["admin", "jrh"]);
///
/// let ctx = RequestContext::new("req-1")
///     .with_identity(Principal::new().with("username", "jrh"));
/// assert_eq!(higher_ups.evaluate(&ctx), Ok(true));
///
/// let user_name_in = AttrIn::partial("username");
/// assert_eq!(user_name_in.apply("admin").evaluate(&ctx), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrIn {
    attr: String,
    values: AllowedValues,
}

impl AttrIn {
    /// Matches `attr` against `values`, which may be a scalar or a sequence.
    pub fn new(attr: impl Into<String>, values: impl Into<AllowedValues>) -> Self {
        Self {
            attr: attr.into(),
            values: values.into(),
        }
    }

    /// Fixes the attribute name, deferring the allowed values.
    pub fn partial(attr: impl Into<String>) -> Partial<Self> {
        Partial::new(attr)
    }

    /// The attribute being inspected.
    pub fn attr(&self) -> &str {
        &self.attr
    }

    /// The allowed values.
    pub fn values(&self) -> &AllowedValues {
        &self.values
    }
}

impl Predicate for AttrIn {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(ctx
            .resolved_identity()
            .and_then(|user| user.attribute(&self.attr))
            .is_some_and(|value| self.values.matches(value)))
    }
}

impl Specialize for AttrIn {
    type Arg = AllowedValues;

    fn specialize(key: &str, arg: AllowedValues) -> Self {
        Self::new(key, arg)
    }
}

/// True if a value is a member of a collection attribute of the identity.
///
/// A missing attribute behaves as an empty collection. A string attribute is
/// compared whole, never searched for substrings.
///
/// # Examples
///
/// ```
/// use auth_predicates::{Predicate, Principal, RequestContext, ValueIn};
///
/// let editors = ValueIn::new("editor", "roles");
/// let ctx = RequestContext::new("req-1")
///     .with_identity(Principal::new().with("roles", vec!["editor", "viewer"]));
/// assert_eq!(editors.evaluate(&ctx), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueIn {
    value: Value,
    attr: String,
}

impl ValueIn {
    /// Matches if `value` is contained in the identity's `attr` collection.
    pub fn new(value: impl Into<Value>, attr: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            attr: attr.into(),
        }
    }

    /// Fixes the collection attribute name, deferring the value.
    pub fn partial(attr: impl Into<String>) -> Partial<Self> {
        Partial::new(attr)
    }

    /// The value looked for.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The collection attribute being searched.
    pub fn attr(&self) -> &str {
        &self.attr
    }
}

impl Predicate for ValueIn {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(ctx
            .resolved_identity()
            .and_then(|user| user.attribute(&self.attr))
            .is_some_and(|collection| collection.contains(&self.value)))
    }
}

impl Specialize for ValueIn {
    type Arg = Value;

    fn specialize(key: &str, arg: Value) -> Self {
        Self::new(arg, key)
    }
}

/// True if a request environment entry equals one of the allowed values.
///
/// # Examples
///
/// ```
/// use auth_predicates::{EnvironIn, Predicate, RequestContext};
///
/// let local = EnvironIn::new("REMOTE_ADDR", ["127.0.0.1", "::1", "fe80::1%lo0"]);
/// let ctx = RequestContext::new("req-1").with_environ("REMOTE_ADDR", "127.0.0.1");
/// assert_eq!(local.evaluate(&ctx), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironIn {
    key: String,
    values: AllowedValues,
}

impl EnvironIn {
    /// Matches the environment entry `key` against `values`.
    pub fn new(key: impl Into<String>, values: impl Into<AllowedValues>) -> Self {
        Self {
            key: key.into(),
            values: values.into(),
        }
    }

    /// Fixes the environment key, deferring the allowed values.
    pub fn partial(key: impl Into<String>) -> Partial<Self> {
        Partial::new(key)
    }

    /// The environment key being inspected.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The allowed values.
    pub fn values(&self) -> &AllowedValues {
        &self.values
    }
}

impl Predicate for EnvironIn {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(ctx
            .request_environ()
            .get(&self.key)
            .is_some_and(|value| self.values.matches_str(value)))
    }
}

impl Specialize for EnvironIn {
    type Arg = AllowedValues;

    fn specialize(key: &str, arg: AllowedValues) -> Self {
        Self::new(key, arg)
    }
}
