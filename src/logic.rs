//! Logical combinators and constant predicates.
//!
//! `All` and `Any` accept zero children: `All` over nothing is true and `Any`
//! over nothing is false, like universal and existential quantification over
//! an empty set.

use crate::error::Error;
use crate::predicate::{BoxPredicate, Predicate};
use crate::request::IdentityContext;

/// True if the wrapped predicate is false.
#[derive(Debug)]
pub struct Not {
    inner: BoxPredicate,
}

impl Not {
    /// Wraps a predicate to negate it.
    pub fn new(inner: impl Predicate + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Predicate for Not {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(!self.inner.evaluate(ctx)?)
    }
}

/// True if every child is true. Equivalent to `and` across all children.
///
/// # Examples
///
/// ```
/// use auth_predicates::{All, Always, Authenticated, Predicate, RequestContext};
///
/// let ctx = RequestContext::new("req-1");
/// assert_eq!(All::new().evaluate(&ctx), Ok(true));
/// assert_eq!(All::new().with(Always).with(Authenticated).evaluate(&ctx), Ok(false));
/// ```
#[derive(Debug, Default)]
pub struct All {
    children: Vec<BoxPredicate>,
}

impl All {
    /// Creates an empty conjunction, which is vacuously true.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a conjunction from already boxed children.
    pub fn of(children: impl IntoIterator<Item = BoxPredicate>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Appends a child and returns the conjunction for chaining.
    pub fn with(mut self, child: impl Predicate + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Predicate for All {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        for child in &self.children {
            if !child.evaluate(ctx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// True if at least one child is true. Equivalent to `or` across all children.
#[derive(Debug, Default)]
pub struct Any {
    children: Vec<BoxPredicate>,
}

impl Any {
    /// Creates an empty disjunction, which is vacuously false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a disjunction from already boxed children.
    pub fn of(children: impl IntoIterator<Item = BoxPredicate>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Appends a child and returns the disjunction for chaining.
    pub fn with(mut self, child: impl Predicate + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Predicate for Any {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        for child in &self.children {
            if child.evaluate(ctx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Always true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl Predicate for Always {
    fn evaluate(&self, _ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(true)
    }
}

/// Always false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl Predicate for Never {
    fn evaluate(&self, _ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(false)
    }
}
