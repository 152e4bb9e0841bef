//! Identity-state predicates.
//!
//! An identity counts as resolved only if the context supplies one and the
//! identity reports itself as populated. A lazy slot that was installed but
//! never filled is therefore anonymous.

use crate::error::Error;
use crate::predicate::Predicate;
use crate::request::IdentityContext;

/// True if no identity is resolved for the current request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anonymous;

impl Predicate for Anonymous {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(ctx.resolved_identity().is_none())
    }
}

/// True if an identity is resolved for the current request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authenticated;

impl Predicate for Authenticated {
    fn evaluate(&self, ctx: &dyn IdentityContext) -> Result<bool, Error> {
        Ok(ctx.resolved_identity().is_some())
    }
}
