//! Composable, lazily-evaluated access-control predicates.
//!
//! This crate provides a small boolean algebra for gating operations:
//! - **Predicates**: policy objects evaluated fresh against each request
//! - **Combinators**: `Not`, `All`, and `Any` over any predicates
//! - **Matchers**: identity attributes and request environment lookups
//! - **Specialization**: `partial` templates that fix a matcher's key
//! - **Explicit context**: identity and environment are passed in, never ambient
//!
//! # Core Types
//!
//! - [`Predicate`]: the capability every policy implements
//! - [`IdentityContext`]: what predicates are evaluated against
//! - [`RequestContext`]: a ready-made context value
//! - [`Principal`]: an identity record with named attributes
//! - [`PolicyGate`]: turns a false evaluation into a typed [`Violation`]
//!
//! # Examples
//!
//! ```
//! use auth_predicates::{
//!     All, Anonymous, Authenticated, Predicate, PredicateExt, Principal,
//!     RequestContext, ValueIn,
//! };
//!
//! let member_of = ValueIn::partial("groups");
//! let admins = All::new().with(Authenticated).with(member_of.apply("admin"));
//!
//! let ctx = RequestContext::new("req-123").with_identity(
//!     Principal::new()
//!         .with("name", "user")
//!         .with("groups", vec!["admin"]),
//! );
//! assert_eq!(admins.evaluate(&ctx), Ok(true));
//! assert_eq!(member_of.apply("editor").evaluate(&ctx), Ok(false));
//!
//! let anonymous = RequestContext::new("req-124");
//! assert_eq!(Anonymous.evaluate(&anonymous), Ok(true));
//! assert_eq!(Authenticated.or(Anonymous).evaluate(&anonymous), Ok(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod custom;
mod error;
mod gate;
mod identity;
mod logic;
mod matcher;
mod partial;
mod predicate;
mod request;
mod state;
mod value;

pub use custom::CustomPredicate;
pub use error::{Error, Violation, ViolationKind};
pub use gate::PolicyGate;
pub use identity::{Identity, LazyPrincipal, Principal};
pub use logic::{All, Always, Any, Never, Not};
pub use matcher::{AttrIn, EnvironIn, ValueIn};
pub use partial::{Partial, Specialize};
pub use predicate::{AbstractPredicate, BoxPredicate, Predicate, PredicateExt};
pub use request::{Environ, IdentityContext, RequestContext};
pub use state::{Anonymous, Authenticated};
pub use value::{AllowedValues, Value};
