//! Audit records for authorization decisions.
//!
//! This module provides:
//! - `AuditEvent`: one gate decision, with only safe metadata
//! - `AuditOutcome`: granted, denied, or failed to evaluate
//! - `AuditTrail`: thread-safe in-memory recorder
//! - `emit`: structured `tracing` output under the `policy_audit` target
//!
//! Events never carry attribute values or environment contents beyond the
//! principal label, so they are safe to log as-is.

mod event;
mod trail;

pub use event::{AuditEvent, AuditOutcome};
pub use trail::AuditTrail;

/// Emits an audit event as a structured tracing event.
pub fn emit(event: &AuditEvent) {
    tracing::info!(
        target: "policy_audit",
        request_id = %event.request_id(),
        principal = ?event.principal(),
        outcome = %event.outcome(),
        action = ?event.action(),
        policy = %event.policy(),
        "audit event"
    );
}

/// Emits an audit event and also records it to the provided trail.
pub fn emit_and_record(event: AuditEvent, trail: &AuditTrail) {
    emit(&event);
    trail.record(event);
}
