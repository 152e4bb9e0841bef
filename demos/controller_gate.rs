//! Gated controller demonstration.
//!
//! This example shows:
//! 1. Building a small library of named policies from `partial` templates
//! 2. Guarding controller actions with `PolicyGate`
//! 3. Distinguishing "log in first" from "not allowed"
//! 4. Reviewing the audit trail afterwards
//!
//! Run with: `cargo run --example controller_gate`

use std::sync::Arc;

use auth_predicates::audit::AuditTrail;
use auth_predicates::{
    All, Anonymous, Authenticated, EnvironIn, PolicyGate, Principal, RequestContext, ValueIn,
    ViolationKind,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Controller Gate Example ===\n");

    let member_of = ValueIn::partial("groups");
    let remote_addr_in = EnvironIn::partial("REMOTE_ADDR");

    let trail = Arc::new(AuditTrail::new());
    let login_form = PolicyGate::new(Anonymous)
        .for_action("login_form")
        .with_trail(Arc::clone(&trail));
    let admin_panel = PolicyGate::new(
        All::new()
            .with(Authenticated)
            .with(member_of.apply("admin"))
            .with(remote_addr_in.apply(["127.0.0.1", "::1"])),
    )
    .for_action("admin_panel")
    .with_trail(Arc::clone(&trail));

    let requests = [
        RequestContext::new("req-001").with_environ("REMOTE_ADDR", "127.0.0.1"),
        RequestContext::new("req-002")
            .with_identity(Principal::new().with("name", "alice").with("groups", vec!["admin"]))
            .with_environ("REMOTE_ADDR", "127.0.0.1"),
        RequestContext::new("req-003")
            .with_identity(Principal::new().with("name", "bob").with("groups", vec!["staff"]))
            .with_environ("REMOTE_ADDR", "::1"),
    ];

    for ctx in &requests {
        for gate in [&login_form, &admin_panel] {
            match gate.guard(ctx, || "rendered") {
                Ok(body) => println!("✓ {:?}: {}", gate.predicate(), body),
                Err(v) if v.kind == ViolationKind::Unauthenticated => {
                    println!("→ redirect to login ({})", v)
                }
                Err(v) => println!("✗ {}", v),
            }
        }
    }

    println!("\n--- Audit Trail ---");
    for event in trail.events() {
        println!("{}", event);
    }
}
