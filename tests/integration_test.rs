use std::sync::Arc;
use std::thread;

use auth_predicates::audit::{AuditOutcome, AuditTrail};
use auth_predicates::{
    AbstractPredicate, All, AllowedValues, Any, Anonymous, AttrIn, Authenticated, CustomPredicate,
    Environ, EnvironIn, Error, Identity, LazyPrincipal, Never, Not, Always, Partial, PolicyGate,
    Predicate, PredicateExt, Principal, RequestContext, Value, ValueIn, ViolationKind,
};

fn is_me() -> impl Predicate {
    CustomPredicate::new("is_me", |user: Option<&dyn Identity>, _: &Environ| {
        user.and_then(|u| u.attribute("name")) == Some(&Value::from("user"))
    })
}

fn user_in() -> Partial<AttrIn> {
    AttrIn::partial("name")
}

fn member_of() -> Partial<ValueIn> {
    ValueIn::partial("groups")
}

fn local() -> EnvironIn {
    EnvironIn::partial("REMOTE_ADDR").apply(["127.0.0.1", "::1", "fe80::1%lo0"])
}

fn anonymous_ctx() -> RequestContext {
    RequestContext::new("req-anon")
}

fn user_ctx() -> RequestContext {
    RequestContext::new("req-user").with_identity(
        Principal::new()
            .with("name", "user")
            .with("groups", vec!["admin"]),
    )
}

#[test]
fn basics() {
    let ctx = anonymous_ctx();
    assert!(matches!(
        AbstractPredicate.evaluate(&ctx),
        Err(Error::NotImplemented { .. })
    ));

    assert_eq!(Never.evaluate(&ctx), Ok(false));
    assert_eq!(Always.evaluate(&ctx), Ok(true));
    assert_eq!(Not::new(Never).evaluate(&ctx), Ok(true));
}

#[test]
fn combinations() {
    let ctx = anonymous_ctx();
    assert_eq!(All::new().with(Always).with(Always).evaluate(&ctx), Ok(true));
    assert_eq!(All::new().with(Always).with(Never).evaluate(&ctx), Ok(false));
    assert_eq!(Any::new().with(Always).with(Never).evaluate(&ctx), Ok(true));
    assert_eq!(All::new().evaluate(&ctx), Ok(true));
    assert_eq!(Any::new().evaluate(&ctx), Ok(false));
}

#[test]
fn anonymous_predicates() {
    let ctx = anonymous_ctx();
    assert_eq!(Anonymous.evaluate(&ctx), Ok(true));
    assert_eq!(Authenticated.evaluate(&ctx), Ok(false));

    assert_eq!(is_me().evaluate(&ctx), Ok(false));
    assert_eq!(user_in().apply(["jrh", "user"]).evaluate(&ctx), Ok(false));
    assert_eq!(member_of().apply("admin").evaluate(&ctx), Ok(false));
    assert_eq!(Any::new().with(Authenticated).with(Anonymous).evaluate(&ctx), Ok(true));
}

#[test]
fn authenticated_predicates() {
    let ctx = user_ctx();
    assert_eq!(Anonymous.evaluate(&ctx), Ok(false));
    assert_eq!(Authenticated.evaluate(&ctx), Ok(true));

    assert_eq!(is_me().evaluate(&ctx), Ok(true));
    assert_eq!(user_in().apply(["jrh", "user"]).evaluate(&ctx), Ok(true));
    assert_eq!(member_of().apply("admin").evaluate(&ctx), Ok(true));
    assert_eq!(member_of().apply("editor").evaluate(&ctx), Ok(false));

    let admins = All::new().with(Authenticated).with(ValueIn::new("admin", "groups"));
    assert_eq!(admins.evaluate(&ctx), Ok(true));
}

#[test]
fn scalar_and_list_allowed_values_agree() {
    let ctx = user_ctx();
    let scalar = AttrIn::new("name", "user");
    let list = AttrIn::new("name", vec!["user"]);
    assert_eq!(scalar.evaluate(&ctx), list.evaluate(&ctx));
    assert_eq!(scalar.values(), &AllowedValues::from(["user"]));
}

#[test]
fn unresolved_lazy_identity_counts_as_anonymous() {
    let ctx = RequestContext::new("req-lazy").with_identity(LazyPrincipal::new());
    assert_eq!(Anonymous.evaluate(&ctx), Ok(true));
    assert_eq!(Authenticated.evaluate(&ctx), Ok(false));
    assert_eq!(is_me().evaluate(&ctx), Ok(false));
}

#[test]
fn local_requests() {
    let loopback = RequestContext::new("req-local").with_environ("REMOTE_ADDR", "127.0.0.1");
    let ipv6 = RequestContext::new("req-local6").with_environ("REMOTE_ADDR", "::1");
    let remote = RequestContext::new("req-remote").with_environ("REMOTE_ADDR", "203.0.113.9");

    assert_eq!(local().evaluate(&loopback), Ok(true));
    assert_eq!(local().evaluate(&ipv6), Ok(true));
    assert_eq!(local().evaluate(&remote), Ok(false));
    assert_eq!(local().evaluate(&anonymous_ctx()), Ok(false));
}

// Controller-style endpoints guarded by gates, the way a dispatcher would
// consult them before invoking a handler.
struct RootController {
    anonymous: PolicyGate,
    authenticated: PolicyGate,
    local: PolicyGate,
}

impl RootController {
    fn new(trail: Arc<AuditTrail>) -> Self {
        Self {
            anonymous: PolicyGate::new(Anonymous)
                .for_action("anonymous")
                .with_trail(Arc::clone(&trail)),
            authenticated: PolicyGate::new(Authenticated)
                .for_action("authenticated")
                .with_trail(Arc::clone(&trail)),
            local: PolicyGate::new(local())
                .for_action("local")
                .with_trail(trail),
        }
    }
}

#[test]
fn controller_gates() {
    let trail = Arc::new(AuditTrail::new());
    let root = RootController::new(Arc::clone(&trail));

    let anon = anonymous_ctx().with_environ("REMOTE_ADDR", "127.0.0.1");
    assert_eq!(root.anonymous.guard(&anon, || "anonymous"), Ok("anonymous"));
    let err = root.authenticated.guard(&anon, || "authenticated").unwrap_err();
    assert_eq!(err.kind, ViolationKind::Unauthenticated);
    assert_eq!(root.local.guard(&anon, || "local"), Ok("local"));

    let user = user_ctx();
    assert_eq!(root.authenticated.guard(&user, || "authenticated"), Ok("authenticated"));
    let err = root.anonymous.guard(&user, || "anonymous").unwrap_err();
    assert_eq!(
        err.kind,
        ViolationKind::Forbidden {
            action: Some("anonymous".to_string())
        }
    );

    let outcomes: Vec<_> = trail.events().iter().map(|e| e.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![
            AuditOutcome::Granted,
            AuditOutcome::Denied,
            AuditOutcome::Granted,
            AuditOutcome::Granted,
            AuditOutcome::Denied,
        ]
    );
}

#[test]
fn logout_between_checks_is_observed() {
    let gate = PolicyGate::new(Authenticated);
    let mut ctx = user_ctx();
    assert!(gate.check(&ctx).is_ok());

    ctx.clear_identity();
    let err = gate.check(&ctx).unwrap_err();
    assert_eq!(err.kind, ViolationKind::Unauthenticated);
}

#[test]
fn shared_policy_across_threads() {
    let policy: Arc<dyn Predicate> = Arc::new(
        Authenticated
            .and(member_of().apply("admin"))
            .or(local()),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let ctx = if i % 2 == 0 {
                    user_ctx()
                } else {
                    RequestContext::new(format!("req-{}", i))
                        .with_environ("REMOTE_ADDR", "198.51.100.1")
                };
                (i, policy.evaluate(&ctx))
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result, Ok(i % 2 == 0));
    }
}
