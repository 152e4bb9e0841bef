//! In-memory audit trail recorder.

use super::AuditEvent;
use std::sync::{Mutex, MutexGuard};

/// In-memory recorder for audit events.
///
/// The trail can be shared by gates running on several threads. In
/// production you would typically forward events to a persistent audit log
/// instead.
///
/// # Example
///
/// ```
/// use auth_predicates::audit::{AuditEvent, AuditOutcome, AuditTrail};
///
/// let trail = AuditTrail::new();
/// trail.record(AuditEvent::new("req-123", Some("alice"), AuditOutcome::Granted, "Always"));
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an audit event.
    ///
    /// Events are stored in the order they are recorded.
    pub fn record(&self, event: AuditEvent) {
        self.lock().push(event);
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking recorder must not hide earlier decisions.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditOutcome;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn audit_trail_starts_empty() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn audit_trail_records_in_order() {
        let trail = AuditTrail::new();
        trail.record(AuditEvent::new("req-1", Some("a"), AuditOutcome::Granted, "Always"));
        trail.record(AuditEvent::new("req-2", None::<String>, AuditOutcome::Denied, "Never"));

        let events = trail.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].request_id(), "req-1");
        assert_eq!(events[1].request_id(), "req-2");
    }

    #[test]
    fn audit_trail_can_be_cleared() {
        let trail = AuditTrail::new();
        trail.record(AuditEvent::new("req-1", None::<String>, AuditOutcome::Error, "AbstractPredicate"));
        assert_eq!(trail.len(), 1);

        trail.clear();
        assert!(trail.is_empty());
    }

    #[test]
    fn audit_trail_is_shared_across_threads() {
        let trail = Arc::new(AuditTrail::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let trail = Arc::clone(&trail);
                thread::spawn(move || {
                    trail.record(AuditEvent::new(
                        format!("req-{}", i),
                        None::<String>,
                        AuditOutcome::Granted,
                        "Always",
                    ));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(trail.len(), 4);
    }
}
