//! EventBus - synchronous in-process publish/subscribe
//!
//! The bus is constructed explicitly and injected into each `Game`; there
//! is no hidden process-wide instance, so tests always start from an empty
//! bus. Delivery is a direct, blocking fan-out in subscription order on
//! the calling thread.
//!
//! A listener that fails (returns `Err`) is logged and skipped; the
//! remaining listeners still run and nothing propagates to the publisher.
//! Duplicate registrations of the same listener are independent: each one
//! fires once per publish.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::events::EventEnvelope;

/// Error type listeners may return; it is logged, never propagated
pub type ListenerError = Box<dyn std::error::Error>;

type Listener = Rc<dyn Fn(&EventEnvelope) -> Result<(), ListenerError>>;

/// Token returned by `subscribe`, used to remove one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous event fan-out for one process
pub struct EventBus {
    registrations: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl EventBus {
    /// Create a fresh bus with no listeners.
    pub fn new() -> Self {
        Self {
            registrations: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register a listener; returns the token that removes this
    /// registration.
    ///
    /// Subscribing the same closure twice yields two registrations, each
    /// fired independently and removable independently.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&EventEnvelope) -> Result<(), ListenerError> + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.registrations.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove one registration. Unknown tokens are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.registrations
            .borrow_mut()
            .retain(|(registered, _)| *registered != id);
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Deliver an envelope to every currently-registered listener, in
    /// subscription order.
    ///
    /// The registration list is snapshotted first, so a listener that
    /// subscribes or unsubscribes during delivery does not affect the
    /// in-flight fan-out. Listener failures are logged at error level and
    /// do not stop delivery.
    pub fn publish(&self, envelope: &EventEnvelope) {
        let snapshot: Vec<(SubscriptionId, Listener)> =
            self.registrations.borrow().clone();
        for (id, listener) in snapshot {
            if let Err(error) = listener(envelope) {
                tracing::error!(
                    subscription = id.0,
                    event_type = envelope.event.event_type(),
                    %error,
                    "event listener failed"
                );
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventSource, GameEvent};

    fn envelope() -> EventEnvelope {
        EventEnvelope::new(EventSource::Game, GameEvent::GameReset)
    }

    #[test]
    fn fresh_bus_has_no_listeners() {
        let bus = EventBus::new();
        assert_eq!(bus.listener_count(), 0);
        // Publishing into the void is fine
        bus.publish(&envelope());
    }

    #[test]
    fn listeners_fire_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| {
                seen.borrow_mut().push(tag);
                Ok(())
            });
        }

        bus.publish(&envelope());
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_registrations_fire_independently() {
        let bus = EventBus::new();
        let count = Rc::new(Cell::new(0));

        let listener = {
            let count = Rc::clone(&count);
            move |_: &EventEnvelope| {
                count.set(count.get() + 1);
                Ok(())
            }
        };
        let first = bus.subscribe(listener.clone());
        bus.subscribe(listener);

        bus.publish(&envelope());
        assert_eq!(count.get(), 2);

        // Removing one registration leaves the other firing
        bus.unsubscribe(first);
        bus.publish(&envelope());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn failing_listener_does_not_stop_delivery() {
        let bus = EventBus::new();
        let reached = Rc::new(Cell::new(false));

        bus.subscribe(|_| Err("listener exploded".into()));
        {
            let reached = Rc::clone(&reached);
            bus.subscribe(move |_| {
                reached.set(true);
                Ok(())
            });
        }

        bus.publish(&envelope());
        assert!(reached.get());
    }

    #[test]
    fn unsubscribing_an_unknown_token_is_a_no_op() {
        let bus = EventBus::new();
        let token = bus.subscribe(|_| Ok(()));
        bus.unsubscribe(token);
        // Second removal of the same token changes nothing
        bus.unsubscribe(token);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscribing_during_delivery_misses_the_in_flight_event() {
        let bus = Rc::new(EventBus::new());
        let late_calls = Rc::new(Cell::new(0));

        {
            let bus_ref = Rc::clone(&bus);
            let late_calls = Rc::clone(&late_calls);
            bus.subscribe(move |_| {
                let late_calls = Rc::clone(&late_calls);
                bus_ref.subscribe(move |_| {
                    late_calls.set(late_calls.get() + 1);
                    Ok(())
                });
                Ok(())
            });
        }

        bus.publish(&envelope());
        assert_eq!(late_calls.get(), 0);

        bus.publish(&envelope());
        assert_eq!(late_calls.get(), 1);
    }
}
