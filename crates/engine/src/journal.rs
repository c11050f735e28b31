//! Game journal - the event-history observer
//!
//! The bus itself keeps no history; this listener does. The journal
//! subscribes to a bus and records every envelope into a bounded buffer,
//! dropping the oldest entries once the capacity is reached. A second,
//! stateless listener turns each event into one tracing line.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use wolfmoot_domain::{EventBus, EventEnvelope, SubscriptionId};

/// Bounded, ordered record of published events
pub struct GameJournal {
    entries: Rc<RefCell<VecDeque<EventEnvelope>>>,
    capacity: usize,
    subscription: SubscriptionId,
}

impl GameJournal {
    /// Subscribe a journal with the given capacity to a bus.
    pub fn attach(bus: &EventBus, capacity: usize) -> Self {
        let entries = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&entries);
        let subscription = bus.subscribe(move |envelope: &EventEnvelope| {
            let mut entries = sink.borrow_mut();
            entries.push_back(envelope.clone());
            while entries.len() > capacity {
                entries.pop_front();
            }
            Ok(())
        });
        Self {
            entries,
            capacity,
            subscription,
        }
    }

    /// Maximum number of entries retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<EventEnvelope> {
        let entries = self.entries.borrow();
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }

    /// Occurrences per event type across the retained entries.
    pub fn counts_by_type(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for envelope in self.entries.borrow().iter() {
            *counts.entry(envelope.event.event_type()).or_insert(0) += 1;
        }
        counts
    }

    /// Drop every recorded entry. The subscription stays live.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Stop recording; the retained entries remain readable.
    pub fn detach(&self, bus: &EventBus) {
        bus.unsubscribe(self.subscription);
    }
}

/// Subscribe a listener that logs one info line per published event.
pub fn attach_log_listener(bus: &EventBus) -> SubscriptionId {
    bus.subscribe(|envelope: &EventEnvelope| {
        tracing::info!(
            event_type = envelope.event.event_type(),
            source = %envelope.source,
            event_id = %envelope.event_id,
            "game event"
        );
        Ok(())
    })
}
