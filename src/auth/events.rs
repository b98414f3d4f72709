//! Session-change notifications.
//!
//! Listeners are registered with [`AuthEvents::subscribe`] and stay active
//! until the returned [`Subscription`] is dropped.

use std::sync::{Arc, Mutex, Weak};

use super::provider::AuthEvent;

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        let id = match self.registry.lock() {
            Ok(mut reg) => {
                let id = reg.next_id;
                reg.next_id += 1;
                reg.listeners.push((id, Arc::new(listener)));
                id
            }
            Err(_) => {
                tracing::error!("Auth event registry poisoned; listener not registered");
                u64::MAX
            }
        };

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every current listener, in subscription order.
    ///
    /// The registry lock is released before listeners run, so a listener may
    /// subscribe or drop subscriptions while handling an event.
    pub fn emit(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = match self.registry.lock() {
            Ok(reg) => reg.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };

        tracing::debug!("Auth event {} -> {} listener(s)", event.kind(), listeners.len());
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.lock().map(|r| r.listeners.len()).unwrap_or(0)
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut reg) = registry.lock() {
                reg.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter(events: &AuthEvents) -> (Arc<AtomicUsize>, Subscription) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let sub = events.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        (hits, sub)
    }

    #[test]
    fn test_emit_reaches_all_listeners() {
        let events = AuthEvents::new();
        let (a, _sa) = counter(&events);
        let (b, _sb) = counter(&events);

        events.emit(&AuthEvent::SignedOut);

        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = AuthEvents::new();
        let (a, sa) = counter(&events);
        let (b, _sb) = counter(&events);
        assert_eq!(events.listener_count(), 2);

        drop(sa);
        events.emit(&AuthEvent::SignedOut);

        assert_eq!(events.listener_count(), 1);
        assert_eq!(a.load(Ordering::SeqCst), 0);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let events = AuthEvents::new();
        let (_, sub) = counter(&events);
        drop(events);
        drop(sub);
    }

    #[test]
    fn test_listener_may_subscribe_during_emit() {
        let events = AuthEvents::new();
        let inner_subs: Arc<Mutex<Vec<Subscription>>> = Arc::default();

        let bus = events.clone();
        let subs = Arc::clone(&inner_subs);
        let _outer = events.subscribe(move |_| {
            let sub = bus.subscribe(|_| {});
            subs.lock().unwrap().push(sub);
        });

        events.emit(&AuthEvent::SignedOut);
        assert_eq!(events.listener_count(), 2);

        inner_subs.lock().unwrap().clear();
        assert_eq!(events.listener_count(), 1);
    }
}
