//! Observable value holder.
//!
//! # Responsibility
//! - Own one value and hand out immutable `Arc` snapshots.
//! - Notify registered subscribers after every replace.
//!
//! # Invariants
//! - Snapshots are shared read-only; receivers can never mutate them in place.
//! - Subscriber ids are unique for the holder lifetime.
//! - Each `set` notifies every current subscriber exactly once.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Handle for removing one registered subscriber.
pub type SubscriberId = u64;

type Subscriber<T> = Box<dyn Fn(&Arc<T>)>;

/// Single-owner observable container for one value.
///
/// Mutation is always a whole-value replace: the previous snapshot stays
/// valid for everyone still holding it, and subscribers receive the fresh
/// snapshot after the replace.
pub struct Watched<T> {
    value: Arc<T>,
    subscribers: BTreeMap<SubscriberId, Subscriber<T>>,
    next_subscriber_id: SubscriberId,
}

impl<T> Watched<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
            subscribers: BTreeMap::new(),
            next_subscriber_id: 0,
        }
    }

    /// Returns the current snapshot.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }

    /// Replaces the value and notifies every subscriber with the new snapshot.
    pub fn set(&mut self, value: T) {
        self.value = Arc::new(value);
        for subscriber in self.subscribers.values() {
            subscriber(&self.value);
        }
    }

    /// Registers a subscriber invoked after each replace.
    ///
    /// The subscriber is not invoked with the current value at registration
    /// time; callers read `get()` themselves when they need it.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Arc<T>) + 'static) -> SubscriberId {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.insert(id, Box::new(subscriber));
        id
    }

    /// Removes one subscriber. Returns `false` when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Watched;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    fn set_replaces_snapshot_identity() {
        let mut holder = Watched::new(vec![1]);
        let before = holder.get();
        holder.set(vec![1, 2]);
        let after = holder.get();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, vec![1]);
        assert_eq!(*after, vec![1, 2]);
    }

    #[test]
    fn subscribers_receive_each_replace_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut holder = Watched::new(0u32);
        holder.subscribe(move |value| sink.borrow_mut().push(**value));
        holder.set(7);
        holder.set(9);

        assert_eq!(*seen.borrow(), vec![7, 9]);
    }

    #[test]
    fn unsubscribe_stops_delivery_and_tolerates_unknown_ids() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut holder = Watched::new(0u32);
        let id = holder.subscribe(move |value| sink.borrow_mut().push(**value));
        holder.set(1);

        assert!(holder.unsubscribe(id));
        assert!(!holder.unsubscribe(id));
        holder.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(holder.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_ids_stay_unique() {
        let mut holder = Watched::new(());
        let first = holder.subscribe(|_| {});
        let second = holder.subscribe(|_| {});
        assert_ne!(first, second);
    }
}
