use std::fmt;

/// Handle returned by [`ScrollSubscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(f64)>;

/// Callbacks that receive the smoothed top offset, in subscription order.
#[derive(Default)]
pub struct ScrollSubscribers {
    callbacks: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl ScrollSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(f64) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, top: f64) {
        for (_, callback) in &mut self.callbacks {
            callback(top);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for ScrollSubscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscribers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_calls_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = ScrollSubscribers::new();
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            subs.subscribe(move |top| log.borrow_mut().push((name, top)));
        }

        subs.notify(42.0);
        assert_eq!(*log.borrow(), vec![("a", 42.0), ("b", 42.0), ("c", 42.0)]);
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut subs = ScrollSubscribers::new();
        let h1 = Rc::clone(&hits);
        let first = subs.subscribe(move |_| h1.borrow_mut().push(1));
        let h2 = Rc::clone(&hits);
        subs.subscribe(move |_| h2.borrow_mut().push(2));

        assert!(subs.unsubscribe(first));
        subs.notify(0.0);
        assert_eq!(*hits.borrow(), vec![2]);
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn unsubscribe_unknown_id_is_false() {
        let mut subs = ScrollSubscribers::new();
        let id = subs.subscribe(|_| {});
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut subs = ScrollSubscribers::new();
        let a = subs.subscribe(|_| {});
        subs.unsubscribe(a);
        let b = subs.subscribe(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn callbacks_may_keep_state() {
        let total = Rc::new(RefCell::new(0.0));
        let mut subs = ScrollSubscribers::new();
        let t = Rc::clone(&total);
        let mut calls = 0;
        subs.subscribe(move |top| {
            calls += 1;
            *t.borrow_mut() = top * calls as f64;
        });
        subs.notify(10.0);
        subs.notify(10.0);
        assert_eq!(*total.borrow(), 20.0);
    }
}
