//! Notifier
//!
//! Publish/subscribe registry: event key -> ordered list of handlers.
//! Handlers carry their own receiver, either captured by a closure or
//! held weakly through `attach_bound`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::{Rc, Weak};

/// Registered handler. Returns false once its receiver is gone.
type Subscriber<A> = Rc<dyn Fn(&A) -> bool>;

/// Ordered handler registry keyed by event
pub struct Notifier<E, A = ()> {
    events: RefCell<HashMap<E, Vec<Subscriber<A>>>>,
}

impl<E: Eq + Hash + 'static, A: 'static> Notifier<E, A> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(HashMap::new()),
        }
    }

    /// Register a closure for `event`. Attaching the same closure twice
    /// yields two invocations per notification.
    pub fn attach(&self, event: E, handler: impl Fn(&A) + 'static) -> &Self {
        self.push(event, Rc::new(move |args: &A| {
            handler(args);
            true
        }));
        self
    }

    /// Register `method` to run against `receiver`.
    ///
    /// The receiver is held weakly: once it is dropped the handler is
    /// skipped and removed on the next notification.
    pub fn attach_bound<R: 'static>(&self, event: E, receiver: &Rc<R>, method: fn(&R, &A)) -> &Self {
        let receiver: Weak<R> = Rc::downgrade(receiver);
        self.push(event, Rc::new(move |args: &A| match receiver.upgrade() {
            Some(receiver) => {
                method(&receiver, args);
                true
            }
            None => false,
        }));
        self
    }

    /// Invoke every handler for `event` in registration order.
    ///
    /// The handler list is snapshotted first, so handlers attached during
    /// dispatch only see later notifications. Unknown events are a no-op.
    pub fn notify(&self, event: &E, args: &A) -> &Self {
        let subscribers: Vec<Subscriber<A>> = match self.events.borrow().get(event) {
            Some(subscribers) => subscribers.clone(),
            None => return self,
        };

        let mut dropped = Vec::new();
        for subscriber in &subscribers {
            if !subscriber(args) {
                dropped.push(Rc::clone(subscriber));
            }
        }

        if !dropped.is_empty() {
            if let Some(list) = self.events.borrow_mut().get_mut(event) {
                list.retain(|s| !dropped.iter().any(|d| Rc::ptr_eq(s, d)));
            }
        }
        self
    }

    /// Number of handlers currently registered for `event`
    pub fn handler_count(&self, event: &E) -> usize {
        self.events.borrow().get(event).map_or(0, Vec::len)
    }

    fn push(&self, event: E, subscriber: Subscriber<A>) {
        self.events.borrow_mut().entry(event).or_default().push(subscriber);
    }
}

impl<E: Eq + Hash + 'static, A: 'static> Default for Notifier<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug, A> fmt::Debug for Notifier<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = self.events.borrow();
        f.debug_map()
            .entries(events.iter().map(|(event, subscribers)| (event, subscribers.len())))
            .finish()
    }
}

/// Publish/subscribe surface for any type that owns a `Notifier`.
///
/// Implementors only provide `notifier()`; `attach`, `attach_bound` and
/// `notify` come for free and return the owner for chaining.
pub trait Observable {
    type Event: Eq + Hash + 'static;
    type Args: 'static;

    fn notifier(&self) -> &Notifier<Self::Event, Self::Args>;

    fn attach(&self, event: Self::Event, handler: impl Fn(&Self::Args) + 'static) -> &Self {
        self.notifier().attach(event, handler);
        self
    }

    fn attach_bound<R: 'static>(
        &self,
        event: Self::Event,
        receiver: &Rc<R>,
        method: fn(&R, &Self::Args),
    ) -> &Self {
        self.notifier().attach_bound(event, receiver, method);
        self
    }

    fn notify(&self, event: &Self::Event, args: &Self::Args) -> &Self {
        self.notifier().notify(event, args);
        self
    }
}
