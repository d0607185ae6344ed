//! State holder with change notification.

use std::marker::PhantomData;

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owns the current state of one widget.
///
/// All mutation goes through [`Store::dispatch`], which runs the reducer and,
/// when the state actually changed, calls every subscriber in subscription
/// order with the new state.
pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            revision: 0,
            next_id: 0,
            listeners: Vec::new(),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of effective state changes since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `intent` and notify subscribers if the state changed.
    ///
    /// Returns `true` when the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
