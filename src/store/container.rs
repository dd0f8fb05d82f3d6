//! The store container handed to views.
//!
//! Owns the state tree, runs the reducer on dispatch and notifies
//! subscribers with the new snapshot. Constructed explicitly at startup;
//! there is no global instance.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::mvi::Reducer;

use super::action::Action;
use super::reducer::NovelReducer;
use super::state::AppState;

type Listener = Box<dyn FnMut(&AppState) + Send>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and notify subscribers if the state changed.
    ///
    /// Returns `true` when the transition changed the state.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let kind = action.kind();
        let previous = self.state.clone();
        self.state = NovelReducer::reduce(std::mem::take(&mut self.state), action);

        let changed = self.state != previous;
        tracing::debug!(action = kind, changed, "Dispatched action");

        if changed {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        changed
    }

    /// Register a listener called with every new state.
    ///
    /// Listeners must not dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::initial())
    }
}

/// Cloneable handle exposing `{ state, dispatch }` to every view.
///
/// Dispatches are serialized through a single lock, so actions apply in
/// the order they arrive.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.inner.lock().state().clone()
    }

    /// Read the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(self.inner.lock().state())
    }

    pub fn dispatch(&self, action: Action) -> bool {
        self.inner.lock().dispatch(action)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        self.inner.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().unsubscribe(id)
    }
}
