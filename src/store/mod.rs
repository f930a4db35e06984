//! The application store: root state, dispatch, observers and subscribers.
//!
//! A dispatch runs to completion before the next one starts:
//!
//! ```text
//! dispatch(action)
//!   ├─ RootReducer::reduce      (pure, never fails)
//!   ├─ commit new RootState
//!   ├─ Pipeline::run            (toast, navigation; failures isolated)
//!   └─ subscribers(&state)
//! ```

mod root;

pub use root::{EditorHistory, EditorSliceReducer, RootReducer, RootState};

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::AppAction;
use crate::config::Config;
use crate::editor::editor_merge_rules;
use crate::history::MergeRules;
use crate::mvi::{Action, Reducer};
use crate::observers::{
    panic_message, NavigationObserver, ObserverFailure, Pipeline, RouterHistory, ToastObserver,
    ToastSink,
};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Single-threaded state container.
///
/// `dispatch` takes `&mut self`, so two actions can never be in flight at
/// once. Wrap it in [`SharedStore`] to dispatch from async tasks.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    pipeline: Pipeline<R::State, R::Action>,
    subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
    next_subscription: u64,
    dispatched: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(reducer: R, initial: R::State, pipeline: Pipeline<R::State, R::Action>) -> Self {
        Self {
            reducer,
            state: initial,
            pipeline,
            subscribers: Vec::new(),
            next_subscription: 0,
            dispatched: 0,
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.clone()
    }

    /// Number of actions dispatched so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Reduces `action`, commits the result, runs observers, then notifies
    /// subscribers. Returns the observer failures of this dispatch; they are
    /// also logged, so callers may ignore them.
    pub fn dispatch(&mut self, action: R::Action) -> Vec<ObserverFailure> {
        let kind = action.kind();
        tracing::debug!(?kind, seq = self.dispatched, "Dispatch");

        // Reducers are pure; the placeholder is never observable.
        let previous = std::mem::take(&mut self.state);
        self.state = self.reducer.reduce(previous, &action);
        self.dispatched += 1;

        let failures = self.pipeline.run(&action, &self.state);

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
        failures
    }

    /// Registers a callback invoked after every completed dispatch.
    pub fn subscribe(&mut self, callback: impl FnMut(&R::State) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

/// Cloneable, thread-safe handle around a [`Store`].
///
/// Actions go through a FIFO queue drained by one caller at a time. The
/// store lock is held only while an action is reduced and observed;
/// subscribers registered here run after it is released, so they may read
/// from or dispatch into the same handle. A dispatch made while another is
/// draining is queued and processed before the draining call returns.
pub struct SharedStore<R: Reducer> {
    inner: Arc<Mutex<Store<R>>>,
    queue: Arc<Mutex<DispatchQueue<R::Action>>>,
    subscribers: Arc<Mutex<Vec<(SubscriptionId, SharedSubscriber<R::State>)>>>,
    next_subscription: Arc<AtomicU64>,
}

type SharedSubscriber<S> = Arc<Mutex<Subscriber<S>>>;

struct DispatchQueue<A> {
    pending: VecDeque<A>,
    draining: bool,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            queue: Arc::clone(&self.queue),
            subscribers: Arc::clone(&self.subscribers),
            next_subscription: Arc::clone(&self.next_subscription),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
            queue: Arc::new(Mutex::new(DispatchQueue {
                pending: VecDeque::new(),
                draining: false,
            })),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Queues `action` and, unless another call is already draining the
    /// queue, processes queued actions until it is empty. Observer failures
    /// are logged by the pipeline.
    pub fn dispatch(&self, action: R::Action) {
        {
            let mut queue = self.queue.lock();
            queue.pending.push_back(action);
            if queue.draining {
                tracing::trace!(queued = queue.pending.len(), "Dispatch queued");
                return;
            }
            queue.draining = true;
        }

        loop {
            let next = {
                let mut queue = self.queue.lock();
                let next = queue.pending.pop_front();
                if next.is_none() {
                    queue.draining = false;
                }
                next
            };
            let Some(action) = next else {
                return;
            };

            let state = {
                let mut store = self.inner.lock();
                store.dispatch(action);
                store.snapshot()
            };

            let subscribers: Vec<_> = self
                .subscribers
                .lock()
                .iter()
                .map(|(_, subscriber)| Arc::clone(subscriber))
                .collect();
            for subscriber in subscribers {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    let mut callback = subscriber.lock();
                    (*callback)(&state)
                }));
                if let Err(payload) = outcome {
                    tracing::warn!(error = %panic_message(payload.as_ref()), "Subscriber failed");
                }
            }
        }
    }

    pub fn snapshot(&self) -> R::State {
        self.inner.lock().snapshot()
    }

    /// Runs `f` with read access to the current state.
    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(self.inner.lock().state())
    }

    /// Registers a callback invoked with the committed state after every
    /// dispatch, outside the store lock.
    pub fn subscribe(&self, callback: impl FnMut(&R::State) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let subscriber: Subscriber<R::State> = Box::new(callback);
        self.subscribers
            .lock()
            .push((id, Arc::new(Mutex::new(subscriber))));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}

/// Builds the editor store from configuration.
///
/// Observers run toast first, then navigation.
pub fn configure_store(
    config: &Config,
    toasts: impl ToastSink + 'static,
    router: impl RouterHistory + 'static,
) -> Store<RootReducer> {
    let merge = if config.history.merge_continuous_edits {
        editor_merge_rules()
    } else {
        MergeRules::disabled()
    };
    let reducer = RootReducer::new(RootReducer::editor_stack(merge, config.history.max_depth));
    let pipeline: Pipeline<RootState, AppAction> = Pipeline::new()
        .with(ToastObserver::new(toasts))
        .with(NavigationObserver::new(router, config.navigation.base_path.clone()));

    tracing::debug!(
        max_depth = ?config.history.max_depth,
        merge = config.history.merge_continuous_edits,
        observers = ?pipeline.names(),
        "Store configured"
    );
    Store::new(reducer, RootState::default(), pipeline)
}
