//! Reducer assembled from per-kind handlers.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::action::Action;
use super::reducer::Reducer;
use super::state::SliceState;

/// Handler for one action kind.
pub type Handler<S, A> = fn(S, &A) -> S;

/// Dispatch table from action kind to handler.
///
/// Built once at store construction. Kinds without a handler fall through
/// unchanged, which keeps the resulting reducer total.
pub struct ReducerTable<S, A: Action> {
    handlers: HashMap<A::Kind, Handler<S, A>>,
    _state: PhantomData<fn() -> S>,
}

/// Collects handlers contributed by each domain module.
pub struct TableBuilder<S, A: Action> {
    handlers: HashMap<A::Kind, Handler<S, A>>,
}

impl<S, A: Action> TableBuilder<S, A> {
    /// Registers `handler` for `kind`. A later registration for the same
    /// kind replaces the earlier one.
    pub fn add_case(&mut self, kind: A::Kind, handler: Handler<S, A>) -> &mut Self {
        if self.handlers.insert(kind, handler).is_some() {
            tracing::warn!(?kind, "Replacing previously registered handler");
        }
        self
    }
}

impl<S: SliceState, A: Action> ReducerTable<S, A> {
    /// Builds a table by letting `configure` register its handlers.
    pub fn build(configure: impl FnOnce(&mut TableBuilder<S, A>)) -> Self {
        let mut builder = TableBuilder {
            handlers: HashMap::new(),
        };
        configure(&mut builder);
        Self {
            handlers: builder.handlers,
            _state: PhantomData,
        }
    }

    pub fn handles(&self, kind: A::Kind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: SliceState, A: Action> Reducer for ReducerTable<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: S, action: &A) -> S {
        match self.handlers.get(&action.kind()) {
            Some(handler) => handler(state, action),
            None => state,
        }
    }
}

impl<S, A: Action> fmt::Debug for ReducerTable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<String> = self.handlers.keys().map(|k| format!("{k:?}")).collect();
        kinds.sort();
        f.debug_struct("ReducerTable").field("kinds", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum CounterKind {
        Add,
        Reset,
        Unhandled,
    }

    #[derive(Debug, Clone)]
    enum CounterAction {
        Add(i32),
        Reset,
        Unhandled,
    }

    impl Action for CounterAction {
        type Kind = CounterKind;

        fn kind(&self) -> CounterKind {
            match self {
                CounterAction::Add(_) => CounterKind::Add,
                CounterAction::Reset => CounterKind::Reset,
                CounterAction::Unhandled => CounterKind::Unhandled,
            }
        }
    }

    impl SliceState for i32 {}

    fn add(state: i32, action: &CounterAction) -> i32 {
        match action {
            CounterAction::Add(n) => state + n,
            _ => state,
        }
    }

    fn reset(_state: i32, _action: &CounterAction) -> i32 {
        0
    }

    fn table() -> ReducerTable<i32, CounterAction> {
        ReducerTable::build(|builder| {
            builder
                .add_case(CounterKind::Add, add)
                .add_case(CounterKind::Reset, reset);
        })
    }

    #[test]
    fn dispatches_by_kind() {
        let table = table();
        assert_eq!(table.reduce(1, &CounterAction::Add(2)), 3);
        assert_eq!(table.reduce(7, &CounterAction::Reset), 0);
    }

    #[test]
    fn unhandled_kind_is_identity() {
        let table = table();
        assert!(!table.handles(CounterKind::Unhandled));
        assert_eq!(table.reduce(5, &CounterAction::Unhandled), 5);
    }

    #[test]
    fn later_registration_wins() {
        let table = ReducerTable::build(|builder| {
            builder
                .add_case(CounterKind::Add, add)
                .add_case(CounterKind::Add, reset);
        });
        assert_eq!(table.len(), 1);
        assert_eq!(table.reduce(4, &CounterAction::Add(1)), 0);
    }
}
