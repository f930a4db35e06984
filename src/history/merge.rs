//! Coalescing of continuous edit gestures.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::mvi::Action;

/// Decides whether `incoming` replaces the present history entry produced by
/// `previous` instead of pushing a new one.
///
/// Must be total and free of side effects: replaying the same action sequence
/// twice has to produce the same history.
pub trait ActionMerger<A> {
    fn should_merge(&self, previous: &A, incoming: &A) -> bool;
}

impl<A, F> ActionMerger<A> for F
where
    F: Fn(&A, &A) -> bool,
{
    fn should_merge(&self, previous: &A, incoming: &A) -> bool {
        self(previous, incoming)
    }
}

/// Merger that never coalesces. Every recorded action is its own undo step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverMerge;

impl<A> ActionMerger<A> for NeverMerge {
    fn should_merge(&self, _previous: &A, _incoming: &A) -> bool {
        false
    }
}

type Compatibility<A> = Arc<dyn Fn(&A, &A) -> bool + Send + Sync>;

/// Kind-based merge rules with an optional compatibility predicate.
///
/// Two actions merge when they share a kind, that kind is mergeable, and the
/// predicate (if any) accepts the ordered pair `(previous, incoming)`.
pub struct MergeRules<A: Action> {
    mergeable: HashSet<A::Kind>,
    compatible: Option<Compatibility<A>>,
}

impl<A: Action> MergeRules<A> {
    pub fn new(mergeable: impl IntoIterator<Item = A::Kind>) -> Self {
        Self {
            mergeable: mergeable.into_iter().collect(),
            compatible: None,
        }
    }

    /// Rules that merge nothing.
    pub fn disabled() -> Self {
        Self::new([])
    }

    /// Adds a predicate consulted after the kind check.
    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&A, &A) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.compatible = Some(Arc::new(predicate));
        self
    }
}

impl<A: Action> ActionMerger<A> for MergeRules<A> {
    fn should_merge(&self, previous: &A, incoming: &A) -> bool {
        let kind = incoming.kind();
        if previous.kind() != kind || !self.mergeable.contains(&kind) {
            return false;
        }
        self.compatible
            .as_ref()
            .is_none_or(|compatible| compatible(previous, incoming))
    }
}

impl<A: Action> Clone for MergeRules<A> {
    fn clone(&self) -> Self {
        Self {
            mergeable: self.mergeable.clone(),
            compatible: self.compatible.clone(),
        }
    }
}

impl<A: Action> fmt::Debug for MergeRules<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeRules")
            .field("mergeable", &self.mergeable)
            .field("has_predicate", &self.compatible.is_some())
            .finish()
    }
}
