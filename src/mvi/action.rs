//! Base trait for actions dispatched through the store.

use std::fmt::Debug;
use std::hash::Hash;

/// Actions represent:
/// - User gestures (dragging an item, changing a colour)
/// - System events (a document finished loading)
/// - History navigation (undo, redo)
///
/// Every action exposes a closed, hashable `Kind` discriminant. Merge and
/// exclusion rules are expressed over the kind, never over free-form strings.
pub trait Action: Clone + Debug + Send + 'static {
    /// Discriminant of the action, without its payload.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}
