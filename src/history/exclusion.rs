use std::collections::HashSet;
use std::hash::Hash;

/// Fixed set of action kinds that never create history entries.
///
/// Excluded actions still reach the domain reducer; they are only invisible
/// to history bookkeeping (no entry, no redo clearing, no merge candidate).
#[derive(Debug, Clone)]
pub struct ExclusionFilter<K> {
    kinds: HashSet<K>,
}

impl<K: Copy + Eq + Hash> ExclusionFilter<K> {
    pub fn new(kinds: impl IntoIterator<Item = K>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            kinds: HashSet::new(),
        }
    }

    pub fn is_excluded(&self, kind: K) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<K: Copy + Eq + Hash> Default for ExclusionFilter<K> {
    fn default() -> Self {
        Self::none()
    }
}
