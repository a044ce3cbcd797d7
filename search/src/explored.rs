//! Explored set (the closed list).

use std::collections::HashSet;
use std::hash::Hash;

/// Identities whose accumulated cost is final for the current query.
///
/// Once a node is inserted it is never re-relaxed or re-admitted to the
/// frontier, which is what bounds the search on cyclic graphs.
#[derive(Debug, Clone)]
pub struct ExploredSet<Id> {
    members: HashSet<Id>,
}

impl<Id: Eq + Hash> ExploredSet<Id> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Mark `id` as finalized. Returns `false` if it already was.
    pub fn insert(&mut self, id: Id) -> bool {
        self.members.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.members.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<Id: Eq + Hash> Default for ExploredSet<Id> {
    fn default() -> Self {
        Self::new()
    }
}
