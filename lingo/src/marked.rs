use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::CellId;

/// The set of catalog entries revealed so far in an event.
///
/// This set only ever grows while the event runs. Marking an entry twice
/// has no effect, and entries are never unmarked one by one; the only way
/// to shrink the set is [`reset`](MarkedCells::reset), which restarts the
/// event from scratch.
///
/// ```
/// use lingo::{CellId, MarkedCells};
/// let mut marked = MarkedCells::new();
/// assert!(marked.mark(CellId(3)));
/// assert!(!marked.mark(CellId(3)));
/// assert!(marked.contains(CellId(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedCells(BTreeSet<CellId>);

impl MarkedCells {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Marks an entry as revealed. Returns whether it was newly marked.
    pub fn mark(&mut self, id: CellId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forgets every mark. This restarts the event.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    /// The marked entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CellId> for MarkedCells {
    fn from_iter<T: IntoIterator<Item = CellId>>(iter: T) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}
