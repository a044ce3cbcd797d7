//! Bounded best-first frontier (the open list).
//!
//! A `BinaryHeap` min-queue keyed by [`Priority`] plus an admission ticket.
//! Decrease-key is lazy: an improved node gets a fresh heap entry and its
//! live ticket moves to that entry; superseded entries are dropped when they
//! reach the top. Membership, `len` and `peek` only ever see live entries.
//!
//! # Capacity
//!
//! A frontier of capacity `n` admits at most `n + 1` nodes between clears:
//! the search root plus `n` discoveries. The admission that takes the last
//! slot latches [`BoundedFrontier::is_full`] until [`BoundedFrontier::clear`],
//! and every later push is refused.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::node::Priority;

/// Default frontier capacity.
pub const DEFAULT_FRONTIER_CAPACITY: usize = 200;

/// Heap ordering key: node priority, then admission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    priority: Priority,
    ticket: u64,
}

/// A heap entry. `BinaryHeap` is a max-heap, so entries are stored as
/// `Reverse<FrontierEntry>` to pop the lowest key first.
#[derive(Debug)]
struct FrontierEntry<Id> {
    key: FrontierKey,
    id: Id,
}

impl<Id> PartialEq for FrontierEntry<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<Id> Eq for FrontierEntry<Id> {}

impl<Id> PartialOrd for FrontierEntry<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id> Ord for FrontierEntry<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Capacity-bounded min-priority frontier over node identities.
#[derive(Debug)]
pub struct BoundedFrontier<Id> {
    heap: BinaryHeap<Reverse<FrontierEntry<Id>>>,
    /// Live ticket per member; heap entries with any other ticket are stale.
    live: HashMap<Id, u64>,
    capacity: usize,
    admitted: usize,
    next_ticket: u64,
    high_water: usize,
}

impl<Id: Clone + Eq + Hash> BoundedFrontier<Id> {
    /// Create an empty frontier with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            capacity,
            admitted: 0,
            next_ticket: 0,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit `id` with the given priority.
    ///
    /// Returns `false` (and leaves the frontier unchanged) if `id` is already
    /// a member or the frontier is full.
    pub fn push(&mut self, id: Id, priority: Priority) -> bool {
        if self.is_full() || self.live.contains_key(&id) {
            return false;
        }
        self.admitted += 1;
        self.insert_entry(id, priority);
        self.high_water = self.high_water.max(self.live.len());
        true
    }

    /// Re-key a member in place (decrease-key).
    ///
    /// Does not count as an admission and is allowed on a full frontier.
    /// Returns `false` if `id` is not a member.
    pub fn decrease_key(&mut self, id: &Id, priority: Priority) -> bool {
        if !self.live.contains_key(id) {
            return false;
        }
        self.insert_entry(id.clone(), priority);
        self.discard_stale();
        true
    }

    /// Remove and return the member with the lowest priority.
    #[must_use]
    pub fn pop(&mut self) -> Option<Id> {
        let Reverse(entry) = self.heap.pop()?;
        self.live.remove(&entry.id);
        self.discard_stale();
        Some(entry.id)
    }

    /// The member that [`BoundedFrontier::pop`] would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&Id> {
        self.heap.peek().map(|Reverse(entry)| &entry.id)
    }

    /// Whether `id` is currently a member.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.live.contains_key(id)
    }

    /// Number of live members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether the capacity cutoff has been reached since the last clear.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.admitted > self.capacity
    }

    /// Admissions since the last clear.
    #[must_use]
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Largest live size since the last clear.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop all members and reset the capacity latch.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.admitted = 0;
        self.next_ticket = 0;
        self.high_water = 0;
    }

    fn insert_entry(&mut self, id: Id, priority: Priority) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.live.insert(id.clone(), ticket);
        self.heap.push(Reverse(FrontierEntry {
            key: FrontierKey { priority, ticket },
            id,
        }));
    }

    /// Pop superseded entries until the top is live (or the heap is empty).
    fn discard_stale(&mut self) {
        while let Some(Reverse(top)) = self.heap.peek() {
            if self.live.get(&top.id) == Some(&top.key.ticket) {
                break;
            }
            self.heap.pop();
        }
    }
}
