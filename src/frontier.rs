use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::state::StateId;

/// Min-priority queue over arrangements with lazy deletion.
///
/// Re-inserting an arrangement bumps its live sequence number, which
/// tombstones the old heap entry instead of updating it in place; `pop`
/// discards tombstones as it meets them. Equal priorities pop in
/// insertion order.
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    live: HashMap<Vec<u8>, u64>,
    counter: u64,
}

struct Entry {
    priority: u32,
    seq: u64,
    id: StateId,
    key: Vec<u8>,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; flip so the smallest key pops first.
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        (self.priority, self.seq) == (other.priority, other.seq)
    }
}

impl Eq for Entry {}

impl PriorityFrontier {
    pub fn new() -> PriorityFrontier {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            counter: 0,
        }
    }

    /// Queues `id` under `key` (its arrangement) at `priority`. Any entry
    /// already live under the same arrangement is tombstoned first.
    pub fn insert(&mut self, id: StateId, key: Vec<u8>, priority: u32) {
        let seq = self.counter;
        self.counter += 1;

        self.live.insert(key.clone(), seq);
        self.heap.push(Entry {
            priority,
            seq,
            id,
            key,
        });
    }

    /// Removes and returns the live entry with the smallest
    /// (priority, sequence) key, or `None` when no live entry remains.
    pub fn pop(&mut self) -> Option<StateId> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                self.live.remove(&entry.key);
                return Some(entry.id);
            }
        }
        None
    }

    /// Whether a live entry exists for this arrangement.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.live.contains_key(key)
    }

    /// Count of live entries, ignoring tombstones still in the heap.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        PriorityFrontier::new()
    }
}
