//! Indexed binary min-heap priority queue.
//!
//! [`MinHeap`] is the open list used by the Dijkstra and A* drivers. It
//! deliberately supports no decrease-key and no identity-based removal:
//! callers re-enqueue an item when its priority improves and skip the
//! stale copy when it eventually surfaces (lazy reinsertion), so duplicate
//! logical items at different priorities are expected and harmless.

/// One heap slot: an item with its priority.
#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    item: T,
    priority: i32,
}

/// A dense array-backed binary min-heap over `(item, priority)` pairs.
///
/// After every [`enqueue`](Self::enqueue) / [`dequeue`](Self::dequeue)
/// the root holds an item of minimum priority among all contained items.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether the heap contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of contained items, stale copies included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert `item` with the given priority. O(log n).
    pub fn enqueue(&mut self, item: T, priority: i32) {
        self.entries.push(Entry { item, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return an item of minimum priority, or `None` if the
    /// heap is empty. O(log n).
    pub fn dequeue(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    // 1-indexed heap arithmetic over the 0-indexed vec: parent of i is
    // (i+1)/2 - 1, children are 2*(i+1)-1 and 2*(i+1).

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i + 1) / 2 - 1;
            if self.entries[i].priority < self.entries[parent].priority {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * (i + 1) - 1;
            let right = 2 * (i + 1);
            if left >= len {
                break;
            }
            // Prefer the left child; take the right only when it is
            // strictly smaller than the left.
            let mut child = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }
            if self.entries[child].priority < self.entries[i].priority {
                self.entries.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}
