//! Binary min-heap priority queue.
//!
//! # Overview
//!
//! [`PriorityQueue`] stores `(item, priority)` pairs in a dense `Vec` laid
//! out as an implicit binary tree: the parent of slot `i` is `(i - 1) / 2`
//! and its children are `2i + 1` and `2i + 2`. The smallest priority is
//! always at slot 0.
//!
//! There is no decrease-key and no removal by item. The same item may be
//! pushed several times with different priorities; callers that need
//! "latest priority wins" semantics (Dijkstra) discard stale entries when
//! they are popped.
//!
//! Equal priorities come out in whatever order the heap structure yields.

/// A min-heap keyed by priority `P` (defaults to `u64` distances).
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = u64> {
    heap: Vec<(T, P)>,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    #[must_use]
    pub const fn new() -> Self {
        Self { heap: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of live entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` with `priority`. O(log n).
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push((item, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest priority. O(log n).
    pub fn try_pop(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }

        // Move the last entry into the root slot, then restore the heap.
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// The entry [`try_pop`](Self::try_pop) would return next.
    #[must_use]
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|(item, priority)| (item, priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Swap `idx` with its parent while the parent is strictly greater.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].1 > self.heap[idx].1 {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Swap `idx` with its smaller child while that child is strictly smaller.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let smaller = if right < len && self.heap[right].1 < self.heap[left].1 {
                right
            } else {
                left
            };

            if self.heap[smaller].1 < self.heap[idx].1 {
                self.heap.swap(idx, smaller);
                idx = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
