//! A binary min-heap ordered by a caller-supplied comparator.
//!
//! The ordering lives in the queue rather than in an `Ord` impl on the
//! element, so the same element type can be ranked in different ways.

use std::cmp::Ordering;

pub struct MinPq<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    heap: Vec<T>,
    compare: F,
}

impl<T, F> MinPq<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            heap: Vec::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The smallest element, without removing it.
    pub fn min(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
        self.swim(self.heap.len() - 1);
    }

    /// Removes and returns the smallest element.
    pub fn del_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Some(item)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.less(k, parent) {
                break;
            }
            self.heap.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, k) {
                break;
            }
            self.heap.swap(k, child);
            k = child;
        }
    }
}
