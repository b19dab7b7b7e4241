//! Indexed binary min-heap over row slots.
//!
//! Each slot carries one priority, its cached nearest-neighbour
//! dissimilarity. Priorities can move in either direction, so the heap keeps
//! a slot-to-position index and sifts in place. Equal priorities are ordered
//! by slot so the smallest slot surfaces first.

use crate::float::Float;

const ABSENT: usize = usize::MAX;

#[derive(Clone, Debug, Default)]
pub(crate) struct NearestHeap<T> {
    heap: Vec<usize>,
    position: Vec<usize>,
    priorities: Vec<T>,
}

impl<T: Float> NearestHeap<T> {
    /// Empties the heap and sizes it for slots `0..len`.
    pub(crate) fn reset(&mut self, len: usize) {
        self.heap.clear();
        self.position.clear();
        self.position.resize(len, ABSENT);
        self.priorities.clear();
        self.priorities.resize(len, T::infinity());
    }

    #[cfg(test)]
    #[rustfmt::skip]
    pub(crate) fn is_empty(&self) -> bool { self.heap.is_empty() }

    #[cfg(test)]
    #[rustfmt::skip]
    pub(crate) fn contains(&self, slot: usize) -> bool { self.position[slot] != ABSENT }

    #[rustfmt::skip]
    pub(crate) fn priority(&self, slot: usize) -> T { self.priorities[slot] }

    /// Returns the slot with the smallest `(priority, slot)` pair.
    pub(crate) fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Inserts `slot` or moves it to its new priority.
    pub(crate) fn set_priority(&mut self, slot: usize, priority: T) {
        self.priorities[slot] = priority;
        let index = self.position[slot];
        if index == ABSENT {
            self.position[slot] = self.heap.len();
            self.heap.push(slot);
            self.sift_up(self.heap.len() - 1);
        } else {
            let index = self.sift_up(index);
            self.sift_down(index);
        }
    }

    /// Drops `slot` from the heap if it is present.
    pub(crate) fn remove(&mut self, slot: usize) {
        let index = self.position[slot];
        if index == ABSENT {
            return;
        }
        let last = self.heap.len() - 1;
        self.swap(index, last);
        self.heap.pop();
        self.position[slot] = ABSENT;
        if index < self.heap.len() {
            let index = self.sift_up(index);
            self.sift_down(index);
        }
    }

    fn precedes(&self, left: usize, right: usize) -> bool {
        let (left, right) = (self.heap[left], self.heap[right]);
        let (left_priority, right_priority) = (self.priorities[left], self.priorities[right]);
        left_priority < right_priority || (left_priority == right_priority && left < right)
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        self.position[self.heap[left]] = left;
        self.position[self.heap[right]] = right;
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                return;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, index) {
                return;
            }
            self.swap(index, child);
            index = child;
        }
    }
}
