//! Bookkeeping for the row slots that still represent live clusters.
//!
//! Each original observation owns one row slot. When two clusters merge,
//! the smaller slot is retired and the larger slot carries the merged
//! cluster from then on. Active slots form a doubly linked list in
//! ascending order so iteration costs time proportional to the number of
//! live clusters rather than the number of observations.

const NONE: usize = usize::MAX;

#[derive(Clone, Debug, Default)]
pub(crate) struct ClusterRegistry {
    sizes: Vec<usize>,
    next: Vec<usize>,
    prev: Vec<usize>,
    alive: Vec<bool>,
    head: usize,
    active: usize,
}

impl ClusterRegistry {
    /// Marks slots `0..len` as active singletons, reusing the allocation.
    pub(crate) fn reset(&mut self, len: usize) {
        self.sizes.clear();
        self.sizes.resize(len, 1);
        self.next.clear();
        self.next.extend(1..=len);
        self.prev.clear();
        self.prev.extend((0..len).map(|slot| slot.checked_sub(1).unwrap_or(NONE)));
        self.alive.clear();
        self.alive.resize(len, true);
        self.head = 0;
        self.active = len;
    }

    #[cfg(test)]
    #[rustfmt::skip]
    pub(crate) fn is_active(&self, slot: usize) -> bool { self.alive[slot] }

    #[rustfmt::skip]
    pub(crate) fn active_count(&self) -> usize { self.active }

    #[rustfmt::skip]
    pub(crate) fn size(&self, slot: usize) -> usize { self.sizes[slot] }

    /// Returns the smallest active slot.
    pub(crate) fn first(&self) -> Option<usize> {
        (self.head < self.alive.len()).then_some(self.head)
    }

    /// Iterates active slots in ascending order.
    pub(crate) fn iter(&self) -> ActiveSlots<'_> {
        ActiveSlots {
            registry: self,
            cursor: self.head,
        }
    }

    /// Iterates active slots strictly greater than the active slot `slot`.
    pub(crate) fn iter_after(&self, slot: usize) -> ActiveSlots<'_> {
        debug_assert!(self.alive[slot], "slot {slot} is not active");
        ActiveSlots {
            registry: self,
            cursor: self.next[slot],
        }
    }

    /// Retires `slot` without touching any size.
    pub(crate) fn deactivate(&mut self, slot: usize) {
        if !self.alive[slot] {
            return;
        }
        let (prev, next) = (self.prev[slot], self.next[slot]);
        if prev == NONE {
            self.head = next;
        } else {
            self.next[prev] = next;
        }
        if next < self.alive.len() {
            self.prev[next] = prev;
        }
        self.alive[slot] = false;
        self.active -= 1;
    }

    /// Folds `absorbed` into `survivor` and returns the merged size.
    pub(crate) fn merge(&mut self, absorbed: usize, survivor: usize) -> usize {
        debug_assert!(absorbed != survivor);
        let merged = self.sizes[absorbed] + self.sizes[survivor];
        self.sizes[survivor] = merged;
        self.deactivate(absorbed);
        merged
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ActiveSlots<'a> {
    registry: &'a ClusterRegistry,
    cursor: usize,
}

impl Iterator for ActiveSlots<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let slot = self.cursor;
        if slot >= self.registry.alive.len() {
            return None;
        }
        self.cursor = self.registry.next[slot];
        Some(slot)
    }
}
