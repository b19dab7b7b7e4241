//! Union-find over dendrogram labels.
//!
//! Engines report merges between row slots, and a slot keeps its index
//! after absorbing another cluster. The assembler replays those merges
//! through this forest so each merge gets the next sequential label: leaves
//! keep labels `0..N` and the `i`th merge creates label `N + i`.

#[derive(Clone, Debug, Default)]
pub(crate) struct LabelForest {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    next_label: usize,
}

impl LabelForest {
    /// Prepares `2N - 1` labels for `observations` leaves.
    pub(crate) fn reset(&mut self, observations: usize) {
        let labels = (2 * observations).saturating_sub(1);
        self.parent.clear();
        self.parent.extend(0..labels);
        self.sizes.clear();
        self.sizes.resize(labels, 1);
        self.next_label = observations;
    }

    /// Returns the newest label of the cluster containing `label`.
    pub(crate) fn find(&mut self, mut label: usize) -> usize {
        let mut root = label;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[label] != label {
            let parent = self.parent[label];
            self.parent[label] = root;
            label = parent;
        }

        root
    }

    /// Joins two distinct roots under a fresh label and returns it with the
    /// merged size.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> (usize, usize) {
        debug_assert!(left != right, "cannot merge a cluster with itself");
        debug_assert!(self.next_label < self.parent.len(), "label space exhausted");
        let label = self.next_label;
        self.next_label += 1;
        self.parent[left] = label;
        self.parent[right] = label;
        let size = self.sizes[left] + self.sizes[right];
        self.sizes[label] = size;
        (label, size)
    }
}
