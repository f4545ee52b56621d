//! Slice helpers: pairwise iteration and order-preserving deduplication

use std::collections::HashSet;
use std::hash::Hash;

pub trait PairwiseExt<T> {
    /// Call `f` with every element and the one following it, in order.
    ///
    /// Slices with fewer than two elements never call `f`.
    fn for_each_pair<F: FnMut(&T, &T)>(&self, f: F);
}

impl<T> PairwiseExt<T> for [T] {
    fn for_each_pair<F: FnMut(&T, &T)>(&self, mut f: F) {
        for pair in self.windows(2) {
            f(&pair[0], &pair[1]);
        }
    }
}

pub trait DedupExt<T> {
    /// Elements with duplicates removed, keeping the first occurrence of each.
    fn deduplicated(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Like [`DedupExt::deduplicated`], treating elements with equal keys as duplicates.
    fn deduplicated_by_key<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;
}

impl<T> DedupExt<T> for [T] {
    fn deduplicated(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }

    fn deduplicated_by_key<K, F>(&self, mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(key(item)))
            .cloned()
            .collect()
    }
}
