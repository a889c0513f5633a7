use super::QuadTree;
use crate::error::QuadtreeResult;
use common::shapes::Point;

/// Set algebra between trees. Each operation enumerates one tree
/// linearly, probes the other through [`QuadTree::find`], and rebuilds a
/// fresh tree by repeated insertion with the target capacity.
impl<V: Clone> QuadTree<V> {
    /// Union of `a` and `b` over a boundary enclosing both. When both
    /// trees store an entry at the same point, the entry from `a` wins.
    pub fn merge(a: &QuadTree<V>, b: &QuadTree<V>, capacity: usize) -> QuadtreeResult<QuadTree<V>> {
        Self::validate_capacity(capacity)?;
        let mut tree = QuadTree::new(a.boundary().union(&b.boundary()))?;
        for (point, value) in a.iter() {
            tree.insert(point, value.clone(), capacity)?;
        }
        for (point, value) in b.iter() {
            if a.find(point).is_none() {
                tree.insert(point, value.clone(), capacity)?;
            }
        }
        Ok(tree)
    }

    /// Entries of `a` whose points are also present in `b`, keeping the
    /// values from `a`.
    pub fn intersection(
        a: &QuadTree<V>,
        b: &QuadTree<V>,
        capacity: usize,
    ) -> QuadtreeResult<QuadTree<V>> {
        Self::validate_capacity(capacity)?;
        let mut tree = QuadTree::new(a.boundary().union(&b.boundary()))?;
        for (point, value) in a.iter() {
            if b.find(point).is_some() {
                tree.insert(point, value.clone(), capacity)?;
            }
        }
        Ok(tree)
    }

    /// Entries of `a` whose points are absent from `b`.
    pub fn difference(
        a: &QuadTree<V>,
        b: &QuadTree<V>,
        capacity: usize,
    ) -> QuadtreeResult<QuadTree<V>> {
        Self::validate_capacity(capacity)?;
        let mut tree = QuadTree::new(a.boundary().union(&b.boundary()))?;
        for (point, value) in a.iter() {
            if b.find(point).is_none() {
                tree.insert(point, value.clone(), capacity)?;
            }
        }
        Ok(tree)
    }

    /// A fresh tree over the same boundary keeping only the entries for
    /// which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F, capacity: usize) -> QuadtreeResult<QuadTree<V>>
    where
        F: FnMut(&Point, &V) -> bool,
    {
        Self::validate_capacity(capacity)?;
        let mut tree = QuadTree::new(self.boundary())?;
        for (point, value) in self.iter() {
            if predicate(&point, value) {
                tree.insert(point, value.clone(), capacity)?;
            }
        }
        Ok(tree)
    }
}
