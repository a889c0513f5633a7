use super::config::DensityPolicy;
use super::core::validate_point;
use super::{Children, QuadTree};
use crate::error::QuadtreeResult;
use common::shapes::{Point, Quadrant, Rect};

impl<V> QuadTree<V> {
    /// Insert `value` at `point`, subdividing the destination leaf when
    /// it outgrows `capacity`.
    ///
    /// Points outside the root boundary are silently rejected; the tree
    /// is unchanged. Inserting at an already-occupied point replaces the
    /// stored value, so no two entries ever share a point.
    pub fn insert(&mut self, point: Point, value: V, capacity: usize) -> QuadtreeResult<()> {
        self.insert_with_policy(point, value, capacity, None)
    }

    /// Like [`QuadTree::insert`], but raises the effective capacity of a
    /// crowded destination leaf according to `policy` before deciding to
    /// split. The density check is local to the destination leaf.
    pub fn insert_adaptive(
        &mut self,
        point: Point,
        value: V,
        capacity: usize,
        policy: &DensityPolicy,
    ) -> QuadtreeResult<()> {
        self.insert_with_policy(point, value, capacity, Some(policy))
    }

    fn insert_with_policy(
        &mut self,
        point: Point,
        value: V,
        capacity: usize,
        policy: Option<&DensityPolicy>,
    ) -> QuadtreeResult<()> {
        Self::validate_capacity(capacity)?;
        validate_point(&point)?;
        if !self.nodes[self.root].boundary.contains_point(&point) {
            return Ok(());
        }

        let leaf = self.leaf_for_point(self.root, &point);
        let node = &mut self.nodes[leaf];
        if let Some(slot) = node.entries.iter_mut().find(|(p, _)| *p == point) {
            slot.1 = value;
            return Ok(());
        }
        node.entries.push((point, value));

        let threshold = match policy {
            Some(policy) => {
                policy.effective_capacity(capacity, node.entries.len(), node.boundary.area())
            }
            None => capacity,
        };
        if self.nodes[leaf].entries.len() > threshold {
            self.split_cascade(leaf, threshold);
        }
        Ok(())
    }

    /// Subdivide `start` and keep subdividing children that remain over
    /// `threshold`, with an explicit work stack. Leaves whose boundary
    /// can no longer be split absorb their overflow.
    fn split_cascade(&mut self, start: usize, threshold: usize) {
        let mut overflowing = vec![start];
        while let Some(index) = overflowing.pop() {
            if self.nodes[index].entries.len() <= threshold {
                continue;
            }
            if !can_split(&self.nodes[index].boundary) {
                continue;
            }
            let children = self.subdivide(index);
            for child in children.as_array() {
                if self.nodes[child].entries.len() > threshold {
                    overflowing.push(child);
                }
            }
        }
    }

    /// Turn a leaf into an internal node with four quadrant children and
    /// route every entry into its quadrant, preserving relative order.
    fn subdivide(&mut self, index: usize) -> Children {
        let boundary = self.nodes[index].boundary;
        let depth = self.nodes[index].depth;

        let nw = self.alloc_node();
        let ne = self.alloc_node();
        let sw = self.alloc_node();
        let se = self.alloc_node();
        self.nodes[nw].initialize(boundary.quadrant(Quadrant::Nw), Some(index), depth + 1);
        self.nodes[ne].initialize(boundary.quadrant(Quadrant::Ne), Some(index), depth + 1);
        self.nodes[sw].initialize(boundary.quadrant(Quadrant::Sw), Some(index), depth + 1);
        self.nodes[se].initialize(boundary.quadrant(Quadrant::Se), Some(index), depth + 1);

        let children = Children { nw, ne, sw, se };
        let drained = {
            let node = &mut self.nodes[index];
            node.children = Some(children);
            std::mem::take(&mut node.entries)
        };
        for (point, value) in drained {
            let child = children.get(Quadrant::for_point(&boundary, &point));
            self.nodes[child].entries.push((point, value));
        }
        children
    }
}

/// A boundary can be split only if halving it makes float progress on at
/// least one axis; otherwise the quadrants would route points exactly as
/// the parent does and subdivision could never separate them.
fn can_split(boundary: &Rect) -> bool {
    let center = boundary.center();
    (center.x > boundary.left() && center.x < boundary.right())
        || (center.y > boundary.bottom() && center.y < boundary.top())
}
