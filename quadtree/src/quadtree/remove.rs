use super::{NodeStack, QuadTree};
use crate::error::QuadtreeResult;
use common::intersect;
use common::shapes::{Point, Rect};
use smallvec::smallvec;

impl<V> QuadTree<V> {
    /// Remove the entry stored at `point`, if any, then compress the
    /// path back toward the root.
    pub fn remove(&mut self, point: Point, capacity: usize) -> QuadtreeResult<()> {
        Self::validate_capacity(capacity)?;
        if !self.nodes[self.root].boundary.contains_point(&point) {
            return Ok(());
        }
        let leaf = self.leaf_for_point(self.root, &point);
        let node = &mut self.nodes[leaf];
        let before = node.entries.len();
        node.entries.retain(|(p, _)| *p != point);
        if self.nodes[leaf].entries.len() != before {
            self.compress_upwards(leaf, capacity);
        }
        Ok(())
    }

    /// Remove every entry whose point lies in `range`, then compress
    /// each affected path.
    pub fn remove_range(&mut self, range: Rect, capacity: usize) -> QuadtreeResult<()> {
        Self::validate_capacity(capacity)?;
        let mut stack: NodeStack = smallvec![self.root];
        let mut touched = Vec::new();
        while let Some(index) = stack.pop() {
            if !intersect::rect_rect(&self.nodes[index].boundary, &range) {
                continue;
            }
            match self.nodes[index].children {
                Some(children) => stack.extend(children.as_array()),
                None => {
                    let node = &mut self.nodes[index];
                    let before = node.entries.len();
                    node.entries.retain(|(p, _)| !range.contains_point(p));
                    if node.entries.len() != before {
                        touched.push(index);
                    }
                }
            }
        }
        for leaf in touched {
            self.compress_upwards(leaf, capacity);
        }
        Ok(())
    }

    /// Collapse every internal node whose subtree fits within `capacity`
    /// into a leaf, bottom-up across the whole tree.
    pub fn compress(&mut self, capacity: usize) -> QuadtreeResult<()> {
        Self::validate_capacity(capacity)?;
        let mut order = Vec::new();
        let mut stack: NodeStack = smallvec![self.root];
        while let Some(index) = stack.pop() {
            order.push(index);
            if let Some(children) = self.nodes[index].children {
                stack.extend(children.as_array());
            }
        }
        // Reversed pre-order visits children before their parent.
        for index in order.into_iter().rev() {
            self.try_collapse(index, capacity);
        }
        Ok(())
    }

    pub(crate) fn compress_upwards(&mut self, start: usize, capacity: usize) {
        let mut node = start;
        loop {
            self.try_collapse(node, capacity);
            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => break,
            }
        }
    }

    /// Collapse an internal node whose descendants together hold no more
    /// than `capacity` entries into a leaf. The collapsed leaf lists the
    /// child subtrees' entries in NW, NE, SW, SE order.
    fn try_collapse(&mut self, index: usize, capacity: usize) {
        let children = match self.nodes[index].children {
            Some(children) => children,
            None => return,
        };
        if self.subtree_len_limit(index, capacity) > capacity {
            return;
        }
        self.nodes[index].children = None;
        let mut entries = Vec::new();
        for child in children.as_array() {
            self.drain_subtree(child, &mut entries);
        }
        self.nodes[index].entries = entries;
    }

    /// Count entries below `index`, giving up as soon as the running
    /// total exceeds `limit`.
    fn subtree_len_limit(&self, index: usize, limit: usize) -> usize {
        let mut count = 0;
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            match self.nodes[current].children {
                Some(children) => stack.extend(children.as_array()),
                None => {
                    count += self.nodes[current].entries.len();
                    if count > limit {
                        return count;
                    }
                }
            }
        }
        count
    }

    /// Move every entry below `index` into `out` in traversal order and
    /// return the visited nodes to the free list.
    fn drain_subtree(&mut self, index: usize, out: &mut Vec<(Point, V)>) {
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            match self.nodes[current].children {
                Some(children) => {
                    let [nw, ne, sw, se] = children.as_array();
                    stack.push(se);
                    stack.push(sw);
                    stack.push(ne);
                    stack.push(nw);
                }
                None => out.append(&mut self.nodes[current].entries),
            }
            self.free_node(current);
        }
    }
}
