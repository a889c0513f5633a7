use super::{NodeStack, QuadTree};
use smallvec::smallvec;

impl<V> QuadTree<V> {
    /// Total number of entries.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack: NodeStack = smallvec![self.root];
        while let Some(index) = stack.pop() {
            match self.nodes[index].children {
                Some(children) => stack.extend(children.as_array()),
                None => count += self.nodes[index].entries.len(),
            }
        }
        count
    }

    /// Longest root-to-leaf path, in edges. A lone leaf root has depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: NodeStack = smallvec![self.root];
        while let Some(index) = stack.pop() {
            match self.nodes[index].children {
                Some(children) => stack.extend(children.as_array()),
                None => max_depth = max_depth.max(self.nodes[index].depth),
            }
        }
        max_depth
    }

    /// Number of (leaf, internal) nodes.
    pub fn count_nodes(&self) -> (usize, usize) {
        let mut leaves = 0;
        let mut internals = 0;
        let mut stack: NodeStack = smallvec![self.root];
        while let Some(index) = stack.pop() {
            match self.nodes[index].children {
                Some(children) => {
                    internals += 1;
                    stack.extend(children.as_array());
                }
                None => leaves += 1,
            }
        }
        (leaves, internals)
    }
}
