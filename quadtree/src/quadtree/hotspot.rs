use super::{NodeStack, QuadTree};
use common::shapes::Rect;
use smallvec::smallvec;

impl<V> QuadTree<V> {
    /// The node boundary with the highest entry density (entries per
    /// unit area) among nodes whose subtree holds at least `min_count`
    /// entries, together with that count. Ties prefer the shallower
    /// node, then the earlier node in traversal order. Returns the root
    /// boundary with count 0 when no node qualifies.
    pub fn find_hotspot(&self, min_count: usize) -> (Rect, usize) {
        // Pre-order node list; reversed, it gives children before
        // parents for the subtree-count accumulation.
        let mut order = Vec::new();
        let mut stack: NodeStack = smallvec![self.root];
        while let Some(index) = stack.pop() {
            order.push(index);
            if let Some(children) = self.nodes[index].children {
                let [nw, ne, sw, se] = children.as_array();
                stack.push(se);
                stack.push(sw);
                stack.push(ne);
                stack.push(nw);
            }
        }

        let mut counts = vec![0usize; self.nodes.len()];
        for &index in order.iter().rev() {
            counts[index] = match self.nodes[index].children {
                Some(children) => children.as_array().iter().map(|&c| counts[c]).sum(),
                None => self.nodes[index].entries.len(),
            };
        }

        let mut best: Option<(f32, usize, usize)> = None;
        for &index in &order {
            let count = counts[index];
            if count < min_count {
                continue;
            }
            let area = self.nodes[index].boundary.area();
            let density = if area > 0.0 {
                count as f32 / area
            } else if count > 0 {
                f32::INFINITY
            } else {
                0.0
            };
            let depth = self.nodes[index].depth;
            let better = match best {
                None => true,
                Some((best_density, best_depth, _)) => {
                    density > best_density || (density == best_density && depth < best_depth)
                }
            };
            if better {
                best = Some((density, depth, index));
            }
        }

        match best {
            Some((_, _, index)) => (self.nodes[index].boundary, counts[index]),
            None => (self.boundary(), 0),
        }
    }
}
