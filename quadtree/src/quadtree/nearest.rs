use super::{NodeStack, QuadTree};
use common::shapes::Point;
use smallvec::smallvec;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node awaiting expansion, keyed by the squared distance from the
/// query point to its boundary (zero when the point is inside). `rank`
/// is the node's position in the canonical NW, NE, SW, SE preorder and
/// breaks distance ties deterministically.
struct NodeCandidate {
    dist_sq: f32,
    rank: u64,
    index: usize,
}

impl PartialEq for NodeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeCandidate {}

impl PartialOrd for NodeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then(self.rank.cmp(&other.rank))
    }
}

/// A result candidate in the bounded k-best heap; the heap is a
/// max-heap, so its top is the current worst of the k best. `rank` is
/// the entry's position in the canonical traversal, so ties resolve
/// exactly as the region queries order their results.
struct EntryCandidate<V> {
    dist_sq: f32,
    rank: u64,
    point: Point,
    value: V,
}

impl<V> PartialEq for EntryCandidate<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for EntryCandidate<V> {}

impl<V> PartialOrd for EntryCandidate<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for EntryCandidate<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then(self.rank.cmp(&other.rank))
    }
}

impl<V: Clone> QuadTree<V> {
    /// Up to `k` entries ordered by ascending distance from `target`,
    /// ties broken by traversal order (NW, NE, SW, SE; leaf entries in
    /// insertion order), the same order every region query emits.
    ///
    /// Best-first search: a min-heap of nodes keyed by the lower-bound
    /// distance to their boundary, pruned against the current k-th best
    /// entry distance.
    pub fn find_nearest(&self, target: Point, k: usize) -> Vec<(Point, V)> {
        if k == 0 {
            return Vec::new();
        }

        // Canonical preorder positions, computed up front: node ranks
        // order the frontier, entry ranks break distance ties the way
        // iteration would list the entries. Keying ties on the search's
        // own discovery order instead would make the result depend on
        // the tree's current shape and drift under compression.
        let mut node_rank = vec![0u64; self.nodes.len()];
        let mut entry_rank = vec![0u64; self.nodes.len()];
        let mut stack: NodeStack = smallvec![self.root];
        let mut next_rank = 0u64;
        let mut entries_before = 0u64;
        while let Some(index) = stack.pop() {
            node_rank[index] = next_rank;
            next_rank += 1;
            entry_rank[index] = entries_before;
            match self.nodes[index].children {
                Some(children) => {
                    let [nw, ne, sw, se] = children.as_array();
                    stack.push(se);
                    stack.push(sw);
                    stack.push(ne);
                    stack.push(nw);
                }
                None => entries_before += self.nodes[index].entries.len() as u64,
            }
        }

        let mut frontier: BinaryHeap<Reverse<NodeCandidate>> = BinaryHeap::new();
        let mut best: BinaryHeap<EntryCandidate<V>> = BinaryHeap::with_capacity(k + 1);
        frontier.push(Reverse(NodeCandidate {
            dist_sq: self.nodes[self.root].boundary.distance_sq_to_point(&target),
            rank: node_rank[self.root],
            index: self.root,
        }));

        while let Some(Reverse(candidate)) = frontier.pop() {
            if best.len() == k {
                let worst = best.peek().map(|entry| entry.dist_sq).unwrap_or(f32::MAX);
                if candidate.dist_sq > worst {
                    continue;
                }
            }
            match self.nodes[candidate.index].children {
                Some(children) => {
                    for child in children.as_array() {
                        frontier.push(Reverse(NodeCandidate {
                            dist_sq: self.nodes[child].boundary.distance_sq_to_point(&target),
                            rank: node_rank[child],
                            index: child,
                        }));
                    }
                }
                None => {
                    for (i, (point, value)) in
                        self.nodes[candidate.index].entries.iter().enumerate()
                    {
                        let entry = EntryCandidate {
                            dist_sq: point.distance_sq(&target),
                            rank: entry_rank[candidate.index] + i as u64,
                            point: *point,
                            value: value.clone(),
                        };
                        if best.len() < k {
                            best.push(entry);
                        } else if best
                            .peek()
                            .map(|worst| entry.cmp(worst) == Ordering::Less)
                            .unwrap_or(false)
                        {
                            best.pop();
                            best.push(entry);
                        }
                    }
                }
            }
        }

        let mut results = best.into_vec();
        results.sort_by(|a, b| a.cmp(b));
        results
            .into_iter()
            .map(|entry| (entry.point, entry.value))
            .collect()
    }
}
