use common::shapes::{Point, Quadrant, Rect};
use smallvec::SmallVec;

pub(crate) type NodeStack = SmallVec<[usize; 64]>;

#[derive(Clone, Copy)]
pub(crate) struct Children {
    pub(crate) nw: usize,
    pub(crate) ne: usize,
    pub(crate) sw: usize,
    pub(crate) se: usize,
}

impl Children {
    /// Children in traversal order: NW, NE, SW, SE.
    pub(crate) fn as_array(&self) -> [usize; 4] {
        [self.nw, self.ne, self.sw, self.se]
    }

    pub(crate) fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::Nw => self.nw,
            Quadrant::Ne => self.ne,
            Quadrant::Sw => self.sw,
            Quadrant::Se => self.se,
        }
    }
}

/// A tree node. `children: Some(_)` makes it an internal node with
/// exactly four quadrant children and no entries of its own; `None`
/// makes it a leaf holding entries in insertion order.
pub(crate) struct QuadNode<V> {
    pub(crate) boundary: Rect,
    pub(crate) entries: Vec<(Point, V)>,
    pub(crate) children: Option<Children>,
    pub(crate) parent: Option<usize>,
    pub(crate) depth: usize,
}

impl<V> QuadNode<V> {
    pub(crate) fn new() -> Self {
        Self {
            boundary: Rect::new(0.0, 0.0, 0.0, 0.0),
            entries: Vec::new(),
            children: None,
            parent: None,
            depth: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.boundary = Rect::new(0.0, 0.0, 0.0, 0.0);
        self.entries.clear();
        self.children = None;
        self.parent = None;
        self.depth = 0;
    }

    pub(crate) fn initialize(&mut self, boundary: Rect, parent: Option<usize>, depth: usize) {
        self.boundary = boundary;
        self.entries.clear();
        self.children = None;
        self.parent = parent;
        self.depth = depth;
    }
}

/// A quadtree of `(Point, V)` entries over a fixed world boundary.
///
/// Nodes live in an arena indexed by `usize`; freed nodes are recycled
/// through a free list. Mutating operations take the leaf capacity per
/// call; capacities below 1 are rejected without touching the tree.
pub struct QuadTree<V> {
    pub(crate) root: usize,
    pub(crate) nodes: Vec<QuadNode<V>>,
    pub(crate) free_list: Vec<usize>,
}
