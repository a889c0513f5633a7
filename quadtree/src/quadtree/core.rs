use super::{QuadNode, QuadTree};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Point, Quadrant, Rect};

impl<V> QuadTree<V> {
    /// Create an empty tree whose root leaf covers `boundary`.
    pub fn new(boundary: Rect) -> QuadtreeResult<Self> {
        validate_boundary(&boundary)?;
        let mut tree = QuadTree {
            root: 0,
            nodes: Vec::new(),
            free_list: Vec::new(),
        };
        let root = tree.alloc_node();
        tree.nodes[root].initialize(boundary, None, 0);
        tree.root = root;
        Ok(tree)
    }

    /// Reset to an empty leaf over `boundary`, keeping node allocations.
    pub fn clear(&mut self, boundary: Rect) -> QuadtreeResult<()> {
        validate_boundary(&boundary)?;
        self.free_list.clear();
        for index in (0..self.nodes.len()).rev() {
            if index != self.root {
                self.nodes[index].reset();
                self.free_list.push(index);
            }
        }
        self.nodes[self.root].initialize(boundary, None, 0);
        Ok(())
    }

    pub fn boundary(&self) -> Rect {
        self.nodes[self.root].boundary
    }

    pub(crate) fn alloc_node(&mut self) -> usize {
        if let Some(index) = self.free_list.pop() {
            self.nodes[index].reset();
            index
        } else {
            self.nodes.push(QuadNode::new());
            self.nodes.len() - 1
        }
    }

    pub(crate) fn free_node(&mut self, index: usize) {
        self.nodes[index].reset();
        self.free_list.push(index);
    }

    /// Descend from `start` to the leaf owning `point` by the split-line
    /// bias rule.
    pub(crate) fn leaf_for_point(&self, start: usize, point: &Point) -> usize {
        let mut node = start;
        while let Some(children) = self.nodes[node].children {
            let quadrant = Quadrant::for_point(&self.nodes[node].boundary, point);
            node = children.get(quadrant);
        }
        node
    }

    pub(crate) fn validate_capacity(capacity: usize) -> QuadtreeResult<()> {
        if capacity < 1 {
            return Err(QuadtreeError::InvalidCapacity { capacity });
        }
        Ok(())
    }
}

pub(crate) fn validate_boundary(boundary: &Rect) -> QuadtreeResult<()> {
    if !boundary.is_finite() || boundary.width < 0.0 || boundary.height < 0.0 {
        return Err(QuadtreeError::InvalidBoundary {
            x: boundary.x,
            y: boundary.y,
            width: boundary.width,
            height: boundary.height,
        });
    }
    Ok(())
}

pub(crate) fn validate_point(point: &Point) -> QuadtreeResult<()> {
    if !point.is_finite() {
        return Err(QuadtreeError::NonFinitePoint {
            x: point.x,
            y: point.y,
        });
    }
    Ok(())
}
