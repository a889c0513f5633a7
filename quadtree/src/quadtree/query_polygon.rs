use super::QuadTree;
use common::intersect;
use common::shapes::{Point, Polygon};

impl<V: Clone> QuadTree<V> {
    /// Collect every entry inside `polygon` by the even-odd rule.
    /// Polygons with fewer than three vertices match nothing.
    pub fn query_polygon(&self, polygon: &Polygon, out: &mut Vec<(Point, V)>) {
        if !polygon.is_valid() {
            return;
        }
        self.search(
            |boundary| intersect::rect_polygon(boundary, polygon),
            |point| intersect::point_in_polygon(polygon, point),
            out,
        );
    }
}
