use super::QuadTree;
use common::intersect;
use common::shapes::Point;

impl<V: Clone> QuadTree<V> {
    /// Collect every entry within `radius` of `center` (closed disk).
    /// The entry test compares squared distances.
    pub fn query_circle(&self, center: Point, radius: f32, out: &mut Vec<(Point, V)>) {
        let radius_sq = radius * radius;
        self.search(
            |boundary| intersect::rect_circle(boundary, &center, radius),
            |point| point.distance_sq(&center) <= radius_sq,
            out,
        );
    }
}
