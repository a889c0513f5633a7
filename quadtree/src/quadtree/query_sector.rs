use super::QuadTree;
use common::intersect;
use common::shapes::{Point, Sector};

impl<V: Clone> QuadTree<V> {
    /// Collect every entry inside the circular sector spanning
    /// counter-clockwise from `start_angle` to `end_angle` (radians)
    /// within `radius` of `center`.
    pub fn query_sector(
        &self,
        center: Point,
        start_angle: f32,
        end_angle: f32,
        radius: f32,
        out: &mut Vec<(Point, V)>,
    ) {
        let sector = Sector::new(center, start_angle, end_angle, radius);
        self.search(
            |boundary| intersect::rect_sector(boundary, &sector),
            |point| intersect::point_in_sector(&sector, point),
            out,
        );
    }
}
