use super::QuadTree;
use common::intersect;
use common::shapes::{Point, Ray};

/// Tolerance for the on-ray entry test, scaled by direction magnitude.
const RAY_EPSILON: f32 = 1e-4;

impl<V: Clone> QuadTree<V> {
    /// Collect every entry lying on the ray `origin + t * direction` for
    /// `t` in `[0, max_length]`, within a tolerance proportional to the
    /// direction magnitude. A zero direction matches nothing.
    pub fn query_ray(
        &self,
        origin: Point,
        direction: Point,
        max_length: f32,
        out: &mut Vec<(Point, V)>,
    ) {
        let ray = Ray::new(origin, direction, max_length);
        if ray.is_degenerate() {
            return;
        }
        self.search(
            |boundary| intersect::rect_ray(boundary, &ray),
            |point| intersect::point_on_ray(&ray, point, RAY_EPSILON),
            out,
        );
    }
}
