//! Pure geometric predicates over the shapes in [`crate::shapes`].
//!
//! Every region here is closed: touching edges and boundary points count
//! as intersecting. Comparisons use squared distances wherever a square
//! root can be avoided.

use crate::shapes::{Point, Polygon, Ray, Rect, Sector};

pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.left() <= b.right() && a.right() >= b.left() && a.bottom() <= b.top() && a.top() >= b.bottom()
}

/// Closed disk of `radius` about `center` against the closed rectangle.
pub fn rect_circle(rect: &Rect, center: &Point, radius: f32) -> bool {
    rect.distance_sq_to_point(center) <= radius * radius
}

/// Even-odd ray casting. Polygons with fewer than three vertices contain
/// nothing; degenerate (horizontal or zero-length) edges are skipped by
/// the half-open crossing rule.
pub fn point_in_polygon(polygon: &Polygon, point: &Point) -> bool {
    if !polygon.is_valid() {
        return false;
    }
    let vertices = polygon.vertices();
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let t = (point.y - vi.y) / (vj.y - vi.y);
            let cross_x = vi.x + t * (vj.x - vi.x);
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Conservative rect-polygon overlap: a polygon vertex inside the rect,
/// a rect corner inside the polygon, or a polygon edge crossing a rect
/// edge. Exact for convex polygons, over-approximating for concave ones.
pub fn rect_polygon(rect: &Rect, polygon: &Polygon) -> bool {
    if !polygon.is_valid() {
        return false;
    }
    let vertices = polygon.vertices();
    if vertices.iter().any(|v| rect.contains_point(v)) {
        return true;
    }
    let corners = rect.corners();
    if corners.iter().any(|c| point_in_polygon(polygon, c)) {
        return true;
    }
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        for e in 0..4 {
            let c1 = corners[e];
            let c2 = corners[(e + 1) % 4];
            if segments_intersect(&vertices[j], &vertices[i], &c1, &c2) {
                return true;
            }
        }
        j = i;
    }
    false
}

/// 2D slab test over the parametric interval `[0, max_length]`.
/// Degenerate rays hit nothing.
pub fn rect_ray(rect: &Rect, ray: &Ray) -> bool {
    if ray.is_degenerate() {
        return false;
    }
    let mut t_min = 0.0_f32;
    let mut t_max = ray.max_length;
    let axes = [
        (ray.origin.x, ray.direction.x, rect.left(), rect.right()),
        (ray.origin.y, ray.direction.y, rect.bottom(), rect.top()),
    ];
    for (origin, dir, lo, hi) in axes {
        if dir == 0.0 {
            if origin < lo || origin > hi {
                return false;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
    }
    true
}

/// Does `point` lie on the ray, within a tolerance of
/// `epsilon * |direction|` around the closest point of the segment?
pub fn point_on_ray(ray: &Ray, point: &Point, epsilon: f32) -> bool {
    if ray.is_degenerate() {
        return false;
    }
    let dx = ray.direction.x;
    let dy = ray.direction.y;
    let len_sq = dx * dx + dy * dy;
    let t = ((point.x - ray.origin.x) * dx + (point.y - ray.origin.y) * dy) / len_sq;
    let t = t.clamp(0.0, ray.max_length);
    let closest = ray.point_at(t);
    let tolerance = epsilon * len_sq.sqrt();
    point.distance_sq(&closest) <= tolerance * tolerance
}

pub fn point_in_sector(sector: &Sector, point: &Point) -> bool {
    let dx = point.x - sector.center.x;
    let dy = point.y - sector.center.y;
    if dx * dx + dy * dy > sector.radius * sector.radius {
        return false;
    }
    if dx == 0.0 && dy == 0.0 {
        return true;
    }
    angle_in_sweep(sector, dy.atan2(dx))
}

/// Rect-sector overlap: the rect must touch the disk, and then the
/// sector must actually reach into it. The center-inside-rect case
/// covers a sector lying wholly within a large rect.
pub fn rect_sector(rect: &Rect, sector: &Sector) -> bool {
    if !rect_circle(rect, &sector.center, sector.radius) {
        return false;
    }
    if sector.is_full_disk() {
        return true;
    }
    if rect.contains_point(&sector.center) {
        return true;
    }
    let corners = rect.corners();
    if corners.iter().any(|c| point_in_sector(sector, c)) {
        return true;
    }
    let start = sector.radius_endpoint(sector.start_angle);
    let end = sector.radius_endpoint(sector.end_angle);
    for e in 0..4 {
        let c1 = corners[e];
        let c2 = corners[(e + 1) % 4];
        if segments_intersect(&c1, &c2, &sector.center, &start)
            || segments_intersect(&c1, &c2, &sector.center, &end)
        {
            return true;
        }
    }
    false
}

/// Closed segment-segment intersection, including collinear overlap.
pub fn segments_intersect(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}

fn cross(origin: &Point, a: &Point, b: &Point) -> f32 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

fn on_segment(s1: &Point, s2: &Point, p: &Point) -> bool {
    p.x >= s1.x.min(s2.x) && p.x <= s1.x.max(s2.x) && p.y >= s1.y.min(s2.y) && p.y <= s1.y.max(s2.y)
}

fn angle_in_sweep(sector: &Sector, angle: f32) -> bool {
    if sector.is_full_disk() {
        return true;
    }
    let tau = std::f32::consts::TAU;
    let sweep = (sector.end_angle - sector.start_angle).rem_euclid(tau);
    let relative = (angle - sector.start_angle).rem_euclid(tau);
    relative <= sweep
}
