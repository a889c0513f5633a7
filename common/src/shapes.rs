use rand::Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A 2D position with 32-bit float coordinates.
///
/// Equality and hashing are bit-identical per component, so two points
/// compare equal only when both coordinates share the same bit pattern.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// One of the four quadrants of a subdivided rectangle.
///
/// The split line assignment is upper/right biased: a point exactly on
/// the vertical split line belongs to the east side, a point exactly on
/// the horizontal split line belongs to the north side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quadrant {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Sw, Quadrant::Se];

    pub fn for_point(rect: &Rect, point: &Point) -> Quadrant {
        let center = rect.center();
        let east = point.x >= center.x;
        let north = point.y >= center.y;
        match (east, north) {
            (false, true) => Quadrant::Nw,
            (true, true) => Quadrant::Ne,
            (false, false) => Quadrant::Sw,
            (true, false) => Quadrant::Se,
        }
    }
}

/// An axis-aligned rectangle with min-corner (x, y).
///
/// The rectangle covers the closed region `[x, x+width] x [y, y+height]`;
/// points exactly on an edge are contained.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.top()),
        ]
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Squared distance from `point` to the closest point of the closed
    /// rectangle; zero when the point is inside.
    pub fn distance_sq_to_point(&self, point: &Point) -> f32 {
        let dx = if point.x < self.left() {
            self.left() - point.x
        } else if point.x > self.right() {
            point.x - self.right()
        } else {
            0.0
        };
        let dy = if point.y < self.bottom() {
            self.bottom() - point.y
        } else if point.y > self.top() {
            point.y - self.top()
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// The quadrant sub-rectangle obtained by halving width and height
    /// around the split point at the center.
    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        match quadrant {
            Quadrant::Nw => Rect::new(self.x, self.y + half_h, half_w, half_h),
            Quadrant::Ne => Rect::new(self.x + half_w, self.y + half_h, half_w, half_h),
            Quadrant::Sw => Rect::new(self.x, self.y, half_w, half_h),
            Quadrant::Se => Rect::new(self.x + half_w, self.y, half_w, half_h),
        }
    }

    /// The smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = f32::min(self.left(), other.left());
        let right = f32::max(self.right(), other.right());
        let bottom = f32::min(self.bottom(), other.bottom());
        let top = f32::max(self.top(), other.top());
        Rect::new(left, bottom, right - left, top - bottom)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            self._safe_randf32(rng, self.left(), self.right()),
            self._safe_randf32(rng, self.bottom(), self.top()),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

/// A polygon given by its vertices, implicitly closed (last to first).
/// Fewer than three vertices describes an empty region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }
}

/// A ray with an origin, a direction vector, and a maximum parametric
/// length: the segment `origin + t * direction` for `t` in `[0, max_length]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point,
    pub direction: Point,
    pub max_length: f32,
}

impl Ray {
    pub fn new(origin: Point, direction: Point, max_length: f32) -> Self {
        Self {
            origin,
            direction,
            max_length,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction.x == 0.0 && self.direction.y == 0.0
    }

    pub fn point_at(&self, t: f32) -> Point {
        Point::new(
            self.origin.x + t * self.direction.x,
            self.origin.y + t * self.direction.y,
        )
    }
}

/// A circular sector: the set of points within `radius` of `center`
/// whose angle lies in the counter-clockwise interval from `start_angle`
/// to `end_angle` (radians from the +x axis, interpreted modulo 2 pi).
/// A sweep of 2 pi or more covers the whole disk.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: Point,
    pub start_angle: f32,
    pub end_angle: f32,
    pub radius: f32,
}

impl Sector {
    pub fn new(center: Point, start_angle: f32, end_angle: f32, radius: f32) -> Self {
        Self {
            center,
            start_angle,
            end_angle,
            radius,
        }
    }

    pub fn is_full_disk(&self) -> bool {
        self.end_angle - self.start_angle >= std::f32::consts::TAU
    }

    /// Endpoint of the bounding radius at `angle`.
    pub fn radius_endpoint(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}
