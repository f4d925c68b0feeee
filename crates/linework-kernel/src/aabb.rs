//! Axis-aligned bounding box of a source shape.
//!
//! Sizing the section cutter's prism only needs the box corners and a
//! few interval predicates, so the box is a plain min/max pair.

use linework_math::Point3;

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Expand the AABB by a margin in all directions.
    pub fn expand(&mut self, margin: f64) {
        self.min.x -= margin;
        self.min.y -= margin;
        self.min.z -= margin;
        self.max.x += margin;
        self.max.y += margin;
        self.max.z += margin;
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Aabb3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// True when this AABB contains the other, with every face strictly inside.
    pub fn strictly_contains(&self, other: &Aabb3) -> bool {
        self.min.x < other.min.x
            && self.min.y < other.min.y
            && self.min.z < other.min.z
            && self.max.x > other.max.x
            && self.max.y > other.max.y
            && self.max.z > other.max.z
    }

    /// Extents along x, y, z. Negative for an empty box.
    pub fn extents(&self) -> (f64, f64, f64) {
        (
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Enclosed volume; zero for degenerate or empty boxes.
    pub fn volume(&self) -> f64 {
        let (dx, dy, dz) = self.extents();
        if dx <= 0.0 || dy <= 0.0 || dz <= 0.0 {
            0.0
        } else {
            dx * dy * dz
        }
    }

    /// True when the box is empty or encloses no volume within `tol`.
    pub fn is_degenerate(&self, tol: f64) -> bool {
        let (dx, dy, dz) = self.extents();
        dx <= tol || dy <= tol || dz <= tol
    }

    /// The eight corner points, bottom face first, counter-clockwise
    /// when viewed from +Z.
    pub fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ]
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}
