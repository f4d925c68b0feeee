//! Oriented plane frame used for section planes and projection planes.

use linework_math::{Dir3, Point2, Point3, Vec3};

/// A plane with an orthonormal in-plane frame.
///
/// Parameterization: `P(u, v) = origin + u * x_dir + v * y_dir`, with
/// `normal = x_dir × y_dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFrame {
    /// Origin point on the plane.
    pub origin: Point3,
    /// Unit vector along the u direction.
    pub x_dir: Dir3,
    /// Unit vector along the v direction.
    pub y_dir: Dir3,
    /// Unit normal (x_dir × y_dir).
    pub normal: Dir3,
}

impl PlaneFrame {
    /// Create a plane from origin and two direction vectors.
    /// The vectors do not need to be normalized.
    pub fn new(origin: Point3, x_dir: Vec3, y_dir: Vec3) -> Self {
        let x = Dir3::new_normalize(x_dir);
        let y = Dir3::new_normalize(y_dir);
        let n = Dir3::new_normalize(x_dir.cross(&y_dir));
        Self {
            origin,
            x_dir: x,
            y_dir: y,
            normal: n,
        }
    }

    /// Create a plane from origin and normal. The in-plane axes are
    /// chosen deterministically but arbitrarily.
    pub fn from_normal(origin: Point3, normal: Vec3) -> Self {
        let n = Dir3::new_normalize(normal);
        // Pick an arbitrary vector not parallel to the normal
        let arbitrary = if n.as_ref().x.abs() < 0.9 {
            Vec3::x()
        } else {
            Vec3::y()
        };
        let x = Dir3::new_normalize(arbitrary.cross(n.as_ref()));
        let y = Dir3::new_normalize(n.as_ref().cross(x.as_ref()));
        Self {
            origin,
            x_dir: x,
            y_dir: y,
            normal: n,
        }
    }

    /// Project a 3D point into this plane's (u, v) parameter space.
    pub fn project(&self, p: &Point3) -> Point2 {
        let d = p - self.origin;
        Point2::new(d.dot(self.x_dir.as_ref()), d.dot(self.y_dir.as_ref()))
    }

    /// Evaluate the plane at (u, v).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + u * self.x_dir.as_ref() + v * self.y_dir.as_ref()
    }

    /// Signed distance from a point to this plane, positive on the
    /// normal side.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.origin).dot(self.normal.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_is_orthonormal() {
        let f = PlaneFrame::from_normal(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.3, -0.4, 0.8));
        assert_relative_eq!(f.x_dir.as_ref().dot(f.y_dir.as_ref()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.x_dir.as_ref().dot(f.normal.as_ref()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            f.x_dir.as_ref().cross(f.y_dir.as_ref()).dot(f.normal.as_ref()),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_project_round_trip() {
        let f = PlaneFrame::new(Point3::new(0.0, 0.0, 5.0), Vec3::x(), Vec3::y());
        let p = f.evaluate(3.0, -2.0);
        let uv = f.project(&p);
        assert_relative_eq!(uv.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(uv.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_distance() {
        let f = PlaneFrame::new(Point3::origin(), Vec3::x(), Vec3::y());
        assert_relative_eq!(f.signed_distance(&Point3::new(7.0, -3.0, 2.5)), 2.5);
        assert_relative_eq!(f.signed_distance(&Point3::new(0.0, 0.0, -4.0)), -4.0);
    }
}
