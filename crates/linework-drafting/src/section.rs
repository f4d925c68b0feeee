//! Section cutter: derives a finite cutting prism from an infinite
//! plane and a shape's bounding box, then subtracts it.
//!
//! The prism is sized from the box corners so it always fully encloses
//! and fully traverses the part, and the source shape is duplicated
//! before the boolean so callers can share shapes freely.

use linework_kernel::{Kernel, PlaneFrame};
use linework_math::{Point3, Tolerance, Vec3};

use crate::error::SectionError;

/// Minimum enlargement of the bounding box before sizing the prism,
/// so geometry tangent to the box boundary is still enclosed.
const MIN_PRISM_MARGIN: f64 = 1.0;

/// One section cut: plane position, orientation, and the geometric
/// tolerance of the operation. Built per execution and consumed by
/// [`cut_with_plane`].
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRequest {
    /// A point on the cutting plane.
    pub plane_origin: Point3,
    /// Plane normal; material on this side of the plane is removed.
    pub plane_normal: Vec3,
    /// Geometric tolerance in model units.
    pub tolerance: f64,
}

impl SectionRequest {
    /// Create a section request.
    pub fn new(plane_origin: Point3, plane_normal: Vec3, tolerance: f64) -> Self {
        Self {
            plane_origin,
            plane_normal,
            tolerance,
        }
    }
}

/// Cut `shape` with the plane described by `request`, removing the
/// material on the normal side.
///
/// The caller's shape is never mutated: the cut runs on a kernel
/// duplicate. Fails with [`SectionError::PlaneMisses`] before any
/// boolean work when the plane does not pass through the part's
/// bounding box.
pub fn cut_with_plane<K: Kernel>(
    kernel: &K,
    shape: &K::Shape,
    request: &SectionRequest,
) -> Result<K::Shape, SectionError> {
    let eps = request.tolerance.max(Tolerance::DEFAULT.linear);

    if kernel.is_empty(shape) {
        return Err(SectionError::EmptyGeometry);
    }
    let mut bbox = kernel.bounding_box(shape);
    if bbox.is_degenerate(eps) {
        return Err(SectionError::EmptyGeometry);
    }

    let frame = PlaneFrame::from_normal(request.plane_origin, request.plane_normal);

    // The plane intersects the box only when corner distances straddle
    // zero; a tangent plane counts as a miss.
    let mut has_positive = false;
    let mut has_negative = false;
    for corner in bbox.corners() {
        let d = frame.signed_distance(&corner);
        has_positive |= d > eps;
        has_negative |= d < -eps;
    }
    if !(has_positive && has_negative) {
        return Err(SectionError::PlaneMisses);
    }

    bbox.expand(MIN_PRISM_MARGIN.max(request.tolerance));

    // Size the prism from the enlarged corners: in-plane half-widths
    // from the projected extents, depth from the farthest corner on
    // the removal side.
    let mut u_max: f64 = 0.0;
    let mut v_max: f64 = 0.0;
    let mut w_max: f64 = 0.0;
    for corner in bbox.corners() {
        let uv = frame.project(&corner);
        u_max = u_max.max(uv.x.abs());
        v_max = v_max.max(uv.y.abs());
        w_max = w_max.max(frame.signed_distance(&corner));
    }

    let corners = [
        frame.evaluate(u_max, v_max),
        frame.evaluate(u_max, -v_max),
        frame.evaluate(-u_max, -v_max),
        frame.evaluate(-u_max, v_max),
    ];
    let face = kernel.make_planar_face(corners).ok_or_else(|| {
        SectionError::FaceConstructionFailed("cutting polygon is degenerate".to_string())
    })?;
    let prism = kernel.extrude(face, w_max * frame.normal.as_ref());

    let working = kernel.duplicate(shape);
    kernel
        .cut(&working, &prism)
        .ok_or_else(|| SectionError::CutFailed("boolean subtraction did not complete".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linework_kernel::testkit::{FixtureKernel, FixtureShape};

    fn cube(size: f64) -> FixtureShape {
        FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(size, size, size),
        }
    }

    #[test]
    fn test_cut_cube_result_contained_in_enlarged_box() {
        let kernel = FixtureKernel::new();
        let shape = cube(10.0);
        let request = SectionRequest::new(Point3::new(0.0, 0.0, 5.0), Vec3::z(), 1e-6);
        let result = cut_with_plane(&kernel, &shape, &request).unwrap();

        let mut enlarged = kernel.bounding_box(&shape);
        enlarged.expand(MIN_PRISM_MARGIN);
        let result_box = kernel.bounding_box(&result);
        assert!(enlarged.strictly_contains(&result_box));
        // Material above the plane is gone.
        assert!((result_box.max.z - 5.0).abs() < 1e-9);
        assert!(result_box.volume() < kernel.bounding_box(&shape).volume());
    }

    #[test]
    fn test_plane_missing_sphere_never_cuts() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Sphere {
            center: Point3::origin(),
            radius: 5.0,
        };
        let request = SectionRequest::new(Point3::new(0.0, 0.0, 20.0), Vec3::z(), 1e-6);
        let err = cut_with_plane(&kernel, &shape, &request).unwrap_err();
        assert_eq!(err, SectionError::PlaneMisses);
        assert_eq!(kernel.cut_calls.get(), 0);
    }

    #[test]
    fn test_tangent_plane_counts_as_miss() {
        let kernel = FixtureKernel::new();
        let shape = cube(10.0);
        let request = SectionRequest::new(Point3::new(0.0, 0.0, 10.0), Vec3::z(), 1e-6);
        let err = cut_with_plane(&kernel, &shape, &request).unwrap_err();
        assert_eq!(err, SectionError::PlaneMisses);
        assert_eq!(kernel.cut_calls.get(), 0);
    }

    #[test]
    fn test_empty_shape_rejected() {
        let kernel = FixtureKernel::new();
        let request = SectionRequest::new(Point3::origin(), Vec3::z(), 1e-6);
        let err = cut_with_plane(&kernel, &FixtureShape::Empty, &request).unwrap_err();
        assert_eq!(err, SectionError::EmptyGeometry);
    }

    #[test]
    fn test_degenerate_box_rejected() {
        let kernel = FixtureKernel::new();
        let slab = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 10.0, 0.0),
        };
        let request = SectionRequest::new(Point3::new(0.0, 0.0, 0.0), Vec3::z(), 1e-6);
        let err = cut_with_plane(&kernel, &slab, &request).unwrap_err();
        assert_eq!(err, SectionError::EmptyGeometry);
    }

    #[test]
    fn test_cylinder_through_axis_halves_volume() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Cylinder {
            radius: 5.0,
            height: 20.0,
        };
        let request = SectionRequest::new(Point3::origin(), Vec3::y(), 1e-6);
        let result = cut_with_plane(&kernel, &shape, &request).unwrap();

        let original = kernel.bounding_box(&shape);
        let cut = kernel.bounding_box(&result);
        assert!(cut.volume() < original.volume());
        // Material on the +Y side was removed.
        assert!(cut.max.y.abs() < 1e-9);
    }

    #[test]
    fn test_unhandled_boolean_reports_cut_failed() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Cylinder {
            radius: 5.0,
            height: 20.0,
        };
        // Intersecting plane, but not through the axis: the fixture
        // kernel cannot complete this boolean.
        let request = SectionRequest::new(Point3::new(0.0, 2.0, 0.0), Vec3::y(), 1e-6);
        let err = cut_with_plane(&kernel, &shape, &request).unwrap_err();
        assert!(matches!(err, SectionError::CutFailed(_)));
        assert_eq!(kernel.cut_calls.get(), 1);
    }
}
