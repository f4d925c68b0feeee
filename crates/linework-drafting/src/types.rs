//! The 2D curve primitive model emitted by the projection extractor.
//!
//! Everything here is renderable without consulting 3D data again:
//! coordinates are in the drawing frame, angles are radians and
//! counter-clockwise positive. The mathematical-to-drawing sign flip
//! happens once, inside the extractor, before these are built.

use linework_math::Point2;
use serde::{Deserialize, Serialize};

pub use linework_kernel::{ExtractionPass, Visibility};

/// A 2D point in drawing coordinates.
///
/// A custom type rather than `nalgebra::Point2` so the drawing output
/// serializes without nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// One Bezier span of an approximated B-spline: 3 poles for a
/// quadratic span, 4 for a cubic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BSplineSegment {
    /// Control points in drawing coordinates.
    pub poles: Vec<Point2D>,
}

impl BSplineSegment {
    /// Number of control points.
    pub fn pole_count(&self) -> usize {
        self.poles.len()
    }
}

/// A renderable 2D curve.
///
/// Arc angles run `start_angle < end_angle`, counter-clockwise in the
/// drawing frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurvePrimitive {
    /// Straight segment.
    Line {
        /// Start point.
        p0: Point2D,
        /// End point.
        p1: Point2D,
    },
    /// Full circle.
    Circle {
        /// Center point.
        center: Point2D,
        /// Radius.
        radius: f64,
    },
    /// Circular arc.
    ArcOfCircle {
        /// Center point.
        center: Point2D,
        /// Radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// Full ellipse.
    Ellipse {
        /// Center point.
        center: Point2D,
        /// Semi-major radius.
        major_radius: f64,
        /// Semi-minor radius.
        minor_radius: f64,
        /// Rotation of the major axis in radians.
        rotation: f64,
    },
    /// Elliptical arc.
    ArcOfEllipse {
        /// Center point.
        center: Point2D,
        /// Semi-major radius.
        major_radius: f64,
        /// Semi-minor radius.
        minor_radius: f64,
        /// Rotation of the major axis in radians.
        rotation: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// Chain of Bezier spans approximating a B-spline.
    BSplineApprox {
        /// Spans in parameter order.
        segments: Vec<BSplineSegment>,
    },
    /// Polyline fallback for curves with no analytic 2D form.
    GenericPolyline {
        /// Ordered points.
        points: Vec<Point2D>,
    },
}

impl CurvePrimitive {
    /// Short type name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CurvePrimitive::Line { .. } => "line",
            CurvePrimitive::Circle { .. } => "circle",
            CurvePrimitive::ArcOfCircle { .. } => "arc-of-circle",
            CurvePrimitive::Ellipse { .. } => "ellipse",
            CurvePrimitive::ArcOfEllipse { .. } => "arc-of-ellipse",
            CurvePrimitive::BSplineApprox { .. } => "bspline",
            CurvePrimitive::GenericPolyline { .. } => "polyline",
        }
    }

    /// Angular span for circular geometry: `2π` for a full circle,
    /// `end - start` for an arc, `None` otherwise. Used to check that
    /// visibility channels cover a whole edge.
    pub fn angular_span(&self) -> Option<f64> {
        match self {
            CurvePrimitive::Circle { .. } | CurvePrimitive::Ellipse { .. } => {
                Some(std::f64::consts::TAU)
            }
            CurvePrimitive::ArcOfCircle {
                start_angle,
                end_angle,
                ..
            }
            | CurvePrimitive::ArcOfEllipse {
                start_angle,
                end_angle,
                ..
            } => Some(end_angle - start_angle),
            _ => None,
        }
    }
}

/// One referenceable drawing edge: every projected piece of a single
/// source edge, split into visibility channels.
///
/// When an edge is partly visible and partly hidden, both channels are
/// populated so a consumer can render it solid-then-dashed without
/// re-deriving adjacency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgePrimitive {
    /// Visible channel.
    pub visible: Vec<CurvePrimitive>,
    /// Hidden channel. Empty in a `VisibleOnly` pass.
    pub hidden: Vec<CurvePrimitive>,
}

impl EdgePrimitive {
    /// Overall classification: visible when any visible piece exists.
    pub fn classification(&self) -> Visibility {
        if self.visible.is_empty() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// All pieces of both channels, visible first.
    pub fn all_pieces(&self) -> impl Iterator<Item = &CurvePrimitive> {
        self.visible.iter().chain(self.hidden.iter())
    }
}

/// A projected vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex2D {
    /// Position in drawing coordinates.
    pub point: Point2D,
    /// 1-based source vertex index; `<= 0` marks a synthetic point with
    /// no selectable topology counterpart.
    pub source_reference_index: i32,
    /// Visibility of the point.
    pub visibility: Visibility,
}

impl Vertex2D {
    /// True when the point maps back to selectable topology.
    pub fn is_selectable(&self) -> bool {
        self.source_reference_index > 0
    }
}

/// Wire chains of one projected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceGeom {
    /// Closed wire chains, outer loop first.
    pub wires: Vec<Vec<CurvePrimitive>>,
    /// False when the face lies entirely behind nearer surfaces.
    pub visible: bool,
}

/// Complete output of one extraction pass.
///
/// Owned exclusively by the view facade and rebuilt wholesale on every
/// recomputation; reference arrays inside [`crate::ReferenceTable`]
/// stay positionally aligned with the geometry arrays here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryExtractionResult {
    /// Drawing edges, aligned with the table's edge references.
    pub edge_geometry: Vec<EdgePrimitive>,
    /// Drawing vertices, aligned with the table's vertex references.
    pub vertex_geometry: Vec<Vertex2D>,
    /// Face wire chains, aligned with the table's face references.
    /// Empty when face extraction is disabled.
    pub face_geometry: Vec<FaceGeom>,
    /// Source entity references for all three geometry arrays.
    pub references: crate::refs::ReferenceTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_classification() {
        let mut edge = EdgePrimitive::default();
        edge.hidden.push(CurvePrimitive::Line {
            p0: Point2D::new(0.0, 0.0),
            p1: Point2D::new(1.0, 0.0),
        });
        assert_eq!(edge.classification(), Visibility::Hidden);
        edge.visible.push(CurvePrimitive::Line {
            p0: Point2D::new(1.0, 0.0),
            p1: Point2D::new(2.0, 0.0),
        });
        assert_eq!(edge.classification(), Visibility::Visible);
        assert_eq!(edge.all_pieces().count(), 2);
    }

    #[test]
    fn test_angular_span() {
        let arc = CurvePrimitive::ArcOfCircle {
            center: Point2D::new(0.0, 0.0),
            radius: 2.0,
            start_angle: 0.5,
            end_angle: 2.0,
        };
        assert!((arc.angular_span().unwrap() - 1.5).abs() < 1e-12);
        let line = CurvePrimitive::Line {
            p0: Point2D::new(0.0, 0.0),
            p1: Point2D::new(1.0, 1.0),
        };
        assert!(line.angular_span().is_none());
    }

    #[test]
    fn test_vertex_selectable() {
        let v = Vertex2D {
            point: Point2D::new(1.0, 1.0),
            source_reference_index: 3,
            visibility: Visibility::Visible,
        };
        assert!(v.is_selectable());
        let synthetic = Vertex2D {
            source_reference_index: 0,
            ..v
        };
        assert!(!synthetic.is_selectable());
    }
}
