//! Hidden-line classification output: the kernel's projected,
//! visibility-partitioned view of a shape.
//!
//! The kernel's own curve taxonomy is mapped into [`ProjectedCurve`]
//! once, here at the boundary; no kernel type identifiers or dynamic
//! downcasts propagate into the drawing engine.

use linework_math::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility of a projected entity relative to the viewing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Not occluded by any face along the viewing direction.
    Visible,
    /// Occluded by at least one face.
    Hidden,
}

/// Which visibility channels one extraction pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtractionPass {
    /// Visible edge channel only.
    #[default]
    VisibleOnly,
    /// Visible and hidden edge channels.
    WithHidden,
}

/// One span of a projected B-spline, reported as a Bezier segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSegment {
    /// Control points in view-plane coordinates. Quadratic segments
    /// carry 3 poles, cubic segments 4.
    pub poles: Vec<Point2>,
}

/// A projected curve in view-plane coordinates, tagged by type.
///
/// Angles are radians, counter-clockwise positive in the mathematical
/// view frame (Y up). Arc domains run `first < last`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedCurve {
    /// Straight segment.
    Segment {
        /// Start point.
        start: Point2,
        /// End point.
        end: Point2,
    },
    /// Full circle.
    Circle {
        /// Center point.
        center: Point2,
        /// Radius.
        radius: f64,
    },
    /// Circular arc from `first` to `last`, counter-clockwise.
    CircularArc {
        /// Center point.
        center: Point2,
        /// Radius.
        radius: f64,
        /// Start parameter angle.
        first: f64,
        /// End parameter angle.
        last: f64,
    },
    /// Full ellipse.
    Ellipse {
        /// Center point.
        center: Point2,
        /// Semi-major radius.
        major: f64,
        /// Semi-minor radius.
        minor: f64,
        /// Rotation of the major axis against the view X axis.
        rotation: f64,
    },
    /// Elliptical arc from `first` to `last`, counter-clockwise.
    EllipticalArc {
        /// Center point.
        center: Point2,
        /// Semi-major radius.
        major: f64,
        /// Semi-minor radius.
        minor: f64,
        /// Rotation of the major axis against the view X axis.
        rotation: f64,
        /// Start parameter angle.
        first: f64,
        /// End parameter angle.
        last: f64,
    },
    /// Projected B-spline, pre-split into Bezier segments.
    BSpline {
        /// The segment chain, in parameter order.
        segments: Vec<BezierSegment>,
    },
    /// Discretized fallback for curves with no analytic 2-D form.
    Polyline {
        /// Ordered sample points.
        points: Vec<Point2>,
    },
    /// A curve type the kernel could project but not name analytically.
    /// Downstream drops these with a diagnostic.
    Other {
        /// Kernel-side type name, for the diagnostic only.
        kind: String,
    },
}

/// One classified edge segment.
#[derive(Debug, Clone, PartialEq)]
pub struct HlrEdge {
    /// 1-based index of the originating edge in the source shape's
    /// enumeration. Zero or negative for synthetic outline edges that
    /// have no selectable counterpart.
    pub source_index: i32,
    /// Visibility of this segment.
    pub visibility: Visibility,
    /// Projected geometry.
    pub curve: ProjectedCurve,
}

/// One classified isolated vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct HlrVertex {
    /// 1-based index of the originating vertex; `<= 0` for synthetic points.
    pub source_index: i32,
    /// Visibility of the point.
    pub visibility: Visibility,
    /// Projected position.
    pub point: Point2,
}

/// Per-face loop data, when the kernel reports faces.
#[derive(Debug, Clone, PartialEq)]
pub struct HlrFace {
    /// 1-based index of the originating face.
    pub source_index: i32,
    /// False when the face lies entirely behind nearer surfaces.
    pub visible: bool,
    /// Closed wire chains bounding the face, outer loop first.
    pub wires: Vec<Vec<ProjectedCurve>>,
}

/// Complete classification result for one shape and direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HlrOutput {
    /// Classified edge segments.
    pub edges: Vec<HlrEdge>,
    /// Classified vertices.
    pub vertices: Vec<HlrVertex>,
    /// Per-face wire data; empty when the kernel skips face output.
    pub faces: Vec<HlrFace>,
}

/// Failure of the classification primitive itself.
///
/// Distinct from per-curve degeneracies, which are reported inline via
/// [`ProjectedCurve::Other`] and recoverable downstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HlrError {
    /// The shape's topology cannot be classified at all.
    #[error("hidden-line classification failed: {0}")]
    Malformed(String),
}
