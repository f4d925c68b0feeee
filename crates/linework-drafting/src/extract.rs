//! Projection extractor: drives the kernel's hidden-line
//! classification and converts its output into the drawing model.
//!
//! Per-edge curve data is dispatched into [`CurvePrimitive`] variants,
//! visible and hidden pieces of the same source edge are merged into
//! one referenceable [`EdgePrimitive`], and the reference table is
//! populated in lockstep with the geometry arrays.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use linework_kernel::{ExtractionPass, Kernel, ProjectedCurve, Visibility};
use linework_math::{Dir3, Point2, Tolerance};

use crate::error::ExtractionError;
use crate::types::{
    BSplineSegment, CurvePrimitive, EdgePrimitive, FaceGeom, GeometryExtractionResult, Point2D,
    Vertex2D,
};

/// Cooperative cancellation flag, checked between per-edge iterations.
///
/// Cloning shares the flag, so a caller can keep one end and hand the
/// other to [`extract_projection`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Whether the hidden edge channel is produced.
    pub pass: ExtractionPass,
    /// Whether per-face wire chains are extracted.
    pub with_faces: bool,
    /// Optional cooperative cancellation.
    pub cancel: Option<CancelToken>,
}

impl ExtractOptions {
    /// Visible and hidden channels, no faces.
    pub fn with_hidden() -> Self {
        Self {
            pass: ExtractionPass::WithHidden,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Emission-time frame conversion
// ---------------------------------------------------------------------------
//
// The kernel reports view-plane coordinates in the mathematical frame
// (Y up, angles counter-clockwise). Drawing output uses the screen
// frame (Y down). The flip happens here and nowhere else, identically
// for every curve type, so arcs and ellipses mirror consistently.

fn flip_point(p: Point2) -> Point2D {
    Point2D::new(p.x, -p.y)
}

/// Mirroring Y reverses angular direction; swapping the endpoints
/// keeps the emitted domain counter-clockwise with `start < end`.
fn flip_arc(first: f64, last: f64) -> (f64, f64) {
    (-last, -first)
}

struct DroppedCurve {
    kind: &'static str,
    detail: String,
}

fn finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn convert_curve(curve: &ProjectedCurve, tolerance: f64) -> Result<CurvePrimitive, DroppedCurve> {
    let tol = tolerance.max(Tolerance::DEFAULT.linear);
    match curve {
        ProjectedCurve::Segment { start, end } => {
            if !finite(start) || !finite(end) || (end - start).norm() <= tol {
                return Err(DroppedCurve {
                    kind: "segment",
                    detail: "degenerate segment".to_string(),
                });
            }
            Ok(CurvePrimitive::Line {
                p0: flip_point(*start),
                p1: flip_point(*end),
            })
        }
        ProjectedCurve::Circle { center, radius } => {
            if !finite(center) || !radius.is_finite() || *radius <= tol {
                return Err(DroppedCurve {
                    kind: "circle",
                    detail: format!("degenerate radius {radius}"),
                });
            }
            Ok(CurvePrimitive::Circle {
                center: flip_point(*center),
                radius: *radius,
            })
        }
        ProjectedCurve::CircularArc {
            center,
            radius,
            first,
            last,
        } => {
            if !finite(center) || *radius <= tol || !(last > first) || last - first > TAU + 1e-9 {
                return Err(DroppedCurve {
                    kind: "arc-of-circle",
                    detail: format!("degenerate arc: r={radius}, domain [{first}, {last}]"),
                });
            }
            let (start_angle, end_angle) = flip_arc(*first, *last);
            Ok(CurvePrimitive::ArcOfCircle {
                center: flip_point(*center),
                radius: *radius,
                start_angle,
                end_angle,
            })
        }
        ProjectedCurve::Ellipse {
            center,
            major,
            minor,
            rotation,
        } => {
            if !finite(center) || *minor <= tol || major < minor {
                return Err(DroppedCurve {
                    kind: "ellipse",
                    detail: format!("degenerate radii {major}/{minor}"),
                });
            }
            Ok(CurvePrimitive::Ellipse {
                center: flip_point(*center),
                major_radius: *major,
                minor_radius: *minor,
                rotation: -rotation,
            })
        }
        ProjectedCurve::EllipticalArc {
            center,
            major,
            minor,
            rotation,
            first,
            last,
        } => {
            if !finite(center)
                || *minor <= tol
                || major < minor
                || !(last > first)
                || last - first > TAU + 1e-9
            {
                return Err(DroppedCurve {
                    kind: "arc-of-ellipse",
                    detail: format!(
                        "degenerate arc: radii {major}/{minor}, domain [{first}, {last}]"
                    ),
                });
            }
            let (start_angle, end_angle) = flip_arc(*first, *last);
            Ok(CurvePrimitive::ArcOfEllipse {
                center: flip_point(*center),
                major_radius: *major,
                minor_radius: *minor,
                rotation: -rotation,
                start_angle,
                end_angle,
            })
        }
        ProjectedCurve::BSpline { segments } => {
            if segments.is_empty() {
                return Err(DroppedCurve {
                    kind: "bspline",
                    detail: "no bezier segments".to_string(),
                });
            }
            let mut converted = Vec::with_capacity(segments.len());
            for segment in segments {
                if segment.poles.iter().any(|p| !finite(p)) {
                    return Err(DroppedCurve {
                        kind: "bspline",
                        detail: "non-finite pole".to_string(),
                    });
                }
                let poles: Vec<Point2D> = match segment.poles.len() {
                    // Degree-one span: elevate to a quadratic so the
                    // emitted chain stays within 3/4-pole segments.
                    2 => {
                        let p0 = segment.poles[0];
                        let p1 = segment.poles[1];
                        let mid = Point2::new((p0.x + p1.x) / 2.0, (p0.y + p1.y) / 2.0);
                        vec![flip_point(p0), flip_point(mid), flip_point(p1)]
                    }
                    3 | 4 => segment.poles.iter().copied().map(flip_point).collect(),
                    n => {
                        return Err(DroppedCurve {
                            kind: "bspline",
                            detail: format!("unsupported bezier span with {n} poles"),
                        });
                    }
                };
                converted.push(BSplineSegment { poles });
            }
            Ok(CurvePrimitive::BSplineApprox {
                segments: converted,
            })
        }
        ProjectedCurve::Polyline { points } => {
            if points.len() < 2 || points.iter().any(|p| !finite(p)) {
                return Err(DroppedCurve {
                    kind: "polyline",
                    detail: format!("{} usable points", points.len()),
                });
            }
            Ok(CurvePrimitive::GenericPolyline {
                points: points.iter().copied().map(flip_point).collect(),
            })
        }
        ProjectedCurve::Other { kind } => Err(DroppedCurve {
            kind: "unsupported",
            detail: format!("kernel curve type {kind:?}"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the 2D drawing geometry of `shape` projected along
/// `direction`.
///
/// A kernel classification failure aborts with
/// [`ExtractionError::ExtractionFailed`] and no partial geometry;
/// individual degenerate or unsupported curve segments are logged and
/// skipped so partial results stay usable.
pub fn extract_projection<K: Kernel>(
    kernel: &K,
    shape: &K::Shape,
    direction: Dir3,
    tolerance: f64,
    options: &ExtractOptions,
) -> Result<GeometryExtractionResult, ExtractionError> {
    let hlr = kernel
        .classify(shape, direction, tolerance, options.pass)
        .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?;

    let mut result = GeometryExtractionResult::default();
    // Source edge index -> emitted primitive slot, for channel merging.
    let mut by_source: HashMap<i32, usize> = HashMap::new();
    let mut dropped = 0usize;

    for hlr_edge in &hlr.edges {
        if let Some(token) = &options.cancel {
            if token.is_cancelled() {
                return Err(ExtractionError::Cancelled);
            }
        }
        let primitive = match convert_curve(&hlr_edge.curve, tolerance) {
            Ok(p) => p,
            Err(drop) => {
                log::warn!(
                    "dropping {} for edge {}: {}",
                    drop.kind,
                    hlr_edge.source_index,
                    drop.detail
                );
                dropped += 1;
                continue;
            }
        };

        // Synthetic edges (source_index <= 0) never merge; selectable
        // edges merge into the slot created on first sight.
        let existing = if hlr_edge.source_index > 0 {
            by_source.get(&hlr_edge.source_index).copied()
        } else {
            None
        };
        match existing {
            Some(slot) => {
                let edge = &mut result.edge_geometry[slot];
                match hlr_edge.visibility {
                    Visibility::Visible => edge.visible.push(primitive),
                    Visibility::Hidden => edge.hidden.push(primitive),
                }
            }
            None => {
                let mut edge = EdgePrimitive::default();
                match hlr_edge.visibility {
                    Visibility::Visible => edge.visible.push(primitive),
                    Visibility::Hidden => edge.hidden.push(primitive),
                }
                let slot = result.edge_geometry.len();
                result.edge_geometry.push(edge);
                let len = result.edge_geometry.len();
                result
                    .references
                    .record_edge(slot, hlr_edge.source_index, len)
                    .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?;
                if hlr_edge.source_index > 0 {
                    by_source.insert(hlr_edge.source_index, slot);
                }
            }
        }
    }

    for hlr_vertex in &hlr.vertices {
        let slot = result.vertex_geometry.len();
        result.vertex_geometry.push(Vertex2D {
            point: flip_point(hlr_vertex.point),
            source_reference_index: hlr_vertex.source_index,
            visibility: hlr_vertex.visibility,
        });
        let len = result.vertex_geometry.len();
        result
            .references
            .record_vertex(slot, hlr_vertex.source_index, len)
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?;
    }

    if options.with_faces {
        for hlr_face in &hlr.faces {
            if let Some(token) = &options.cancel {
                if token.is_cancelled() {
                    return Err(ExtractionError::Cancelled);
                }
            }
            let mut wires = Vec::with_capacity(hlr_face.wires.len());
            for wire in &hlr_face.wires {
                let mut chain = Vec::with_capacity(wire.len());
                for curve in wire {
                    match convert_curve(curve, tolerance) {
                        Ok(p) => chain.push(p),
                        Err(drop) => {
                            log::warn!(
                                "dropping {} in face {} wire: {}",
                                drop.kind,
                                hlr_face.source_index,
                                drop.detail
                            );
                            dropped += 1;
                        }
                    }
                }
                if !chain.is_empty() {
                    wires.push(chain);
                }
            }
            let slot = result.face_geometry.len();
            result.face_geometry.push(FaceGeom {
                wires,
                visible: hlr_face.visible,
            });
            let len = result.face_geometry.len();
            result
                .references
                .record_face(slot, hlr_face.source_index, len)
                .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?;
        }
    }

    log::debug!(
        "extraction pass: {} edges, {} vertices, {} faces, {} dropped segments",
        result.edge_geometry.len(),
        result.vertex_geometry.len(),
        result.face_geometry.len(),
        dropped
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linework_kernel::testkit::{FixtureKernel, FixtureShape};
    use linework_kernel::{BezierSegment, HlrEdge, HlrOutput, HlrVertex};
    use linework_math::{Point3, Vec3};

    fn dir(x: f64, y: f64, z: f64) -> Dir3 {
        Dir3::new_normalize(Vec3::new(x, y, z))
    }

    fn canned(edges: Vec<HlrEdge>, vertices: Vec<HlrVertex>) -> FixtureShape {
        let edge_count = edges
            .iter()
            .map(|e| e.source_index.max(0) as usize)
            .max()
            .unwrap_or(0);
        let vertex_count = vertices
            .iter()
            .map(|v| v.source_index.max(0) as usize)
            .max()
            .unwrap_or(0);
        FixtureShape::Canned {
            output: HlrOutput {
                edges,
                vertices,
                faces: Vec::new(),
            },
            edges: edge_count,
            vertices: vertex_count,
        }
    }

    fn visible_edge(source_index: i32, curve: ProjectedCurve) -> HlrEdge {
        HlrEdge {
            source_index,
            visibility: Visibility::Visible,
            curve,
        }
    }

    #[test]
    fn test_conversion_applies_frame_flip_uniformly() {
        let kernel = FixtureKernel::new();
        let shape = canned(
            vec![
                visible_edge(
                    1,
                    ProjectedCurve::Segment {
                        start: Point2::new(1.0, 2.0),
                        end: Point2::new(3.0, 4.0),
                    },
                ),
                visible_edge(
                    2,
                    ProjectedCurve::CircularArc {
                        center: Point2::new(0.0, 1.0),
                        radius: 2.0,
                        first: 0.0,
                        last: std::f64::consts::FRAC_PI_2,
                    },
                ),
                visible_edge(
                    3,
                    ProjectedCurve::Ellipse {
                        center: Point2::new(5.0, 5.0),
                        major: 4.0,
                        minor: 2.0,
                        rotation: 0.3,
                    },
                ),
            ],
            vec![HlrVertex {
                source_index: 1,
                visibility: Visibility::Visible,
                point: Point2::new(2.0, 3.0),
            }],
        );
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();

        assert_eq!(result.edge_geometry.len(), 3);
        match &result.edge_geometry[0].visible[0] {
            CurvePrimitive::Line { p0, p1 } => {
                assert_relative_eq!(p0.y, -2.0);
                assert_relative_eq!(p1.y, -4.0);
            }
            other => panic!("expected line, got {}", other.kind_name()),
        }
        match &result.edge_geometry[1].visible[0] {
            CurvePrimitive::ArcOfCircle {
                center,
                start_angle,
                end_angle,
                ..
            } => {
                assert_relative_eq!(center.y, -1.0);
                // Mirrored and swapped: [0, π/2] -> [-π/2, 0]
                assert_relative_eq!(*start_angle, -std::f64::consts::FRAC_PI_2);
                assert_relative_eq!(*end_angle, 0.0);
                assert!(end_angle > start_angle);
            }
            other => panic!("expected arc, got {}", other.kind_name()),
        }
        match &result.edge_geometry[2].visible[0] {
            CurvePrimitive::Ellipse { rotation, .. } => {
                assert_relative_eq!(*rotation, -0.3);
            }
            other => panic!("expected ellipse, got {}", other.kind_name()),
        }
        assert_relative_eq!(result.vertex_geometry[0].point.y, -3.0);
    }

    #[test]
    fn test_unsupported_curve_dropped_not_fatal() {
        let kernel = FixtureKernel::new();
        let shape = canned(
            vec![
                visible_edge(
                    1,
                    ProjectedCurve::Other {
                        kind: "hyperbola".to_string(),
                    },
                ),
                visible_edge(
                    2,
                    ProjectedCurve::Segment {
                        start: Point2::new(0.0, 0.0),
                        end: Point2::new(1.0, 0.0),
                    },
                ),
            ],
            Vec::new(),
        );
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();
        assert_eq!(result.edge_geometry.len(), 1);
        assert_eq!(result.references.edge_refs(), &[2]);
    }

    #[test]
    fn test_visible_and_hidden_pieces_merge_into_one_edge() {
        use std::f64::consts::PI;
        let kernel = FixtureKernel::new();
        let center = Point2::new(0.0, 0.0);
        let shape = canned(
            vec![
                HlrEdge {
                    source_index: 5,
                    visibility: Visibility::Visible,
                    curve: ProjectedCurve::CircularArc {
                        center,
                        radius: 3.0,
                        first: 0.0,
                        last: PI,
                    },
                },
                HlrEdge {
                    source_index: 5,
                    visibility: Visibility::Hidden,
                    curve: ProjectedCurve::CircularArc {
                        center,
                        radius: 3.0,
                        first: PI,
                        last: TAU,
                    },
                },
            ],
            Vec::new(),
        );
        let options = ExtractOptions::with_hidden();
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &options).unwrap();

        assert_eq!(result.edge_geometry.len(), 1);
        let edge = &result.edge_geometry[0];
        assert_eq!(edge.visible.len(), 1);
        assert_eq!(edge.hidden.len(), 1);
        assert_eq!(edge.classification(), Visibility::Visible);
        assert_eq!(result.references.lookup_edge(0), Some(5));
        assert_eq!(result.references.edge_name(0).as_deref(), Some("Edge5"));

        // Partition completeness: both channels together cover the
        // full circle domain.
        let covered: f64 = edge
            .all_pieces()
            .filter_map(|p| p.angular_span())
            .sum();
        assert_relative_eq!(covered, TAU, epsilon = 1e-9);
    }

    #[test]
    fn test_synthetic_edges_never_merge() {
        let kernel = FixtureKernel::new();
        let shape = canned(
            vec![
                visible_edge(
                    0,
                    ProjectedCurve::Segment {
                        start: Point2::new(0.0, 0.0),
                        end: Point2::new(0.0, 5.0),
                    },
                ),
                visible_edge(
                    0,
                    ProjectedCurve::Segment {
                        start: Point2::new(4.0, 0.0),
                        end: Point2::new(4.0, 5.0),
                    },
                ),
            ],
            Vec::new(),
        );
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();
        assert_eq!(result.edge_geometry.len(), 2);
        assert_eq!(result.references.edge_refs(), &[0, 0]);
        assert_eq!(result.references.edge_name(0), None);
        assert_eq!(result.references.edge_name(1), None);
    }

    #[test]
    fn test_bspline_pole_handling() {
        let kernel = FixtureKernel::new();
        let shape = canned(
            vec![
                visible_edge(
                    1,
                    ProjectedCurve::BSpline {
                        segments: vec![
                            BezierSegment {
                                poles: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)],
                            },
                            BezierSegment {
                                poles: vec![
                                    Point2::new(1.0, 1.0),
                                    Point2::new(2.0, 2.0),
                                    Point2::new(3.0, 1.0),
                                    Point2::new(4.0, 0.0),
                                ],
                            },
                        ],
                    },
                ),
                visible_edge(
                    2,
                    ProjectedCurve::BSpline {
                        segments: vec![BezierSegment {
                            poles: vec![
                                Point2::new(0.0, 0.0),
                                Point2::new(1.0, 0.0),
                                Point2::new(2.0, 0.0),
                                Point2::new(3.0, 0.0),
                                Point2::new(4.0, 0.0),
                            ],
                        }],
                    },
                ),
            ],
            Vec::new(),
        );
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();
        // The quintic span is unsupported and drops its whole curve.
        assert_eq!(result.edge_geometry.len(), 1);
        match &result.edge_geometry[0].visible[0] {
            CurvePrimitive::BSplineApprox { segments } => {
                assert_eq!(segments.len(), 2);
                // Degree-one span elevated to 3 poles.
                assert_eq!(segments[0].pole_count(), 3);
                assert_eq!(segments[1].pole_count(), 4);
            }
            other => panic!("expected bspline, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_cube_axis_projection_scenario() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 10.0, 10.0),
        };
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();

        let visible: Vec<_> = result
            .edge_geometry
            .iter()
            .filter(|e| e.classification() == Visibility::Visible)
            .collect();
        assert!(visible.len() <= 6, "got {} visible edges", visible.len());
        assert!(visible
            .iter()
            .all(|e| matches!(e.visible[0], CurvePrimitive::Line { .. })));
        assert_eq!(result.vertex_geometry.len(), 8);
        assert!(result.references.edge_refs().iter().all(|&r| r > 0));
        assert!(result.references.vertex_refs().iter().all(|&r| r > 0));
    }

    #[test]
    fn test_round_trip_references_resolve() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 10.0, 10.0),
        };
        let result =
            extract_projection(&kernel, &shape, dir(1.0, 1.0, -1.0), 1e-6, &Default::default())
                .unwrap();
        let edge_count = kernel.edge_count(&shape) as i32;
        let vertex_count = kernel.vertex_count(&shape) as i32;
        for (slot, &reference) in result.references.edge_refs().iter().enumerate() {
            if reference > 0 {
                assert!(reference <= edge_count);
                assert_eq!(result.references.lookup_edge(slot), Some(reference));
            }
        }
        for &reference in result.references.vertex_refs() {
            if reference > 0 {
                assert!(reference <= vertex_count);
            }
        }
        // Alignment invariant: one reference per primitive.
        assert_eq!(
            result.references.edge_refs().len(),
            result.edge_geometry.len()
        );
        assert_eq!(
            result.references.vertex_refs().len(),
            result.vertex_geometry.len()
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 5.0, 3.0),
        };
        let options = ExtractOptions::with_hidden();
        let a = extract_projection(&kernel, &shape, dir(1.0, 1.0, -1.0), 1e-6, &options).unwrap();
        let b = extract_projection(&kernel, &shape, dir(1.0, 1.0, -1.0), 1e-6, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_shape_fails_without_partial_output() {
        let kernel = FixtureKernel::new();
        let err = extract_projection(
            &kernel,
            &FixtureShape::Malformed,
            dir(0.0, 0.0, -1.0),
            1e-6,
            &Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_cancellation() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 10.0, 10.0),
        };
        let token = CancelToken::new();
        token.cancel();
        let options = ExtractOptions {
            cancel: Some(token),
            ..Default::default()
        };
        let err =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &options).unwrap_err();
        assert_eq!(err, ExtractionError::Cancelled);
    }

    #[test]
    fn test_face_extraction() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Box {
            min: Point3::origin(),
            max: Point3::new(10.0, 10.0, 10.0),
        };
        let options = ExtractOptions {
            with_faces: true,
            ..Default::default()
        };
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &options).unwrap();
        assert!(!result.face_geometry.is_empty());
        assert_eq!(
            result.references.face_refs().len(),
            result.face_geometry.len()
        );
        // Looking down the Z axis, the top face is in front.
        assert!(result.face_geometry.iter().any(|f| f.visible));
        for face in &result.face_geometry {
            for wire in &face.wires {
                assert!(!wire.is_empty());
            }
        }
    }

    #[test]
    fn test_synthetic_sphere_outline_rendered_not_selectable() {
        let kernel = FixtureKernel::new();
        let shape = FixtureShape::Sphere {
            center: Point3::origin(),
            radius: 5.0,
        };
        let result =
            extract_projection(&kernel, &shape, dir(0.0, 0.0, -1.0), 1e-6, &Default::default())
                .unwrap();
        assert_eq!(result.edge_geometry.len(), 1);
        assert!(matches!(
            result.edge_geometry[0].visible[0],
            CurvePrimitive::Circle { radius, .. } if (radius - 5.0).abs() < 1e-12
        ));
        assert_eq!(result.references.lookup_edge(0), Some(0));
        assert_eq!(result.references.edge_name(0), None);
    }
}
