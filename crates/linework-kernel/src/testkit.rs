//! Analytic fixture kernel for engine tests.
//!
//! Implements [`Kernel`](crate::Kernel) over a closed set of fixture
//! solids with honest projected output: box edges classified by
//! adjacent-face orientation, cylinders with silhouette outlines,
//! spheres as synthetic outline circles, and a half-cylinder produced
//! by cutting a cylinder with a through-axis prism. Coincident
//! projections are collapsed the way a real classifier merges outline
//! duplicates. A `Canned` fixture replays a prepared classification
//! verbatim for conversion-level tests.

use std::cell::Cell;
use std::f64::consts::TAU;

use linework_math::{Dir3, Point2, Point3, Vec3};

use crate::aabb::Aabb3;
use crate::hlr::{
    ExtractionPass, HlrEdge, HlrError, HlrFace, HlrOutput, HlrVertex, ProjectedCurve, Visibility,
};
use crate::kernel::Kernel;
use crate::plane::PlaneFrame;

/// Fixture solids understood by [`FixtureKernel`].
#[derive(Debug, Clone)]
pub enum FixtureShape {
    /// No geometry at all.
    Empty,
    /// Axis-aligned box.
    Box {
        /// Minimum corner.
        min: Point3,
        /// Maximum corner.
        max: Point3,
    },
    /// Cylinder, axis +Z, base circle centered at the origin.
    Cylinder {
        /// Radius.
        radius: f64,
        /// Height along +Z.
        height: f64,
    },
    /// Cylinder cut by a plane through its axis, one half kept.
    HalfCylinder {
        /// Radius.
        radius: f64,
        /// Height along +Z.
        height: f64,
        /// True when the y >= 0 half survives the cut.
        keep_pos_y: bool,
    },
    /// Sphere.
    Sphere {
        /// Center point.
        center: Point3,
        /// Radius.
        radius: f64,
    },
    /// Extruded quadrilateral, as produced by `extrude`.
    Prism {
        /// Base face frame.
        frame: PlaneFrame,
        /// Half-extent along the frame's u axis.
        half_u: f64,
        /// Half-extent along the frame's v axis.
        half_v: f64,
        /// Signed extrusion depth along the frame normal.
        depth: f64,
    },
    /// A shape whose topology defeats classification.
    Malformed,
    /// Replays a prepared classification verbatim.
    Canned {
        /// The output `classify` returns.
        output: HlrOutput,
        /// Reported edge enumeration size.
        edges: usize,
        /// Reported vertex enumeration size.
        vertices: usize,
    },
}

/// Planar quadrilateral face handle.
#[derive(Debug, Clone)]
pub struct FixtureFace {
    frame: PlaneFrame,
    half_u: f64,
    half_v: f64,
}

/// Analytic kernel over [`FixtureShape`] solids.
///
/// `cut_calls` counts boolean invocations so tests can assert the
/// cutter short-circuits before the boolean on a missed plane.
#[derive(Debug, Default)]
pub struct FixtureKernel {
    /// Number of times `cut` was invoked.
    pub cut_calls: Cell<usize>,
}

impl FixtureKernel {
    /// Create a fixture kernel.
    pub fn new() -> Self {
        Self::default()
    }
}

const AXIS_EPS: f64 = 1e-3;

/// View plane for a projection: normal faces the viewer.
fn view_frame(direction: Dir3) -> PlaneFrame {
    PlaneFrame::from_normal(Point3::origin(), -direction.as_ref())
}

fn angle_of(c: Point2, p: Point2) -> f64 {
    (p.y - c.y).atan2(p.x - c.x)
}

/// Counter-clockwise arc `(first, last)` with `last > first` through
/// three projected points.
fn arc_through(center: Point2, p0: Point2, mid: Point2, p1: Point2) -> (f64, f64) {
    let t0 = angle_of(center, p0);
    let tm = angle_of(center, mid);
    let t1 = angle_of(center, p1);
    let mut m = tm;
    while m <= t0 {
        m += TAU;
    }
    let mut e = t1;
    while e <= t0 {
        e += TAU;
    }
    if m < e {
        (t0, e)
    } else {
        // Midpoint is not on the CCW sweep from p0: the arc runs the
        // other way, so emit it CCW from p1 instead.
        let mut e2 = t0;
        while e2 <= t1 {
            e2 += TAU;
        }
        (t1, e2)
    }
}

/// Prefer visible over hidden and selectable over synthetic when two
/// edges project onto the same curve.
fn rank(e: &HlrEdge) -> u8 {
    let vis = (e.visibility == Visibility::Visible) as u8;
    let sel = (e.source_index > 0) as u8;
    (vis << 1) | sel
}

fn points_close(a: Point2, b: Point2, tol: f64) -> bool {
    (a - b).norm() <= tol
}

fn same_projection(a: &ProjectedCurve, b: &ProjectedCurve, tol: f64) -> bool {
    match (a, b) {
        (
            ProjectedCurve::Segment { start: s0, end: e0 },
            ProjectedCurve::Segment { start: s1, end: e1 },
        ) => {
            (points_close(*s0, *s1, tol) && points_close(*e0, *e1, tol))
                || (points_close(*s0, *e1, tol) && points_close(*e0, *s1, tol))
        }
        (
            ProjectedCurve::Circle { center: c0, radius: r0 },
            ProjectedCurve::Circle { center: c1, radius: r1 },
        ) => points_close(*c0, *c1, tol) && (r0 - r1).abs() <= tol,
        (
            ProjectedCurve::CircularArc {
                center: c0,
                radius: r0,
                first: f0,
                last: l0,
            },
            ProjectedCurve::CircularArc {
                center: c1,
                radius: r1,
                first: f1,
                last: l1,
            },
        ) => {
            points_close(*c0, *c1, tol)
                && (r0 - r1).abs() <= tol
                && (f0 - f1).abs() <= 1e-9
                && (l0 - l1).abs() <= 1e-9
        }
        _ => false,
    }
}

/// Merge edges whose projections coincide, keeping the best-ranked one.
fn collapse_overlaps(edges: Vec<HlrEdge>, tol: f64) -> Vec<HlrEdge> {
    let mut out: Vec<HlrEdge> = Vec::new();
    'next: for e in edges {
        for kept in &mut out {
            if same_projection(&kept.curve, &e.curve, tol) {
                if rank(&e) > rank(kept) {
                    *kept = e;
                }
                continue 'next;
            }
        }
        out.push(e);
    }
    out
}

fn retain_pass(output: &mut HlrOutput, pass: ExtractionPass) {
    if pass == ExtractionPass::VisibleOnly {
        output.edges.retain(|e| e.visibility == Visibility::Visible);
    }
}

// ---------------------------------------------------------------------------
// Box classification
// ---------------------------------------------------------------------------

const F_BOTTOM: usize = 0;
const F_TOP: usize = 1;
const F_FRONT: usize = 2;
const F_BACK: usize = 3;
const F_LEFT: usize = 4;
const F_RIGHT: usize = 5;

const BOX_FACE_LOOPS: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // front (y = min)
    [3, 2, 6, 7], // back (y = max)
    [0, 3, 7, 4], // left (x = min)
    [1, 2, 6, 5], // right (x = max)
];

/// (v0, v1, face_a, face_b) per box edge, 1-based indices follow array order.
const BOX_EDGES: [(usize, usize, usize, usize); 12] = [
    (0, 1, F_BOTTOM, F_FRONT),
    (1, 2, F_BOTTOM, F_RIGHT),
    (2, 3, F_BOTTOM, F_BACK),
    (3, 0, F_BOTTOM, F_LEFT),
    (4, 5, F_TOP, F_FRONT),
    (5, 6, F_TOP, F_RIGHT),
    (6, 7, F_TOP, F_BACK),
    (7, 4, F_TOP, F_LEFT),
    (0, 4, F_FRONT, F_LEFT),
    (1, 5, F_FRONT, F_RIGHT),
    (2, 6, F_BACK, F_RIGHT),
    (3, 7, F_BACK, F_LEFT),
];

fn box_face_normals() -> [Vec3; 6] {
    [
        -Vec3::z(),
        Vec3::z(),
        -Vec3::y(),
        Vec3::y(),
        -Vec3::x(),
        Vec3::x(),
    ]
}

fn classify_box(
    min: &Point3,
    max: &Point3,
    direction: Dir3,
    tolerance: f64,
    pass: ExtractionPass,
) -> HlrOutput {
    let frame = view_frame(direction);
    let d = direction.as_ref();
    let tol = tolerance.max(1e-9);
    let corners = Aabb3::new(*min, *max).corners();
    let normals = box_face_normals();
    let front: Vec<bool> = normals.iter().map(|n| n.dot(d) < -1e-9).collect();

    let mut edges = Vec::new();
    for (i, &(v0, v1, fa, fb)) in BOX_EDGES.iter().enumerate() {
        let q0 = frame.project(&corners[v0]);
        let q1 = frame.project(&corners[v1]);
        if (q1 - q0).norm() <= tol {
            continue; // edge-on, projects to a point
        }
        let visibility = if front[fa] || front[fb] {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        edges.push(HlrEdge {
            source_index: (i + 1) as i32,
            visibility,
            curve: ProjectedCurve::Segment { start: q0, end: q1 },
        });
    }

    // Vertex visibility follows the incident edges.
    let mut vertices = Vec::new();
    for (vi, corner) in corners.iter().enumerate() {
        let mut visible = false;
        for &(v0, v1, fa, fb) in BOX_EDGES.iter() {
            if v0 != vi && v1 != vi {
                continue;
            }
            let q0 = frame.project(&corners[v0]);
            let q1 = frame.project(&corners[v1]);
            if (q1 - q0).norm() <= tol {
                continue;
            }
            if front[fa] || front[fb] {
                visible = true;
                break;
            }
        }
        vertices.push(HlrVertex {
            source_index: (vi + 1) as i32,
            visibility: if visible {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
            point: frame.project(corner),
        });
    }

    let mut faces = Vec::new();
    for (fi, loop_verts) in BOX_FACE_LOOPS.iter().enumerate() {
        let q: Vec<Point2> = loop_verts.iter().map(|&v| frame.project(&corners[v])).collect();
        // Shoelace area; edge-on faces are skipped.
        let mut area = 0.0;
        for i in 0..4 {
            let j = (i + 1) % 4;
            area += q[i].x * q[j].y - q[j].x * q[i].y;
        }
        if area.abs() * 0.5 <= tol {
            continue;
        }
        let wire: Vec<ProjectedCurve> = (0..4)
            .map(|i| ProjectedCurve::Segment {
                start: q[i],
                end: q[(i + 1) % 4],
            })
            .collect();
        faces.push(HlrFace {
            source_index: (fi + 1) as i32,
            visible: front[fi],
            wires: vec![wire],
        });
    }

    let mut output = HlrOutput {
        edges: collapse_overlaps(edges, tol),
        vertices,
        faces,
    };
    retain_pass(&mut output, pass);
    output
}

// ---------------------------------------------------------------------------
// Cylinder family
// ---------------------------------------------------------------------------

fn sample_circle(frame: &PlaneFrame, center_z: f64, radius: f64, samples: usize) -> Vec<Point2> {
    (0..=samples)
        .map(|i| {
            let t = TAU * i as f64 / samples as f64;
            frame.project(&Point3::new(radius * t.cos(), radius * t.sin(), center_z))
        })
        .collect()
}

fn classify_cylinder(
    radius: f64,
    height: f64,
    direction: Dir3,
    tolerance: f64,
    pass: ExtractionPass,
) -> HlrOutput {
    let frame = view_frame(direction);
    let d = direction.as_ref();
    let tol = tolerance.max(1e-9);
    // Edge enumeration: 1 = bottom circle, 2 = top circle, 3 = seam.
    let seam_front = Point3::new(radius, 0.0, 0.0).coords.dot(d) <= 1e-9;
    let mut edges = Vec::new();
    let mut vertices = Vec::new();

    if d.z.abs() > 1.0 - AXIS_EPS {
        // Axis view: the two rims project onto one circle; the far rim
        // collapses into the near one, the seam degenerates to a point.
        let near = if d.z < 0.0 { 2 } else { 1 };
        edges.push(HlrEdge {
            source_index: near,
            visibility: Visibility::Visible,
            curve: ProjectedCurve::Circle {
                center: frame.project(&Point3::origin()),
                radius,
            },
        });
        let near_vertex = if d.z < 0.0 { 2 } else { 1 };
        for (i, z) in [(1, 0.0), (2, height)] {
            vertices.push(HlrVertex {
                source_index: i,
                visibility: if i == near_vertex {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
                point: frame.project(&Point3::new(radius, 0.0, z)),
            });
        }
    } else if d.z.abs() < AXIS_EPS {
        // Side view: rims edge-on, plus silhouette outlines.
        let u_perp = Vec3::new(-d.y, d.x, 0.0).normalize();
        let sil_a = radius * u_perp;
        let sil_b = -radius * u_perp;
        for (i, z) in [(1, 0.0), (2, height)] {
            edges.push(HlrEdge {
                source_index: i,
                visibility: Visibility::Visible,
                curve: ProjectedCurve::Segment {
                    start: frame.project(&Point3::from(sil_b + Vec3::new(0.0, 0.0, z))),
                    end: frame.project(&Point3::from(sil_a + Vec3::new(0.0, 0.0, z))),
                },
            });
        }
        edges.push(HlrEdge {
            source_index: 3,
            visibility: if seam_front {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
            curve: ProjectedCurve::Segment {
                start: frame.project(&Point3::new(radius, 0.0, 0.0)),
                end: frame.project(&Point3::new(radius, 0.0, height)),
            },
        });
        for sil in [sil_a, sil_b] {
            edges.push(HlrEdge {
                source_index: 0, // synthetic outline, not selectable
                visibility: Visibility::Visible,
                curve: ProjectedCurve::Segment {
                    start: frame.project(&Point3::from(sil)),
                    end: frame.project(&Point3::from(sil + Vec3::new(0.0, 0.0, height))),
                },
            });
        }
        for (i, z) in [(1, 0.0), (2, height)] {
            vertices.push(HlrVertex {
                source_index: i,
                visibility: if seam_front {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
                point: frame.project(&Point3::new(radius, 0.0, z)),
            });
        }
    } else {
        // Oblique: rims have no analytic projection here, fall back to
        // discretized polylines.
        for (i, z) in [(1, 0.0), (2, height)] {
            edges.push(HlrEdge {
                source_index: i,
                visibility: Visibility::Visible,
                curve: ProjectedCurve::Polyline {
                    points: sample_circle(&frame, z, radius, 32),
                },
            });
        }
        edges.push(HlrEdge {
            source_index: 3,
            visibility: if seam_front {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
            curve: ProjectedCurve::Segment {
                start: frame.project(&Point3::new(radius, 0.0, 0.0)),
                end: frame.project(&Point3::new(radius, 0.0, height)),
            },
        });
        for (i, z) in [(1, 0.0), (2, height)] {
            vertices.push(HlrVertex {
                source_index: i,
                visibility: Visibility::Visible,
                point: frame.project(&Point3::new(radius, 0.0, z)),
            });
        }
    }

    let mut output = HlrOutput {
        edges: collapse_overlaps(edges, tol),
        vertices,
        faces: Vec::new(),
    };
    retain_pass(&mut output, pass);
    output
}

fn classify_half_cylinder(
    radius: f64,
    height: f64,
    keep_pos_y: bool,
    direction: Dir3,
    tolerance: f64,
    pass: ExtractionPass,
) -> HlrOutput {
    let frame = view_frame(direction);
    let d = direction.as_ref();
    let tol = tolerance.max(1e-9);
    let y_sign = if keep_pos_y { 1.0 } else { -1.0 };
    // Edge enumeration: 1 = bottom arc, 2 = top arc, 3 = bottom
    // diameter, 4 = top diameter, 5/6 = cut edges at x = -r / x = +r.
    // Vertices: 1 = (-r,0,0), 2 = (r,0,0), 3 = (-r,0,h), 4 = (r,0,h).
    let corner = |x: f64, z: f64| Point3::new(x, 0.0, z);
    let mut edges = Vec::new();

    if d.z.abs() > 1.0 - AXIS_EPS {
        let (near_arc, near_dia, far_arc, far_dia, near_z, far_z) = if d.z < 0.0 {
            (2, 4, 1, 3, height, 0.0)
        } else {
            (1, 3, 2, 4, 0.0, height)
        };
        let center = frame.project(&Point3::origin());
        for (idx, z, vis) in [
            (near_arc, near_z, Visibility::Visible),
            (far_arc, far_z, Visibility::Hidden),
        ] {
            let p0 = frame.project(&corner(radius, z));
            let pm = frame.project(&Point3::new(0.0, y_sign * radius, z));
            let p1 = frame.project(&corner(-radius, z));
            let (first, last) = arc_through(center, p0, pm, p1);
            edges.push(HlrEdge {
                source_index: idx,
                visibility: vis,
                curve: ProjectedCurve::CircularArc {
                    center,
                    radius,
                    first,
                    last,
                },
            });
        }
        for (idx, z, vis) in [
            (near_dia, near_z, Visibility::Visible),
            (far_dia, far_z, Visibility::Hidden),
        ] {
            edges.push(HlrEdge {
                source_index: idx,
                visibility: vis,
                curve: ProjectedCurve::Segment {
                    start: frame.project(&corner(-radius, z)),
                    end: frame.project(&corner(radius, z)),
                },
            });
        }
        // Cut edges are parallel to the view direction and vanish.
    } else {
        // Side or oblique view: arcs as discretized polylines, straight
        // edges as segments; coincident projections collapse below.
        for (idx, z) in [(1, 0.0), (2, height)] {
            let points: Vec<Point2> = (0..=16)
                .map(|i| {
                    let t = std::f64::consts::PI * i as f64 / 16.0;
                    frame.project(&Point3::new(
                        radius * t.cos(),
                        y_sign * radius * t.sin(),
                        z,
                    ))
                })
                .collect();
            edges.push(HlrEdge {
                source_index: idx,
                visibility: Visibility::Visible,
                curve: ProjectedCurve::Polyline { points },
            });
        }
        for (idx, z) in [(3, 0.0), (4, height)] {
            let q0 = frame.project(&corner(-radius, z));
            let q1 = frame.project(&corner(radius, z));
            if (q1 - q0).norm() > tol {
                edges.push(HlrEdge {
                    source_index: idx,
                    visibility: Visibility::Visible,
                    curve: ProjectedCurve::Segment { start: q0, end: q1 },
                });
            }
        }
        for (idx, x) in [(5, -radius), (6, radius)] {
            let q0 = frame.project(&corner(x, 0.0));
            let q1 = frame.project(&corner(x, height));
            if (q1 - q0).norm() > tol {
                edges.push(HlrEdge {
                    source_index: idx,
                    visibility: Visibility::Visible,
                    curve: ProjectedCurve::Segment { start: q0, end: q1 },
                });
            }
        }
    }

    let near_z_visible = d.z < 0.0;
    let vertices = [
        (1, -radius, 0.0),
        (2, radius, 0.0),
        (3, -radius, height),
        (4, radius, height),
    ]
    .iter()
    .map(|&(idx, x, z)| {
        let near = if near_z_visible { z > 0.0 } else { z <= 0.0 };
        HlrVertex {
            source_index: idx,
            visibility: if d.z.abs() <= 1.0 - AXIS_EPS || near {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
            point: frame.project(&corner(x, z)),
        }
    })
    .collect();

    let mut output = HlrOutput {
        edges: collapse_overlaps(edges, tol),
        vertices,
        faces: Vec::new(),
    };
    retain_pass(&mut output, pass);
    output
}

// ---------------------------------------------------------------------------
// Kernel impl
// ---------------------------------------------------------------------------

fn point3_axis(p: &Point3, axis: usize) -> f64 {
    match axis {
        0 => p.x,
        1 => p.y,
        _ => p.z,
    }
}

fn with_axis(mut p: Point3, axis: usize, value: f64) -> Point3 {
    match axis {
        0 => p.x = value,
        1 => p.y = value,
        _ => p.z = value,
    }
    p
}

fn cut_box(min: &Point3, max: &Point3, prism_box: &Aabb3, normal: &Vec3) -> Option<FixtureShape> {
    let axis = [normal.x, normal.y, normal.z]
        .iter()
        .position(|c| c.abs() > 0.999)?;
    let target = Aabb3::new(*min, *max);
    if !target.overlaps(prism_box) {
        return Some(FixtureShape::Box { min: *min, max: *max });
    }
    let (a, b) = (point3_axis(min, axis), point3_axis(max, axis));
    let (c, d) = (
        point3_axis(&prism_box.min, axis),
        point3_axis(&prism_box.max, axis),
    );
    let eps = 1e-9;
    if c <= a + eps && d >= b - eps {
        return Some(FixtureShape::Empty);
    }
    if c <= a + eps {
        return Some(FixtureShape::Box {
            min: with_axis(*min, axis, d),
            max: *max,
        });
    }
    if d >= b - eps {
        return Some(FixtureShape::Box {
            min: *min,
            max: with_axis(*max, axis, c),
        });
    }
    // A prism strictly inside the box would split it in two; the
    // fixture box cannot represent that.
    None
}

impl Kernel for FixtureKernel {
    type Shape = FixtureShape;
    type Face = FixtureFace;

    fn is_empty(&self, shape: &FixtureShape) -> bool {
        matches!(shape, FixtureShape::Empty)
    }

    fn is_solid(&self, shape: &FixtureShape) -> bool {
        !matches!(shape, FixtureShape::Empty)
    }

    fn bounding_box(&self, shape: &FixtureShape) -> Aabb3 {
        match shape {
            FixtureShape::Empty => Aabb3::empty(),
            FixtureShape::Box { min, max } => Aabb3::new(*min, *max),
            FixtureShape::Cylinder { radius, height } => Aabb3::new(
                Point3::new(-radius, -radius, 0.0),
                Point3::new(*radius, *radius, *height),
            ),
            FixtureShape::HalfCylinder {
                radius,
                height,
                keep_pos_y,
            } => {
                let (y_min, y_max) = if *keep_pos_y { (0.0, *radius) } else { (-radius, 0.0) };
                Aabb3::new(
                    Point3::new(-radius, y_min, 0.0),
                    Point3::new(*radius, y_max, *height),
                )
            }
            FixtureShape::Sphere { center, radius } => Aabb3::new(
                Point3::new(center.x - radius, center.y - radius, center.z - radius),
                Point3::new(center.x + radius, center.y + radius, center.z + radius),
            ),
            FixtureShape::Prism {
                frame,
                half_u,
                half_v,
                depth,
            } => {
                let mut bb = Aabb3::empty();
                for (su, sv) in [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)] {
                    let base = frame.evaluate(su * half_u, sv * half_v);
                    bb.include_point(&base);
                    bb.include_point(&(base + *depth * frame.normal.as_ref()));
                }
                bb
            }
            FixtureShape::Malformed | FixtureShape::Canned { .. } => {
                Aabb3::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            }
        }
    }

    fn duplicate(&self, shape: &FixtureShape) -> FixtureShape {
        shape.clone()
    }

    fn make_planar_face(&self, corners: [Point3; 4]) -> Option<FixtureFace> {
        let e1 = corners[1] - corners[0];
        let e2 = corners[3] - corners[0];
        let n = e1.cross(&e2);
        if n.norm() <= 1e-12 {
            return None; // collinear corners
        }
        let center = Point3::from(
            (corners[0].coords + corners[1].coords + corners[2].coords + corners[3].coords) / 4.0,
        );
        let frame = PlaneFrame::new(center, e1, e2);
        let mut half_u: f64 = 0.0;
        let mut half_v: f64 = 0.0;
        for c in &corners {
            let uv = frame.project(c);
            half_u = half_u.max(uv.x.abs());
            half_v = half_v.max(uv.y.abs());
        }
        if half_u <= 1e-12 || half_v <= 1e-12 {
            return None;
        }
        Some(FixtureFace {
            frame,
            half_u,
            half_v,
        })
    }

    fn extrude(&self, face: FixtureFace, vector: Vec3) -> FixtureShape {
        let depth = vector.dot(face.frame.normal.as_ref());
        FixtureShape::Prism {
            frame: face.frame,
            half_u: face.half_u,
            half_v: face.half_v,
            depth,
        }
    }

    fn cut(&self, target: &FixtureShape, tool: &FixtureShape) -> Option<FixtureShape> {
        self.cut_calls.set(self.cut_calls.get() + 1);
        let FixtureShape::Prism { frame, depth, .. } = tool else {
            return None;
        };
        let prism_box = self.bounding_box(tool);
        // Direction from the base plane into the prism volume; the face
        // winding may flip the frame normal relative to the extrusion.
        let removal = if *depth >= 0.0 {
            *frame.normal.as_ref()
        } else {
            -*frame.normal.as_ref()
        };
        match target {
            FixtureShape::Box { min, max } => cut_box(min, max, &prism_box, &removal),
            FixtureShape::Cylinder { radius, height } => {
                // A through-axis prism along ±Y splits the cylinder at
                // the XZ plane; anything else is out of the fixture's
                // vocabulary.
                let through_axis = frame.signed_distance(&Point3::origin()).abs() < 1e-6
                    && frame
                        .signed_distance(&Point3::new(0.0, 0.0, *height))
                        .abs()
                        < 1e-6;
                if through_axis && removal.y.abs() > 0.999 {
                    Some(FixtureShape::HalfCylinder {
                        radius: *radius,
                        height: *height,
                        keep_pos_y: removal.y < 0.0,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn classify(
        &self,
        shape: &FixtureShape,
        direction: Dir3,
        tolerance: f64,
        pass: ExtractionPass,
    ) -> Result<HlrOutput, HlrError> {
        match shape {
            FixtureShape::Malformed => Err(HlrError::Malformed(
                "shell is self-intersecting".to_string(),
            )),
            FixtureShape::Empty | FixtureShape::Prism { .. } => Ok(HlrOutput::default()),
            FixtureShape::Canned { output, .. } => Ok(output.clone()),
            FixtureShape::Box { min, max } => Ok(classify_box(min, max, direction, tolerance, pass)),
            FixtureShape::Cylinder { radius, height } => {
                Ok(classify_cylinder(*radius, *height, direction, tolerance, pass))
            }
            FixtureShape::HalfCylinder {
                radius,
                height,
                keep_pos_y,
            } => Ok(classify_half_cylinder(
                *radius, *height, *keep_pos_y, direction, tolerance, pass,
            )),
            FixtureShape::Sphere { center, radius } => {
                let frame = view_frame(direction);
                Ok(HlrOutput {
                    edges: vec![HlrEdge {
                        source_index: 0, // outline has no source edge
                        visibility: Visibility::Visible,
                        curve: ProjectedCurve::Circle {
                            center: frame.project(center),
                            radius: *radius,
                        },
                    }],
                    vertices: Vec::new(),
                    faces: Vec::new(),
                })
            }
        }
    }

    fn edge_count(&self, shape: &FixtureShape) -> usize {
        match shape {
            FixtureShape::Box { .. } => 12,
            FixtureShape::Cylinder { .. } => 3,
            FixtureShape::HalfCylinder { .. } => 6,
            FixtureShape::Canned { edges, .. } => *edges,
            _ => 0,
        }
    }

    fn vertex_count(&self, shape: &FixtureShape) -> usize {
        match shape {
            FixtureShape::Box { .. } => 8,
            FixtureShape::Cylinder { .. } => 2,
            FixtureShape::HalfCylinder { .. } => 4,
            FixtureShape::Canned { vertices, .. } => *vertices,
            _ => 0,
        }
    }
}
