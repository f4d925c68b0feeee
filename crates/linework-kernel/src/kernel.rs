//! The geometry kernel trait consumed by the drawing engine.

use linework_math::{Dir3, Point3, Vec3};

use crate::aabb::Aabb3;
use crate::hlr::{ExtractionPass, HlrError, HlrOutput};

/// Boundary-representation kernel operations the drawing engine relies
/// on: bounding boxes, planar face construction, prism extrusion,
/// boolean subtraction, and hidden-line classification.
///
/// Contract notes:
/// - No operation may mutate a shape passed by reference. The engine
///   additionally calls [`Kernel::duplicate`] before any boolean so a
///   kernel that mutates its boolean target in place still never
///   touches caller-owned shapes.
/// - `classify` returns already-projected 2-D curve data per source
///   edge, tagged visible/hidden, with 1-based source entity indices.
///   Index stability across recomputation is assumed for unchanged
///   topology; it is not guaranteed across kernel upgrades.
pub trait Kernel {
    /// Kernel shape handle.
    type Shape: Clone;
    /// Kernel planar face handle.
    type Face;

    /// True when the shape holds no geometry at all.
    fn is_empty(&self, shape: &Self::Shape) -> bool;

    /// True when the shape carries solid geometry a drawing view can
    /// be derived from.
    fn is_solid(&self, shape: &Self::Shape) -> bool;

    /// Bounding box of all geometry in the shape.
    fn bounding_box(&self, shape: &Self::Shape) -> Aabb3;

    /// Deep copy. The engine cuts only duplicates, never sources.
    fn duplicate(&self, shape: &Self::Shape) -> Self::Shape;

    /// Build a planar face from four corners forming a closed planar
    /// quadrilateral. `None` when the polygon is degenerate.
    fn make_planar_face(&self, corners: [Point3; 4]) -> Option<Self::Face>;

    /// Extrude a planar face along `vector` into a prism solid.
    fn extrude(&self, face: Self::Face, vector: Vec3) -> Self::Shape;

    /// Boolean subtraction `target - tool`. `None` when the operation
    /// does not complete.
    fn cut(&self, target: &Self::Shape, tool: &Self::Shape) -> Option<Self::Shape>;

    /// Hidden-line classification of `shape` projected along
    /// `direction` at `tolerance`. `pass` selects whether the hidden
    /// edge channel is produced.
    fn classify(
        &self,
        shape: &Self::Shape,
        direction: Dir3,
        tolerance: f64,
        pass: ExtractionPass,
    ) -> Result<HlrOutput, HlrError>;

    /// Number of edges in the shape's stable enumeration.
    fn edge_count(&self, shape: &Self::Shape) -> usize;

    /// Number of vertices in the shape's stable enumeration.
    fn vertex_count(&self, shape: &Self::Shape) -> usize;
}
