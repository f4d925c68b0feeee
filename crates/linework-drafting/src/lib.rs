#![warn(missing_docs)]

//! 2D projection and section extraction engine for technical drawing
//! views.
//!
//! This crate turns a 3D solid into referenceable 2D drawing geometry:
//!
//! - **Section cutting**: [`cut_with_plane`] derives a finite cutting
//!   prism from an infinite plane and the shape's bounding box, then
//!   boolean-subtracts it on a duplicate of the source.
//! - **Projection extraction**: [`extract_projection`] drives the
//!   kernel's hidden-line classification and converts its per-edge
//!   output into [`CurvePrimitive`] variants, merging visible and
//!   hidden pieces of one source edge into a single referenceable
//!   [`EdgePrimitive`].
//! - **Reference bookkeeping**: [`ReferenceTable`] maps every emitted
//!   primitive back to the kernel's 1-based entity enumeration so
//!   selection and dimensioning can name what was picked.
//!
//! All failure paths return structured errors; a single degenerate
//! curve segment is logged and skipped, never fatal.

pub mod error;
pub mod extract;
pub mod refs;
pub mod section;
pub mod types;

pub use error::{ExtractionError, ReferenceError, SectionError};
pub use extract::{extract_projection, CancelToken, ExtractOptions};
pub use refs::ReferenceTable;
pub use section::{cut_with_plane, SectionRequest};
pub use types::{
    BSplineSegment, CurvePrimitive, EdgePrimitive, ExtractionPass, FaceGeom,
    GeometryExtractionResult, Point2D, Vertex2D, Visibility,
};
