#![warn(missing_docs)]

//! Drawing view facade over the linework projection and section
//! engine.
//!
//! A [`ViewFeature`] holds the properties of one drawing view (source
//! shape, projection direction, tolerance, optional section plane) and
//! orchestrates the engine on recomputation: section views run the
//! cutter first, plain views go straight to the extractor. The facade
//! owns the resulting [`GeometryExtractionResult`] and hands the
//! presentation layer read-only access plus reference lookups for
//! selection.
//!
//! ```
//! use linework::{ViewFeature, ViewState};
//! use linework_kernel::testkit::{FixtureKernel, FixtureShape};
//! use linework_math::{Dir3, Point3, Vec3};
//!
//! let kernel = FixtureKernel::new();
//! let mut view = ViewFeature::<FixtureKernel>::new();
//! view.set_source(FixtureShape::Box {
//!     min: Point3::origin(),
//!     max: Point3::new(10.0, 10.0, 10.0),
//! });
//! view.set_direction(Dir3::new_normalize(Vec3::new(0.0, 0.0, -1.0)));
//! let geometry = view.recompute(&kernel).unwrap();
//! assert!(!geometry.edge_geometry.is_empty());
//! assert_eq!(view.state(), ViewState::Ready);
//! ```

pub mod view;

pub use view::{ViewError, ViewFeature, ViewState};

pub use linework_drafting::{
    cut_with_plane, extract_projection, BSplineSegment, CancelToken, CurvePrimitive,
    EdgePrimitive, ExtractOptions, ExtractionError, ExtractionPass, FaceGeom,
    GeometryExtractionResult, Point2D, ReferenceTable, SectionError, SectionRequest, Vertex2D,
    Visibility,
};
pub use linework_kernel::Kernel;
