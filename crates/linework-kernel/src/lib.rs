#![warn(missing_docs)]

//! Boundary-representation kernel interface for the linework drawing
//! engine.
//!
//! The engine never talks to a geometry kernel directly; it consumes
//! the contracts in this crate:
//!
//! - [`Aabb3`] — bounding boxes used to size section cutting prisms
//! - [`PlaneFrame`] — oriented planes for sections and projections
//! - [`HlrOutput`] and [`ProjectedCurve`] — hidden-line classification
//!   results with the kernel's curve taxonomy already mapped into a
//!   closed tagged set
//! - [`Kernel`] — the operations a backing kernel must provide
//!
//! The `testkit` feature adds [`testkit::FixtureKernel`], an analytic
//! stand-in used by the engine's own tests.

pub mod aabb;
pub mod hlr;
pub mod kernel;
pub mod plane;

#[cfg(feature = "testkit")]
pub mod testkit;

pub use aabb::Aabb3;
pub use hlr::{
    BezierSegment, ExtractionPass, HlrEdge, HlrError, HlrFace, HlrOutput, HlrVertex,
    ProjectedCurve, Visibility,
};
pub use kernel::Kernel;
pub use plane::PlaneFrame;
