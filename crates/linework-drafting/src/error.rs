//! Error types for the drawing extraction engine.

use thiserror::Error;

/// Errors from the section cutter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The source shape has no geometry, or its bounding box encloses
    /// no volume.
    #[error("source shape has no geometry to section")]
    EmptyGeometry,

    /// The section plane does not intersect the part. A modeling
    /// error on the caller's side, not a defect here.
    #[error("section plane does not intersect the part")]
    PlaneMisses,

    /// The planar cutting face could not be built.
    #[error("failed to build the cutting face: {0}")]
    FaceConstructionFailed(String),

    /// The boolean subtraction did not complete.
    #[error("section cut failed: {0}")]
    CutFailed(String),
}

/// Errors from the projection extractor.
///
/// Per-segment curve drops are *not* errors: they are logged and the
/// extraction continues with partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The kernel could not classify the shape at all; no partial
    /// geometry is produced.
    #[error("projection extraction failed: {0}")]
    ExtractionFailed(String),

    /// The extraction was cancelled cooperatively.
    #[error("projection extraction cancelled")]
    Cancelled,
}

/// A reference-table write that does not line up with the geometry
/// array. Indicates an extractor ordering bug; the extraction in
/// progress must abort rather than ship misaligned references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// `record` was called for a primitive index that is not the next
    /// unreferenced slot of the geometry array.
    #[error(
        "reference record out of order: primitive {index}, {recorded} references, \
         {geometry_len} primitives"
    )]
    OutOfOrder {
        /// The primitive index passed to `record`.
        index: usize,
        /// References recorded so far.
        recorded: usize,
        /// Geometry array length at call time.
        geometry_len: usize,
    },
}
