//! View feature facade: one drawing view per instance, plain or
//! sectioned, recomputed synchronously on the host's recompute thread.

use linework_drafting::{
    cut_with_plane, extract_projection, CancelToken, ExtractOptions, ExtractionError,
    ExtractionPass, GeometryExtractionResult, SectionError, SectionRequest,
};
use linework_kernel::Kernel;
use linework_math::{Dir3, Vec3};
use thiserror::Error;

/// Recomputation failure surfaced to the host framework.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// No source shape has been linked to the view.
    #[error("no source shape linked")]
    NoSourceLinked,

    /// The linked source holds no solid geometry.
    #[error("linked source holds no solid geometry")]
    InvalidSourceType,

    /// The section cutter failed; the extractor was not invoked.
    #[error(transparent)]
    Section(#[from] SectionError),

    /// The projection extractor failed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Lifecycle of one view instance.
///
/// `Ready` and `Failed` are terminal until a property change re-enters
/// `Computing`; [`ViewFeature::recompute`] then resolves the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No recomputation has run yet.
    Uninitialized,
    /// A property changed; a recomputation is pending or in progress.
    Computing,
    /// The last recomputation succeeded.
    Ready,
    /// The last recomputation failed; any earlier result is retained.
    Failed,
}

/// A drawing view of one source shape.
///
/// Exclusively owns its current [`GeometryExtractionResult`], which is
/// replaced wholesale on every successful recomputation. Borrowed
/// results are valid only until the next recompute. The host framework
/// serializes recomputations per view; the `generation` counter is the
/// last-writer-wins seam for any future worker-pool port.
pub struct ViewFeature<K: Kernel> {
    source: Option<K::Shape>,
    direction: Dir3,
    tolerance: f64,
    section: Option<SectionRequest>,
    pass: ExtractionPass,
    with_faces: bool,
    cancel: Option<CancelToken>,
    state: ViewState,
    generation: u64,
    result: Option<GeometryExtractionResult>,
    last_error: Option<ViewError>,
}

impl<K: Kernel> ViewFeature<K> {
    /// Create an unlinked view projecting along +Z.
    pub fn new() -> Self {
        Self {
            source: None,
            direction: Dir3::new_normalize(Vec3::z()),
            tolerance: 1e-6,
            section: None,
            pass: ExtractionPass::VisibleOnly,
            with_faces: false,
            cancel: None,
            state: ViewState::Uninitialized,
            generation: 0,
            result: None,
            last_error: None,
        }
    }

    fn touch(&mut self) {
        self.state = ViewState::Computing;
    }

    /// Link the source shape.
    pub fn set_source(&mut self, shape: K::Shape) {
        self.source = Some(shape);
        self.touch();
    }

    /// Unlink the source shape.
    pub fn clear_source(&mut self) {
        self.source = None;
        self.touch();
    }

    /// Set the projection direction.
    pub fn set_direction(&mut self, direction: Dir3) {
        self.direction = direction;
        self.touch();
    }

    /// Set the geometric tolerance.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
        self.touch();
    }

    /// Turn the view into a section view, or back into a plain one.
    pub fn set_section(&mut self, section: Option<SectionRequest>) {
        self.section = section;
        self.touch();
    }

    /// Select which visibility channels are extracted.
    pub fn set_pass(&mut self, pass: ExtractionPass) {
        self.pass = pass;
        self.touch();
    }

    /// Enable or disable face wire extraction.
    pub fn set_with_faces(&mut self, with_faces: bool) {
        self.with_faces = with_faces;
        self.touch();
    }

    /// Install a cancellation token checked during extraction. Not a
    /// view property; does not trigger recomputation.
    pub fn set_cancel_token(&mut self, token: Option<CancelToken>) {
        self.cancel = token;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Number of successful recomputations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current geometry, possibly from an earlier successful
    /// recomputation when the latest one failed.
    pub fn geometry(&self) -> Option<&GeometryExtractionResult> {
        self.result.as_ref()
    }

    /// The error of the latest recomputation, if it failed.
    pub fn last_error(&self) -> Option<&ViewError> {
        self.last_error.as_ref()
    }

    fn compute(&self, kernel: &K) -> Result<GeometryExtractionResult, ViewError> {
        let source = self.source.as_ref().ok_or(ViewError::NoSourceLinked)?;
        if !kernel.is_solid(source) {
            return Err(ViewError::InvalidSourceType);
        }
        let options = ExtractOptions {
            pass: self.pass,
            with_faces: self.with_faces,
            cancel: self.cancel.clone(),
        };
        let result = match &self.section {
            Some(request) => {
                let cut = cut_with_plane(kernel, source, request)?;
                extract_projection(kernel, &cut, self.direction, self.tolerance, &options)?
            }
            None => extract_projection(kernel, source, self.direction, self.tolerance, &options)?,
        };
        Ok(result)
    }

    /// Run the cutter (for section views) and the extractor, replacing
    /// the owned geometry on success.
    ///
    /// On failure the previous successful result stays available for
    /// display while the error is reported to the caller.
    pub fn recompute(&mut self, kernel: &K) -> Result<&GeometryExtractionResult, ViewError> {
        self.state = ViewState::Computing;
        match self.compute(kernel) {
            Ok(result) => {
                self.generation += 1;
                self.state = ViewState::Ready;
                self.last_error = None;
                Ok(self.result.insert(result))
            }
            Err(error) => {
                self.state = ViewState::Failed;
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }
}

impl<K: Kernel> Default for ViewFeature<K> {
    fn default() -> Self {
        Self::new()
    }
}
