//! Shape context - the mode and resolution state consulted by constructors

use super::curves::CurveConfig;
use super::defaults;
use super::normalize::ShapeMode;
use super::tessellate::{ArcAccuracy, ArcTessellator};
use crate::errors::ShapeError;
use crate::log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SavedModes {
    rect: ShapeMode,
    ellipse: ShapeMode,
}

/// State shared by every primitive constructor in a sketch.
///
/// Modes persist until changed. Use [`ShapeContext::with_rect_mode`] and
/// friends, or [`ShapeContext::push_modes`] / [`ShapeContext::pop_modes`],
/// to change them for a block and restore them afterwards.
#[derive(Debug, Clone)]
pub struct ShapeContext {
    rect_mode: ShapeMode,
    ellipse_mode: ShapeMode,
    saved: Vec<SavedModes>,
    pub curves: CurveConfig,
    tessellator: ArcTessellator,
}

impl Default for ShapeContext {
    fn default() -> Self {
        Self {
            rect_mode: defaults::DEFAULT_RECT_MODE,
            ellipse_mode: defaults::DEFAULT_ELLIPSE_MODE,
            saved: Vec::new(),
            curves: CurveConfig::default(),
            tessellator: ArcTessellator::default(),
        }
    }
}

impl ShapeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom tessellator, e.g. one sharing a table with another context
    pub fn with_tessellator(mut self, tessellator: ArcTessellator) -> Self {
        self.tessellator = tessellator;
        self
    }

    /// Override the arc accuracy while keeping the current table
    pub fn with_accuracy(mut self, accuracy: ArcAccuracy) -> Self {
        self.tessellator = self.tessellator.with_accuracy(accuracy);
        self
    }

    pub fn tessellator(&self) -> &ArcTessellator {
        &self.tessellator
    }

    pub fn rect_mode(&self) -> ShapeMode {
        self.rect_mode
    }

    pub fn ellipse_mode(&self) -> ShapeMode {
        self.ellipse_mode
    }

    /// Change the mode used by `rect` and `square`
    pub fn set_rect_mode(&mut self, mode: ShapeMode) {
        debug!(%mode, "rect mode");
        self.rect_mode = mode;
    }

    /// Change the mode used by `ellipse`, `circle` and `arc`
    pub fn set_ellipse_mode(&mut self, mode: ShapeMode) {
        debug!(%mode, "ellipse mode");
        self.ellipse_mode = mode;
    }

    /// Restore both modes to CORNER (rects) and CENTER (ellipses)
    pub fn reset_modes(&mut self) {
        self.set_rect_mode(defaults::DEFAULT_RECT_MODE);
        self.set_ellipse_mode(defaults::DEFAULT_ELLIPSE_MODE);
    }

    /// Save the current modes
    pub fn push_modes(&mut self) {
        self.saved.push(SavedModes {
            rect: self.rect_mode,
            ellipse: self.ellipse_mode,
        });
    }

    /// Restore the modes saved by the matching [`ShapeContext::push_modes`]
    pub fn pop_modes(&mut self) -> Result<(), ShapeError> {
        let saved = self.saved.pop().ok_or(ShapeError::ModeStackEmpty)?;
        self.rect_mode = saved.rect;
        self.ellipse_mode = saved.ellipse;
        Ok(())
    }

    /// Run `f` with a different rect mode, restoring the old one afterwards
    pub fn with_rect_mode<T>(&mut self, mode: ShapeMode, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.rect_mode;
        self.rect_mode = mode;
        let out = f(self);
        self.rect_mode = previous;
        out
    }

    /// Run `f` with a different ellipse mode, restoring the old one afterwards
    pub fn with_ellipse_mode<T>(&mut self, mode: ShapeMode, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.ellipse_mode;
        self.ellipse_mode = mode;
        let out = f(self);
        self.ellipse_mode = previous;
        out
    }

    pub fn bezier_detail(&mut self, steps: usize) -> Result<(), ShapeError> {
        self.curves.set_bezier_detail(steps)
    }

    pub fn curve_detail(&mut self, steps: usize) -> Result<(), ShapeError> {
        self.curves.set_curve_detail(steps)
    }

    pub fn curve_tightness(&mut self, tightness: f64) -> Result<(), ShapeError> {
        self.curves.set_curve_tightness(tightness)
    }
}
