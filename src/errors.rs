//! Error types for shape construction
//!
//! Every failure is a bad call-site argument detected before any vertex is
//! produced. The diagnostics carry codes and help text so callers that render
//! them through miette get a useful report.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building a shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("unexpected arguments passed to {primitive}(): got {got}")]
    #[diagnostic(code(sketchgeom::arity), help("{primitive}() accepts {expected}"))]
    Arity {
        primitive: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("unknown coordinate mode: {mode}")]
    #[diagnostic(
        code(sketchgeom::unknown_mode),
        help("use one of CORNER, CORNERS, CENTER, RADIUS")
    )]
    UnknownMode { mode: String },

    #[error("cannot create {primitive} in {mode} mode")]
    #[diagnostic(
        code(sketchgeom::unsupported_mode),
        help("{primitive} has no opposite corner; use CORNER, CENTER or RADIUS")
    )]
    UnsupportedMode {
        primitive: &'static str,
        mode: &'static str,
    },

    #[error("unknown stroke cap value: {value}")]
    #[diagnostic(
        code(sketchgeom::unknown_stroke_cap),
        help("use one of SQUARE, PROJECT, ROUND")
    )]
    UnknownStrokeCap { value: String },

    #[error("unknown arc mode: {value}")]
    #[diagnostic(code(sketchgeom::unknown_arc_mode), help("use one of OPEN, CHORD, PIE"))]
    UnknownArcMode { value: String },

    #[error("unknown primitive: {name}")]
    #[diagnostic(code(sketchgeom::unknown_primitive))]
    UnknownPrimitive { name: String },

    #[error("{primitive}() does not take a coordinate mode")]
    #[diagnostic(code(sketchgeom::mode_not_accepted))]
    ModeNotAccepted { primitive: &'static str },

    #[error("invalid {what} ({value}): {reason}")]
    #[diagnostic(code(sketchgeom::invalid_value))]
    InvalidValue {
        what: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("no saved modes to restore")]
    #[diagnostic(
        code(sketchgeom::mode_stack_empty),
        help("every pop_modes() needs a matching push_modes()")
    )]
    ModeStackEmpty,
}

impl ShapeError {
    pub(crate) fn invalid(what: &'static str, value: f64, reason: NumericError) -> Self {
        ShapeError::InvalidValue { what, value, reason }
    }
}
