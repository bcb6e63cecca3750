//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros used by the
//! tessellator and dispatcher. Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __sketchgeom_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __sketchgeom_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__sketchgeom_debug as debug, __sketchgeom_trace as trace};
