//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros, so
//! projections and serialization can be followed with `RUST_LOG=assembly_svg=debug`.
//! Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __assembly_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__assembly_debug as debug;
