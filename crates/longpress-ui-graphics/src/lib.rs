//! Pure data describing how the long-press control is painted.
//!
//! Nothing here draws; renderers read these values.

mod color;
mod typography;

pub use color::Color;
pub use typography::{FontWeight, TextAttributes};
