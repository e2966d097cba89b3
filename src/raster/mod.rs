//! # Raster Module
//!
//! Image and mask types plus the primitive raster operations
//! (resizing, grayscale conversion, thresholding) the compositor builds on.

pub mod ops;
pub mod types;

pub use ops::{grayscale, luminance, resize, threshold};
pub use types::{Frame, Mask};
