//! # Composition Engine
//!
//! The composition engine turns a frame shape, a fill color, a texture and a
//! texture color into one composited image.

pub mod engine;
pub mod layers;

// Re-exports for convenience
pub use engine::{Composite, CompositionEngine, CompositionRequest};
pub use layers::{colorize_frame, combine_layers, generate_mask, texture_layer};
