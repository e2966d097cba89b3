//! # Glasses-Compositor
//!
//! Recolor and re-texture an eyeglasses frame image by layering a flat color
//! and a colored texture pattern inside the frame's silhouette.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glasses_compositor::{
//!     color::Color,
//!     composition::{CompositionEngine, CompositionRequest},
//!     config::Config,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let engine = CompositionEngine::new(config.compositor);
//!
//! let request = CompositionRequest {
//!     frame_path: config.catalog.resolve_frame("1")?,
//!     frame_color: Color::RED,
//!     texture_path: config.catalog.resolve_texture("1")?,
//!     texture_color: Color::GOLD,
//! };
//! let composite = engine.compose(&request)?;
//! composite.image.save(&config.output.path)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`raster`] - Frame and mask types, resizing, grayscale and thresholding
//! - [`composition`] - Mask, color, texture and combine layers plus the engine
//! - [`prompt`] - Interactive questions resolved into a composition request
//! - [`preview`] - On-screen preview window
//! - [`config`] - Configuration management
//!
//! ## Custom front-ends
//!
//! The compositing operations never touch the console. Any front-end can build
//! a [`CompositionRequest`](composition::CompositionRequest) itself, or drive a
//! [`Session`](prompt::Session) with its own reader and writer.

pub mod app;
pub mod color;
pub mod composition;
pub mod config;
pub mod error;
pub mod preview;
pub mod prompt;
pub mod raster;

// Re-export commonly used types for convenience
pub use crate::{
    color::Color,
    composition::{CompositionEngine, CompositionRequest},
    config::Config,
    error::{CompositorError, Result},
    preview::{NoPreview, Preview, WindowPreview},
    raster::{Frame, Mask},
};
