use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    color::Color,
    composition::layers,
    config::CompositorConfig,
    error::Result,
    raster::{resize, Frame, Mask},
};

/// Everything needed for one composite, already resolved from user input
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionRequest {
    pub frame_path: PathBuf,
    pub frame_color: Color,
    pub texture_path: PathBuf,
    pub texture_color: Color,
}

/// Result of a composition run
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// Final image
    pub image: Frame,

    /// Frame silhouette the layers were merged under
    pub mask: Mask,
}

/// Compositing engine for recolored and re-textured frames
///
/// The engine follows a fixed pipeline:
/// 1. Load Frame - Decode the frame shape and scale it to the output width
/// 2. Mask - Threshold the frame's luminance into a silhouette
/// 3. Color Layer - Fill the silhouette with a flat color
/// 4. Texture Layer - Paint the texture pattern, clipped to the silhouette
/// 5. Combine - Merge both layers inside the mask, keep the background outside
pub struct CompositionEngine {
    config: CompositorConfig,
}

impl CompositionEngine {
    /// Create a new composition engine with the given parameters
    pub fn new(config: CompositorConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline for one request
    pub fn compose(&self, request: &CompositionRequest) -> Result<Composite> {
        info!("Starting composition");
        info!("   Frame: {:?} colored {}", request.frame_path, request.frame_color);
        info!("   Texture: {:?} colored {}", request.texture_path, request.texture_color);

        // Pipeline Step 1: Load Frame
        let base_frame = self.load_frame(&request.frame_path)?;
        self.compose_loaded(base_frame, request)
    }

    /// Run steps 2-5 on a frame already produced by [`load_frame`](Self::load_frame)
    pub fn compose_loaded(&self, base_frame: Frame, request: &CompositionRequest) -> Result<Composite> {
        // Pipeline Step 2: Mask
        let mask = self.generate_mask(&base_frame);

        // Pipeline Step 3: Color Layer
        let color_layer = self.colorize_frame(&base_frame, &mask, request.frame_color)?;

        // Pipeline Step 4: Texture Layer
        let texture_layer = self.apply_texture(
            &base_frame,
            &mask,
            &request.texture_path,
            request.texture_color,
        )?;

        // Pipeline Step 5: Combine
        let image = self.combine_layers(&base_frame, &mask, &color_layer, &texture_layer)?;

        info!("Composition complete: {}x{}", image.width(), image.height());
        Ok(Composite { image, mask })
    }

    /// Decode the frame shape at `path` and scale it to the output width
    pub fn load_frame<P: AsRef<Path>>(&self, path: P) -> Result<Frame> {
        let path = path.as_ref();
        debug!("Loading frame from: {:?}", path);
        let frame = Frame::open(path)?;
        debug!("   Decoded {}x{}", frame.width(), frame.height());
        resize(&frame, self.config.output_width)
    }

    /// Silhouette of `frame` at the configured frame threshold
    pub fn generate_mask(&self, frame: &Frame) -> Mask {
        layers::generate_mask(frame, self.config.frame_threshold)
    }

    pub fn colorize_frame(&self, frame: &Frame, mask: &Mask, color: Color) -> Result<Frame> {
        layers::colorize_frame(frame, mask, color)
    }

    /// Load the texture at `texture_path` and build its clipped color layer
    pub fn apply_texture<P: AsRef<Path>>(
        &self,
        frame: &Frame,
        mask: &Mask,
        texture_path: P,
        texture_color: Color,
    ) -> Result<Frame> {
        let texture_path = texture_path.as_ref();
        debug!("Loading texture from: {:?}", texture_path);
        let texture = Frame::open(texture_path)?;
        let texture = resize(&texture, frame.width())?;
        layers::texture_layer(frame, mask, &texture, texture_color, self.config.texture_threshold)
    }

    pub fn combine_layers(
        &self,
        base_frame: &Frame,
        mask: &Mask,
        color_layer: &Frame,
        texture_layer: &Frame,
    ) -> Result<Frame> {
        layers::combine_layers(base_frame, mask, color_layer, texture_layer)
    }
}

impl Default for CompositionEngine {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}
