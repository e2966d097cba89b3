use std::path::Path;

use image::io::Reader as ImageReader;
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

use crate::error::{ImageError, Result};

/// A three-channel raster image
///
/// This is a simple wrapper around an RGB image buffer that provides
/// the pixel accessors used by the compositing layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbImage,
}

impl Frame {
    /// Create a new frame from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with black
    pub fn new_black(width: u32, height: u32) -> Self {
        Self { buffer: ImageBuffer::new(width, height) }
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Self { buffer: ImageBuffer::from_pixel(width, height, color) }
    }

    /// Build a frame pixel by pixel
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb<u8>,
    {
        Self { buffer: ImageBuffer::from_fn(width, height, f) }
    }

    /// Decode an image file (PNG or JPEG) into a frame
    ///
    /// The format is sniffed from the file contents, so a PNG named `.jpg` still loads.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_failed = |reason: String| ImageError::LoadFailed {
            path: path.display().to_string(),
            reason,
        };

        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| load_failed(e.to_string()))?
            .decode()
            .map_err(|e| load_failed(e.to_string()))?;
        Ok(Self { buffer: decoded.to_rgb8() })
    }

    /// Encode the frame to `path`, format chosen from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.buffer.save(path).map_err(|e| ImageError::SaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Iterate over `(x, y, pixel)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 3])> + '_ {
        self.buffer.enumerate_pixels().map(|(x, y, p)| (x, y, p.0))
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Pack pixels as `0x00RRGGBB` words, the layout window surfaces expect
    pub fn to_packed_rgb(&self) -> Vec<u32> {
        self.buffer
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            })
            .collect()
    }
}

/// Binary selection raster: every pixel is either [`Mask::SET`] or [`Mask::CLEAR`]
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    buffer: GrayImage,
}

impl Mask {
    pub const SET: u8 = 255;
    pub const CLEAR: u8 = 0;

    /// Build a mask from a predicate; `true` marks a selected pixel
    pub fn from_fn<F>(width: u32, height: u32, mut selected: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Luma([if selected(x, y) { Self::SET } else { Self::CLEAR }])
        });
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.buffer.get_pixel(x, y).0[0] == Self::SET
    }

    /// Number of selected pixels
    pub fn count_set(&self) -> usize {
        self.buffer.pixels().filter(|p| p.0[0] == Self::SET).count()
    }
}
