use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma};
use tracing::debug;

use crate::error::{ImageError, Result};
use crate::raster::types::{Frame, Mask};

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Scale `frame` so its width becomes `target_width`, keeping the aspect ratio
///
/// The new height is `floor(height * target_width / width)`.
pub fn resize(frame: &Frame, target_width: u32) -> Result<Frame> {
    let (width, height) = frame.dimensions();
    if width == 0 || target_width == 0 {
        return Err(ImageError::InvalidDimensions {
            details: format!("cannot resize {}x{} to width {}", width, height, target_width),
        }
        .into());
    }

    let target_height = (u64::from(height) * u64::from(target_width) / u64::from(width)) as u32;
    if target_height == 0 {
        return Err(ImageError::InvalidDimensions {
            details: format!(
                "resizing {}x{} to width {} collapses the height to zero",
                width, height, target_width
            ),
        }
        .into());
    }

    debug!("Resizing {}x{} -> {}x{}", width, height, target_width, target_height);
    let resized = imageops::resize(frame.as_image(), target_width, target_height, FilterType::Triangle);
    Ok(Frame::new(resized))
}

/// Luminance of one RGB pixel, rounded to the nearest integer
pub fn luminance(pixel: [u8; 3]) -> u8 {
    let [r, g, b] = pixel.map(u32::from);
    let weighted = r * LUMA_R + g * LUMA_G + b * LUMA_B;
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Single-channel luminance image of `frame`
pub fn grayscale(frame: &Frame) -> GrayImage {
    let image = frame.as_image();
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        Luma([luminance(image.get_pixel(x, y).0)])
    })
}

/// Binarize a grayscale image: selected where the value is strictly above `level`
pub fn threshold(gray: &GrayImage, level: u8) -> Mask {
    Mask::from_fn(gray.width(), gray.height(), |x, y| gray.get_pixel(x, y).0[0] > level)
}
