use tracing::debug;

use crate::{
    color::Color,
    error::{ImageError, Result},
    raster::{grayscale, resize, threshold, Frame, Mask},
};

/// Derive the frame silhouette: selected where luminance is above `level`
///
/// Frame artwork sits on a near-black background, so dark pixels are background.
pub fn generate_mask(frame: &Frame, level: u8) -> Mask {
    let mask = threshold(&grayscale(frame), level);
    debug!(
        "Generated mask at threshold {}: {} of {} pixels selected",
        level,
        mask.count_set(),
        u64::from(mask.width()) * u64::from(mask.height())
    );
    mask
}

/// Flat `color` everywhere the mask is set, black elsewhere
pub fn colorize_frame(frame: &Frame, mask: &Mask, color: Color) -> Result<Frame> {
    ensure_same_size("frame mask", frame.dimensions(), mask.dimensions())?;

    let fill = color.to_rgb();
    let black = Color::BLACK.to_rgb();
    Ok(Frame::from_fn(frame.width(), frame.height(), |x, y| {
        if mask.is_set(x, y) { fill } else { black }
    }))
}

/// Paint the texture's own silhouette with `color`, clipped to the frame mask
///
/// The texture is scaled to the frame's width when needed and anchored at the
/// top-left corner. Texture rows past the frame's height are dropped; frame
/// rows the texture does not reach get no texture.
pub fn texture_layer(
    frame: &Frame,
    mask: &Mask,
    texture: &Frame,
    color: Color,
    level: u8,
) -> Result<Frame> {
    ensure_same_size("frame mask", frame.dimensions(), mask.dimensions())?;

    let scaled;
    let texture = if texture.width() == frame.width() {
        texture
    } else {
        scaled = resize(texture, frame.width())?;
        &scaled
    };

    if texture.height() != frame.height() {
        debug!(
            "Texture height {} differs from frame height {}; anchoring at top",
            texture.height(),
            frame.height()
        );
    }

    let texture_mask = threshold(&grayscale(texture), level);
    let fill = color.to_rgb();
    let black = Color::BLACK.to_rgb();
    Ok(Frame::from_fn(frame.width(), frame.height(), |x, y| {
        let in_texture = y < texture_mask.height() && texture_mask.is_set(x, y);
        if in_texture && mask.is_set(x, y) { fill } else { black }
    }))
}

/// Merge the layers under the mask
///
/// Outside the mask the base frame is kept untouched. Inside it each channel
/// holds the saturating sum of the color and texture layers.
pub fn combine_layers(
    base_frame: &Frame,
    mask: &Mask,
    color_layer: &Frame,
    texture_layer: &Frame,
) -> Result<Frame> {
    let expected = base_frame.dimensions();
    ensure_same_size("mask", expected, mask.dimensions())?;
    ensure_same_size("color layer", expected, color_layer.dimensions())?;
    ensure_same_size("texture layer", expected, texture_layer.dimensions())?;

    let mut result = base_frame.clone();
    for (x, y, base) in base_frame.pixels() {
        let pixel = if mask.is_set(x, y) {
            let color = color_layer.get_pixel(x, y);
            let texture = texture_layer.get_pixel(x, y);
            [
                color[0].saturating_add(texture[0]),
                color[1].saturating_add(texture[1]),
                color[2].saturating_add(texture[2]),
            ]
        } else {
            base
        };
        result.set_pixel(x, y, pixel);
    }
    Ok(result)
}

fn ensure_same_size(what: &str, expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(ImageError::DimensionMismatch {
            what: what.to_string(),
            expected,
            actual,
        }
        .into());
    }
    Ok(())
}
