use std::fmt;
use std::str::FromStr;

use image::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat fill color given as a `(b, g, r)` triple
///
/// Components are kept as entered and are not range-checked. They saturate
/// into `0..=255` only when the color is painted into a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [i32; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const RED: Color = Color([0, 0, 255]);
    pub const GOLD: Color = Color([0, 215, 255]);

    /// Create a color from blue, green and red components
    pub const fn bgr(b: i32, g: i32, r: i32) -> Self {
        Self([b, g, r])
    }

    /// Pixel value for an RGB buffer, each channel saturated into `0..=255`
    pub fn to_rgb(&self) -> Rgb<u8> {
        let [b, g, r] = self.0;
        Rgb([saturate(r), saturate(g), saturate(b)])
    }
}

fn saturate(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b, g, r] = self.0;
        write!(f, "({},{},{})", b, g, r)
    }
}

/// Reasons a color string could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 3 comma-separated components, found {0}")]
    WrongArity(usize),

    #[error("component '{0}' is not an integer")]
    NotAnInteger(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `b,g,r` with optional surrounding parentheses, e.g. `(0,0,255)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_matches(|c: char| c == '(' || c == ')');
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            return Err(ColorParseError::WrongArity(parts.len()));
        }

        let mut components = [0i32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            let part = part.trim();
            *slot = part
                .parse()
                .map_err(|_| ColorParseError::NotAnInteger(part.to_string()))?;
        }
        Ok(Color(components))
    }
}
