use thiserror::Error;

/// Main error type for the Glasses-Compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raster loading, saving and geometry errors
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to load image file: {path} ({reason})")]
    LoadFailed { path: String, reason: String },

    #[error("Failed to save image file: {path} ({reason})")]
    SaveFailed { path: String, reason: String },

    #[error("Invalid image dimensions: {details}")]
    InvalidDimensions { details: String },

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?} for {what}")]
    DimensionMismatch {
        what: String,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Catalog lookup errors for frame shape and texture keys
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown frame shape '{key}' (available: {})", .available.join(", "))]
    UnknownFrame { key: String, available: Vec<String> },

    #[error("Unknown texture '{key}' (available: {})", .available.join(", "))]
    UnknownTexture { key: String, available: Vec<String> },
}

/// Preview window errors
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Failed to open preview window: {reason}")]
    WindowInit { reason: String },

    #[error("Failed to update preview window: {reason}")]
    WindowUpdate { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Image(ImageError::LoadFailed { path, .. }) => {
                format!("Could not load image '{}'. Please check the file exists and is a PNG or JPEG.", path)
            }
            Self::Selection(SelectionError::UnknownFrame { key, available }) => {
                format!("Frame shape '{}' does not exist. Choose one of: {}", key, available.join(", "))
            }
            Self::Selection(SelectionError::UnknownTexture { key, available }) => {
                format!("Texture '{}' does not exist. Choose one of: {}", key, available.join(", "))
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
