use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    error::{ConfigError, Result, SelectionError},
};

/// Main configuration for the Glasses-Compositor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selectable frame shapes and textures
    pub catalog: CatalogConfig,

    /// Compositing parameters
    pub compositor: CompositorConfig,

    /// Interactive prompt fallbacks
    pub prompt: PromptConfig,

    /// Preview window settings
    pub preview: PreviewConfig,

    /// Where the composite is written
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.compositor.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Named frame shape and texture files, resolved against `images_dir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the input images
    pub images_dir: PathBuf,

    /// Selection key -> frame shape file
    pub frames: BTreeMap<String, PathBuf>,

    /// Selection key -> texture file
    pub textures: BTreeMap<String, PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let frames = [("1", "new_frame1.png"), ("2", "new_frame2.png")];
        let textures = [("1", "texture1.jpg"), ("2", "texture2.jpg")];
        Self {
            images_dir: PathBuf::from("images"),
            frames: frames.iter().map(|(k, v)| (k.to_string(), PathBuf::from(v))).collect(),
            textures: textures.iter().map(|(k, v)| (k.to_string(), PathBuf::from(v))).collect(),
        }
    }
}

impl CatalogConfig {
    /// Path of the frame shape registered under `key`
    pub fn resolve_frame(&self, key: &str) -> std::result::Result<PathBuf, SelectionError> {
        self.frames
            .get(key)
            .map(|file| self.images_dir.join(file))
            .ok_or_else(|| SelectionError::UnknownFrame {
                key: key.to_string(),
                available: self.frames.keys().cloned().collect(),
            })
    }

    /// Path of the texture registered under `key`
    pub fn resolve_texture(&self, key: &str) -> std::result::Result<PathBuf, SelectionError> {
        self.textures
            .get(key)
            .map(|file| self.images_dir.join(file))
            .ok_or_else(|| SelectionError::UnknownTexture {
                key: key.to_string(),
                available: self.textures.keys().cloned().collect(),
            })
    }

    fn validate(&self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.frames".to_string(),
                value: "{}".to_string()
            }.into());
        }

        if self.textures.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.textures".to_string(),
                value: "{}".to_string()
            }.into());
        }

        Ok(())
    }
}

/// Compositing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Width every loaded frame is scaled to
    pub output_width: u32,

    /// Luminance above which a frame pixel belongs to the silhouette
    pub frame_threshold: u8,

    /// Luminance above which a texture pixel belongs to the pattern
    pub texture_threshold: u8,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            output_width: 900,
            frame_threshold: 15,
            texture_threshold: 50,
        }
    }
}

impl CompositorConfig {
    fn validate(&self) -> Result<()> {
        if self.output_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "compositor.output_width".to_string(),
                value: self.output_width.to_string()
            }.into());
        }

        // Nothing is strictly above 255, so the mask would always be empty
        if self.frame_threshold == u8::MAX {
            return Err(ConfigError::InvalidValue {
                key: "compositor.frame_threshold".to_string(),
                value: self.frame_threshold.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Colors substituted when a color answer cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub default_frame_color: Color,
    pub default_texture_color: Color,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            default_frame_color: Color::RED,
            default_texture_color: Color::WHITE,
        }
    }
}

/// Preview window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Show the composite before saving
    pub enabled: bool,

    /// Window title
    pub title: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Preview".to_string(),
        }
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("images").join("new_glasses.png") }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output.path".to_string(),
                value: String::new()
            }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compositor.output_width, 900);
        assert_eq!(config.compositor.frame_threshold, 15);
        assert_eq!(config.compositor.texture_threshold, 50);
        assert_eq!(config.output.path, Path::new("images").join("new_glasses.png"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.compositor.texture_threshold = 80;
        original_config.prompt.default_texture_color = Color::GOLD;

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[compositor]\nframe_threshold = 30\n").unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.compositor.frame_threshold, 30);
        assert_eq!(config.compositor.output_width, 900);
        assert_eq!(config.catalog.frames.len(), 2);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        assert!(Config::from_file(dir.path().join("absent.toml")).is_err());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "compositor = 12").unwrap();
        assert!(Config::from_file(&bad).is_err());
    }

    #[test]
    fn test_resolve_known_and_unknown_keys() {
        let catalog = CatalogConfig::default();
        assert_eq!(
            catalog.resolve_frame("1").unwrap(),
            Path::new("images").join("new_frame1.png")
        );
        assert_eq!(
            catalog.resolve_texture("2").unwrap(),
            Path::new("images").join("texture2.jpg")
        );
        assert_eq!(
            catalog.resolve_frame("3"),
            Err(SelectionError::UnknownFrame {
                key: "3".to_string(),
                available: vec!["1".to_string(), "2".to_string()],
            })
        );
        assert!(catalog.resolve_texture("").is_err());
    }

    #[test]
    fn test_invalid_compositor_config() {
        let mut config = Config::default();
        config.compositor.output_width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.catalog.textures.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.compositor.frame_threshold = u8::MAX;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.compositor.frame_threshold = u8::MAX - 1;
        assert!(config.validate().is_ok());
    }
}
