//! Configuration system

use crate::animation::AnimationConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, malformed, or
    /// in an unsupported format.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when serialization or the write fails.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from file, falling back to defaults with a warning
    #[must_use]
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Config {path} not usable ({e}), using defaults");
                Self::default()
            }
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of sprite slots in the pool
    pub sprite_count: usize,

    /// Asset locations and emoji set selection
    pub assets: AssetConfig,

    /// Animation startup values
    pub animation: AnimationConfig,

    /// Window hints passed through to the host
    pub window: WindowConfig,

    /// Camera hints passed through to the host
    pub camera: CameraConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sprite_count: 30,
            assets: AssetConfig::default(),
            animation: AnimationConfig::default(),
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Config for GalleryConfig {}

/// Asset locations and emoji set selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Emoji set file name, resolved under `set_base`
    pub set_file: String,

    /// Group to read from the set file
    pub group: String,

    /// Resolution folder under `texture_base`
    pub resolution_folder: String,

    /// Root of the per-resolution texture folders
    pub texture_base: PathBuf,

    /// Directory holding set files
    pub set_base: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            set_file: "noto_emoji_regular.json".to_string(),
            group: "Smileys & Emotion".to_string(),
            resolution_folder: "128".to_string(),
            texture_base: PathBuf::from("assets/noto-emoji/png"),
            set_base: PathBuf::from("assets/sets"),
        }
    }
}

impl AssetConfig {
    /// Full path of the selected set file
    #[must_use]
    pub fn set_path(&self) -> PathBuf {
        self.set_base.join(&self.set_file)
    }
}

/// Window hints for the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Emoji Gallery".to_string(),
        }
    }
}

/// Camera hints for the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Camera position; it looks at the origin
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            position: [0.0, 1.0, -15.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_demo_startup_values() {
        let config = GalleryConfig::default();
        assert_eq!(config.sprite_count, 30);
        assert_eq!(config.assets.set_file, "noto_emoji_regular.json");
        assert_eq!(config.assets.group, "Smileys & Emotion");
        assert_eq!(config.assets.resolution_folder, "128");
        assert!(config.animation.idle_rotation.enabled);
        assert!(config.animation.idle_zoom.enabled);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GalleryConfig::load_or_default("/nope/gallery.toml");
        assert_eq!(config.sprite_count, 30);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let path = std::env::temp_dir().join("emoji_gallery_partial.toml");
        std::fs::write(&path, "sprite_count = 7\n").expect("temp file");
        let config =
            GalleryConfig::load_from_file(path.to_str().expect("utf-8 temp path")).expect("parse");
        assert_eq!(config.sprite_count, 7);
        assert_eq!(config.assets.group, "Smileys & Emotion");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let path = std::env::temp_dir().join("emoji_gallery_roundtrip.toml");
        let path_str = path.to_str().expect("utf-8 temp path");
        let mut config = GalleryConfig::default();
        config.sprite_count = 12;
        config.save_to_file(path_str).expect("save");
        let loaded = GalleryConfig::load_from_file(path_str).expect("load");
        assert_eq!(loaded.sprite_count, 12);
        assert_eq!(loaded.window.title, "Emoji Gallery");
    }
}
