//! Asset pipeline: emoji sets, texture names and cached texture loading
//!
//! Every failure in this layer is recovered locally with a visible
//! fallback and a logged warning; nothing here terminates the process.

pub mod emoji_set;
pub mod textures;

pub use emoji_set::{load_emoji_filenames, texture_filename};
pub use textures::{ImageData, TextureCatalog};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
