//! Image decoding and the texture catalog

use crate::assets::AssetError;
use crate::render::{RenderHost, TextureHandle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Color of the fallback marker quad shown for missing textures
pub const FALLBACK_MARKER_COLOR: [u8; 4] = [220, 40, 40, 255];

/// Side length of the generated fallback marker image
const FALLBACK_MARKER_SIZE: u32 = 64;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::LoadFailed`] when the file is missing or
    /// cannot be decoded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {path_ref:?}");

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {e}")))?;

        // RGBA8 is the standard layout for GPU upload.
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (fallback markers, tests)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }
        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Load-or-return-cached texture lookup over one asset tree
///
/// Texture files live under `<texture_root>/<resolution_folder>/`.
/// Process-wide shared state, read and written only from the single
/// update thread; a port to a concurrent environment must replace the
/// map with a concurrency-safe one to keep the load-once contract.
#[derive(Debug)]
pub struct TextureCatalog {
    texture_root: PathBuf,
    resolution_folder: String,
    cache: HashMap<PathBuf, TextureHandle>,
    fallback: Option<TextureHandle>,
}

impl TextureCatalog {
    /// Create a catalog rooted at `texture_root`, reading the given
    /// resolution folder
    #[must_use]
    pub fn new(texture_root: PathBuf, resolution_folder: String) -> Self {
        Self {
            texture_root,
            resolution_folder,
            cache: HashMap::new(),
            fallback: None,
        }
    }

    /// Look up `filename`, loading and uploading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] when the file cannot be read or decoded;
    /// the failure is not cached, callers decide on the fallback.
    pub fn load(&mut self, host: &mut dyn RenderHost, filename: &str) -> Result<TextureHandle, AssetError> {
        let path = self.texture_root.join(&self.resolution_folder).join(filename);
        if let Some(handle) = self.cache.get(&path) {
            return Ok(*handle);
        }

        let image = ImageData::from_file(&path)?;
        let handle = host.upload_texture(&image);
        log::info!("Loaded texture {}x{} from {path:?}", image.width, image.height);
        self.cache.insert(path, handle);
        Ok(handle)
    }

    /// Like [`TextureCatalog::load`], but degrade to the distinct-color
    /// fallback marker instead of failing.
    pub fn load_or_fallback(&mut self, host: &mut dyn RenderHost, filename: &str) -> TextureHandle {
        match self.load(host, filename) {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("Texture {filename} unavailable ({e}), using fallback marker");
                self.fallback_marker(host)
            }
        }
    }

    /// Handle of the shared fallback marker, uploading it on first use
    pub fn fallback_marker(&mut self, host: &mut dyn RenderHost) -> TextureHandle {
        if let Some(handle) = self.fallback {
            return handle;
        }
        let marker = ImageData::solid_color(
            FALLBACK_MARKER_SIZE,
            FALLBACK_MARKER_SIZE,
            FALLBACK_MARKER_COLOR,
        );
        let handle = host.upload_texture(&marker);
        self.fallback = Some(handle);
        handle
    }

    /// Number of distinct textures loaded so far
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }
}
