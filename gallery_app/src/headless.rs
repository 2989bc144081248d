//! Headless render host
//!
//! Stands in for the real rendering engine: textures live in a slotmap,
//! sprite submissions are counted and sampled into the log, and the
//! camera yaw is accumulated. Useful for driving the gallery from a
//! terminal and in scripted runs.

use emoji_gallery::assets::ImageData;
use emoji_gallery::postfx::ColorGrade;
use emoji_gallery::render::{RenderHost, TextureHandle};
use emoji_gallery::scene::RenderState;
use slotmap::SlotMap;

/// Render host that records instead of drawing
pub struct HeadlessHost {
    textures: SlotMap<TextureHandle, StoredTexture>,
    grade: ColorGrade,
    camera_yaw_deg: f32,
    frame_submissions: usize,
    sampled_sprite: Option<(usize, RenderState)>,
}

/// Dimensions of one uploaded texture
struct StoredTexture {
    width: u32,
    height: u32,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            textures: SlotMap::with_key(),
            grade: ColorGrade::None,
            camera_yaw_deg: 0.0,
            frame_submissions: 0,
            sampled_sprite: None,
        }
    }

    /// Forget per-frame bookkeeping; call once per simulated frame.
    pub fn begin_frame(&mut self) {
        self.frame_submissions = 0;
        self.sampled_sprite = None;
    }

    /// One-line summary of the frame that just ran
    pub fn frame_summary(&self) -> String {
        let sample = self.sampled_sprite.as_ref().map_or_else(
            || "no sprites".to_string(),
            |(index, state)| {
                format!(
                    "sprite {index} at ({:.2}, {:.2}, {:.2}) scale {:.2}",
                    state.position.x, state.position.y, state.position.z, state.scale.x
                )
            },
        );
        format!(
            "{} sprite(s), grade {:?}, camera yaw {:.1} deg, {sample}",
            self.frame_submissions, self.grade, self.camera_yaw_deg
        )
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl RenderHost for HeadlessHost {
    fn upload_texture(&mut self, image: &ImageData) -> TextureHandle {
        let handle = self.textures.insert(StoredTexture {
            width: image.width,
            height: image.height,
        });
        let stored = &self.textures[handle];
        log::debug!("Uploaded texture {}x{}", stored.width, stored.height);
        handle
    }

    fn set_color_grade(&mut self, grade: ColorGrade) {
        // A real host would unbind the previous full-screen shader here
        // and compile/bind the sources from emoji_gallery::postfx::shaders.
        self.grade = grade;
        log::info!("Color grade bound: {grade:?}");
    }

    fn submit_sprite(&mut self, index: usize, _texture: TextureHandle, state: &RenderState, _billboard: bool) {
        self.frame_submissions += 1;
        if self.sampled_sprite.is_none() {
            self.sampled_sprite = Some((index, state.clone()));
        }
    }

    fn orbit_camera(&mut self, degrees: f32) {
        self.camera_yaw_deg = (self.camera_yaw_deg + degrees) % 360.0;
    }
}
