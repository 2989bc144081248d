//! Host bindings
//!
//! The window, camera, input loop and every GPU object belong to a
//! general-purpose rendering engine. This module is the complete seam:
//! the gallery only ever talks to the host through [`RenderHost`], and
//! the host only ever hands back opaque [`TextureHandle`] keys.

use crate::assets::ImageData;
use crate::postfx::ColorGrade;
use crate::scene::RenderState;

slotmap::new_key_type! {
    /// Opaque, non-owning reference to a texture uploaded to the host
    pub struct TextureHandle;
}

/// Services the host rendering engine must provide
///
/// All calls happen on the single update thread, inside the per-frame
/// update or a key handler; no call may block on I/O.
pub trait RenderHost {
    /// Upload decoded image data and return a handle for later
    /// submissions. Called only during startup asset loading.
    fn upload_texture(&mut self, image: &ImageData) -> TextureHandle;

    /// Bind the given full-screen color grade, replacing whatever was
    /// bound before. [`ColorGrade::None`] clears the effect. For
    /// [`ColorGrade::Sepia`] the host must also push the blend amount
    /// to the shader's uniform
    /// ([`crate::postfx::shaders::SEPIA_AMOUNT_UNIFORM`]).
    fn set_color_grade(&mut self, grade: ColorGrade);

    /// Draw one textured quad this frame. `billboard` sprites must be
    /// turned toward the camera by the host; others use the submitted
    /// rotation as-is.
    fn submit_sprite(&mut self, index: usize, texture: TextureHandle, state: &RenderState, billboard: bool);

    /// Yaw the camera around the scene center by `degrees`
    fn orbit_camera(&mut self, degrees: f32);
}
