//! One visual element and its two-transform state model

use crate::foundation::math::{Quat, Vec3};
use crate::render::TextureHandle;

/// Rest transform assigned by the last layout pass
///
/// Written only when an arrangement is applied; every per-frame
/// animation reads from this snapshot rather than from the previous
/// frame's animated state.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseState {
    /// World-space rest position
    pub position: Vec3,

    /// Rest orientation (identity for billboards)
    pub rotation: Quat,

    /// Scalar rest scale used as the reference for uniform zooming
    pub scale_val: f32,

    /// Rest scale vector; the Z component survives billboard zooming
    pub scale: Vec3,

    /// Per-sprite random constant in [0, 2*pi), drawn at layout refresh,
    /// added inside periodic animation functions so sprites do not pulse
    /// in lockstep
    pub phase_offset: f32,
}

impl Default for BaseState {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale_val: 1.0,
            scale: Vec3::new(1.0, 1.0, 1.0),
            phase_offset: 0.0,
        }
    }
}

/// Engine-facing transform actually drawn this frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// World-space position
    pub position: Vec3,

    /// Orientation submitted to the host
    pub rotation: Quat,

    /// Scale vector submitted to the host
    pub scale: Vec3,
}

impl RenderState {
    /// Snapshot the rest transform
    #[must_use]
    pub fn from_base(base: &BaseState) -> Self {
        Self {
            position: base.position,
            rotation: base.rotation,
            scale: base.scale,
        }
    }
}

/// One textured quad in the gallery
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Texture owned by the host; the sprite only keeps the handle
    pub texture: TextureHandle,

    /// Rest transform from the last layout pass
    pub base: BaseState,

    /// Transform recomputed from `base` every frame
    pub render: RenderState,

    /// Accumulated spin in degrees, the single stateful animation value.
    /// Wave-rotation and idle rotation both add to it; a layout pass
    /// resets it.
    pub spin_deg: f32,

    /// Whether the host keeps this sprite facing the camera
    pub is_billboard: bool,

    /// Hidden sprites are pooled, not destroyed
    pub visible: bool,
}

impl Sprite {
    /// Create a visible billboard sprite at the rest origin
    #[must_use]
    pub fn new(texture: TextureHandle) -> Self {
        let base = BaseState::default();
        let render = RenderState::from_base(&base);
        Self {
            texture,
            base,
            render,
            spin_deg: 0.0,
            is_billboard: true,
            visible: true,
        }
    }
}
