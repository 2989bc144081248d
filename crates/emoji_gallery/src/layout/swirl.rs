//! Helical swirl placement
//!
//! Sprites climb a helix around the vertical axis, each facing outward
//! along the horizontal radial direction.

use super::{face_outward, Placement};
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Shape parameters for the swirl arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwirlParams {
    /// Number of full revolutions from bottom to top
    pub turns: f32,

    /// Horizontal distance from the axis
    pub radius: f32,

    /// Total vertical extent of the helix
    pub height_factor: f32,

    /// Uniform sprite scale
    pub sprite_scale: f32,
}

impl Default for SwirlParams {
    fn default() -> Self {
        Self {
            turns: 3.0,
            radius: 3.0,
            height_factor: 5.0,
            sprite_scale: 0.7,
        }
    }
}

pub(crate) fn place(params: &SwirlParams, index: usize, count: usize) -> Placement {
    let t = index as f32 / count.saturating_sub(1).max(1) as f32;
    let angle = t * params.turns * TAU;

    let position = Vec3::new(
        params.radius * angle.cos(),
        (t - 0.5) * params.height_factor,
        params.radius * angle.sin(),
    );
    let outward = Vec3::new(position.x, 0.0, position.z);

    Placement {
        position,
        rotation: face_outward(outward),
        scale_val: params.sprite_scale,
        billboard: false,
    }
}
