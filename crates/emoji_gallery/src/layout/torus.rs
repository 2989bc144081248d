//! Torus surface placement
//!
//! One winding around the major circle while the minor angle makes five
//! windings, so the sprites trace a (1, 5) torus knot over the surface.

use super::{face_outward, Placement};
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Number of minor-circle windings per pass around the major circle
const MINOR_WINDINGS: f32 = 5.0;

/// Shape parameters for the torus arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Distance from the torus center to the tube center
    pub major_radius: f32,

    /// Tube radius
    pub minor_radius: f32,

    /// Uniform sprite scale
    pub sprite_scale: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: 3.0,
            minor_radius: 1.0,
            sprite_scale: 0.5,
        }
    }
}

pub(crate) fn place(params: &TorusParams, index: usize, count: usize) -> Placement {
    let n = count.max(1) as f32;
    let u = index as f32 / n * TAU;
    let v = index as f32 * (TAU * MINOR_WINDINGS / n);

    let ring = params.major_radius + params.minor_radius * v.cos();
    let position = Vec3::new(ring * u.cos(), params.minor_radius * v.sin(), ring * u.sin());
    let normal = Vec3::new(u.cos() * v.cos(), v.sin(), u.sin() * v.cos());

    Placement {
        position,
        rotation: face_outward(normal),
        scale_val: params.sprite_scale,
        billboard: false,
    }
}
