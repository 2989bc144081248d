//! Fibonacci sphere placement
//!
//! Golden-spiral distribution: y descends evenly from pole to pole while
//! the azimuth advances by the golden angle per sprite, giving a nearly
//! uniform covering of the surface for any count.

use super::{face_outward, Placement};
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Shape parameters for the sphere arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Sphere radius
    pub radius: f32,

    /// Uniform sprite scale
    pub sprite_scale: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 3.0,
            sprite_scale: 0.6,
        }
    }
}

pub(crate) fn place(params: &SphereParams, index: usize, count: usize) -> Placement {
    // Golden angle, pi * (sqrt(5) - 1)
    let golden_angle = PI * (5.0_f32.sqrt() - 1.0);

    let denom = count.saturating_sub(1).max(1) as f32;
    let y = 1.0 - (index as f32 / denom) * 2.0;
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = index as f32 * golden_angle;

    let unit = Vec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y);

    Placement {
        position: unit * params.radius,
        rotation: face_outward(unit),
        scale_val: params.sprite_scale,
        billboard: false,
    }
}
