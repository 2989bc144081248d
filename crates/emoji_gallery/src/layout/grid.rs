//! Flat grid placement
//!
//! Sprites go into rows and columns in row-major order, centered on the
//! origin, all billboarded toward the camera with zero rest rotation.

use super::Placement;
use crate::foundation::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Shape parameters for the grid arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Number of columns; rows are derived from the sprite count
    pub num_cols: usize,

    /// Distance between neighboring cell centers
    pub cell_size: f32,

    /// Uniform sprite scale
    pub sprite_scale: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            num_cols: 5,
            cell_size: 1.2,
            sprite_scale: 1.0,
        }
    }
}

pub(crate) fn place(params: &GridParams, index: usize, count: usize) -> Placement {
    let cols = params.num_cols.max(1);
    let rows = (count + cols - 1) / cols;

    let col = (index % cols) as f32;
    let row = (index / cols) as f32;
    let half_cols = cols as f32 / 2.0;
    let half_rows = rows as f32 / 2.0;

    Placement {
        position: Vec3::new(
            (col - half_cols + 0.5) * params.cell_size,
            (row - half_rows + 0.5) * params.cell_size,
            0.0,
        ),
        rotation: Quat::identity(),
        scale_val: params.sprite_scale,
        billboard: true,
    }
}
