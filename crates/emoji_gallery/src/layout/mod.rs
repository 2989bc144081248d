//! Layout Engine - deterministic 3D sprite placement
//!
//! Each arrangement is a pure function of `(index, count, parameters)`:
//! re-running a placement with identical inputs reproduces identical
//! output. The engine only computes [`Placement`] values; writing them
//! into sprite base states is the job of
//! [`crate::scene::SpriteStore::apply_arrangement`].

pub mod grid;
pub mod sphere;
pub mod swirl;
pub mod torus;

pub use grid::GridParams;
pub use sphere::SphereParams;
pub use swirl::SwirlParams;
pub use torus::TorusParams;

use crate::foundation::math::{Quat, Vec3, Vector3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Base transform assigned to one sprite by a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// World-space rest position
    pub position: Vec3,

    /// Rest orientation (identity for billboards)
    pub rotation: Quat,

    /// Uniform rest scale
    pub scale_val: f32,

    /// Whether the sprite keeps facing the camera instead of using
    /// `rotation`
    pub billboard: bool,
}

/// The active placement pattern, including its shape parameters
///
/// A closed enum so that adding a pattern forces every dispatch site to
/// handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arrangement {
    /// Flat rows and columns of camera-facing sprites
    Grid(GridParams),
    /// Helical ribbon around the vertical axis
    Swirl(SwirlParams),
    /// Sprites wound around a torus surface
    Torus(TorusParams),
    /// Fibonacci distribution over a sphere surface
    Sphere(SphereParams),
}

impl Arrangement {
    /// Compute the placement for sprite `index` out of `count` active
    /// sprites.
    #[must_use]
    pub fn place(&self, index: usize, count: usize) -> Placement {
        match self {
            Self::Grid(params) => grid::place(params, index, count),
            Self::Swirl(params) => swirl::place(params, index, count),
            Self::Torus(params) => torus::place(params, index, count),
            Self::Sphere(params) => sphere::place(params, index, count),
        }
    }

    /// Which pattern family this arrangement belongs to
    #[must_use]
    pub const fn kind(&self) -> ArrangementKind {
        match self {
            Self::Grid(_) => ArrangementKind::Grid,
            Self::Swirl(_) => ArrangementKind::Swirl,
            Self::Torus(_) => ArrangementKind::Torus,
            Self::Sphere(_) => ArrangementKind::Sphere,
        }
    }
}

/// Pattern family selector, without shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrangementKind {
    /// Flat grid of billboards
    Grid,
    /// Helical swirl
    Swirl,
    /// Torus surface
    Torus,
    /// Sphere surface
    Sphere,
}

impl ArrangementKind {
    /// Whether the camera slowly orbits while this pattern is active.
    /// The flat grid is viewed head-on; the 3D surfaces are orbited.
    #[must_use]
    pub const fn orbits_camera(self) -> bool {
        !matches!(self, Self::Grid)
    }
}

/// Orientation for a sprite sitting on a 3D surface, facing along
/// `outward`.
///
/// An up-axis-stabilized look-at followed by a fixed +90 degree
/// correction about the local X axis. After the correction the sprite's
/// local +Y axis points along `outward`; without it the quad would lie
/// tangent to the surface.
pub(crate) fn face_outward(outward: Vec3) -> Quat {
    let dir = if outward.norm_squared() > 1e-12 {
        outward.normalize()
    } else {
        Vec3::z()
    };
    // Degenerate at the poles where the outward vector is collinear
    // with world up.
    let up = if dir.y.abs() > 0.999 { Vec3::z() } else { Vec3::y() };
    let facing = Quat::face_towards(&dir, &up);
    facing * Quat::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2)
}
