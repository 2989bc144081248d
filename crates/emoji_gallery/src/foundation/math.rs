//! Math utilities and types
//!
//! Provides fundamental math types for 3D sprite placement and animation.

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;
