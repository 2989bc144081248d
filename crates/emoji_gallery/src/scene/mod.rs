//! Sprite State Store
//!
//! Separates the rest transform assigned by the last layout pass
//! ([`sprite::BaseState`]) from the engine-facing transform recomputed
//! every frame ([`sprite::RenderState`]), so layout and animation stay
//! decoupled and testable without a renderer.

pub mod sprite;
pub mod store;

pub use sprite::{BaseState, RenderState, Sprite};
pub use store::SpriteStore;
