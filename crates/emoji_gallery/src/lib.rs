//! # Emoji Gallery
//!
//! Core logic for an interactive demo that arranges textured emoji
//! billboards into 3D patterns and animates them.
//!
//! ## Features
//!
//! - **Layout Engine**: deterministic grid, swirl, torus and sphere
//!   placements for any sprite count
//! - **Animation Compositor**: per-frame node and idle animation layers
//!   composed over immutable base transforms
//! - **Post-Processing Selection**: single-active grayscale/sepia color
//!   grades with host-compiled GLSL sources
//! - **Asset Pipeline**: emoji set files, codepoint-derived texture
//!   names, cached texture loading with graceful fallback
//!
//! The actual window, camera, input loop and GPU work belong to a host
//! rendering engine reached through the [`render::RenderHost`] trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use emoji_gallery::prelude::*;
//!
//! # fn run(host: &mut dyn RenderHost) {
//! let config = GalleryConfig::default();
//! let mut gallery = EmojiGallery::new(config, host);
//!
//! gallery.handle_command(host, Command::SelectArrangement(ArrangementKind::Torus));
//! gallery.update(host, 0.016, 0.016);
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod layout;
pub mod scene;
pub mod animation;
pub mod postfx;
pub mod assets;
pub mod render;
pub mod input;
pub mod config;

mod gallery;

pub use gallery::EmojiGallery;

/// Common imports for gallery users
pub mod prelude {
    pub use crate::{
        EmojiGallery,
        animation::{AnimationConfig, NodeMode, WavePattern},
        config::{Config, GalleryConfig},
        foundation::math::{Quat, Vec3},
        input::{command_for, Command, KeyInput},
        layout::{Arrangement, ArrangementKind},
        postfx::{ColorGrade, PostProcessState},
        render::{RenderHost, TextureHandle},
        scene::{RenderState, Sprite, SpriteStore},
    };
}
