//! Per-frame animation composition
//!
//! Two ordered layers run for every visible sprite: the node layer
//! first, then the idle layer on top of its result. Both read from the
//! same base state each frame, so position and scale cannot drift. The
//! one exception is rotation: wave-rotation and idle rotation accumulate
//! into [`Sprite::spin_deg`] frame over frame.

use crate::animation::{AnimationConfig, NodeMode};
use crate::foundation::math::{Quat, Vec3, Vector3};
use crate::scene::{Sprite, SpriteStore};

/// Degrees per second contributed by a full-strength rotation wave
const WAVE_ROTATION_RATE: f32 = 30.0;

/// Smallest allowed zoom factor, keeps wave zoom from inverting sprites
const MIN_ZOOM_FACTOR: f32 = 0.1;

/// Advance every visible sprite to time `t`, with `dt` seconds since the
/// previous frame.
///
/// Sprites are processed in index order; invisible sprites are skipped
/// entirely.
pub fn animate(store: &mut SpriteStore, config: &AnimationConfig, t: f32, dt: f32) {
    for (index, sprite) in store.sprites_mut().iter_mut().enumerate() {
        if !sprite.visible {
            continue;
        }
        apply_node_layer(sprite, index, config, t, dt);
        apply_idle_layer(sprite, config, t, dt);
        sprite.render.rotation = composed_rotation(sprite);
    }
}

/// Node layer: reset to base, then offset one property by a per-sprite
/// wave.
fn apply_node_layer(sprite: &mut Sprite, index: usize, config: &AnimationConfig, t: f32, dt: f32) {
    sprite.render.position = sprite.base.position;
    sprite.render.scale = sprite.base.scale;

    let node = &config.node;
    if !node.enabled || node.mode == NodeMode::None {
        return;
    }

    let phase = sprite.base.phase_offset;
    let wave = (index as f32 * node.frequency + t * node.speed * 2.0 + phase).sin() * node.amplitude;

    match node.mode {
        NodeMode::None => {}
        NodeMode::WavePosition => {
            // Second wave decorrelated via 0.7x index frequency and
            // 1.5x time speed.
            let second =
                (index as f32 * node.frequency * 0.7 + t * node.speed * 1.5 + phase).cos() * node.amplitude;
            sprite.render.position = sprite.base.position + Vec3::new(wave, second, 0.0);
        }
        NodeMode::WaveZoom => {
            let factor = (1.0 + wave * 0.5).max(MIN_ZOOM_FACTOR);
            sprite.render.scale = zoomed_scale(sprite, factor);
        }
        NodeMode::WaveRotation => {
            sprite.spin_deg += wave * WAVE_ROTATION_RATE * dt;
        }
    }
}

/// Idle layer: pattern-modulated spin and zoom on top of the node
/// layer's result.
fn apply_idle_layer(sprite: &mut Sprite, config: &AnimationConfig, t: f32, dt: f32) {
    let phase = sprite.base.phase_offset;

    if config.idle_rotation.enabled {
        let factor = config
            .idle_rotation
            .pattern
            .evaluate(t * config.idle_speed_factor + phase);
        sprite.spin_deg += config.idle_rotation.rate_deg_per_sec * factor * dt;
    }

    if config.idle_zoom.enabled {
        let factor = config
            .idle_zoom
            .pattern
            .evaluate(t * config.idle_speed_factor * 1.5 + phase);
        // Applied to the base scale, not the node layer's result: when
        // both zooms are active the idle layer wins on X and Y.
        let zoom = 1.0 + config.idle_zoom.amplitude * factor;
        sprite.render.scale = zoomed_scale(sprite, zoom);
    }
}

/// Uniform zoom around the rest scale; billboards keep their base Z
/// scale.
fn zoomed_scale(sprite: &Sprite, factor: f32) -> Vec3 {
    let scaled = sprite.base.scale_val * factor;
    let z = if sprite.is_billboard {
        sprite.base.scale.z
    } else {
        scaled
    };
    Vec3::new(scaled, scaled, z)
}

/// Base orientation composed with the accumulated spin: about the facing
/// axis for billboards, about local Y for surface-oriented sprites.
fn composed_rotation(sprite: &Sprite) -> Quat {
    let axis = if sprite.is_billboard {
        Vector3::z_axis()
    } else {
        Vector3::y_axis()
    };
    sprite.base.rotation * Quat::from_axis_angle(&axis, sprite.spin_deg.to_radians())
}
