//! Animation Compositor configuration and per-frame composition
//!
//! One immutable [`AnimationConfig`] value describes every toggle; key
//! handling replaces the whole value instead of mutating shared flags.
//! The compositor itself lives in [`compositor`].

pub mod compositor;
pub mod pattern;

pub use compositor::animate;
pub use pattern::WavePattern;

use serde::{Deserialize, Serialize};

/// Global animation toggles and parameters, read every frame
///
/// Replaced wholesale on each toggle event; the compositor never
/// observes a half-updated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Idle rotation layer
    pub idle_rotation: IdleRotation,

    /// Idle zoom layer
    pub idle_zoom: IdleZoom,

    /// Shared time scale for the idle patterns; rotation patterns run at
    /// this factor, zoom patterns at 1.5x of it
    pub idle_speed_factor: f32,

    /// Per-node wave layer
    pub node: NodeAnimation,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            idle_rotation: IdleRotation::default(),
            idle_zoom: IdleZoom::default(),
            idle_speed_factor: 2.0,
            node: NodeAnimation::default(),
        }
    }
}

impl AnimationConfig {
    /// Copy with idle rotation flipped
    #[must_use]
    pub const fn with_idle_rotation_toggled(mut self) -> Self {
        self.idle_rotation.enabled = !self.idle_rotation.enabled;
        self
    }

    /// Copy with idle zoom flipped
    #[must_use]
    pub const fn with_idle_zoom_toggled(mut self) -> Self {
        self.idle_zoom.enabled = !self.idle_zoom.enabled;
        self
    }

    /// Copy with the node animation mode advanced one step in the cycle
    #[must_use]
    pub const fn with_next_node_mode(mut self) -> Self {
        self.node.mode = self.node.mode.next();
        self
    }
}

/// Idle rotation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleRotation {
    /// Layer toggle
    pub enabled: bool,

    /// Shape of the speed modulation
    pub pattern: WavePattern,

    /// Peak rotation rate in degrees per second
    pub rate_deg_per_sec: f32,
}

impl Default for IdleRotation {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: WavePattern::Sine,
            rate_deg_per_sec: 30.0,
        }
    }
}

/// Idle zoom settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleZoom {
    /// Layer toggle
    pub enabled: bool,

    /// Shape of the zoom modulation
    pub pattern: WavePattern,

    /// Peak deviation from the rest scale (0.1 = +/-10%)
    pub amplitude: f32,
}

impl Default for IdleZoom {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: WavePattern::Sine,
            amplitude: 0.1,
        }
    }
}

/// Per-node wave animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAnimation {
    /// Layer toggle
    pub enabled: bool,

    /// Which property the wave drives
    pub mode: NodeMode,

    /// Wave amplitude
    pub amplitude: f32,

    /// Index frequency; spreads the wave across neighboring sprites
    pub frequency: f32,

    /// Time speed multiplier
    pub speed: f32,
}

impl Default for NodeAnimation {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: NodeMode::WavePosition,
            amplitude: 0.5,
            frequency: 1.0,
            speed: 1.0,
        }
    }
}

/// What the node-level wave animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeMode {
    /// Layer disabled even when `enabled` is set
    None,
    /// Wave offsets the position in the XY plane
    WavePosition,
    /// Wave scales the sprite around its rest scale
    WaveZoom,
    /// Wave drives an accumulating spin
    WaveRotation,
}

impl NodeMode {
    /// Next mode in the fixed cycle used by the `n` key
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::WavePosition,
            Self::WavePosition => Self::WaveZoom,
            Self::WaveZoom => Self::WaveRotation,
            Self::WaveRotation => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_mode_cycle_wraps_around() {
        let mut mode = NodeMode::None;
        let expected = [
            NodeMode::WavePosition,
            NodeMode::WaveZoom,
            NodeMode::WaveRotation,
            NodeMode::None,
        ];
        for step in expected {
            mode = mode.next();
            assert_eq!(mode, step);
        }
    }

    #[test]
    fn test_toggles_produce_new_values_without_cross_talk() {
        let config = AnimationConfig::default();
        let toggled = config.with_idle_rotation_toggled();
        assert!(!toggled.idle_rotation.enabled);
        assert_eq!(toggled.idle_zoom, config.idle_zoom);
        assert_eq!(toggled.node, config.node);
        // The original value is untouched.
        assert!(config.idle_rotation.enabled);
    }
}
