//! Post-Process Selector
//!
//! A single-active state machine over the full-screen color grades. The
//! host binds whatever [`PostProcessState::active_grade`] returns;
//! toggling always rebinds from scratch, so at most one effect is ever
//! active. The GLSL the host compiles lives in [`shaders`].

pub mod shaders;

/// Sepia intensity change per key step
pub const SEPIA_STEP: f32 = 0.1;

/// The color grade the host should have bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorGrade {
    /// No full-screen shader bound
    None,
    /// Luma-weighted grayscale
    Grayscale,
    /// Sepia tint with blend amount
    Sepia {
        /// Blend between the original color (0.0) and full sepia (1.0)
        amount: f32,
    },
}

/// Requested post-processing toggles
///
/// Mutated by key input, read whenever it changes to rebind the active
/// shader. Bloom and afterimage are carried as inert flags: the
/// multi-pass pipeline they would need is not implemented.
#[derive(Debug, Clone, PartialEq)]
pub struct PostProcessState {
    /// Grayscale requested
    pub grayscale_enabled: bool,

    /// Sepia requested; wins over grayscale when both are set
    pub sepia_enabled: bool,

    /// Sepia blend amount in [0, 1]
    pub sepia_amount: f32,

    /// Inert toggle, no visual effect
    pub bloom_enabled: bool,

    /// Inert toggle, no visual effect
    pub afterimage_enabled: bool,

    /// Frame blend factor the afterimage pass would use
    pub afterimage_damp: f32,
}

impl Default for PostProcessState {
    fn default() -> Self {
        Self {
            grayscale_enabled: false,
            sepia_enabled: false,
            sepia_amount: 1.0,
            bloom_enabled: false,
            afterimage_enabled: false,
            afterimage_damp: 0.85,
        }
    }
}

impl PostProcessState {
    /// Flip the grayscale request
    pub fn toggle_grayscale(&mut self) {
        self.grayscale_enabled = !self.grayscale_enabled;
    }

    /// Flip the sepia request
    pub fn toggle_sepia(&mut self) {
        self.sepia_enabled = !self.sepia_enabled;
    }

    /// Step the sepia amount by `delta`, clamped to [0, 1]
    pub fn adjust_sepia(&mut self, delta: f32) {
        self.sepia_amount = (self.sepia_amount + delta).clamp(0.0, 1.0);
    }

    /// The single effect that should be bound right now.
    /// Sepia has fixed priority when both grades are requested.
    #[must_use]
    pub fn active_grade(&self) -> ColorGrade {
        if self.sepia_enabled {
            ColorGrade::Sepia {
                amount: self.sepia_amount.clamp(0.0, 1.0),
            }
        } else if self.grayscale_enabled {
            ColorGrade::Grayscale
        } else {
            ColorGrade::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sepia_wins_when_both_requested() {
        let mut state = PostProcessState::default();
        state.toggle_grayscale();
        assert_eq!(state.active_grade(), ColorGrade::Grayscale);

        state.toggle_sepia();
        assert_eq!(state.active_grade(), ColorGrade::Sepia { amount: 1.0 });
    }

    #[test]
    fn test_disabling_sepia_reactivates_grayscale() {
        let mut state = PostProcessState::default();
        state.toggle_grayscale();
        state.toggle_sepia();
        state.toggle_sepia();
        assert_eq!(state.active_grade(), ColorGrade::Grayscale);

        state.toggle_grayscale();
        assert_eq!(state.active_grade(), ColorGrade::None);
    }

    #[test]
    fn test_sepia_steps_clamp_at_both_ends() {
        let mut state = PostProcessState {
            sepia_amount: 0.5,
            ..PostProcessState::default()
        };
        state.adjust_sepia(SEPIA_STEP);
        assert_relative_eq!(state.sepia_amount, 0.6);
        state.adjust_sepia(SEPIA_STEP);
        assert_relative_eq!(state.sepia_amount, 0.7);

        for _ in 0..10 {
            state.adjust_sepia(SEPIA_STEP);
        }
        assert_relative_eq!(state.sepia_amount, 1.0);

        for _ in 0..20 {
            state.adjust_sepia(-SEPIA_STEP);
        }
        assert_relative_eq!(state.sepia_amount, 0.0);
    }

    #[test]
    fn test_default_intensity_already_saturated() {
        // From the default of 1.0 two increments stay at 1.0.
        let mut state = PostProcessState::default();
        state.toggle_sepia();
        state.adjust_sepia(SEPIA_STEP);
        state.adjust_sepia(SEPIA_STEP);
        assert_eq!(state.active_grade(), ColorGrade::Sepia { amount: 1.0 });
    }

    #[test]
    fn test_inert_toggles_do_not_affect_the_grade() {
        let mut state = PostProcessState::default();
        state.bloom_enabled = true;
        state.afterimage_enabled = true;
        assert_eq!(state.active_grade(), ColorGrade::None);
    }
}
