//! Periodic modulation shapes shared by the idle layers

use serde::{Deserialize, Serialize};

/// Shape of a periodic modulation factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePattern {
    /// Plain sine in [-1, 1]
    Sine,
    /// Rectified sine in [0, 1]
    Pulse,
    /// Sine remapped to [0, 1]
    Ramp,
}

impl WavePattern {
    /// Evaluate the pattern at `angle` radians
    #[must_use]
    pub fn evaluate(self, angle: f32) -> f32 {
        match self {
            Self::Sine => angle.sin(),
            Self::Pulse => angle.sin().abs(),
            Self::Ramp => (angle.sin() + 1.0) / 2.0,
        }
    }
}
