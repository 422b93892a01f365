//! Basic cubic easing curves.

use serde::{Deserialize, Serialize};

use super::InterpolationFunction;

/// Basic interpolation curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration below the midpoint, deceleration above it.
    EaseInOut,
}

impl InterpolationFunction for Ease {
    fn apply(&self, progress: f32) -> f32 {
        match self {
            Ease::Linear => progress,
            Ease::EaseIn => progress * progress * progress,
            Ease::EaseOut => {
                let p = progress - 1.0;
                p * p * p + 1.0
            }
            Ease::EaseInOut => {
                if progress < 0.5 {
                    4.0 * progress * progress * progress
                } else {
                    let p = 2.0 * progress - 2.0;
                    0.5 * p * p * p + 1.0
                }
            }
        }
    }
}
