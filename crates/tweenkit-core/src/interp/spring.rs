//! Closed-form damped harmonic oscillator easing.
//!
//! Progress is reinterpreted as elapsed time into the oscillation, not a
//! [0,1]-normalized curve, so the output is not pinned to 1.0 at progress
//! 1.0: springs may overshoot or undershoot the nominal endpoint.

use super::InterpolationFunction;
use crate::error::TweenError;

/// Spring curve: displacement of a damped harmonic oscillator released at
/// `x0 = -1` toward equilibrium at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    damping: f32,
    mass: f32,
    stiffness: f32,
    velocity: f32,
}

impl Spring {
    /// Build a spring. Damping, mass, and stiffness must all be positive;
    /// a non-positive value is a configuration error, rejected here rather
    /// than surfacing as NaNs mid-animation.
    pub fn new(damping: f32, mass: f32, stiffness: f32, velocity: f32) -> Result<Self, TweenError> {
        if damping <= 0.0 || mass <= 0.0 || stiffness <= 0.0 {
            return Err(TweenError::InvalidSpring {
                damping,
                mass,
                stiffness,
            });
        }
        Ok(Self {
            damping,
            mass,
            stiffness,
            velocity,
        })
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

impl Default for Spring {
    /// Gentle underdamped preset: damping 10, mass 1, stiffness 100, no
    /// initial velocity.
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            velocity: 0.0,
        }
    }
}

impl InterpolationFunction for Spring {
    fn apply(&self, progress: f32) -> f32 {
        // Solved in f64: the overdamped branch multiplies a decaying envelope
        // by a growing cosh, and the f32 range is too narrow for the product
        // once t passes the nominal endpoint.
        let t = f64::from(progress);
        let beta = f64::from(self.damping) / (2.0 * f64::from(self.mass));
        let omega0 = (f64::from(self.stiffness) / f64::from(self.mass)).sqrt();
        let x0 = -1.0f64;
        let v = f64::from(self.velocity);

        let envelope = (-beta * t).exp();
        let displaced = if beta < omega0 {
            // Underdamped
            let omega1 = (omega0 * omega0 - beta * beta).sqrt();
            1.0 + envelope
                * (x0 * (omega1 * t).cos() + ((beta * x0 + v) / omega1) * (omega1 * t).sin())
        } else if beta == omega0 {
            // Critically damped
            1.0 + envelope * (x0 + (beta * x0 + v) * t)
        } else {
            // Overdamped
            let omega2 = (beta * beta - omega0 * omega0).sqrt();
            1.0 + envelope
                * (x0 * (omega2 * t).cosh() + ((beta * x0 + v) / omega2) * (omega2 * t).sinh())
        };
        displaced as f32
    }
}
