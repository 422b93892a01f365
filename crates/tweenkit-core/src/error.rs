//! Error types for tween construction.
//!
//! All failures surface at construction time, before a callback is wired
//! into a live UI. Once built, the engine is infallible: progress input is
//! clamped, never rejected.

use tweenkit_value::VectorKind;

/// Construction-time contract violations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TweenError {
    /// Fewer than two endpoint values were supplied.
    #[error("at least two keyframe values are required, got {count}")]
    TooFewKeyframes { count: usize },

    /// Keyframes did not all vectorize to the same kind, so component-wise
    /// blending is undefined.
    #[error("keyframes must share one vector kind: expected {expected:?}, found {found:?}")]
    MixedKinds {
        expected: VectorKind,
        found: VectorKind,
    },

    /// Spring parameters must all be positive.
    #[error(
        "spring parameters must be positive: damping={damping}, mass={mass}, stiffness={stiffness}"
    )]
    InvalidSpring {
        damping: f32,
        mass: f32,
        stiffness: f32,
    },
}
