//! tweenkit-core: progress-driven interpolation of typed UI values
//! (engine-agnostic)
//!
//! An [`Interpolator`] owns vectorized snapshots of two or more typed
//! endpoint values, maps externally supplied progress through an
//! interpolation curve, blends component-wise, and hands the reconstructed
//! typed value to an apply callback. Ramps over a fixed duration are driven
//! by the host's frame clock through [`Interpolator::tick`].

pub mod config;
pub mod engine;
pub mod error;
pub mod interp;

pub use config::Config;
pub use engine::Interpolator;
pub use error::TweenError;
pub use interp::{Ease, InterpolationFunction, Spring};
pub use tweenkit_value::{
    Affine, Color, EdgeInsets, Point, Rect, Size, Transform3d, VectorKind, Vectorizable, Vectorized,
};
