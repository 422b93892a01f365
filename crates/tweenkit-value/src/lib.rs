//! tweenkit-value: typed UI values and the flat-vector representation (core, engine-agnostic)

pub mod color;
pub mod geometry;
pub mod vectorize;

pub use color::Color;
pub use geometry::{Affine, EdgeInsets, Point, Rect, Size, Transform3d};
pub use vectorize::{VectorKind, Vectorizable, Vectorized};
