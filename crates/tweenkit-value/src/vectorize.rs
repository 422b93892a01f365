//! Vectorization: typed values <-> flat component vectors.
//!
//! Model:
//! - Every supported type converts to a `Vectorized` (a `VectorKind` tag plus
//!   an ordered component vector of fixed arity) and back.
//! - Component order is part of the contract; interpolation blends vectors
//!   component-wise, so all snapshots of one tween must share a kind.
//! - Devectorizing with the wrong kind or arity is a programming error and
//!   panics rather than producing a garbage value.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Affine, EdgeInsets, Point, Rect, Size, Transform3d};

/// Closed tag identifying the originating semantic type of a component vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorKind {
    Scalar,
    Point,
    Size,
    Rect,
    EdgeInsets,
    ColorRgb,
    ColorMono,
    ColorHsb,
    Affine,
    Transform3d,
}

impl VectorKind {
    /// Number of components a vector of this kind carries. Fixed per kind.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            VectorKind::Scalar => 1,
            VectorKind::Point | VectorKind::Size | VectorKind::ColorMono => 2,
            VectorKind::Rect
            | VectorKind::EdgeInsets
            | VectorKind::ColorRgb
            | VectorKind::ColorHsb => 4,
            VectorKind::Affine => 6,
            VectorKind::Transform3d => 16,
        }
    }
}

/// A typed value flattened to its ordered numeric components.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vectorized {
    kind: VectorKind,
    components: Vec<f32>,
}

impl Vectorized {
    /// Build a vector, checking the kind/arity contract.
    ///
    /// # Panics
    /// Panics when `components.len() != kind.arity()`.
    pub fn new(kind: VectorKind, components: Vec<f32>) -> Self {
        assert_eq!(
            components.len(),
            kind.arity(),
            "{kind:?} expects {} components, got {}",
            kind.arity(),
            components.len()
        );
        Self { kind, components }
    }

    #[inline]
    pub fn kind(&self) -> VectorKind {
        self.kind
    }

    #[inline]
    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// Mutable view of the components. The slice length is fixed, so the
    /// arity invariant cannot be broken through it.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [f32] {
        &mut self.components
    }
}

/// Capability to flatten into a `Vectorized` and reconstruct from one.
///
/// The engine is generic over this trait, so an apply callback always
/// receives the exact concrete type it was constructed with.
pub trait Vectorizable: Sized {
    /// Flatten into a tagged component vector.
    fn vectorize(&self) -> Vectorized;

    /// Reconstruct from a tagged component vector.
    ///
    /// # Panics
    /// Panics when `v.kind()` is not a kind this type produces.
    fn devectorize(v: &Vectorized) -> Self;
}

#[inline]
fn expect_kind(v: &Vectorized, kind: VectorKind) -> &[f32] {
    assert_eq!(
        v.kind(),
        kind,
        "cannot devectorize a {:?} vector as {kind:?}",
        v.kind()
    );
    v.components()
}

impl Vectorizable for f32 {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(VectorKind::Scalar, vec![*self])
    }

    fn devectorize(v: &Vectorized) -> Self {
        expect_kind(v, VectorKind::Scalar)[0]
    }
}

/// Integer scalars tween through f32 space and round on reconstruction.
impl Vectorizable for i32 {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(VectorKind::Scalar, vec![*self as f32])
    }

    fn devectorize(v: &Vectorized) -> Self {
        expect_kind(v, VectorKind::Scalar)[0].round() as i32
    }
}

impl Vectorizable for Point {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(VectorKind::Point, vec![self.x, self.y])
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::Point);
        Point::new(c[0], c[1])
    }
}

impl Vectorizable for Size {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(VectorKind::Size, vec![self.width, self.height])
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::Size);
        Size::new(c[0], c[1])
    }
}

impl Vectorizable for Rect {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(
            VectorKind::Rect,
            vec![
                self.origin.x,
                self.origin.y,
                self.size.width,
                self.size.height,
            ],
        )
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::Rect);
        Rect::new(c[0], c[1], c[2], c[3])
    }
}

impl Vectorizable for EdgeInsets {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(
            VectorKind::EdgeInsets,
            vec![self.top, self.left, self.bottom, self.right],
        )
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::EdgeInsets);
        EdgeInsets::new(c[0], c[1], c[2], c[3])
    }
}

impl Vectorizable for Affine {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(
            VectorKind::Affine,
            vec![self.a, self.b, self.c, self.d, self.tx, self.ty],
        )
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::Affine);
        Affine {
            a: c[0],
            b: c[1],
            c: c[2],
            d: c[3],
            tx: c[4],
            ty: c[5],
        }
    }
}

impl Vectorizable for Transform3d {
    fn vectorize(&self) -> Vectorized {
        Vectorized::new(VectorKind::Transform3d, self.m.to_vec())
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = expect_kind(v, VectorKind::Transform3d);
        let mut m = [0.0f32; 16];
        m.copy_from_slice(c);
        Transform3d { m }
    }
}

impl Vectorizable for Color {
    /// Probe the native storages in priority order: RGB, then monochrome,
    /// then HSB. The first storage the color reports decides the kind tag.
    fn vectorize(&self) -> Vectorized {
        if let Some([r, g, b, a]) = self.as_rgba() {
            return Vectorized::new(VectorKind::ColorRgb, vec![r, g, b, a]);
        }
        if let Some([white, a]) = self.as_mono() {
            return Vectorized::new(VectorKind::ColorMono, vec![white, a]);
        }
        let [h, s, b, a] = self.as_hsba();
        Vectorized::new(VectorKind::ColorHsb, vec![h, s, b, a])
    }

    fn devectorize(v: &Vectorized) -> Self {
        let c = v.components();
        match v.kind() {
            VectorKind::ColorRgb => Color::rgb(c[0], c[1], c[2], c[3]),
            VectorKind::ColorMono => Color::mono(c[0], c[1]),
            VectorKind::ColorHsb => Color::hsb(c[0], c[1], c[2], c[3]),
            kind => panic!("cannot devectorize a {kind:?} vector as a color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_component_count() {
        assert_eq!(Point::new(1.0, 2.0).vectorize().components().len(), 2);
        assert_eq!(
            Transform3d::IDENTITY.vectorize().components().len(),
            VectorKind::Transform3d.arity()
        );
    }

    #[test]
    #[should_panic]
    fn wrong_arity_rejected() {
        Vectorized::new(VectorKind::Rect, vec![1.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn wrong_kind_rejected_on_devectorize() {
        let v = Point::new(1.0, 2.0).vectorize();
        let _ = Size::devectorize(&v);
    }
}
