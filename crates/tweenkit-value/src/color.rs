//! Color with three mutually exclusive native storages (RGB, monochrome, HSB).
//!
//! UI toolkits do not store colors in one canonical format, so vectorization
//! probes the storages in a fixed priority order: RGB first, then monochrome,
//! then HSB as the fallback. The chosen representation is recorded in the
//! resulting `VectorKind` tag and devectorization switches on that tag, so a
//! color always round-trips through the storage it was created with.

use serde::{Deserialize, Serialize};

/// A color value. Components are normalized to [0,1].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// Red/green/blue/alpha storage.
    Rgb { r: f32, g: f32, b: f32, a: f32 },
    /// Grayscale storage (white level + alpha).
    Mono { white: f32, a: f32 },
    /// Hue/saturation/brightness/alpha storage.
    Hsb { h: f32, s: f32, b: f32, a: f32 },
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color::Rgb { r, g, b, a }
    }

    pub fn mono(white: f32, a: f32) -> Self {
        Color::Mono { white, a }
    }

    pub fn hsb(h: f32, s: f32, b: f32, a: f32) -> Self {
        Color::Hsb { h, s, b, a }
    }

    /// RGBA components, if this color natively stores RGB.
    pub fn as_rgba(&self) -> Option<[f32; 4]> {
        match self {
            Color::Rgb { r, g, b, a } => Some([*r, *g, *b, *a]),
            _ => None,
        }
    }

    /// White/alpha components, if this color natively stores grayscale.
    pub fn as_mono(&self) -> Option<[f32; 2]> {
        match self {
            Color::Mono { white, a } => Some([*white, *a]),
            _ => None,
        }
    }

    /// HSBA components. Native for HSB storage; other storages convert.
    /// This is the last probe in the vectorization cascade and always succeeds.
    pub fn as_hsba(&self) -> [f32; 4] {
        match self {
            Color::Hsb { h, s, b, a } => [*h, *s, *b, *a],
            Color::Mono { white, a } => [0.0, 0.0, *white, *a],
            Color::Rgb { r, g, b, a } => {
                let (h, s, v) = rgb_to_hsb(*r, *g, *b);
                [h, s, v, *a]
            }
        }
    }
}

/// RGB -> HSB, hue normalized to [0,1).
fn rgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (((g - b) / delta).rem_euclid(6.0)) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_order_is_native_storage_first() {
        assert!(Color::rgb(0.2, 0.4, 0.6, 1.0).as_rgba().is_some());
        assert!(Color::rgb(0.2, 0.4, 0.6, 1.0).as_mono().is_none());
        assert!(Color::mono(0.5, 1.0).as_rgba().is_none());
        assert!(Color::mono(0.5, 1.0).as_mono().is_some());
        assert!(Color::hsb(0.1, 0.2, 0.3, 1.0).as_rgba().is_none());
        assert!(Color::hsb(0.1, 0.2, 0.3, 1.0).as_mono().is_none());
    }

    #[test]
    fn hsba_fallback_converts() {
        // Pure red: hue 0, full saturation, full brightness.
        let [h, s, b, a] = Color::rgb(1.0, 0.0, 0.0, 1.0).as_hsba();
        assert_eq!((h, s, b, a), (0.0, 1.0, 1.0, 1.0));

        // Grayscale maps to zero hue/saturation at the white level.
        let [h, s, b, _] = Color::mono(0.25, 1.0).as_hsba();
        assert_eq!((h, s, b), (0.0, 0.0, 0.25));
    }
}
