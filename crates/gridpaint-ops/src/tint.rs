//! Per-channel color tinting for [`Rgba8`] buffers.
//!
//! Both modes multiply every channel (alpha included) by the matching channel
//! of the tint color, scaled back into `0..=255`:
//!
//! - [`TintMode::Alpha`] - `p * c / 255`, truncating
//! - [`TintMode::Multiply`] - `p * c / 255`, rounded with a shift-add
//!   fixed-point approximation
//!
//! Modes arriving as numbers or strings (scene files, command lines) are
//! validated on conversion:
//!
//! ```rust
//! use gridpaint_ops::TintMode;
//!
//! assert_eq!(TintMode::try_from(1u8).unwrap(), TintMode::Multiply);
//! assert!(TintMode::try_from(7u8).is_err());
//! assert_eq!("alpha".parse::<TintMode>().unwrap(), TintMode::Alpha);
//! ```

use std::str::FromStr;

use gridpaint_core::{Error, PixelBuffer, Rgba8};
use tracing::trace;

use crate::blend::mul_div255;

/// How [`tint`] combines each pixel with the tint color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TintMode {
    /// Straight scaled multiply, `p * c / 255` truncated.
    #[default]
    Alpha,
    /// Fixed-point multiply, `p * c / 255` rounded to nearest.
    Multiply,
}

impl TryFrom<u8> for TintMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Alpha),
            1 => Ok(Self::Multiply),
            other => Err(Error::invalid_argument(format!("unsupported tint mode {other}"))),
        }
    }
}

impl FromStr for TintMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alpha" => Ok(Self::Alpha),
            "multiply" | "mul" => Ok(Self::Multiply),
            other => Err(Error::invalid_argument(format!("unsupported tint mode '{other}'"))),
        }
    }
}

impl TintMode {
    /// Applies this mode to a single pixel.
    #[inline]
    pub fn apply(self, p: Rgba8, color: Rgba8) -> Rgba8 {
        let f = match self {
            Self::Alpha => scaled_mul,
            Self::Multiply => mul_div255,
        };
        Rgba8::new(f(p.r, color.r), f(p.g, color.g), f(p.b, color.b), f(p.a, color.a))
    }
}

/// Tints every pixel of `image` in place.
///
/// ```rust
/// use gridpaint_core::{PixelBuffer, Rgba8};
/// use gridpaint_ops::tint::{tint, TintMode};
///
/// let mut img = PixelBuffer::filled(2, 2, Rgba8::WHITE).unwrap();
/// tint(&mut img, Rgba8::new(255, 0, 128, 255), TintMode::Multiply);
/// assert_eq!(img.get(0, 0).unwrap(), Rgba8::new(255, 0, 128, 255));
/// ```
pub fn tint(image: &mut PixelBuffer<Rgba8>, color: Rgba8, mode: TintMode) {
    trace!(?color, ?mode, "tint::tint");

    #[cfg(feature = "parallel")]
    crate::parallel::map_pixels(image, |p| mode.apply(p, color));

    #[cfg(not(feature = "parallel"))]
    image.map_pixels(|p| mode.apply(p, color));
}

#[inline]
fn scaled_mul(a: u8, b: u8) -> u8 {
    (a as u32 * b as u32 / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_tint_is_identity() {
        let c = Rgba8::new(12, 200, 99, 180);
        assert_eq!(TintMode::Alpha.apply(c, Rgba8::WHITE), c);
        assert_eq!(TintMode::Multiply.apply(c, Rgba8::WHITE), c);
    }

    #[test]
    fn test_modes_differ_in_rounding() {
        // 128 * 128 / 255 = 64.25 -> both 64; 200 * 200 / 255 = 156.86
        let p = Rgba8::new(128, 200, 0, 255);
        let c = Rgba8::new(128, 200, 255, 255);
        assert_eq!(TintMode::Alpha.apply(p, c), Rgba8::new(64, 156, 0, 255));
        assert_eq!(TintMode::Multiply.apply(p, c), Rgba8::new(64, 157, 0, 255));
    }

    #[test]
    fn test_tint_affects_alpha() {
        let mut img = PixelBuffer::filled(1, 1, Rgba8::WHITE).unwrap();
        tint(&mut img, Rgba8::new(255, 255, 255, 0), TintMode::Alpha);
        assert_eq!(img.get(0, 0).unwrap(), Rgba8::new(255, 255, 255, 0));
    }

    #[test]
    fn test_tint_whole_buffer() {
        let mut img = PixelBuffer::filled(5, 3, Rgba8::new(100, 100, 100, 255)).unwrap();
        tint(&mut img, Rgba8::new(0, 255, 51, 255), TintMode::Alpha);
        assert!(img.pixels().iter().all(|&p| p == Rgba8::new(0, 100, 20, 255)));
    }

    #[test]
    fn test_mode_conversions() {
        assert_eq!(TintMode::try_from(0u8).unwrap(), TintMode::Alpha);
        assert!(matches!(TintMode::try_from(2u8), Err(Error::InvalidArgument(_))));
        assert_eq!("MULTIPLY".parse::<TintMode>().unwrap(), TintMode::Multiply);
        assert!("screen".parse::<TintMode>().is_err());
    }
}
