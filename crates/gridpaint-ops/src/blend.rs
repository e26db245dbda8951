//! Stock blend callbacks.
//!
//! Every callback has the signature `(existing, incoming) -> result`, the
//! argument order expected by [`blit::draw`](crate::blit::draw),
//! [`shapes::draw_rectangle`](crate::shapes::draw_rectangle) and
//! [`shapes::fill_rectangle_blend`](crate::shapes::fill_rectangle_blend).
//!
//! - [`replace`] - Keep the incoming pixel (overwrite)
//! - [`keep`] - Keep the existing pixel
//! - [`alpha`] - Straight-alpha source-over for [`Rgba8`]
//! - [`multiply`] - Channel-wise multiply for [`Rgba8`]
//! - [`additive`] - Saturating add for [`Rgba8`]
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::Rgba8;
//! use gridpaint_ops::blend;
//!
//! let bg = Rgba8::BLUE;
//! let fg = Rgba8::RED.with_alpha(0);
//! assert_eq!(blend::alpha(bg, fg), bg);
//! assert_eq!(blend::replace(bg, fg), fg);
//! ```

use gridpaint_core::{Pixel, Rgba8};

/// Returns the incoming pixel.
#[inline]
pub fn replace<T: Pixel>(_existing: T, incoming: T) -> T {
    incoming
}

/// Returns the existing pixel.
#[inline]
pub fn keep<T: Pixel>(existing: T, _incoming: T) -> T {
    existing
}

/// Composites `incoming` over `existing` with straight alpha.
///
/// `out.a = in.a + ex.a * (1 - in.a)`, and each color channel is the
/// alpha-weighted mix divided back by `out.a`. Fully opaque sources replace,
/// fully transparent sources leave the destination untouched.
///
/// ```rust
/// use gridpaint_core::Rgba8;
/// use gridpaint_ops::blend::alpha;
///
/// let out = alpha(Rgba8::BLACK, Rgba8::WHITE.with_alpha(128));
/// assert_eq!(out, Rgba8::new(128, 128, 128, 255));
/// ```
#[inline]
pub fn alpha(existing: Rgba8, incoming: Rgba8) -> Rgba8 {
    match incoming.a {
        255 => return incoming,
        0 => return existing,
        _ => {}
    }

    let sa = incoming.a as u32;
    let da = existing.a as u32;
    let inv = 255 - sa;
    let out_a = sa + (da * inv + 127) / 255;
    if out_a == 0 {
        return Rgba8::TRANSPARENT;
    }

    let den = out_a * 255;
    let mix = |s: u8, d: u8| -> u8 {
        let num = s as u32 * sa * 255 + d as u32 * da * inv;
        ((num + den / 2) / den).min(255) as u8
    };
    Rgba8::new(
        mix(incoming.r, existing.r),
        mix(incoming.g, existing.g),
        mix(incoming.b, existing.b),
        out_a.min(255) as u8,
    )
}

/// Multiplies every channel, `a * b / 255` with rounding.
#[inline]
pub fn multiply(existing: Rgba8, incoming: Rgba8) -> Rgba8 {
    Rgba8::new(
        mul_div255(existing.r, incoming.r),
        mul_div255(existing.g, incoming.g),
        mul_div255(existing.b, incoming.b),
        mul_div255(existing.a, incoming.a),
    )
}

/// Adds color channels with saturation; alpha takes the larger value.
#[inline]
pub fn additive(existing: Rgba8, incoming: Rgba8) -> Rgba8 {
    Rgba8::new(
        existing.r.saturating_add(incoming.r),
        existing.g.saturating_add(incoming.g),
        existing.b.saturating_add(incoming.b),
        existing.a.max(incoming.a),
    )
}

/// `a * b / 255` rounded to nearest, using the shift-add approximation.
///
/// Exact for all `u8` inputs.
#[inline]
pub(crate) fn mul_div255(a: u8, b: u8) -> u8 {
    let t = a as u32 * b as u32 + 0x80;
    (((t >> 8) + t) >> 8) as u8
}
