//! Nearest-neighbor scaling and clipped, blended copies.
//!
//! # Operations
//!
//! - [`scale`] - Resample a buffer by independent X/Y factors
//! - [`draw`] - Copy a whole source at 1:1 to an offset
//! - [`draw_region`] - Copy a source region into a destination region,
//!   scaling to fit
//!
//! # Sampling
//!
//! Scaling maps destination pixel `i` of `dst_len` to source pixel
//! `round(i / (dst_len - 1) * (src_len - 1))`, with the divisor taken as 1
//! for a single-pixel destination. The first and last destination pixels
//! therefore always sample the first and last source pixels. Rounding is
//! half-to-even.
//!
//! # Clipping
//!
//! Destination pixels that fall outside the destination buffer are skipped.
//! Source coordinates outside the source buffer read as `T::default()`.
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::{PixelBuffer, Rect};
//! use gridpaint_ops::{blend, blit};
//!
//! let tile = PixelBuffer::from_vec(2, 1, vec![1u8, 2]).unwrap();
//! let mut map: PixelBuffer<u8> = PixelBuffer::new(8, 2).unwrap();
//!
//! // Stretch the 2x1 tile over a 4x2 area at (2, 0).
//! blit::draw_region(&mut map, &tile, Rect::new(2, 0, 4, 2), tile.bounds(), blend::replace).unwrap();
//! assert_eq!(map.row(0).unwrap(), &[0, 0, 1, 1, 2, 2, 0, 0]);
//! ```

use std::borrow::Cow;

use gridpaint_core::{Error, Pixel, PixelBuffer, Rect, Result};
use tracing::{debug, trace};

/// Resamples `source` by `scale_x` x `scale_y` with nearest-neighbor sampling.
///
/// Output size is `max(1, round(width * scale_x))` x `max(1, round(height * scale_y))`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if either factor is not a positive number.
///
/// # Example
///
/// ```rust
/// use gridpaint_core::PixelBuffer;
/// use gridpaint_ops::blit::scale;
///
/// let src = PixelBuffer::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
/// let big = scale(&src, 2.0, 1.5).unwrap();
/// assert_eq!(big.dimensions(), (4, 3));
/// assert_eq!(big.get(0, 0).unwrap(), 1);
/// assert_eq!(big.get(3, 2).unwrap(), 4);
/// ```
pub fn scale<T: Pixel>(source: &PixelBuffer<T>, scale_x: f64, scale_y: f64) -> Result<PixelBuffer<T>> {
    if !(scale_x > 0.0 && scale_x.is_finite()) || !(scale_y > 0.0 && scale_y.is_finite()) {
        return Err(Error::invalid_argument(format!(
            "scale factors must be positive, got {scale_x} x {scale_y}"
        )));
    }

    let (src_w, src_h) = source.dimensions();
    let dst_w = scaled_len(src_w, scale_x);
    let dst_h = scaled_len(src_h, scale_y);
    trace!(src_w, src_h, dst_w, dst_h, "blit::scale");

    let mut out = PixelBuffer::new(dst_w as i32, dst_h as i32)?;
    if (dst_w, dst_h) == (src_w, src_h) {
        out.pixels_mut().copy_from_slice(source.pixels());
        return Ok(out);
    }

    let x_map: Vec<usize> = (0..dst_w).map(|i| nearest_index(i, dst_w, src_w)).collect();
    let src = source.pixels();
    let dst = out.pixels_mut();
    for j in 0..dst_h {
        let src_row = nearest_index(j, dst_h, src_h) * src_w as usize;
        let dst_row = j as usize * dst_w as usize;
        for (i, &sx) in x_map.iter().enumerate() {
            dst[dst_row + i] = src[src_row + sx];
        }
    }
    Ok(out)
}

/// Draws all of `source` at 1:1 scale with its top-left corner at (x, y).
///
/// Each covered destination pixel becomes `blend(existing, incoming)`.
pub fn draw<T, F>(dest: &mut PixelBuffer<T>, source: &PixelBuffer<T>, x: i32, y: i32, blend: F) -> Result<()>
where
    T: Pixel,
    F: Fn(T, T) -> T,
{
    let (w, h) = source.dimensions();
    draw_region(
        dest,
        source,
        Rect::new(x, y, w as i32, h as i32),
        source.bounds(),
        blend,
    )
}

/// Draws the `src_rect` region of `source` into the `dest_rect` region of `dest`.
///
/// The source region is extracted (coordinates outside `source` read as
/// `T::default()`), scaled to the destination size with [`scale`], and
/// blended pixel by pixel. Destination pixels outside `dest` are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if any width or height of the two
/// rectangles is below 1. Validation happens before any pixel is written.
pub fn draw_region<T, F>(
    dest: &mut PixelBuffer<T>,
    source: &PixelBuffer<T>,
    dest_rect: Rect,
    src_rect: Rect,
    blend: F,
) -> Result<()>
where
    T: Pixel,
    F: Fn(T, T) -> T,
{
    if dest_rect.width < 1 || dest_rect.height < 1 || src_rect.width < 1 || src_rect.height < 1 {
        return Err(Error::invalid_argument(format!(
            "draw regions must be at least 1x1, got dest {}x{} and source {}x{}",
            dest_rect.width, dest_rect.height, src_rect.width, src_rect.height
        )));
    }

    let (dw, dh) = (dest.width() as i32, dest.height() as i32);
    if dest_rect.x >= dw || dest_rect.y >= dh || dest_rect.right() <= 0 || dest_rect.bottom() <= 0 {
        debug!(?dest_rect, dw, dh, "blit::draw_region: destination fully clipped");
        return Ok(());
    }
    trace!(?dest_rect, ?src_rect, "blit::draw_region");

    let region: Cow<'_, PixelBuffer<T>> = if src_rect == source.bounds() {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(extract_region(source, src_rect)?)
    };

    let scaled: Cow<'_, PixelBuffer<T>> = if dest_rect.width == src_rect.width && dest_rect.height == src_rect.height {
        region
    } else {
        Cow::Owned(scale(
            &region,
            dest_rect.width as f64 / src_rect.width as f64,
            dest_rect.height as f64 / src_rect.height as f64,
        )?)
    };

    let (sw, sh) = (scaled.width() as i64, scaled.height() as i64);
    let (dx, dy) = (dest_rect.x as i64, dest_rect.y as i64);
    let (dw, dh) = (dw as i64, dh as i64);
    let i_start = (-dx).max(0);
    let i_end = sw.min(dw - dx);
    let j_start = (-dy).max(0);
    let j_end = sh.min(dh - dy);

    let src = scaled.pixels();
    let dst = dest.pixels_mut();
    for j in j_start..j_end {
        let src_row = j * sw;
        let dst_row = (dy + j) * dw + dx;
        for i in i_start..i_end {
            let d = &mut dst[(dst_row + i) as usize];
            *d = blend(*d, src[(src_row + i) as usize]);
        }
    }
    Ok(())
}

/// Copies `rect` out of `source`; cells outside `source` stay default.
fn extract_region<T: Pixel>(source: &PixelBuffer<T>, rect: Rect) -> Result<PixelBuffer<T>> {
    let mut out = PixelBuffer::new(rect.width, rect.height)?;
    if let Some(overlap) = rect.intersect(&source.bounds()) {
        let sw = source.width() as usize;
        let ow = rect.width as usize;
        let len = overlap.width as usize;
        for y in overlap.y..overlap.bottom() {
            let src = y as usize * sw + overlap.x as usize;
            let dst = (y - rect.y) as usize * ow + (overlap.x - rect.x) as usize;
            out.pixels_mut()[dst..dst + len].copy_from_slice(&source.pixels()[src..src + len]);
        }
    }
    Ok(out)
}

#[inline]
fn scaled_len(len: u32, factor: f64) -> u32 {
    let scaled = (len as f64 * factor).round_ties_even();
    scaled.clamp(1.0, i32::MAX as f64) as u32
}

#[inline]
fn nearest_index(i: u32, dst_len: u32, src_len: u32) -> usize {
    let divisor = if dst_len > 1 { (dst_len - 1) as f64 } else { 1.0 };
    let u = i as f64 / divisor;
    let index = (u * (src_len - 1) as f64).round_ties_even() as usize;
    index.min(src_len as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpaint_core::Rgba8;

    fn pattern(width: i32, height: i32) -> PixelBuffer<u32> {
        let data = (0..(width * height) as u32).collect();
        PixelBuffer::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_scale_identity() {
        let src = pattern(5, 3);
        assert_eq!(scale(&src, 1.0, 1.0).unwrap(), src);
    }

    #[test]
    fn test_scale_rejects_non_positive() {
        let src = pattern(2, 2);
        assert!(matches!(scale(&src, 0.0, 1.0), Err(Error::InvalidArgument(_))));
        assert!(scale(&src, 1.0, -2.0).is_err());
        assert!(scale(&src, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_scale_output_size_floor_is_one() {
        let src = pattern(4, 4);
        let tiny = scale(&src, 0.01, 0.01).unwrap();
        assert_eq!(tiny.dimensions(), (1, 1));
        assert_eq!(tiny.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_scale_edges_align() {
        let src = pattern(3, 3);
        for (sx, sy) in [(2.0, 2.0), (0.7, 1.3), (3.4, 0.5)] {
            let out = scale(&src, sx, sy).unwrap();
            let (w, h) = out.dimensions();
            assert_eq!(out.get(0, 0).unwrap(), 0);
            assert_eq!(out.get(w as i32 - 1, h as i32 - 1).unwrap(), 8, "{sx}x{sy}");
        }
    }

    #[test]
    fn test_scale_doubles_pixels() {
        let src = PixelBuffer::from_vec(2, 1, vec![1u8, 2]).unwrap();
        let out = scale(&src, 2.0, 1.0).unwrap();
        // u = 0, 1/3, 2/3, 1 -> round(0), round(0.33), round(0.67), round(1)
        assert_eq!(out.pixels(), &[1, 1, 2, 2]);
    }

    #[test]
    fn test_scale_ties_to_even() {
        // 3 -> 5: u = i/4, source index = round(i/2): 0, 0 (0.5), 1, 2 (1.5), 2
        let src = PixelBuffer::from_vec(3, 1, vec![10u8, 20, 30]).unwrap();
        let out = scale(&src, 5.0 / 3.0, 1.0).unwrap();
        assert_eq!(out.pixels(), &[10, 10, 20, 30, 30]);
    }

    #[test]
    fn test_draw_one_to_one() {
        let mut dest: PixelBuffer<u32> = PixelBuffer::new(4, 4).unwrap();
        let src = PixelBuffer::filled(2, 2, 7u32).unwrap();
        draw(&mut dest, &src, 1, 2, |_, b| b).unwrap();
        assert_eq!(dest.get(1, 2).unwrap(), 7);
        assert_eq!(dest.get(2, 3).unwrap(), 7);
        assert_eq!(dest.get(0, 2).unwrap(), 0);
        assert_eq!(dest.pixels().iter().filter(|&&p| p == 7).count(), 4);
    }

    #[test]
    fn test_draw_clips_negative_offset() {
        let mut dest: PixelBuffer<u32> = PixelBuffer::new(3, 3).unwrap();
        let src = pattern(3, 3);
        draw(&mut dest, &src, -1, -1, |_, b| b).unwrap();
        assert_eq!(dest.get(0, 0).unwrap(), 4);
        assert_eq!(dest.get(1, 1).unwrap(), 8);
        assert_eq!(dest.get(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_draw_clips_right_edge() {
        let mut dest: PixelBuffer<u32> = PixelBuffer::new(3, 2).unwrap();
        let src = pattern(3, 1);
        draw(&mut dest, &src, 2, 1, |_, b| b + 100).unwrap();
        assert_eq!(dest.get(2, 1).unwrap(), 100);
        // No wrap into row 0 or elsewhere.
        assert_eq!(dest.pixels().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_draw_fully_outside_is_noop() {
        let mut dest = pattern(4, 4);
        let before = dest.clone();
        let src = PixelBuffer::filled(2, 2, 99u32).unwrap();
        draw(&mut dest, &src, 4, 0, |_, b| b).unwrap();
        draw(&mut dest, &src, -2, 0, |_, b| b).unwrap();
        draw(&mut dest, &src, 0, 10, |_, b| b).unwrap();
        draw(&mut dest, &src, 0, -2, |_, b| b).unwrap();
        assert_eq!(dest, before);
    }

    #[test]
    fn test_draw_region_validation() {
        let mut dest: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
        let src: PixelBuffer<u8> = PixelBuffer::new(2, 2).unwrap();
        let err = draw_region(&mut dest, &src, Rect::new(0, 0, 0, 2), src.bounds(), |_, b| b);
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
        let bounds = dest.bounds();
        let err = draw_region(&mut dest, &src, bounds, Rect::new(0, 0, 2, -1), |_, b| b);
        assert!(err.is_err());
    }

    #[test]
    fn test_draw_region_source_outside_reads_default() {
        let mut dest = PixelBuffer::filled(3, 1, 5u8).unwrap();
        let src = PixelBuffer::from_vec(2, 1, vec![1u8, 2]).unwrap();
        draw_region(&mut dest, &src, Rect::new(0, 0, 3, 1), Rect::new(1, 0, 3, 1), |_, b| b).unwrap();
        assert_eq!(dest.pixels(), &[2, 0, 0]);
    }

    #[test]
    fn test_draw_region_scales_up() {
        let mut dest: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
        let src = PixelBuffer::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        let bounds = dest.bounds();
        draw_region(&mut dest, &src, bounds, src.bounds(), |_, b| b).unwrap();
        assert_eq!(dest.row(0).unwrap(), &[1, 1, 2, 2]);
        assert_eq!(dest.row(3).unwrap(), &[3, 3, 4, 4]);
    }

    #[test]
    fn test_draw_region_scales_down() {
        let mut dest: PixelBuffer<u32> = PixelBuffer::new(2, 2).unwrap();
        let src = pattern(4, 4);
        let bounds = dest.bounds();
        draw_region(&mut dest, &src, bounds, src.bounds(), |_, b| b).unwrap();
        assert_eq!(dest.pixels(), &[0, 3, 12, 15]);
    }

    #[test]
    fn test_draw_blend_argument_order() {
        let mut dest = PixelBuffer::filled(1, 1, Rgba8::RED).unwrap();
        let src = PixelBuffer::filled(1, 1, Rgba8::BLUE).unwrap();
        draw(&mut dest, &src, 0, 0, |existing, incoming| {
            assert_eq!(existing, Rgba8::RED);
            assert_eq!(incoming, Rgba8::BLUE);
            Rgba8::GREEN
        })
        .unwrap();
        assert_eq!(dest.get(0, 0).unwrap(), Rgba8::GREEN);
    }
}
