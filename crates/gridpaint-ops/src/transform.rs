//! Geometric transforms and whole-buffer fills.
//!
//! # Operations
//!
//! - [`flip_horizontally`] - Mirror left-right, in place
//! - [`flip_vertically`] - Mirror top-bottom, in place
//! - [`rotate`] - Arbitrary rotation about the buffer center
//! - [`rotate_about`] - Arbitrary rotation about a pivot
//! - [`clear`] - Set every pixel
//!
//! Flips clone the buffer and copy back mirrored; they trade a full
//! temporary copy for simplicity.
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::PixelBuffer;
//! use gridpaint_ops::transform::{flip_horizontally, flip_vertically};
//!
//! let mut img = PixelBuffer::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
//! flip_horizontally(&mut img);
//! assert_eq!(img.pixels(), &[2, 1, 4, 3]);
//! flip_vertically(&mut img);
//! assert_eq!(img.pixels(), &[4, 3, 2, 1]);
//! ```

use gridpaint_core::{Pixel, PixelBuffer};
use tracing::trace;

/// Mirrors the buffer left-right in place.
pub fn flip_horizontally<T: Pixel>(image: &mut PixelBuffer<T>) {
    let source = image.clone();
    let width = image.width() as usize;
    for (dst_row, src_row) in image
        .pixels_mut()
        .chunks_exact_mut(width)
        .zip(source.pixels().chunks_exact(width))
    {
        for (x, p) in dst_row.iter_mut().enumerate() {
            *p = src_row[width - 1 - x];
        }
    }
}

/// Mirrors the buffer top-bottom in place.
pub fn flip_vertically<T: Pixel>(image: &mut PixelBuffer<T>) {
    let source = image.clone();
    let width = image.width() as usize;
    for (dst_row, src_row) in image
        .pixels_mut()
        .chunks_exact_mut(width)
        .zip(source.pixels().chunks_exact(width).rev())
    {
        dst_row.copy_from_slice(src_row);
    }
}

/// Rotates `source` by `angle` degrees about its center.
///
/// The pivot is `((width - 1) / 2, (height - 1) / 2)`, the midpoint between
/// the first and last pixel centers. See [`rotate_about`].
pub fn rotate<T: Pixel>(source: &PixelBuffer<T>, angle: f64) -> PixelBuffer<T> {
    let center_x = (source.width() as f64 - 1.0) / 2.0;
    let center_y = (source.height() as f64 - 1.0) / 2.0;
    rotate_about(source, center_x, center_y, angle)
}

/// Rotates `source` by `angle` degrees about (center_x, center_y).
///
/// Returns a buffer of the same size. Each destination pixel is mapped back
/// through a rotation of `-angle` and samples the source pixel at the
/// truncated coordinates. Destination pixels whose sample falls outside the
/// source stay `T::default()`.
///
/// With Y pointing down, positive angles turn the picture clockwise on screen.
///
/// ```rust
/// use gridpaint_core::PixelBuffer;
/// use gridpaint_ops::transform::rotate;
///
/// let img = PixelBuffer::filled(9, 9, 1u8).unwrap();
/// let turned = rotate(&img, 45.0);
/// assert_eq!(turned.get(4, 4).unwrap(), 1); // pivot
/// assert_eq!(turned.get(0, 0).unwrap(), 0); // corner sampled from outside
/// ```
pub fn rotate_about<T: Pixel>(source: &PixelBuffer<T>, center_x: f64, center_y: f64, angle: f64) -> PixelBuffer<T> {
    trace!(center_x, center_y, angle, "transform::rotate");

    let (w, h) = source.dimensions();
    let mut out = source.clone();
    out.fill(T::default());

    let radians = angle.to_radians();
    let (sin, cos) = radians.sin_cos();
    let dst = out.pixels_mut();
    for y in 0..h {
        let dy = y as f64 - center_y;
        for x in 0..w {
            let dx = x as f64 - center_x;
            // Inverse rotation: turn the destination point back by -angle.
            let sx = (center_x + dx * cos + dy * sin) as i32;
            let sy = (center_y - dx * sin + dy * cos) as i32;
            if let Some(p) = source.get_opt(sx, sy) {
                dst[y as usize * w as usize + x as usize] = p;
            }
        }
    }
    out
}

/// Sets every pixel to `value`.
pub fn clear<T: Pixel>(image: &mut PixelBuffer<T>, value: T) {
    trace!(width = image.width(), height = image.height(), "transform::clear");

    #[cfg(feature = "parallel")]
    crate::parallel::fill(image, value);

    #[cfg(not(feature = "parallel"))]
    image.fill(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(width: i32, height: i32) -> PixelBuffer<u32> {
        let data = (0..(width * height) as u32).collect();
        PixelBuffer::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_flip_horizontally() {
        let mut img = pattern(3, 2);
        flip_horizontally(&mut img);
        assert_eq!(img.pixels(), &[2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn test_flip_vertically() {
        let mut img = pattern(2, 3);
        flip_vertically(&mut img);
        assert_eq!(img.pixels(), &[4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let original = pattern(5, 4);
        let mut img = original.clone();
        flip_horizontally(&mut img);
        flip_horizontally(&mut img);
        flip_vertically(&mut img);
        flip_vertically(&mut img);
        assert_eq!(img, original);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let img = pattern(6, 4);
        assert_eq!(rotate(&img, 0.0), img);
        assert_eq!(rotate_about(&img, 0.0, 0.0, 0.0), img);
    }

    #[test]
    fn test_rotate_keeps_size_and_pivot() {
        let img = pattern(7, 7);
        let out = rotate(&img, 30.0);
        assert_eq!(out.dimensions(), (7, 7));
        assert_eq!(out.get(3, 3).unwrap(), img.get(3, 3).unwrap());
    }

    #[test]
    fn test_rotate_corners_fall_outside() {
        let img = PixelBuffer::filled(9, 9, 1u8).unwrap();
        let out = rotate(&img, 45.0);
        for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert_eq!(out.get(x, y).unwrap(), 0, "corner {x},{y}");
        }
        assert_eq!(out.get(4, 0).unwrap(), 1);
    }

    #[test]
    fn test_rotate_about_far_pivot_moves_everything_out() {
        let img = PixelBuffer::filled(4, 4, 1u8).unwrap();
        let out = rotate_about(&img, -100.0, -100.0, 90.0);
        assert!(out.pixels().iter().all(|&p| p == 0));
        assert!(img.pixels().iter().all(|&p| p == 1));
    }

    #[test]
    fn test_clear() {
        let mut img = pattern(4, 4);
        clear(&mut img, 7);
        assert!(img.pixels().iter().all(|&p| p == 7));
    }
}
