//! Row-parallel whole-buffer passes using Rayon.
//!
//! Used by [`transform::clear`](crate::transform::clear) and
//! [`tint::tint`](crate::tint::tint) when the `parallel` feature is enabled.
//! Rows are processed independently, so results match the sequential path
//! exactly.
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::PixelBuffer;
//! use gridpaint_ops::parallel;
//!
//! let mut img = PixelBuffer::filled(256, 256, 3u16).unwrap();
//! parallel::map_pixels(&mut img, |p| p * 2);
//! assert_eq!(img.get(255, 255).unwrap(), 6);
//! ```

use gridpaint_core::{Pixel, PixelBuffer};
use rayon::prelude::*;

/// Sets every pixel to `value`, one rayon task per row.
pub fn fill<T: Pixel>(image: &mut PixelBuffer<T>, value: T) {
    let width = image.width() as usize;
    image
        .pixels_mut()
        .par_chunks_mut(width)
        .for_each(|row| row.fill(value));
}

/// Applies `f` to every pixel in place, one rayon task per row.
pub fn map_pixels<T, F>(image: &mut PixelBuffer<T>, f: F)
where
    T: Pixel,
    F: Fn(T) -> T + Sync,
{
    let width = image.width() as usize;
    image
        .pixels_mut()
        .par_chunks_mut(width)
        .for_each(|row| {
            for p in row.iter_mut() {
                *p = f(*p);
            }
        });
}
