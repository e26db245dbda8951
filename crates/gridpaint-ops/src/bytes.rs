//! RGBA8 byte serialization.
//!
//! Buffers of [`Rgba8`] serialize to a flat byte sequence, four bytes per
//! pixel in channel order R, G, B, A, pixels in row-major order.
//!
//! # Row Order
//!
//! Buffers are top-left origin. Texture formats with a bottom-left origin
//! expect the last row first; pass [`RowOrder::BottomUp`] to
//! [`to_byte_array_oriented`] / [`from_byte_array`] for those consumers
//! instead of flipping the buffer by hand.
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::{PixelBuffer, Rgba8};
//! use gridpaint_ops::bytes::to_byte_array;
//!
//! let img = PixelBuffer::from_vec(2, 1, vec![Rgba8::RED, Rgba8::BLUE]).unwrap();
//! assert_eq!(to_byte_array(&img), vec![255, 0, 0, 255, 0, 0, 255, 255]);
//! ```

use std::str::FromStr;

use gridpaint_core::{Error, PixelBuffer, Rgba8, Result};
use tracing::trace;

/// Bytes per serialized pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Order in which rows are written to or read from a byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// First row is the top of the image.
    #[default]
    TopDown,
    /// First row is the bottom of the image.
    BottomUp,
}

impl FromStr for RowOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top-down" | "topdown" | "top" => Ok(Self::TopDown),
            "bottom-up" | "bottomup" | "bottom" => Ok(Self::BottomUp),
            other => Err(Error::invalid_argument(format!("unknown row order '{other}'"))),
        }
    }
}

/// Serializes the whole buffer, top row first.
pub fn to_byte_array(image: &PixelBuffer<Rgba8>) -> Vec<u8> {
    to_byte_array_oriented(image, RowOrder::TopDown)
}

/// Serializes the whole buffer in the given row order.
pub fn to_byte_array_oriented(image: &PixelBuffer<Rgba8>, order: RowOrder) -> Vec<u8> {
    let width = image.width() as usize;
    let mut out = Vec::with_capacity(image.pixel_count() * BYTES_PER_PIXEL);
    let rows = image.pixels().chunks_exact(width);
    let push_row = |out: &mut Vec<u8>, row: &[Rgba8]| {
        for p in row {
            out.extend_from_slice(&p.to_array());
        }
    };
    match order {
        RowOrder::TopDown => rows.for_each(|row| push_row(&mut out, row)),
        RowOrder::BottomUp => rows.rev().for_each(|row| push_row(&mut out, row)),
    }
    out
}

/// Serializes the `width x height` region at (x, y), top row first.
///
/// The region is clipped to the buffer before serializing.
///
/// # Errors
///
/// - [`Error::RegionOutOfRange`] if (x, y) lies outside the buffer
/// - [`Error::InvalidArgument`] if the clipped width or height is below 1
///
/// # Example
///
/// ```rust
/// use gridpaint_core::{PixelBuffer, Rgba8};
/// use gridpaint_ops::bytes::to_byte_array_region;
///
/// let img = PixelBuffer::filled(4, 4, Rgba8::WHITE).unwrap();
/// // 10x10 request at (2, 2) clips to 2x2.
/// let bytes = to_byte_array_region(&img, 2, 2, 10, 10).unwrap();
/// assert_eq!(bytes.len(), 2 * 2 * 4);
/// ```
pub fn to_byte_array_region(image: &PixelBuffer<Rgba8>, x: i32, y: i32, width: i32, height: i32) -> Result<Vec<u8>> {
    let (bw, bh) = (image.width() as i32, image.height() as i32);
    if x < 0 || y < 0 || x >= bw || y >= bh {
        return Err(Error::region_out_of_range(x, y, width, height, image.dimensions()));
    }
    let w = width.min(bw - x);
    let h = height.min(bh - y);
    if w < 1 || h < 1 {
        return Err(Error::invalid_argument(format!(
            "region ({x}, {y}, {width}x{height}) is empty after clipping to {bw}x{bh}"
        )));
    }
    trace!(x, y, w, h, "bytes::to_byte_array_region");

    let mut out = Vec::with_capacity(w as usize * h as usize * BYTES_PER_PIXEL);
    for row in y..y + h {
        let start = (row * bw + x) as usize;
        for p in &image.pixels()[start..start + w as usize] {
            out.extend_from_slice(&p.to_array());
        }
    }
    Ok(out)
}

/// Builds a buffer from interleaved RGBA8 bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for sizes below 1 and
/// [`Error::InvalidArgument`] if `bytes.len() != width * height * 4`.
pub fn from_byte_array(width: i32, height: i32, bytes: &[u8], order: RowOrder) -> Result<PixelBuffer<Rgba8>> {
    let mut image = PixelBuffer::new(width, height)?;
    let expected = image.pixel_count() * BYTES_PER_PIXEL;
    if bytes.len() != expected {
        return Err(Error::invalid_argument(format!(
            "expected {expected} bytes for {width}x{height} RGBA8, got {}",
            bytes.len()
        )));
    }

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let h = height as usize;
    for (i, src_row) in bytes.chunks_exact(row_bytes).enumerate() {
        let y = match order {
            RowOrder::TopDown => i,
            RowOrder::BottomUp => h - 1 - i,
        };
        let start = y * width as usize;
        let dst_row = &mut image.pixels_mut()[start..start + width as usize];
        for (p, c) in dst_row.iter_mut().zip(src_row.chunks_exact(BYTES_PER_PIXEL)) {
            *p = Rgba8::new(c[0], c[1], c[2], c[3]);
        }
    }
    Ok(image)
}
