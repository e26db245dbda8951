//! A stack of equally sized pixel layers.
//!
//! Layers are stored back to back in one allocation:
//!
//! ```text
//! index = layer * width * height + y * width + x
//! ```
//!
//! Each layer behaves like a [`PixelBuffer`]: reads are strict, writes are
//! tolerant on the index *within the layer*, so a stray write never bleeds
//! into a neighbouring layer.
//!
//! ```rust
//! use gridpaint_core::LayeredBuffer;
//!
//! let mut stack: LayeredBuffer<u8> = LayeredBuffer::new(4, 4, 3).unwrap();
//! stack.set(1, 1, 2, 9);
//! assert_eq!(stack.get(1, 1, 2).unwrap(), 9);
//! assert_eq!(stack.get(1, 1, 0).unwrap(), 0);
//! ```

use crate::buffer::validate_dimensions;
use crate::{Error, Pixel, PixelBuffer, Result};

/// Owned 3D grid: `depth` layers of `width x height` pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct LayeredBuffer<T: Pixel> {
    data: Vec<T>,
    width: u32,
    height: u32,
    depth: u32,
}

impl<T: Pixel> LayeredBuffer<T> {
    /// Creates a stack with every pixel set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is below 1 and
    /// [`Error::InvalidArgument`] if `depth < 1`.
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self> {
        let (w, h) = validate_dimensions(width, height)?;
        if depth < 1 {
            return Err(Error::invalid_argument(format!(
                "layer count must be at least 1, got {depth}"
            )));
        }
        Ok(Self {
            data: vec![T::default(); w as usize * h as usize * depth as usize],
            width: w,
            height: h,
            depth: depth as u32,
        })
    }

    /// Returns the layer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the layer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of layers.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    fn layer_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn has_layer(&self, layer: i32) -> bool {
        layer >= 0 && (layer as u32) < self.depth
    }

    /// Returns the pixel at (x, y) on `layer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for coordinates outside the layer
    /// and [`Error::InvalidArgument`] for a missing layer.
    pub fn get(&self, x: i32, y: i32, layer: i32) -> Result<T> {
        if !self.has_layer(layer) {
            return Err(Error::invalid_argument(format!(
                "layer {layer} out of range 0..{}",
                self.depth
            )));
        }
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(Error::index_out_of_range(x, y, self.width, self.height));
        }
        let index = layer as usize * self.layer_len() + y as usize * self.width as usize + x as usize;
        Ok(self.data[index])
    }

    /// Writes the pixel at (x, y) on `layer`; out-of-range writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, layer: i32, value: T) {
        if !self.has_layer(layer) {
            return;
        }
        let in_layer = y as i64 * self.width as i64 + x as i64;
        if in_layer < 0 || in_layer as usize >= self.layer_len() {
            return;
        }
        let index = layer as usize * self.layer_len() + in_layer as usize;
        self.data[index] = value;
    }

    /// Copies one layer out as a standalone [`PixelBuffer`].
    pub fn layer(&self, layer: i32) -> Result<PixelBuffer<T>> {
        if !self.has_layer(layer) {
            return Err(Error::invalid_argument(format!(
                "layer {layer} out of range 0..{}",
                self.depth
            )));
        }
        let start = layer as usize * self.layer_len();
        PixelBuffer::from_vec(
            self.width as i32,
            self.height as i32,
            self.data[start..start + self.layer_len()].to_vec(),
        )
    }

    /// Replaces one layer with the contents of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `source` is not `width x height`.
    pub fn set_layer(&mut self, layer: i32, source: &PixelBuffer<T>) -> Result<()> {
        if !self.has_layer(layer) {
            return Err(Error::invalid_argument(format!(
                "layer {layer} out of range 0..{}",
                self.depth
            )));
        }
        if source.dimensions() != (self.width, self.height) {
            return Err(Error::dimension_mismatch(
                (self.width, self.height),
                source.dimensions(),
            ));
        }
        let len = self.layer_len();
        let start = layer as usize * len;
        self.data[start..start + len].copy_from_slice(source.pixels());
        Ok(())
    }

    /// Returns the raw storage, layer after layer.
    #[inline]
    pub fn pixels(&self) -> &[T] {
        &self.data
    }
}

impl<T: Pixel> std::fmt::Debug for LayeredBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .finish()
    }
}
