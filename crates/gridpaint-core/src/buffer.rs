//! The owned pixel buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored in a single `Vec<T>`, **row-major**, top-to-bottom,
//! with the origin at the top-left corner:
//!
//! ```text
//! index = y * width + x
//!
//! [p(0,0) p(1,0) p(2,0) ...]  ← Row 0
//! [p(0,1) p(1,1) p(2,1) ...]  ← Row 1
//! ...
//! ```
//!
//! `data.len() == width * height` holds at all times. Changing the size
//! goes through [`PixelBuffer::resize`], which reallocates and copies the
//! overlapping region.
//!
//! # Access Policy
//!
//! | Operation | Out of range |
//! |-----------|--------------|
//! | [`get`](PixelBuffer::get) | `Err(IndexOutOfRange)` |
//! | [`get_opt`](PixelBuffer::get_opt) | `None` |
//! | [`set`](PixelBuffer::set) | dropped if the *linear* index is out of range |
//!
//! `set` checks only the linear index, so a column just past the right edge
//! lands on the first pixel of the next row. Drawing code depends on writes
//! never failing; use [`contains`](PixelBuffer::contains) when an exact
//! clip is needed.
//!
//! # Usage
//!
//! ```rust
//! use gridpaint_core::{PixelBuffer, Rgba8};
//!
//! let mut img = PixelBuffer::filled(16, 16, Rgba8::WHITE).unwrap();
//! img.set(3, 4, Rgba8::RED);
//! assert_eq!(img.get(3, 4).unwrap(), Rgba8::RED);
//!
//! let copy = img.clone(); // deep copy
//! img.set(3, 4, Rgba8::BLUE);
//! assert_eq!(copy.get(3, 4).unwrap(), Rgba8::RED);
//! ```

use crate::{Error, Pixel, Rect, Result};

/// Owned, fixed-size 2D grid of pixel values.
///
/// Cloning copies the pixel storage; two buffers never alias.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer<T: Pixel> {
    data: Vec<T>,
    width: u32,
    height: u32,
}

impl<T: Pixel> PixelBuffer<T> {
    /// Creates a buffer with every pixel set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width < 1` or `height < 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridpaint_core::PixelBuffer;
    ///
    /// let buf: PixelBuffer<u32> = PixelBuffer::new(32, 16).unwrap();
    /// assert_eq!(buf.dimensions(), (32, 16));
    /// assert!(PixelBuffer::<u32>::new(0, 16).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::filled(width, height, T::default())
    }

    /// Creates a buffer with every pixel set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Result<Self> {
        let (w, h) = validate_dimensions(width, height)?;
        Ok(Self {
            data: vec![value; w as usize * h as usize],
            width: w,
            height: h,
        })
    }

    /// Creates a buffer from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for sizes below 1 and
    /// [`Error::InvalidArgument`] if `data.len() != width * height`.
    pub fn from_vec(width: i32, height: i32, data: Vec<T>) -> Result<Self> {
        let (w, h) = validate_dimensions(width, height)?;
        let expected = w as usize * h as usize;
        if data.len() != expected {
            return Err(Error::invalid_argument(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                w,
                h,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width: w,
            height: h,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns a rectangle covering the entire buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width as i32, self.height as i32)
    }

    /// Returns `true` if (x, y) lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Returns the linear index `y * width + x` if it falls inside the storage.
    ///
    /// This is the tolerant check used by [`set`](Self::set): the column is
    /// not validated on its own.
    #[inline]
    pub fn linear_index(&self, x: i32, y: i32) -> Option<usize> {
        let index = y as i64 * self.width as i64 + x as i64;
        if index >= 0 && (index as usize) < self.data.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if (x, y) is outside the buffer.
    /// Reads are never clamped.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<T> {
        self.get_opt(x, y)
            .ok_or_else(|| Error::index_out_of_range(x, y, self.width, self.height))
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_opt(&self, x: i32, y: i32) -> Option<T> {
        if self.contains(x, y) {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Writes the pixel at (x, y), dropping writes whose linear index is out of range.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(index) = self.linear_index(x, y) {
            self.data[index] = value;
        }
    }

    /// Rebuilds the buffer at a new size.
    ///
    /// The overlapping region is copied from offset (0, 0); pixels outside
    /// the old bounds start at `T::default()`, pixels outside the new
    /// bounds are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is below 1.
    /// The buffer is untouched on error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridpaint_core::PixelBuffer;
    ///
    /// let mut buf = PixelBuffer::filled(2, 2, 9u8).unwrap();
    /// buf.resize(3, 1).unwrap();
    /// assert_eq!(buf.pixels(), &[9, 9, 0]);
    /// ```
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let (w, h) = validate_dimensions(width, height)?;
        if (w, h) == (self.width, self.height) {
            return Ok(());
        }

        let mut data = vec![T::default(); w as usize * h as usize];
        let copy_w = self.width.min(w) as usize;
        let copy_h = self.height.min(h) as usize;
        for y in 0..copy_h {
            let src = y * self.width as usize;
            let dst = y * w as usize;
            data[dst..dst + copy_w].copy_from_slice(&self.data[src..src + copy_w]);
        }

        self.data = data;
        self.width = w;
        self.height = h;
        Ok(())
    }

    /// Changes the width, keeping the height.
    pub fn set_width(&mut self, width: i32) -> Result<()> {
        self.resize(width, self.height as i32)
    }

    /// Changes the height, keeping the width.
    pub fn set_height(&mut self, height: i32) -> Result<()> {
        self.resize(self.width as i32, height)
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Returns the raw row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[T] {
        &self.data
    }

    /// Returns the raw row-major pixel slice mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns row `y`, or `None` if it is out of range.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.data.get(start..start + self.width as usize)
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, T)> + '_ {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &p)| ((i % width) as u32, (i / width) as u32, p))
    }

    /// Applies a function to each pixel in place.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for p in self.data.iter_mut() {
            *p = f(*p);
        }
    }

    /// Consumes the buffer and returns its pixel storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Pixel> std::fmt::Debug for PixelBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel", &std::any::type_name::<T>())
            .finish()
    }
}

pub(crate) fn validate_dimensions(width: i32, height: i32) -> Result<(u32, u32)> {
    if width < 1 || height < 1 {
        return Err(Error::invalid_dimension(width, height));
    }
    Ok((width as u32, height as u32))
}
