//! Error types for gridpaint-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure the image engine reports:
//! - Buffer construction and resize (dimension checks)
//! - Strict reads ([`PixelBuffer::get`](crate::PixelBuffer::get))
//! - Argument validation in compositor operations
//! - Region validation during byte serialization
//!
//! Out-of-range *writes* are not errors. They are dropped silently by
//! [`PixelBuffer::set`](crate::PixelBuffer::set) and skipped by the clipping
//! loops in `gridpaint-ops`.
//!
//! # Usage
//!
//! ```rust
//! use gridpaint_core::{Error, Result};
//!
//! fn check(width: i32, height: i32) -> Result<()> {
//!     if width < 1 || height < 1 {
//!         return Err(Error::invalid_dimension(width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0, 4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer and compositor operations.
///
/// # Categories
///
/// - **Dimension errors**: [`InvalidDimension`](Error::InvalidDimension), [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Bounds errors**: [`IndexOutOfRange`](Error::IndexOutOfRange), [`RegionOutOfRange`](Error::RegionOutOfRange)
/// - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Width or height below 1 on construction or resize.
    #[error("invalid dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimension {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// A parameter was missing, malformed, or named an unsupported mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Read access outside the buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridpaint_core::Error;
    ///
    /// let err = Error::index_out_of_range(12, 3, 10, 10);
    /// assert!(err.to_string().contains("12"));
    /// ```
    #[error("pixel ({x}, {y}) out of range for buffer {width}x{height}")]
    IndexOutOfRange {
        /// X coordinate that was read
        x: i32,
        /// Y coordinate that was read
        y: i32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// A requested region starts outside the buffer or clips to nothing.
    #[error(
        "region ({x}, {y}, {width}x{height}) out of range for buffer {buffer_width}x{buffer_height}"
    )]
    RegionOutOfRange {
        /// Region X origin
        x: i32,
        /// Region Y origin
        y: i32,
        /// Region width
        width: i32,
        /// Region height
        height: i32,
        /// Buffer width
        buffer_width: u32,
        /// Buffer height
        buffer_height: u32,
    },

    /// Two buffers that must agree in size do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First buffer width
        a_width: u32,
        /// First buffer height
        a_height: u32,
        /// Second buffer width
        b_width: u32,
        /// Second buffer height
        b_height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimension`] error.
    #[inline]
    pub fn invalid_dimension(width: i32, height: i32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::IndexOutOfRange {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::RegionOutOfRange`] error.
    #[inline]
    pub fn region_out_of_range(x: i32, y: i32, width: i32, height: i32, buffer: (u32, u32)) -> Self {
        Self::RegionOutOfRange {
            x,
            y,
            width,
            height,
            buffer_width: buffer.0,
            buffer_height: buffer.1,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::RegionOutOfRange { .. })
    }

    /// Returns `true` if this is an argument or dimension validation error.
    #[inline]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::InvalidDimension { .. } | Self::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_invalid_dimension() {
        let err = Error::invalid_dimension(0, -3);
        assert!(err.to_string().contains("0x-3"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_region_out_of_range() {
        let err = Error::region_out_of_range(9, 2, 4, 4, (8, 8));
        let msg = err.to_string();
        assert!(msg.contains("(9, 2, 4x4)"));
        assert!(msg.contains("8x8"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_layer_size_mismatch() {
        // A 16x8 layer stack receiving a 4x4 plane.
        let err = Error::dimension_mismatch((16, 8), (4, 4));
        assert_eq!(
            err,
            Error::DimensionMismatch {
                a_width: 16,
                a_height: 8,
                b_width: 4,
                b_height: 4,
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("16x8"), "{msg}");
        assert!(msg.contains("4x4"), "{msg}");
        assert!(err.is_validation_error());
        assert!(!err.is_bounds_error());
    }
}
