//! # gridpaint-core
//!
//! Core types for the grid painting image engine.
//!
//! This crate provides the foundational types used by the compositor and the
//! command line front end:
//!
//! - [`PixelBuffer`] - Owned 2D grid of generic pixel values
//! - [`LayeredBuffer`] - Stack of equally sized pixel layers
//! - [`Pixel`] - Bound satisfied by every storable pixel type
//! - [`Rgba8`] - 8-bit RGBA color used for serialization and tinting
//! - [`Rect`] - Signed region parameter for drawing operations
//!
//! ## Access Policy
//!
//! Reads are strict and writes are tolerant:
//!
//! ```rust
//! use gridpaint_core::PixelBuffer;
//!
//! let mut buf: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
//! buf.set(100, 100, 7); // silently dropped
//! assert!(buf.get(100, 100).is_err());
//! ```
//!
//! Geometric algorithms rely on this: they compute coordinates that may land
//! slightly outside the buffer and write them without per-pixel guards.
//!
//! ## Crate Structure
//!
//! ```text
//! gridpaint-core (this crate)
//!    ^
//!    +-- gridpaint-ops (blit, shapes, transforms, serialization)
//!          ^
//!          +-- gridpaint-cli (scene renderer)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive serialization for [`Rgba8`] and [`Rect`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod layered;
pub mod pixel;
pub mod rect;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use layered::LayeredBuffer;
pub use pixel::{Pixel, Rgba8};
pub use rect::Rect;

/// Prelude module for convenient imports.
///
/// ```
/// use gridpaint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::layered::LayeredBuffer;
    pub use crate::pixel::{Pixel, Rgba8};
    pub use crate::rect::Rect;
}
