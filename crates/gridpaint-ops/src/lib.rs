//! # gridpaint-ops
//!
//! Compositing, rasterization and transform operations over
//! [`PixelBuffer`](gridpaint_core::PixelBuffer)s.
//!
//! Every operation is a free function. Destinations are taken as
//! `&mut PixelBuffer<T>` and modified in place; sources are borrowed
//! read-only and never consumed.
//!
//! # Modules
//!
//! - [`blit`] - Nearest-neighbor scaling and clipped, blended copies
//! - [`shapes`] - Lines, rectangles, circles, ellipses, checkerboards
//! - [`transform`] - Flips, arbitrary rotation, clear
//! - [`bytes`] - RGBA8 byte serialization
//! - [`tint`] - Per-channel color multiply
//! - [`blend`] - Stock blend callbacks for [`Rgba8`](gridpaint_core::Rgba8)
//!
//! # Blend Callbacks
//!
//! Operations that combine pixels take a callback
//! `Fn(existing, incoming) -> result`. The engine never assumes a default:
//!
//! ```rust
//! use gridpaint_core::{PixelBuffer, Rgba8};
//! use gridpaint_ops::{blend, blit, shapes};
//!
//! let mut canvas = PixelBuffer::filled(4, 4, Rgba8::RED).unwrap();
//! shapes::draw_rectangle(&mut canvas, 1, 1, 2, 2, Rgba8::GREEN, blend::replace);
//!
//! let stamp = PixelBuffer::filled(2, 2, Rgba8::BLUE.with_alpha(128)).unwrap();
//! blit::draw(&mut canvas, &stamp, 0, 0, blend::alpha).unwrap();
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Whole-buffer passes ([`transform::clear`],
//!   [`tint::tint`]) run on the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
pub mod blit;
pub mod bytes;
pub mod shapes;
pub mod tint;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use bytes::RowOrder;
pub use gridpaint_core::{Error, Result};
pub use tint::TintMode;
