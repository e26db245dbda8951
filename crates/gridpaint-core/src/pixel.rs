//! Pixel bound and the stock 8-bit RGBA color.
//!
//! # Types
//!
//! - [`Pixel`] - Bound for values stored in a [`PixelBuffer`](crate::PixelBuffer)
//! - [`Rgba8`] - 8-bit straight-alpha color, channel order R, G, B, A
//!
//! # Design
//!
//! The engine never calls methods on a pixel. It only copies values,
//! default-initializes new storage, and hands pairs of values to
//! caller-supplied blend functions. Any `Copy + Default` type qualifies:
//!
//! ```
//! use gridpaint_core::PixelBuffer;
//!
//! // Tile indices, heights, flags...
//! let ids: PixelBuffer<u16> = PixelBuffer::new(8, 8).unwrap();
//! let mask: PixelBuffer<bool> = PixelBuffer::new(8, 8).unwrap();
//! # let _ = (ids, mask);
//! ```
//!
//! # Memory Layout
//!
//! [`Rgba8`] uses `#[repr(C)]`, so a `&[Rgba8]` has the same layout as an
//! interleaved RGBA8 byte slice.

use std::fmt;

/// Values storable in a pixel buffer.
///
/// Blanket-implemented for every `Copy + Default + Send + Sync + 'static`
/// type. `Send + Sync` lets whole-buffer passes run on a rayon pool.
pub trait Pixel: Copy + Default + Send + Sync + 'static {}

impl<T> Pixel for T where T: Copy + Default + Send + Sync + 'static {}

/// 8-bit RGBA color with straight (non-premultiplied) alpha.
///
/// The default value is fully transparent black `(0, 0, 0, 0)`.
///
/// # Example
///
/// ```
/// use gridpaint_core::Rgba8;
///
/// let c = Rgba8::new(255, 128, 0, 255);
/// assert_eq!(c.to_array(), [255, 128, 0, 255]);
/// assert_eq!(Rgba8::from([255, 128, 0, 255]), c);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `true` if alpha is zero.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba8({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
