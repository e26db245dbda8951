//! Signed rectangle used as a region parameter for drawing operations.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Unlike a stored image bound, a drawing region may start at negative
//! coordinates or carry a negative width/height (a rectangle dragged up and
//! to the left). [`Rect::normalized`] folds the sign back into the origin.
//!
//! # Usage
//!
//! ```rust
//! use gridpaint_core::Rect;
//!
//! let rect = Rect::new(10, 20, -4, 3).normalized();
//! assert_eq!(rect, Rect::new(6, 20, 4, 3));
//! assert!(rect.contains(6, 22));
//! assert!(!rect.contains(10, 22));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// Left/top edges are inclusive, right/bottom edges exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels (may be negative before normalization)
    pub width: i32,
    /// Height in pixels (may be negative before normalization)
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// ```rust
    /// use gridpaint_core::Rect;
    ///
    /// let rect = Rect::from_size(64, 32);
    /// assert_eq!((rect.x, rect.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    ///
    /// Saturates at the `i32` range; no buffer extends that far.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    ///
    /// Saturates like [`right`](Self::right).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns `true` if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the rectangle with negative width/height folded into the origin.
    ///
    /// A width of `-4` at `x = 10` covers columns 6..10, the same pixels as a
    /// width of `4` at `x = 6`. An origin that would fall below `i32::MIN`
    /// is clamped there and the extent shrinks so the far edge stays put.
    #[inline]
    pub fn normalized(&self) -> Rect {
        let (x, width) = fold_extent(self.x, self.width);
        let (y, height) = fold_extent(self.y, self.height);
        Rect::new(x, y, width, height)
    }

    /// Returns the intersection with another rectangle, or `None` if disjoint.
    ///
    /// Both rectangles are normalized first.
    ///
    /// ```rust
    /// use gridpaint_core::Rect;
    ///
    /// let a = Rect::new(-5, -5, 10, 10);
    /// let b = Rect::from_size(8, 8);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(0, 0, 5, 5)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();
        let x = a.x.max(b.x);
        let y = a.y.max(b.y);
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

/// Moves a negative extent into the origin.
fn fold_extent(origin: i32, extent: i32) -> (i32, i32) {
    if extent >= 0 {
        return (origin, extent);
    }
    let start = origin.saturating_add(extent);
    let len = (origin as i64 - start as i64).min(i32::MAX as i64);
    (start, len as i32)
}

impl From<(i32, i32, i32, i32)> for Rect {
    #[inline]
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}
