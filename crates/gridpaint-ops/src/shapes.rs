//! Geometric primitive rasterization.
//!
//! # Operations
//!
//! - [`draw_line`] - Bresenham line, endpoints inclusive
//! - [`draw_rectangle`] - Blended one-pixel border
//! - [`fill_rectangle`], [`fill_rectangle_blend`] - Solid block
//! - [`draw_circle`], [`fill_circle`] - Midpoint circle / scanline fill
//! - [`draw_ellipse`], [`fill_ellipse`] - Midpoint ellipse / membership fill
//! - [`checkerboard`] - Two-color tiled pattern
//!
//! # Clipping
//!
//! Lines, circle outlines and ellipse outlines write through
//! [`PixelBuffer::set`], which drops writes whose *linear* index is out of
//! range. A point past the right edge of one row may therefore land at the
//! start of the next. Rectangle borders, ellipse fills and checkerboards clip
//! exactly. [`fill_rectangle`] keeps a wider window: see its docs.
//!
//! # Example
//!
//! ```rust
//! use gridpaint_core::{PixelBuffer, Rgba8};
//! use gridpaint_ops::{blend, shapes};
//!
//! let mut img: PixelBuffer<Rgba8> = PixelBuffer::new(32, 32).unwrap();
//! shapes::fill_rectangle(&mut img, 0, 0, 32, 32, Rgba8::WHITE);
//! shapes::draw_line(&mut img, 0, 0, 31, 31, Rgba8::BLACK);
//! shapes::draw_circle(&mut img, 16, 16, 10, Rgba8::RED).unwrap();
//! shapes::draw_rectangle(&mut img, 4, 4, 24, 24, Rgba8::BLUE, blend::replace);
//! ```

use gridpaint_core::{Error, Pixel, PixelBuffer, Rect, Result};
use tracing::trace;

/// Draws a line from (x1, y1) to (x2, y2), both endpoints included.
///
/// Integer Bresenham; every visited pixel is written with the same tolerant
/// policy as [`PixelBuffer::set`] and no further bounds checks. Steps whose
/// linear index cannot reach the buffer are skipped without being walked,
/// so endpoints anywhere in the `i32` range are cheap.
///
/// ```rust
/// use gridpaint_core::PixelBuffer;
/// use gridpaint_ops::shapes::draw_line;
///
/// let mut img: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
/// draw_line(&mut img, i32::MIN, i32::MIN, i32::MAX, i32::MAX, 1);
/// assert_eq!(img.get(3, 3).unwrap(), 1);
/// ```
pub fn draw_line<T: Pixel>(dest: &mut PixelBuffer<T>, x1: i32, y1: i32, x2: i32, y2: i32, value: T) {
    line_wide(dest, x1 as i64, y1 as i64, x2 as i64, y2 as i64, value);
}

/// Step `i` along the major axis lands on minor offset
/// `floor((2 * i * minor + major) / (2 * major))`, which is the pixel the
/// error-term Bresenham walk visits (ties step toward the end point).
fn line_wide<T: Pixel>(dest: &mut PixelBuffer<T>, x1: i64, y1: i64, x2: i64, y2: i64, value: T) {
    let (adx, ady) = ((x2 - x1).abs(), (y2 - y1).abs());
    let sx: i64 = if x1 < x2 { 1 } else { -1 };
    let sy: i64 = if y1 < y2 { 1 } else { -1 };
    let x_major = adx >= ady;
    let (major, minor) = if x_major { (adx, ady) } else { (ady, adx) };
    if major == 0 {
        plot(dest, x1, y1, value);
        return;
    }

    let w = dest.width() as i128;
    // Linear index growth per major step, scaled by `major`.
    let slope = if x_major {
        (sx * major) as i128 + sy as i128 * w * minor as i128
    } else {
        (sx * minor) as i128 + sy as i128 * w * major as i128
    };
    let start = y1 as i128 * w + x1 as i128;
    let Some((first, last)) = reachable_steps(start, slope, major, w, dest.pixel_count() as i128) else {
        trace!(x1, y1, x2, y2, "shapes::draw_line: fully clipped");
        return;
    };

    let (major_w, minor_w) = (major as i128, minor as i128);
    for i in first..=last {
        let m = ((2 * i as i128 * minor_w + major_w) / (2 * major_w)) as i64;
        let (x, y) = if x_major { (x1 + sx * i, y1 + sy * m) } else { (x1 + sx * m, y1 + sy * i) };
        plot(dest, x, y, value);
    }
}

/// Returns the range of major-axis steps whose linear index may fall inside
/// `[0, len)`. Rounding on the minor axis moves the index by at most one row,
/// so the window is widened by `width + 1` on both sides.
fn reachable_steps(start: i128, slope: i128, major: i64, width: i128, len: i128) -> Option<(i64, i64)> {
    let lo = -width - 1 - start;
    let hi = len + width + 1 - start;
    let major_w = major as i128;
    if slope == 0 {
        return (lo <= 0 && hi >= 0).then_some((0, major));
    }

    // Solve lo <= i * slope / major <= hi for i.
    let (a, b, d) = if slope > 0 {
        (lo * major_w, hi * major_w, slope)
    } else {
        (-hi * major_w, -lo * major_w, -slope)
    };
    let first = (-((-a).div_euclid(d)) - 1).max(0);
    let last = (b.div_euclid(d) + 1).min(major_w);
    (first <= last).then_some((first as i64, last as i64))
}

/// Writes through the linear index like [`PixelBuffer::set`], on wide coordinates.
#[inline]
fn plot<T: Pixel>(dest: &mut PixelBuffer<T>, x: i64, y: i64, value: T) {
    let index = y as i128 * dest.width() as i128 + x as i128;
    if (0..dest.pixel_count() as i128).contains(&index) {
        dest.pixels_mut()[index as usize] = value;
    }
}

/// Draws the one-pixel border of a rectangle.
///
/// Negative width/height are normalized first. Each edge is clipped to the
/// buffer once, then every covered pixel becomes `blend(existing, value)`.
/// Corners are blended exactly once.
///
/// ```rust
/// use gridpaint_core::PixelBuffer;
/// use gridpaint_ops::{blend, shapes::draw_rectangle};
///
/// let mut img: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
/// draw_rectangle(&mut img, 0, 0, 3, 3, 1, blend::replace);
/// assert_eq!(img.pixels(), &[
///     1, 1, 1, 0,
///     1, 0, 1, 0,
///     1, 1, 1, 0,
///     0, 0, 0, 0,
/// ]);
/// ```
pub fn draw_rectangle<T, F>(dest: &mut PixelBuffer<T>, x: i32, y: i32, width: i32, height: i32, value: T, blend: F)
where
    T: Pixel,
    F: Fn(T, T) -> T,
{
    let rect = Rect::new(x, y, width, height).normalized();
    if rect.is_empty() {
        return;
    }

    let (bw, bh) = (dest.width() as i64, dest.height() as i64);
    let (left, right) = (rect.x as i64, rect.x as i64 + rect.width as i64 - 1);
    let (top, bottom) = (rect.y as i64, rect.y as i64 + rect.height as i64 - 1);

    let left_value = left.max(0);
    let right_value = right.min(bw - 1);
    if left_value <= right_value {
        for row in edge_lines(top, bottom) {
            if (0..bh).contains(&row) {
                for col in left_value..=right_value {
                    blend_in_bounds(dest, col, row, value, &blend);
                }
            }
        }
    }

    let top_value = (top + 1).max(0);
    let bottom_value = (bottom - 1).min(bh - 1);
    if top_value <= bottom_value {
        for col in edge_lines(left, right) {
            if (0..bw).contains(&col) {
                for row in top_value..=bottom_value {
                    blend_in_bounds(dest, col, row, value, &blend);
                }
            }
        }
    }
}

/// Fills a `width x height` block at (x, y) with `value`.
///
/// A pixel is skipped when its column lies outside `[-buffer_width, buffer_width)`
/// or its row outside `[-buffer_height, buffer_height)`. Everything else goes
/// through [`PixelBuffer::set`], so a column left of 0 on row `r > 0` wraps to
/// the end of row `r - 1`:
///
/// ```rust
/// use gridpaint_core::PixelBuffer;
/// use gridpaint_ops::shapes::fill_rectangle;
///
/// let mut img: PixelBuffer<u8> = PixelBuffer::new(4, 2).unwrap();
/// fill_rectangle(&mut img, -1, 0, 2, 2, 9);
/// assert_eq!(img.pixels(), &[
///     9, 0, 0, 9,
///     9, 0, 0, 0,
/// ]);
/// ```
///
/// Zero or negative sizes draw nothing.
pub fn fill_rectangle<T: Pixel>(dest: &mut PixelBuffer<T>, x: i32, y: i32, width: i32, height: i32, value: T) {
    fill_rectangle_with(dest, x, y, width, height, |_| value);
}

/// Like [`fill_rectangle`], but each pixel becomes `blend(existing, value)`.
pub fn fill_rectangle_blend<T, F>(
    dest: &mut PixelBuffer<T>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    value: T,
    blend: F,
) where
    T: Pixel,
    F: Fn(T, T) -> T,
{
    fill_rectangle_with(dest, x, y, width, height, |existing| blend(existing, value));
}

fn fill_rectangle_with<T, F>(dest: &mut PixelBuffer<T>, x: i32, y: i32, width: i32, height: i32, apply: F)
where
    T: Pixel,
    F: Fn(T) -> T,
{
    let (bw, bh) = (dest.width() as i32, dest.height() as i32);
    let ix_start = (-bw).saturating_sub(x).max(0);
    let ix_end = width.min(bw.saturating_sub(x));
    let iy_start = (-bh).saturating_sub(y).max(0);
    let iy_end = height.min(bh.saturating_sub(y));

    for iy in iy_start..iy_end {
        for ix in ix_start..ix_end {
            if let Some(index) = dest.linear_index(x + ix, y + iy) {
                let p = &mut dest.pixels_mut()[index];
                *p = apply(*p);
            }
        }
    }
}

/// Draws a circle outline with the integer midpoint algorithm.
///
/// Points are plotted with eight-way symmetry, so the result mirrors across
/// both axes through the center.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `radius < 1`.
pub fn draw_circle<T: Pixel>(dest: &mut PixelBuffer<T>, center_x: i32, center_y: i32, radius: i32, value: T) -> Result<()> {
    if radius < 1 {
        return Err(Error::invalid_dimension(radius, radius));
    }

    let (cx, cy) = (center_x as i64, center_y as i64);
    let (mut x, mut y) = (radius as i64, 0i64);
    let mut err = 1 - x;
    while x >= y {
        for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            plot(dest, cx + px, cy + py, value);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    Ok(())
}

/// Fills a circle with one horizontal [`draw_line`] per row.
///
/// Row `center_y + dy` spans `center_x ± floor(sqrt(radius² - dy²))`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `radius < 1`.
pub fn fill_circle<T: Pixel>(dest: &mut PixelBuffer<T>, center_x: i32, center_y: i32, radius: i32, value: T) -> Result<()> {
    if radius < 1 {
        return Err(Error::invalid_dimension(radius, radius));
    }

    let (cx, cy) = (center_x as i64, center_y as i64);
    let r = radius as i64;
    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f64).sqrt() as i64;
        let row = cy + dy;
        line_wide(dest, cx - half, row, cx + half, row, value);
    }
    Ok(())
}

/// Draws an ellipse outline with the midpoint algorithm.
///
/// `width` and `height` are the full extents; the radii are `width / 2`
/// and `height / 2` (integer division). Points are plotted with four-way
/// symmetry through [`PixelBuffer::set`]. A zero radius degenerates into a
/// line along the other axis.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `width < 1` or `height < 1`.
pub fn draw_ellipse<T: Pixel>(
    dest: &mut PixelBuffer<T>,
    center_x: i32,
    center_y: i32,
    width: i32,
    height: i32,
    value: T,
) -> Result<()> {
    if width < 1 || height < 1 {
        return Err(Error::invalid_dimension(width, height));
    }

    let (cx, cy) = (center_x as i64, center_y as i64);
    let (rx, ry) = (width / 2, height / 2);
    if rx == 0 || ry == 0 {
        let (rx, ry) = (rx as i64, ry as i64);
        line_wide(dest, cx - rx, cy - ry, cx + rx, cy + ry, value);
        return Ok(());
    }

    let mut plot4 = |x: i32, y: i32| {
        let (x, y) = (x as i64, y as i64);
        plot(dest, cx + x, cy + y, value);
        plot(dest, cx - x, cy + y, value);
        plot(dest, cx + x, cy - y, value);
        plot(dest, cx - x, cy - y, value);
    };

    let rx2 = rx as f64 * rx as f64;
    let ry2 = ry as f64 * ry as f64;
    let (mut x, mut y) = (0i32, ry);
    let mut dx = 0.0;
    let mut dy = 2.0 * rx2 * y as f64;

    // Region 1: slope shallower than -1.
    let mut p = ry2 - rx2 * ry as f64 + 0.25 * rx2;
    while dx < dy {
        plot4(x, y);
        x += 1;
        dx += 2.0 * ry2;
        if p < 0.0 {
            p += dx + ry2;
        } else {
            y -= 1;
            dy -= 2.0 * rx2;
            p += dx - dy + ry2;
        }
    }

    // Region 2: slope steeper than -1.
    let xf = x as f64 + 0.5;
    let yf = (y - 1) as f64;
    p = ry2 * xf * xf + rx2 * yf * yf - rx2 * ry2;
    while y >= 0 {
        plot4(x, y);
        y -= 1;
        dy -= 2.0 * rx2;
        if p > 0.0 {
            p += rx2 - dy;
        } else {
            x += 1;
            dx += 2.0 * ry2;
            p += dx - dy + rx2;
        }
    }
    Ok(())
}

/// Fills the ellipse inscribed in the `width x height` box at (x, y).
///
/// Each pixel center in the box is tested against
/// `(dx / half_width)² + (dy / half_height)² <= 1`. Pixels outside the
/// buffer are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `width < 1` or `height < 1`.
pub fn fill_ellipse<T: Pixel>(dest: &mut PixelBuffer<T>, x: i32, y: i32, width: i32, height: i32, value: T) -> Result<()> {
    if width < 1 || height < 1 {
        return Err(Error::invalid_dimension(width, height));
    }

    let Some(visible) = Rect::new(x, y, width, height).intersect(&dest.bounds()) else {
        return Ok(());
    };
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;

    for py in visible.y..visible.bottom() {
        let ny = ((py - y) as f64 + 0.5 - half_h) / half_h;
        for px in visible.x..visible.right() {
            let nx = ((px - x) as f64 + 0.5 - half_w) / half_w;
            if nx * nx + ny * ny <= 1.0 {
                dest.set(px, py, value);
            }
        }
    }
    Ok(())
}

/// Tiles a region with a two-color checkerboard.
///
/// The region is cut into `size x size` tiles measured from (x, y). Each
/// tile is split into quadrants at `size / 2`; the top-left and bottom-right
/// quadrants get `color_a`, the other two `color_b`. Pixels outside the
/// buffer are skipped.
///
/// ```text
/// size = 4
/// A A B B A A B B
/// A A B B A A B B
/// B B A A B B A A
/// B B A A B B A A
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `size < 1`.
#[allow(clippy::too_many_arguments)]
pub fn checkerboard<T: Pixel>(
    dest: &mut PixelBuffer<T>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color_a: T,
    color_b: T,
    size: i32,
) -> Result<()> {
    if size < 1 {
        return Err(Error::invalid_argument(format!(
            "checkerboard tile size must be at least 1, got {size}"
        )));
    }
    trace!(x, y, width, height, size, "shapes::checkerboard");

    let region = Rect::new(x, y, width, height).normalized();
    let Some(visible) = region.intersect(&dest.bounds()) else {
        return Ok(());
    };
    let half = size / 2;

    for py in visible.y..visible.bottom() {
        let top = (py - region.y) % size < half;
        for px in visible.x..visible.right() {
            let left = (px - region.x) % size < half;
            dest.set(px, py, if left == top { color_a } else { color_b });
        }
    }
    Ok(())
}

/// Returns the distinct rows (or columns) holding the two parallel edges.
#[inline]
fn edge_lines(first: i64, last: i64) -> impl Iterator<Item = i64> {
    std::iter::once(first).chain((last != first).then_some(last))
}

#[inline]
fn blend_in_bounds<T, F>(dest: &mut PixelBuffer<T>, x: i64, y: i64, value: T, blend: &F)
where
    T: Pixel,
    F: Fn(T, T) -> T,
{
    let index = y as usize * dest.width() as usize + x as usize;
    let p = &mut dest.pixels_mut()[index];
    *p = blend(*p, value);
}
