//! CLI command implementations

pub mod checker;
pub mod render;

use anyhow::{Context, Result, bail};
use gridpaint_core::{PixelBuffer, Rect, Rgba8};
use gridpaint_ops::{RowOrder, bytes};
use std::path::Path;
use tracing::debug;

/// Parse color string like "255,0,0" or "255,0,0,128"
pub fn parse_color(s: &str) -> Result<Rgba8> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .with_context(|| format!("Invalid color '{s}': channels must be 0-255"))?;

    match parts.as_slice() {
        &[r, g, b] => Ok(Rgba8::opaque(r, g, b)),
        &[r, g, b, a] => Ok(Rgba8::new(r, g, b, a)),
        _ => bail!("Invalid color '{s}': expected r,g,b or r,g,b,a"),
    }
}

/// Parse region string "x,y,width,height"
pub fn parse_region(s: &str) -> Result<Rect> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .with_context(|| format!("Invalid region '{s}'"))?;

    match parts.as_slice() {
        &[x, y, w, h] => Ok(Rect::new(x, y, w, h)),
        _ => bail!("Invalid region '{s}': expected x,y,width,height"),
    }
}

/// Serialize the canvas (or a region of it) and write it to `path`.
pub fn save_bytes(path: &Path, image: &PixelBuffer<Rgba8>, order: RowOrder, region: Option<Rect>) -> Result<usize> {
    let data = match region {
        Some(r) => {
            // Region coordinates are always top-left origin.
            let top_down = bytes::to_byte_array_region(image, r.x, r.y, r.width, r.height)?;
            match order {
                RowOrder::TopDown => top_down,
                RowOrder::BottomUp => {
                    let w = r.width.min(image.width() as i32 - r.x);
                    let h = r.height.min(image.height() as i32 - r.y);
                    let tile = bytes::from_byte_array(w, h, &top_down, RowOrder::TopDown)?;
                    bytes::to_byte_array_oriented(&tile, RowOrder::BottomUp)
                }
            }
        }
        None => bytes::to_byte_array_oriented(image, order),
    };

    std::fs::write(path, &data).with_context(|| format!("Failed to save: {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), ?order, "Wrote RGBA8");
    Ok(data.len())
}

pub fn row_order(bottom_up: bool) -> RowOrder {
    if bottom_up { RowOrder::BottomUp } else { RowOrder::TopDown }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("255,0,0").unwrap(), Rgba8::RED);
        assert_eq!(parse_color(" 1, 2, 3, 4 ").unwrap(), Rgba8::new(1, 2, 3, 4));
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("1,2,3,4").unwrap(), Rect::new(1, 2, 3, 4));
        assert_eq!(parse_region("-1,0,5,5").unwrap(), Rect::new(-1, 0, 5, 5));
        assert!(parse_region("1,2,3").is_err());
    }

    #[test]
    fn test_save_bytes_region_bottom_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.rgba");

        let mut img: PixelBuffer<Rgba8> = PixelBuffer::new(4, 4).unwrap();
        img.set(1, 1, Rgba8::RED);
        img.set(1, 2, Rgba8::BLUE);

        let n = save_bytes(&path, &img, RowOrder::BottomUp, Some(Rect::new(1, 1, 1, 2))).unwrap();
        assert_eq!(n, 8);
        let data = std::fs::read(&path).unwrap();
        assert_eq!(data, vec![0, 0, 255, 255, 255, 0, 0, 255]);
    }
}
