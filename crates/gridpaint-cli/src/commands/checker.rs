//! Checker command - two-color checkerboard

use anyhow::{Context, Result};
use gridpaint_core::{PixelBuffer, Rgba8};
use gridpaint_ops::shapes::checkerboard;
use tracing::{info, trace};

use crate::CheckerArgs;

pub fn run(args: CheckerArgs, verbose: u8) -> Result<()> {
    trace!(w = args.width, h = args.height, size = args.size, "checker::run");

    let a = super::parse_color(&args.a)?;
    let b = super::parse_color(&args.b)?;

    let mut canvas: PixelBuffer<Rgba8> = PixelBuffer::new(args.width, args.height)
        .with_context(|| format!("Invalid canvas size {}x{}", args.width, args.height))?;
    checkerboard(&mut canvas, 0, 0, args.width, args.height, a, b, args.size)?;
    info!(w = args.width, h = args.height, size = args.size, "Checkerboard drawn");

    let written = super::save_bytes(&args.output, &canvas, super::row_order(args.bottom_up), None)?;

    if verbose > 0 {
        println!("Wrote {}x{} checkerboard to {} ({} bytes)", args.width, args.height, args.output.display(), written);
    }

    Ok(())
}
