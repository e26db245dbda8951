//! Render command - run a JSON scene and write raw RGBA8

use anyhow::Result;
use tracing::{info, trace};

use crate::RenderArgs;
use crate::scene::Scene;

pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(scene = %args.scene.display(), output = %args.output.display(), "render::run");

    let scene = Scene::load(&args.scene)?;
    info!(w = scene.width, h = scene.height, ops = scene.ops.len(), "Rendering scene");

    let canvas = scene.render()?;
    let region = args.region.as_deref().map(super::parse_region).transpose()?;
    let written = super::save_bytes(&args.output, &canvas, super::row_order(args.bottom_up), region)?;

    if verbose > 0 {
        println!(
            "Rendered {}x{} ({} ops) -> {} ({} bytes)",
            canvas.width(),
            canvas.height(),
            scene.ops.len(),
            args.output.display(),
            written
        );
    }

    Ok(())
}
