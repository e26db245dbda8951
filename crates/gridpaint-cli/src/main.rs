//! gridpaint - render pixel-buffer scenes to raw RGBA8
//!
//! Scenes are JSON descriptions of a canvas and a list of drawing
//! operations; output is a flat RGBA8 byte file ready for texture upload.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod scene;

#[derive(Parser)]
#[command(name = "gridpaint")]
#[command(author, version, about = "Render pixel-buffer scenes to raw RGBA8")]
#[command(long_about = "
Rasterizes lines, rectangles, circles, ellipses and checkerboards into an
RGBA8 pixel buffer and writes the raw bytes.

Examples:
  gridpaint render scene.json -o out.rgba
  gridpaint render scene.json -o out.rgba --bottom-up
  gridpaint render scene.json -o tile.rgba --region 0,0,16,16
  gridpaint checker -W 64 -H 64 --size 16 -o checker.rgba
  gridpaint -vv -j 4 render scene.json -o out.rgba
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON scene
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Write a two-color checkerboard
    Checker(CheckerArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Scene file (JSON)
    scene: PathBuf,

    /// Output file (raw RGBA8)
    #[arg(short, long)]
    output: PathBuf,

    /// Write the last row first (bottom-left origin consumers)
    #[arg(long)]
    bottom_up: bool,

    /// Only write this region: x,y,width,height
    #[arg(long)]
    region: Option<String>,
}

#[derive(Args)]
struct CheckerArgs {
    /// Canvas width
    #[arg(short = 'W', long)]
    width: i32,

    /// Canvas height
    #[arg(short = 'H', long)]
    height: i32,

    /// Tile size in pixels
    #[arg(short, long, default_value = "8")]
    size: i32,

    /// Output file (raw RGBA8)
    #[arg(short, long)]
    output: PathBuf,

    /// First color: r,g,b[,a]
    #[arg(long, default_value = "255,255,255,255")]
    a: String,

    /// Second color: r,g,b[,a]
    #[arg(long, default_value = "0,0,0,255")]
    b: String,

    /// Write the last row first (bottom-left origin consumers)
    #[arg(long)]
    bottom_up: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Checker(args) => commands::checker::run(args, cli.verbose),
    }
}
