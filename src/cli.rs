use std::path::PathBuf;

use clap::Parser;

/// Extract a dominant-color palette from an image.
#[derive(Parser, Debug)]
#[command(name = "dominant-color", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Target edge length in pixels: 50, 100, 250, or 0 for native resolution
    #[arg(short, long, default_value_t = 250)]
    pub quality: u32,

    /// Print the palette as colored terminal swatches
    #[arg(long)]
    pub preview: bool,

    /// Log extraction details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
