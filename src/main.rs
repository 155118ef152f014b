mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::{Color as TermColor, Stylize};
use dominant_color::{Color, Palette, Quality};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::init(level, Config::default())?;

    let quality = Quality::from_target_edge(args.quality)?;

    let img = image::open(&args.image)
        .with_context(|| {
            if !args.image.exists() {
                format!("file not found: {}", args.image.display())
            } else {
                format!(
                    "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                    args.image.display()
                )
            }
        })?
        .into_rgba8();

    let palette = dominant_color::extract_with_quality(&img, quality)?;

    for (role, color) in palette.roles() {
        println!("{role} = {color}");
    }

    if args.preview {
        print_preview(&palette);
    }

    Ok(())
}

/// Render each role as a labeled swatch on its own color.
fn print_preview(palette: &Palette) {
    println!();
    for (role, color) in palette.roles() {
        let label = format!("  {role:<10} {}  ", color.to_hex());
        let swatch = label.with(contrast_fg(color)).on(TermColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        });
        println!("{swatch}");
    }
}

/// Black or white text, whichever reads on the swatch.
fn contrast_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}
