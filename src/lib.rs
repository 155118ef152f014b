//! Extract a small dominant-color palette — background, primary, secondary,
//! detail — from a decoded bitmap image.
//!
//! The extractor downscales the image per a [`Quality`] tier, scans the
//! pixels into a quantized color histogram (with the 1-pixel border ring
//! tracked separately), picks the background from the most common border
//! bucket, fills the foreground roles from the remaining buckets by
//! population with a minimum perceptual distance between roles, and finally
//! nudges foreground lightness until it contrasts with the background.
//!
//! Extraction is pure and deterministic: the same buffer and quality always
//! produce byte-identical palettes.
//!
//! ```no_run
//! use dominant_color::Quality;
//!
//! # fn main() -> anyhow::Result<()> {
//! let img = image::open("photo.jpg")?.into_rgba8();
//! let palette = dominant_color::extract_with_quality(&img, Quality::Lowest)?;
//! println!("background {}", palette.background);
//! # Ok(())
//! # }
//! ```
//!
//! The input contract is an 8-bit-per-channel RGBA buffer in sRGB
//! ([`image::RgbaImage`]); the alpha channel is ignored during analysis.

pub mod color;
pub mod error;
pub mod palette;
pub(crate) mod pipeline;
pub mod quality;

pub use color::Color;
pub use error::{PaletteError, Result};
pub use palette::Palette;
pub use quality::Quality;

use image::RgbaImage;

use pipeline::{assign, contrast, extract as extraction};

/// Extract a palette at the default quality (250px target edge).
pub fn extract(img: &RgbaImage) -> Result<Palette> {
    extract_with_quality(img, Quality::default())
}

/// Extract a palette, downsampling per `quality` first.
///
/// Fails with [`PaletteError::InvalidInput`] when either dimension is zero.
/// Low color variety never fails: unfilled roles fall back to the best
/// available candidate (primary to background, secondary to primary, detail
/// to secondary).
pub fn extract_with_quality(img: &RgbaImage, quality: Quality) -> Result<Palette> {
    let prepared = extraction::prepare(img, quality)?;
    let hist = extraction::histogram(&prepared);
    let mut raw = assign::assign_roles(&hist);
    contrast::enforce_contrast(&mut raw);
    Ok(raw.fill())
}

/// Run the extraction on a worker thread and hand the result to `callback`.
///
/// The callback fires exactly once: `Some(palette)` on success, `None` on
/// failure. Errors never escape the callback boundary. There is no
/// cancellation; a caller that no longer wants the result simply discards it.
/// Concurrent calls on independent images need no coordination.
pub fn extract_async<F>(
    img: RgbaImage,
    quality: Quality,
    callback: F,
) -> std::thread::JoinHandle<()>
where
    F: FnOnce(Option<Palette>) + Send + 'static,
{
    std::thread::spawn(move || {
        let result = extract_with_quality(&img, quality).ok();
        callback(result);
    })
}
