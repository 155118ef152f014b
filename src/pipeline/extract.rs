use std::borrow::Cow;
use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::quality::Quality;

/// A quantized histogram bucket with its pixel population.
#[derive(Debug, Clone, Copy)]
pub struct ColorBucket {
    /// Channel mean of every pixel that fell into the bucket.
    pub color: Color,
    pub count: u32,
}

/// Frequency data for one scan of the image.
#[derive(Debug)]
pub struct Histogram {
    /// Every bucket, most populous first.
    pub buckets: Vec<ColorBucket>,
    /// Buckets of the 1-pixel border ring only, most populous first.
    pub border: Vec<ColorBucket>,
}

/// Low-order bits truncated per channel when bucketing (32 levels per channel).
const BUCKET_SHIFT: u8 = 3;

/// Validate dimensions and downscale per the quality tier.
///
/// Resizes with Lanczos3, preserving aspect ratio, so the longest edge ends up
/// near the tier's target. `Quality::Highest` and images already within the
/// target are passed through untouched.
pub fn prepare(img: &RgbaImage, quality: Quality) -> Result<Cow<'_, RgbaImage>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PaletteError::InvalidInput {
            reason: format!("zero-dimension buffer ({w}x{h})"),
        });
    }

    let Some(target) = quality.target_edge() else {
        return Ok(Cow::Borrowed(img));
    };
    let longest = w.max(h);
    if longest <= target {
        return Ok(Cow::Borrowed(img));
    }

    let scale = f64::from(target) / f64::from(longest);
    let nw = ((f64::from(w) * scale).round() as u32).max(1);
    let nh = ((f64::from(h) * scale).round() as u32).max(1);
    debug!("downscaling {w}x{h} -> {nw}x{nh}");
    Ok(Cow::Owned(imageops::resize(img, nw, nh, FilterType::Lanczos3)))
}

/// Running totals for one bucket during the scan.
struct BucketAcc {
    count: u32,
    /// Row-major index of the first pixel seen; the deterministic tie-break.
    first_seen: u32,
    sum: [u64; 3],
}

/// Scan every pixel into quantized buckets, tracking the border ring
/// separately. Alpha is ignored.
pub fn histogram(img: &RgbaImage) -> Histogram {
    let (w, h) = img.dimensions();
    let mut all: HashMap<u16, BucketAcc> = HashMap::new();
    let mut border: HashMap<u16, BucketAcc> = HashMap::new();

    // enumerate_pixels yields row-major order, which fixes first_seen.
    for (i, (x, y, px)) in img.enumerate_pixels().enumerate() {
        let key = bucket_key(px);
        accumulate(&mut all, key, px, i as u32);
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            accumulate(&mut border, key, px, i as u32);
        }
    }

    let hist = Histogram {
        buckets: rank(all),
        border: rank(border),
    };
    debug!(
        "histogram: {} buckets overall, {} on the border",
        hist.buckets.len(),
        hist.border.len()
    );
    hist
}

fn bucket_key(px: &Rgba<u8>) -> u16 {
    let r = u16::from(px[0] >> BUCKET_SHIFT);
    let g = u16::from(px[1] >> BUCKET_SHIFT);
    let b = u16::from(px[2] >> BUCKET_SHIFT);
    (r << 10) | (g << 5) | b
}

fn accumulate(map: &mut HashMap<u16, BucketAcc>, key: u16, px: &Rgba<u8>, index: u32) {
    let acc = map.entry(key).or_insert(BucketAcc {
        count: 0,
        first_seen: index,
        sum: [0; 3],
    });
    acc.count += 1;
    acc.sum[0] += u64::from(px[0]);
    acc.sum[1] += u64::from(px[1]);
    acc.sum[2] += u64::from(px[2]);
}

/// Rank buckets by population, breaking ties by scan order.
///
/// first_seen is unique per bucket, so the order is total and the result does
/// not depend on hash map iteration order.
fn rank(map: HashMap<u16, BucketAcc>) -> Vec<ColorBucket> {
    let mut accs: Vec<BucketAcc> = map.into_values().collect();
    accs.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });
    accs.into_iter()
        .map(|acc| {
            let n = u64::from(acc.count);
            ColorBucket {
                color: Color::new(
                    (acc.sum[0] / n) as u8,
                    (acc.sum[1] / n) as u8,
                    (acc.sum[2] / n) as u8,
                ),
                count: acc.count,
            }
        })
        .collect()
}
