use log::debug;

use crate::color::Color;
use crate::palette::Palette;
use crate::pipeline::extract::Histogram;

/// Squared ΔE below which a bucket counts as a background shade and is
/// excluded from the foreground roles.
pub const NEAR_BACKGROUND_SQ: f32 = 100.0;

/// Squared ΔE two foreground roles must keep between each other. Candidates
/// closer than this to an already-chosen role are skipped, not reordered.
pub const DISTINCTNESS_SQ: f32 = 100.0;

/// Role assignment before contrast adjustment.
///
/// `None` marks a role with no sufficiently distinct candidate; it is filled
/// by [`RawPalette::fill`] after contrast adjustment so the copy reproduces
/// the adjusted color exactly.
#[derive(Debug, Clone, Copy)]
pub struct RawPalette {
    pub background: Color,
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub detail: Option<Color>,
}

impl RawPalette {
    /// Fill unassigned roles by chaining: primary falls back to the
    /// background, secondary to primary, detail to secondary.
    pub fn fill(self) -> Palette {
        let background = self.background;
        let primary = self.primary.unwrap_or(background);
        let secondary = self.secondary.unwrap_or(primary);
        let detail = self.detail.unwrap_or(secondary);
        Palette {
            background,
            primary,
            secondary,
            detail,
        }
    }
}

/// Classify the four palette roles from ranked histogram data.
///
/// The background is the most populous border-ring bucket. Foreground roles
/// are drawn from the full histogram in rank order, skipping anything within
/// [`NEAR_BACKGROUND_SQ`] of the background and anything within
/// [`DISTINCTNESS_SQ`] of an already-chosen role.
pub fn assign_roles(hist: &Histogram) -> RawPalette {
    // The border ring is non-empty whenever the image is; dimensions are
    // validated before the scan.
    let background = hist.border[0].color;

    let mut chosen: Vec<Color> = Vec::with_capacity(3);
    for bucket in &hist.buckets {
        if chosen.len() == 3 {
            break;
        }
        let candidate = bucket.color;
        if candidate.delta_e_sq(background) < NEAR_BACKGROUND_SQ {
            continue;
        }
        if chosen
            .iter()
            .any(|&picked| candidate.delta_e_sq(picked) < DISTINCTNESS_SQ)
        {
            continue;
        }
        chosen.push(candidate);
    }
    debug!(
        "background {} with {} distinct foreground candidates",
        background.to_hex(),
        chosen.len()
    );

    let mut roles = chosen.into_iter();
    RawPalette {
        background,
        primary: roles.next(),
        secondary: roles.next(),
        detail: roles.next(),
    }
}
