use crate::color::Color;
use crate::pipeline::assign::RawPalette;

/// Minimum WCAG contrast ratio a classified foreground role must reach
/// against the background.
pub const MIN_CONTRAST: f32 = 1.6;

const LIGHTNESS_STEP: f32 = 0.05;
const MAX_STEPS: u32 = 20;

/// Nudge classified roles until they contrast with the background.
///
/// Fallback roles (still `None` here) are left alone; they are filled with
/// copies of other roles afterwards and must reproduce them exactly.
pub fn enforce_contrast(palette: &mut RawPalette) {
    let background = palette.background;
    for role in [
        &mut palette.primary,
        &mut palette.secondary,
        &mut palette.detail,
    ] {
        if let Some(color) = role {
            *color = ensure_contrast(*color, background);
        }
    }
}

/// Step a color's Oklch lightness away from the background until the WCAG
/// ratio clears [`MIN_CONTRAST`]. Darkens on light backgrounds, lightens on
/// dark ones. The color is adjusted, never substituted.
fn ensure_contrast(color: Color, background: Color) -> Color {
    let delta = if background.relative_luminance() >= 0.5 {
        -LIGHTNESS_STEP
    } else {
        LIGHTNESS_STEP
    };
    let mut adjusted = color;
    for _ in 0..MAX_STEPS {
        if Color::contrast_ratio(&adjusted, &background) >= MIN_CONTRAST {
            break;
        }
        adjusted = adjusted.adjust_lightness(delta);
    }
    adjusted
}
