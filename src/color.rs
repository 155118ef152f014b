use palette::{FromColor, IntoColor, Lab, Oklch, Srgb};

/// Color value used throughout the extractor.
/// Wraps sRGB u8 components and provides conversions to perceptual spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn to_srgb_f32(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Clamp an `Srgb<f32>` to [0, 1] and convert back to u8 components.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Convert to CIELAB (for perceptual color distance).
    pub fn to_lab(self) -> Lab {
        self.to_srgb_f32().into_color()
    }

    /// Create from CIELAB.
    #[allow(dead_code)]
    pub fn from_lab(lab: Lab) -> Self {
        Self::from_srgb_f32_clamped(Srgb::from_color(lab))
    }

    /// Convert to Oklch (for lightness adjustments).
    pub fn to_oklch(self) -> Oklch {
        self.to_srgb_f32().into_color()
    }

    /// Create from Oklch.
    pub fn from_oklch(oklch: Oklch) -> Self {
        Self::from_srgb_f32_clamped(Srgb::from_color(oklch))
    }

    /// Squared CIE76 ΔE between two colors in LAB space.
    pub fn delta_e_sq(self, other: Color) -> f32 {
        let a = self.to_lab();
        let b = other.to_lab();
        (a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG 2.0 contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Adjust Oklch lightness by `delta`. Positive = lighter, negative = darker.
    /// Lightness is clamped to [0, 1].
    pub fn adjust_lightness(self, delta: f32) -> Color {
        let mut oklch = self.to_oklch();
        oklch.l = (oklch.l + delta).clamp(0.0, 1.0);
        Color::from_oklch(oklch)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn srgb_to_lab_round_trip() {
        let colors = [
            Color::new(200, 100, 50),
            Color::new(0, 255, 0),
            Color::new(128, 128, 128),
            BLACK,
            WHITE,
        ];
        for original in colors {
            let recovered = Color::from_lab(original.to_lab());
            assert!(
                (original.r as i16 - recovered.r as i16).unsigned_abs() <= 1
                    && (original.g as i16 - recovered.g as i16).unsigned_abs() <= 1
                    && (original.b as i16 - recovered.b as i16).unsigned_abs() <= 1,
                "round trip drifted for {original:?}: got {recovered:?}"
            );
        }
    }

    #[test]
    fn srgb_to_oklch_round_trip() {
        let colors = [
            Color::new(200, 100, 50),
            Color::new(0, 255, 0),
            Color::new(128, 128, 128),
            WHITE,
        ];
        for original in colors {
            let recovered = Color::from_oklch(original.to_oklch());
            assert!(
                (original.r as i16 - recovered.r as i16).unsigned_abs() <= 1
                    && (original.g as i16 - recovered.g as i16).unsigned_abs() <= 1
                    && (original.b as i16 - recovered.b as i16).unsigned_abs() <= 1,
                "round trip drifted for {original:?}: got {recovered:?}"
            );
        }
    }

    #[test]
    fn delta_e_zero_for_identical_colors() {
        let c = Color::new(120, 30, 200);
        assert!(c.delta_e_sq(c) < 0.001);
    }

    #[test]
    fn delta_e_symmetric() {
        let a = Color::new(200, 50, 50);
        let b = Color::new(50, 50, 200);
        let ab = a.delta_e_sq(b);
        let ba = b.delta_e_sq(a);
        assert!((ab - ba).abs() < 0.001, "ΔE² not symmetric: {ab} vs {ba}");
    }

    #[test]
    fn delta_e_large_for_opposing_hues() {
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);
        assert!(
            red.delta_e_sq(blue) > 10_000.0,
            "red vs blue should be far apart, got {}",
            red.delta_e_sq(blue)
        );
    }

    #[test]
    fn delta_e_small_for_near_shades() {
        let a = Color::new(255, 0, 0);
        let b = Color::new(250, 5, 5);
        assert!(
            a.delta_e_sq(b) < 25.0,
            "near-identical reds should be close, got {}",
            a.delta_e_sq(b)
        );
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = Color::contrast_ratio(&BLACK, &WHITE);
        assert!(
            (ratio - 21.0).abs() < 0.1,
            "black/white contrast should be ~21:1, got {ratio}"
        );
    }

    #[test]
    fn contrast_ratio_same_color() {
        let gray = Color::new(128, 128, 128);
        let ratio = Color::contrast_ratio(&gray, &gray);
        assert!(
            (ratio - 1.0).abs() < 0.001,
            "same color contrast should be 1:1, got {ratio}"
        );
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = Color::new(200, 50, 50);
        let b = Color::new(50, 200, 50);
        let ratio_ab = Color::contrast_ratio(&a, &b);
        let ratio_ba = Color::contrast_ratio(&b, &a);
        assert!(
            (ratio_ab - ratio_ba).abs() < 0.001,
            "contrast ratio should be symmetric: {ratio_ab} vs {ratio_ba}"
        );
    }

    #[test]
    fn relative_luminance_black() {
        assert!(BLACK.relative_luminance() < 0.001);
    }

    #[test]
    fn relative_luminance_white() {
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn adjust_lightness_increases_luminance() {
        let dark = Color::new(50, 50, 50);
        let lighter = dark.adjust_lightness(0.2);
        assert!(
            lighter.relative_luminance() > dark.relative_luminance(),
            "increasing lightness should increase luminance"
        );
    }

    #[test]
    fn adjust_lightness_clamps() {
        let result = WHITE.adjust_lightness(1.0);
        assert!(result.relative_luminance() > 0.9);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
        assert_eq!(color.to_hex(), "#abcdef");
    }
}
