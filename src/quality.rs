use crate::error::{PaletteError, Result};

/// Sampling resolution tier.
///
/// Lower tiers downscale the image harder before analysis, trading fidelity
/// for speed. The tier only bounds the cost of the pixel scan; the
/// classification rules are identical at every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Downscale so the longest edge is about 50 pixels.
    Lowest,
    /// Downscale to about 100 pixels.
    Low,
    /// Downscale to about 250 pixels.
    #[default]
    High,
    /// No downscaling; every native pixel is sampled.
    Highest,
}

impl Quality {
    /// Target edge length in pixels, or `None` for native resolution.
    pub fn target_edge(self) -> Option<u32> {
        match self {
            Quality::Lowest => Some(50),
            Quality::Low => Some(100),
            Quality::High => Some(250),
            Quality::Highest => None,
        }
    }

    /// Map a raw target edge length to a tier.
    ///
    /// `0` is the sentinel for native resolution. Anything outside the
    /// recognized set fails with [`PaletteError::InvalidConfiguration`].
    pub fn from_target_edge(value: u32) -> Result<Self> {
        match value {
            50 => Ok(Quality::Lowest),
            100 => Ok(Quality::Low),
            250 => Ok(Quality::High),
            0 => Ok(Quality::Highest),
            _ => Err(PaletteError::InvalidConfiguration { value }),
        }
    }
}
