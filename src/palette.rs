use crate::color::Color;

/// The four dominant colors extracted from an image.
///
/// Constructed once by the extractor and never mutated. All four roles are
/// always populated: a low-variety image fills missing roles from the best
/// available candidate rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Most common color of the image's border ring.
    pub background: Color,
    /// Most common foreground color.
    pub primary: Color,
    /// Next foreground color sufficiently distinct from the primary.
    pub secondary: Color,
    /// Next foreground color distinct from both primary and secondary.
    pub detail: Color,
}

impl Palette {
    /// The roles in a fixed order, paired with their names.
    pub fn roles(&self) -> [(&'static str, Color); 4] {
        [
            ("background", self.background),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("detail", self.detail),
        ]
    }
}
