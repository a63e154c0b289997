use compact_str::{format_compact, CompactString};

/// An RGB colour with a floating point alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Constructs a new [`Rgba`], clamping alpha into `[0, 1]`.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns the colour in CSS `rgba()` syntax.
    pub fn to_css(&self) -> CompactString {
        format_compact!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Rgba::new(255, 255, 255, 0.5).to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Rgba::new(0, 0, 0, 1.0).to_css(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_alpha_clamped() {
        assert_eq!(Rgba::new(0, 0, 0, -0.1).a, 0.0);
        assert_eq!(Rgba::new(0, 0, 0, 3.0).a, 1.0);
    }
}
