use crate::glyphs::GlyphSet;

/// Vertical position a respawned token restarts from, just above the surface.
pub const RESPAWN_Y: f64 = -20.0;

/// Range of the opacity a token is spawned with.
pub const OPACITY_RANGE: (f64, f64) = (0.3, 0.8);

/// Range of the font size a token is spawned with, in pixels.
pub const SIZE_RANGE: (f64, f64) = (14.0, 34.0);

/// Default range of the falling speed, in pixels per frame.
pub const DEFAULT_SPEED_RANGE: (f64, f64) = (0.5, 2.0);

/// Draws a value uniformly from `[min, max]`.
fn uniform(rng: &mut fastrand::Rng, (min, max): (f64, f64)) -> f64 {
    min + rng.f64() * (max - min)
}

/// A falling glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Horizontal position in pixels.
    pub(crate) x: f64,
    /// Vertical position in pixels, growing downward.
    pub(crate) y: f64,
    /// Pixels travelled per frame.
    pub(crate) speed: f64,
    /// Alpha of the glyph.
    pub(crate) opacity: f64,
    /// The drawn character.
    pub(crate) glyph: char,
    /// Font size in pixels.
    pub(crate) size: f64,
}

impl Token {
    /// Spawns a token at the top of a surface of the given width.
    pub(crate) fn spawn(
        rng: &mut fastrand::Rng,
        glyphs: GlyphSet,
        speed_range: (f64, f64),
        width: f64,
    ) -> Self {
        let mut token = Self {
            x: 0.0,
            y: RESPAWN_Y,
            speed: 0.0,
            opacity: 0.0,
            glyph: ' ',
            size: 0.0,
        };
        token.respawn(rng, glyphs, speed_range, width);
        token
    }

    /// Resets the position above the surface and re-rolls every attribute.
    pub(crate) fn respawn(
        &mut self,
        rng: &mut fastrand::Rng,
        glyphs: GlyphSet,
        speed_range: (f64, f64),
        width: f64,
    ) {
        self.x = rng.f64() * width;
        self.y = RESPAWN_Y;
        self.opacity = uniform(rng, OPACITY_RANGE);
        self.speed = uniform(rng, speed_range);
        self.glyph = glyphs.pick(rng);
        self.size = uniform(rng, SIZE_RANGE);
    }

    /// Moves the token down by its speed.
    ///
    /// Returns `true` if the token has left a surface of the given height.
    pub(crate) fn advance(&mut self, height: f64) -> bool {
        self.y += self.speed;
        self.y > height
    }

    /// Returns the position as `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the speed in pixels per frame.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns the glyph.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Returns the font size in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
        (min..=max).contains(&value)
    }

    #[test]
    fn test_respawn_rerolls_within_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut token = Token::spawn(&mut rng, GlyphSet::Default, DEFAULT_SPEED_RANGE, 800.0);
        for _ in 0..1000 {
            token.y = 900.0;
            token.respawn(&mut rng, GlyphSet::Code, DEFAULT_SPEED_RANGE, 800.0);
            assert_eq!(token.y, RESPAWN_Y);
            assert!((0.0..800.0).contains(&token.x));
            assert!(in_range(token.speed, DEFAULT_SPEED_RANGE));
            assert!(in_range(token.opacity, OPACITY_RANGE));
            assert!(in_range(token.size, SIZE_RANGE));
            assert!(GlyphSet::Code.glyphs().contains(&token.glyph));
        }
    }

    #[test]
    fn test_advance_reports_exit() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut token = Token::spawn(&mut rng, GlyphSet::Default, (1.0, 1.0), 100.0);
        token.y = 98.5;
        assert!(!token.advance(100.0));
        assert_eq!(token.y, 99.5);
        // strictly greater than the height
        token.y = 99.0;
        assert!(!token.advance(100.0));
        assert!(token.advance(100.0));
    }
}
