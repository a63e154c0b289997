/// Characters of the [`GlyphSet::Default`] pool.
const DEFAULT_GLYPHS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', '{', '}', '[',
    ']', '<', '>', '/', '?', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '=', '-',
    '~',
];

/// Characters of the [`GlyphSet::Code`] pool.
const CODE_GLYPHS: &[char] = &['{', '}', '<', '>', '/', ';', '[', ']'];

/// Characters of the [`GlyphSet::Data`] pool.
const DATA_GLYPHS: &[char] = &['0', '1', '%', '+', '=', '*', '#'];

/// The character pool new tokens draw their glyph from.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum GlyphSet {
    /// Mixed alphanumerics and symbols.
    #[default]
    Default,
    /// Brackets and punctuation.
    Code,
    /// Numeric and statistical symbols.
    Data,
}

impl GlyphSet {
    /// Picks the glyph set matching a context label.
    ///
    /// Matching is by case-sensitive substring: `"Data"` wins over `"Web"`
    /// and `"Code"`, anything else falls back to [`GlyphSet::Default`].
    pub fn from_context(label: &str) -> Self {
        if label.contains("Data") {
            GlyphSet::Data
        } else if label.contains("Web") || label.contains("Code") {
            GlyphSet::Code
        } else {
            GlyphSet::Default
        }
    }

    /// Returns the characters of this set.
    pub fn glyphs(&self) -> &'static [char] {
        match self {
            GlyphSet::Default => DEFAULT_GLYPHS,
            GlyphSet::Code => CODE_GLYPHS,
            GlyphSet::Data => DATA_GLYPHS,
        }
    }

    /// Draws a random glyph from this set.
    pub fn pick(&self, rng: &mut fastrand::Rng) -> char {
        let glyphs = self.glyphs();
        glyphs[rng.usize(..glyphs.len())]
    }
}
