use crate::{
    backend::{GlyphDraw, Surface},
    constellation::{self, DEFAULT_LINK_DISTANCE},
    error::Error,
    glyphs::GlyphSet,
    theme::ThemeSource,
    token::{Token, DEFAULT_SPEED_RANGE},
};

/// Default number of tokens.
pub const DEFAULT_TOKEN_COUNT: usize = 60;

/// Default id of the canvas element the background draws on.
pub const DEFAULT_CANVAS_ID: &str = "code-bg";

/// Default font family of the glyphs.
pub const DEFAULT_FONT_FAMILY: &str = "'Space Mono', monospace";

/// Default stroke width of the links, in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// Options for the [`Animator`] and the [`Background`] running it.
///
/// [`Background`]: crate::Background
#[derive(Debug, Clone)]
pub struct BackgroundOptions {
    /// Id of the canvas element.
    canvas_id: String,
    /// Number of tokens kept alive.
    token_count: usize,
    /// Range a token's speed is drawn from, in pixels per frame.
    speed_range: (f64, f64),
    /// Distance under which two tokens are linked.
    link_distance: f64,
    /// Stroke width of the links.
    line_width: f64,
    /// Font family of the glyphs.
    font_family: String,
    /// Seed of the random generator. Random when unset.
    seed: Option<u64>,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            token_count: DEFAULT_TOKEN_COUNT,
            speed_range: DEFAULT_SPEED_RANGE,
            link_distance: DEFAULT_LINK_DISTANCE,
            line_width: DEFAULT_LINE_WIDTH,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            seed: None,
        }
    }
}

impl BackgroundOptions {
    /// Constructs a new [`BackgroundOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the id of the canvas element.
    pub fn canvas_id(mut self, id: &str) -> Self {
        self.canvas_id = id.to_string();
        self
    }

    /// Sets the number of tokens.
    ///
    /// Links are computed between every pair of tokens, so the cost of a
    /// frame grows with the square of this number. Keep it around 100 or
    /// below.
    pub fn token_count(mut self, count: usize) -> Self {
        self.token_count = count;
        self
    }

    /// Sets the range token speeds are drawn from, in pixels per frame.
    ///
    /// # Panics
    ///
    /// Panics if `min` is negative, greater than `max`, or either bound is
    /// not finite.
    pub fn speed_range(mut self, min: f64, max: f64) -> Self {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            panic!("Speed range must be finite and satisfy 0 <= min <= max");
        }
        self.speed_range = (min, max);
        self
    }

    /// Sets the distance under which two tokens are linked.
    pub fn link_distance(mut self, distance: f64) -> Self {
        self.link_distance = distance;
        self
    }

    /// Sets the stroke width of the links.
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the font family of the glyphs, in CSS syntax.
    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Seeds the random generator, making the animation reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the id of the canvas element.
    pub fn get_canvas_id(&self) -> &str {
        &self.canvas_id
    }

    /// Returns the seed, if one was set.
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}

/// The falling-glyph background.
///
/// Owns the tokens and draws them, with the links between them, on a
/// [`Surface`] once per [`tick`]. The theme is read from a [`ThemeSource`]
/// at the start of every frame. All state is mutated through `&mut self`,
/// so the animator must live on the thread driving its frames.
///
/// [`tick`]: Animator::tick
#[derive(Debug)]
pub struct Animator<S, T> {
    /// Drawing target.
    surface: S,
    /// Theme reader.
    theme: T,
    /// Options.
    options: BackgroundOptions,
    /// Random generator for spawns.
    rng: fastrand::Rng,
    /// Pool respawned tokens draw their glyph from.
    glyph_set: GlyphSet,
    /// Width of the surface.
    width: f64,
    /// Height of the surface.
    height: f64,
    /// The tokens. Empty until started.
    tokens: Vec<Token>,
    /// Whether [`Animator::start`] has been called.
    started: bool,
}

impl<S: Surface, T: ThemeSource> Animator<S, T> {
    /// Constructs a new, not yet started [`Animator`].
    pub fn new(surface: S, theme: T, options: BackgroundOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            surface,
            theme,
            options,
            rng,
            glyph_set: GlyphSet::default(),
            width: 0.0,
            height: 0.0,
            tokens: Vec::new(),
            started: false,
        }
    }

    /// Sizes the surface and spawns the tokens.
    ///
    /// Initial tokens are scattered over the whole height so the first frame
    /// is already populated. Can only be called once.
    pub fn start(&mut self, width: f64, height: f64) -> Result<(), Error> {
        if self.started {
            return Err(Error::AlreadyStarted);
        }
        self.surface.resize(width, height)?;
        self.width = width;
        self.height = height;

        let speed_range = self.options.speed_range;
        self.tokens = (0..self.options.token_count)
            .map(|_| {
                let mut token = Token::spawn(&mut self.rng, self.glyph_set, speed_range, width);
                token.y = self.rng.f64() * height;
                token
            })
            .collect();
        self.started = true;
        Ok(())
    }

    /// Resizes the surface.
    ///
    /// Tokens keep their coordinates; those now out of bounds are corrected
    /// by their next respawn.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Result<(), Error> {
        self.surface.resize(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Retargets the glyph pool from a context label.
    ///
    /// Only tokens respawned afterwards pick up the new glyphs.
    pub fn set_context(&mut self, label: &str) {
        self.glyph_set = GlyphSet::from_context(label);
    }

    /// Advances the animation by one frame and redraws the surface.
    ///
    /// Does nothing until the animator is started.
    pub fn tick(&mut self) -> Result<(), Error> {
        if !self.started {
            return Ok(());
        }

        for token in &mut self.tokens {
            if token.advance(self.height) {
                token.respawn(
                    &mut self.rng,
                    self.glyph_set,
                    self.options.speed_range,
                    self.width,
                );
            }
        }

        let theme = self.theme.theme();
        self.surface.clear()?;
        for token in &self.tokens {
            self.surface.draw_glyph(GlyphDraw {
                glyph: token.glyph,
                x: token.x,
                y: token.y,
                size: token.size,
                font_family: &self.options.font_family,
                color: theme.ink(token.opacity),
            })?;
        }
        for link in constellation::links(&self.tokens, self.options.link_distance) {
            self.surface.draw_line(
                link.from,
                link.to,
                self.options.line_width,
                theme.ink(link.alpha),
            )?;
        }
        Ok(())
    }

    /// Returns whether the animator has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the size of the surface.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Returns the glyph set respawned tokens draw from.
    pub fn glyph_set(&self) -> GlyphSet {
        self.glyph_set
    }

    /// Returns the tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[cfg(test)]
    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}
