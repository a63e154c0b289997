//! ## Surfaces
//!
//! The animator never talks to the browser directly. Every frame is written
//! through the [`Surface`] trait, which has one implementation for the web:
//!
//! - [`CanvasSurface`]: Canvas 2D API on an existing `<canvas>` element.
//!   Glyphs are rendered with the browser's font stack, links are stroked
//!   paths.
//!
//! Frames are always full redraws: the surface is cleared and every glyph
//! and link is drawn again, so a surface never has to track what changed.
//!
//! [`CanvasSurface`]: canvas::CanvasSurface

use crate::error::Error;

/// Canvas surface.
pub mod canvas;

/// Color handling.
pub mod color;
/// Backend utilities.
pub(crate) mod utils;

use color::Rgba;

/// A glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw<'a> {
    /// The character.
    pub glyph: char,
    /// Left edge in pixels.
    pub x: f64,
    /// Baseline in pixels.
    pub y: f64,
    /// Font size in pixels.
    pub size: f64,
    /// Font family, in CSS syntax.
    pub font_family: &'a str,
    /// Fill colour.
    pub color: Rgba,
}

/// A drawing target for the animator.
pub trait Surface {
    /// Resizes the drawable area, in pixels.
    fn resize(&mut self, width: f64, height: f64) -> Result<(), Error>;

    /// Clears the whole drawable area.
    fn clear(&mut self) -> Result<(), Error>;

    /// Fills a single glyph.
    fn draw_glyph(&mut self, glyph: GlyphDraw<'_>) -> Result<(), Error>;

    /// Strokes a straight line.
    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba,
    ) -> Result<(), Error>;
}
