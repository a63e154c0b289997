use compact_str::{format_compact, CompactString};
use web_sys::{
    js_sys::{Boolean, Map},
    wasm_bindgen::{JsCast, JsValue},
    CanvasRenderingContext2d, HtmlCanvasElement,
};

use crate::{
    backend::{color::Rgba, GlyphDraw, Surface},
    error::Error,
};

/// Canvas surface.
///
/// This surface draws onto an existing HTML canvas element through the 2D
/// rendering context. The canvas' pixel size follows [`Surface::resize`].
#[derive(Debug)]
pub struct CanvasSurface {
    /// Canvas element.
    inner: HtmlCanvasElement,
    /// Rendering context.
    context: CanvasRenderingContext2d,
    /// Width of the drawable area, in pixels.
    width: f64,
    /// Height of the drawable area, in pixels.
    height: f64,
    /// The fill style currently set on the context.
    last_fill: Option<Rgba>,
    /// The font currently set on the context.
    last_font: Option<CompactString>,
}

impl CanvasSurface {
    /// Constructs a new [`CanvasSurface`] drawing on the given canvas.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let context_options = Map::new();
        context_options.set(&JsValue::from_str("alpha"), &Boolean::from(JsValue::TRUE));
        context_options.set(
            &JsValue::from_str("desynchronized"),
            &Boolean::from(JsValue::TRUE),
        );
        let context = canvas
            .get_context_with_context_options("2d", &context_options)?
            .ok_or(Error::UnableToRetrieveCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::UnableToRetrieveCanvasContext)?;

        Ok(Self {
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            inner: canvas,
            context,
            last_fill: None,
            last_font: None,
        })
    }

    /// Returns the canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.inner
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) -> Result<(), Error> {
        self.inner.set_width(width as u32);
        self.inner.set_height(height as u32);
        self.width = width;
        self.height = height;

        // Resizing a canvas resets its context state.
        self.last_fill = None;
        self.last_font = None;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: GlyphDraw<'_>) -> Result<(), Error> {
        // Only touch the context state when it changes; every call crosses
        // the WASM boundary.
        if self.last_fill != Some(glyph.color) {
            self.context.set_fill_style_str(&glyph.color.to_css());
            self.last_fill = Some(glyph.color);
        }
        let font = format_compact!("{}px {}", glyph.size, glyph.font_family);
        if self.last_font.as_ref() != Some(&font) {
            self.context.set_font(&font);
            self.last_font = Some(font);
        }

        let mut buf = [0u8; 4];
        self.context
            .fill_text(glyph.glyph.encode_utf8(&mut buf), glyph.x, glyph.y)?;
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba,
    ) -> Result<(), Error> {
        self.context.begin_path();
        self.context.set_stroke_style_str(&color.to_css());
        self.context.set_line_width(width);
        self.context.move_to(from.0, from.1);
        self.context.line_to(to.0, to.1);
        self.context.stroke();
        self.context.close_path();
        Ok(())
    }
}
