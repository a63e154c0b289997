#![warn(missing_docs, clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

/// Custom error type.
pub mod error;

/// Glyph sets.
pub mod glyphs;

/// Falling tokens.
pub mod token;

/// Links between nearby tokens.
pub mod constellation;

/// Light/dark theme.
pub mod theme;

/// The background animator.
pub mod animator;

/// Drawing surfaces.
pub mod backend;

/// Browser frame loop.
mod render;

/// Typewriter text rotation.
pub mod typewriter;

// Re-export web_sys crate.
pub use web_sys;

pub use animator::{Animator, BackgroundOptions};
pub use backend::{canvas::CanvasSurface, Surface};
pub use glyphs::GlyphSet;
pub use render::{Background, DEFAULT_CONTEXT_HOOK};
pub use theme::{DocumentTheme, Theme, ThemeSource};
pub use typewriter::{Typewriter, TypewriterOptions};
