//! Light/dark theme flag.
//!
//! The page owns the theme: it lives in the `data-theme` attribute of the
//! `<html>` element and the user's choice is persisted in local storage. The
//! animator only ever reads it, through a [`ThemeSource`].

use std::{cell::Cell, rc::Rc};

use web_sys::{console, window, Element, Storage};

use crate::{backend::color::Rgba, error::Error};

/// Attribute of the document element holding the theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Local storage key the chosen theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query matching a system-wide dark colour scheme.
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Page colour theme.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Theme {
    /// Dark ink on a light page.
    #[default]
    Light,
    /// Light ink on a dark page.
    Dark,
}

impl Theme {
    /// Resolves the initial theme from a saved preference and the system scheme.
    ///
    /// An explicit saved value wins; without one (or with an empty one) the
    /// system preference decides.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Theme::Dark,
            None | Some("") if system_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Reads the theme from the value of the `data-theme` attribute.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the value persisted in local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the ink colour glyphs and links are drawn with.
    pub fn ink(&self, alpha: f64) -> Rgba {
        match self {
            Theme::Dark => Rgba::new(255, 255, 255, alpha),
            Theme::Light => Rgba::new(0, 0, 0, alpha),
        }
    }
}

/// Read-only access to the current theme.
pub trait ThemeSource {
    /// Returns the theme to draw the next frame with.
    fn theme(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn theme(&self) -> Theme {
        *self
    }
}

impl ThemeSource for Rc<Cell<Theme>> {
    fn theme(&self) -> Theme {
        self.get()
    }
}

/// Reads the theme from the `data-theme` attribute of the document element.
#[derive(Debug, Clone)]
pub struct DocumentTheme {
    root: Element,
}

impl DocumentTheme {
    /// Constructs a new [`DocumentTheme`] for the current document.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            root: document_element()?,
        })
    }
}

impl ThemeSource for DocumentTheme {
    fn theme(&self) -> Theme {
        Theme::from_attribute(self.root.get_attribute(THEME_ATTRIBUTE).as_deref())
    }
}

/// Returns the `<html>` element.
fn document_element() -> Result<Element, Error> {
    window()
        .ok_or(Error::UnableToRetrieveWindow)?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)?
        .document_element()
        .ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the local storage of the window.
fn local_storage() -> Result<Storage, Error> {
    window()
        .ok_or(Error::UnableToRetrieveWindow)?
        .local_storage()?
        .ok_or(Error::UnableToRetrieveStorage)
}

/// Writes the theme to the document element.
///
/// The dark theme sets `data-theme="dark"`, the light theme removes the
/// attribute.
pub fn apply_theme(theme: Theme) -> Result<(), Error> {
    let root = document_element()?;
    match theme {
        Theme::Dark => root.set_attribute(THEME_ATTRIBUTE, "dark")?,
        Theme::Light => root.remove_attribute(THEME_ATTRIBUTE)?,
    }
    Ok(())
}

/// Applies the saved theme, or the system preference when nothing is saved.
///
/// Returns the applied theme.
pub fn apply_preferred_theme() -> Result<Theme, Error> {
    let saved = match local_storage().and_then(|storage| Ok(storage.get_item(THEME_STORAGE_KEY)?))
    {
        Ok(saved) => saved,
        Err(e) => {
            console::warn_1(&format!("theme preference unavailable: {e}").into());
            None
        }
    };
    let prefers_dark = window()
        .ok_or(Error::UnableToRetrieveWindow)?
        .match_media(PREFERS_DARK_QUERY)?
        .is_some_and(|query| query.matches());

    let theme = Theme::resolve(saved.as_deref(), prefers_dark);
    apply_theme(theme)?;
    Ok(theme)
}

/// Flips the current theme and persists the new choice.
///
/// Returns the new theme. A storage failure does not undo the switch.
pub fn toggle_theme() -> Result<Theme, Error> {
    let root = document_element()?;
    let theme = Theme::from_attribute(root.get_attribute(THEME_ATTRIBUTE).as_deref()).toggled();
    apply_theme(theme)?;

    if let Err(e) =
        local_storage().and_then(|storage| Ok(storage.set_item(THEME_STORAGE_KEY, theme.as_str())?))
    {
        console::warn_1(&format!("unable to persist theme: {e}").into());
    }
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
        // an empty saved value is no preference
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_attribute_round_trip() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("")), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn test_ink() {
        assert_eq!(Theme::Dark.ink(0.5), Rgba::new(255, 255, 255, 0.5));
        assert_eq!(Theme::Light.ink(0.3), Rgba::new(0, 0, 0, 0.3));
    }

    #[test]
    fn test_shared_source_follows_writes() {
        let shared = Rc::new(Cell::new(Theme::Light));
        let source = shared.clone();
        assert_eq!(source.theme(), Theme::Light);
        shared.set(Theme::Dark);
        assert_eq!(source.theme(), Theme::Dark);
    }
}
