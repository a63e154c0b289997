//! Typewriter text rotation.
//!
//! Types a phrase one character at a time, holds it, deletes it, and moves
//! on to the next phrase. Each time a new phrase comes up it is reported so
//! the background can follow along.

use std::{cell::RefCell, rc::Rc};

use web_sys::{console, wasm_bindgen::prelude::*, Element};

use crate::{backend::utils::set_timeout, error::Error};

/// Options for the [`Typewriter`].
#[derive(Debug, Clone)]
pub struct TypewriterOptions {
    /// Phrases, cycled in order.
    phrases: Vec<String>,
    /// Delay after typing a character.
    type_delay_ms: u32,
    /// Delay after deleting a character.
    delete_delay_ms: u32,
    /// Delay once a phrase is fully typed.
    hold_delay_ms: u32,
    /// Delay once a phrase is fully deleted.
    next_delay_ms: u32,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Data Analyst.".to_string(),
                "Web Developer.".to_string(),
                "Tech Enthusiast.".to_string(),
            ],
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 2000,
            next_delay_ms: 500,
        }
    }
}

impl TypewriterOptions {
    /// Constructs a new [`TypewriterOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the phrases.
    ///
    /// # Panics
    ///
    /// Panics if `phrases` is empty.
    pub fn phrases<I, P>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        if self.phrases.is_empty() {
            panic!("Typewriter needs at least one phrase");
        }
        self
    }

    /// Sets the delays after typing and deleting a character.
    pub fn speed(mut self, type_delay_ms: u32, delete_delay_ms: u32) -> Self {
        self.type_delay_ms = type_delay_ms;
        self.delete_delay_ms = delete_delay_ms;
        self
    }

    /// Sets the pauses after a phrase is fully typed and fully deleted.
    pub fn pauses(mut self, hold_delay_ms: u32, next_delay_ms: u32) -> Self {
        self.hold_delay_ms = hold_delay_ms;
        self.next_delay_ms = next_delay_ms;
        self
    }
}

/// One step of the typewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    /// Text to display.
    pub text: String,
    /// Delay before the next step.
    pub delay_ms: u32,
    /// The phrase that starts being typed next, when it just changed.
    pub next_phrase: Option<&'a str>,
}

/// Typewriter state machine.
#[derive(Debug, Clone)]
pub struct Typewriter {
    options: TypewriterOptions,
    /// Index of the current phrase.
    phrase: usize,
    /// Number of characters shown.
    shown: usize,
    /// Whether characters are being removed.
    deleting: bool,
}

impl Typewriter {
    /// Constructs a new [`Typewriter`] positioned before the first phrase.
    pub fn new(options: TypewriterOptions) -> Self {
        Self {
            options,
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Returns the phrase currently typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.options.phrases[self.phrase]
    }

    /// Types or deletes one character.
    pub fn step(&mut self) -> Step<'_> {
        let len = self.current_phrase().chars().count();
        let mut delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            self.options.delete_delay_ms
        } else {
            self.shown = (self.shown + 1).min(len);
            self.options.type_delay_ms
        };
        let text = self.current_phrase().chars().take(self.shown).collect();

        let mut changed = false;
        if !self.deleting && self.shown == len {
            self.deleting = true;
            delay_ms = self.options.hold_delay_ms;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.options.phrases.len();
            delay_ms = self.options.next_delay_ms;
            changed = true;
        }

        Step {
            text,
            delay_ms,
            next_phrase: changed.then(|| self.current_phrase()),
        }
    }

    /// Runs the typewriter on an element until the page unloads.
    ///
    /// Every step replaces the element's text; `on_phrase` is called with
    /// each phrase that comes up after the first.
    pub fn run<F>(self, element: Element, mut on_phrase: F) -> Result<(), Error>
    where
        F: FnMut(&str) + 'static,
    {
        let mut typewriter = self;
        let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
        *callback.borrow_mut() = Some(Closure::wrap(Box::new({
            let cb = callback.clone();
            move || {
                let step = typewriter.step();
                element.set_text_content(Some(&step.text));
                if let Some(phrase) = step.next_phrase {
                    on_phrase(phrase);
                }
                if let Some(f) = cb.borrow().as_ref() {
                    if let Err(e) = set_timeout(f, step.delay_ms) {
                        console::error_1(&format!("typewriter stopped: {e}").into());
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let result = match callback.borrow().as_ref() {
            Some(f) => set_timeout(f, 0),
            None => Ok(()),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(TypewriterOptions::new().phrases(phrases.iter().copied()))
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let mut typewriter = typewriter(&["ab", "c"]);

        let step = typewriter.step();
        assert_eq!((step.text.as_str(), step.delay_ms), ("a", 100));
        let step = typewriter.step();
        assert_eq!((step.text.as_str(), step.delay_ms), ("ab", 2000));
        let step = typewriter.step();
        assert_eq!((step.text.as_str(), step.delay_ms), ("a", 50));
        assert_eq!(step.next_phrase, None);

        let step = typewriter.step();
        assert_eq!(step.text, "");
        assert_eq!(step.delay_ms, 500);
        assert_eq!(step.next_phrase, Some("c"));

        let step = typewriter.step();
        assert_eq!((step.text.as_str(), step.delay_ms), ("c", 2000));
    }

    #[test]
    fn test_cycles_through_phrases() {
        let mut typewriter = Typewriter::new(TypewriterOptions::new());
        let mut changes = Vec::new();
        for _ in 0..200 {
            if let Some(phrase) = typewriter.step().next_phrase {
                changes.push(phrase.to_string());
            }
        }
        assert_eq!(
            &changes[..4],
            ["Web Developer.", "Tech Enthusiast.", "Data Analyst.", "Web Developer."]
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut typewriter = typewriter(&["né"]);
        assert_eq!(typewriter.step().text, "n");
        assert_eq!(typewriter.step().text, "né");
    }

    #[test]
    fn test_custom_delays() {
        let mut typewriter = Typewriter::new(
            TypewriterOptions::new()
                .phrases(["xy"])
                .speed(10, 5)
                .pauses(70, 30),
        );
        let delays: Vec<u32> = (0..4).map(|_| typewriter.step().delay_ms).collect();
        assert_eq!(delays, [10, 70, 5, 30]);
    }

    #[test]
    #[should_panic]
    fn test_empty_phrases_panic() {
        let _ = TypewriterOptions::new().phrases(Vec::<String>::new());
    }
}
