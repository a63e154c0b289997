//! # Portfolio background
//!
//! Runs the falling-glyph background behind a typewriter heading, with a
//! button switching between the light and dark theme. Serve `index.html`
//! with `trunk serve`.

use glyphfall::{
    error::Error,
    theme,
    web_sys::{console, wasm_bindgen::prelude::*, window},
    Background, BackgroundOptions, Typewriter, TypewriterOptions, DEFAULT_CONTEXT_HOOK,
};

fn main() -> Result<(), Error> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    theme::apply_preferred_theme()?;
    let background = Background::start(BackgroundOptions::new())?;
    if let Some(background) = &background {
        background.expose_context_hook(DEFAULT_CONTEXT_HOOK)?;
    }

    let document = window()
        .and_then(|window| window.document())
        .ok_or(Error::UnableToRetrieveDocument)?;

    if let Some(heading) = document.query_selector(".typewriter")? {
        Typewriter::new(TypewriterOptions::new()).run(heading, move |phrase| {
            if let Some(background) = &background {
                background.set_context(phrase);
            }
        })?;
    }

    if let Some(button) = document.query_selector(".theme-toggle")? {
        let closure = Closure::<dyn FnMut(_)>::new(move |_: glyphfall::web_sys::Event| {
            if let Err(e) = theme::toggle_theme() {
                console::error_1(&format!("theme toggle failed: {e}").into());
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    console::log_1(&"portfolio scripts loaded".into());
    Ok(())
}
