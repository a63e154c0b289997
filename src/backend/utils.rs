use web_sys::{
    console,
    wasm_bindgen::{prelude::Closure, JsCast},
    window, Document, HtmlCanvasElement, Window,
};

use crate::error::Error;

/// Returns the window.
pub(crate) fn get_window() -> Result<Window, Error> {
    window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the document.
pub(crate) fn get_document() -> Result<Document, Error> {
    get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the inner size of the window in CSS pixels.
pub(crate) fn get_window_size() -> Result<(f64, f64), Error> {
    let window = get_window()?;
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok((width, height))
}

/// Returns the canvas with the given id, if the document has one.
///
/// An element with that id which is not a `<canvas>` counts as absent.
pub(crate) fn get_canvas_by_id(id: &str) -> Result<Option<HtmlCanvasElement>, Error> {
    let Some(element) = get_document()?.get_element_by_id(id) else {
        return Ok(None);
    };
    match element.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Ok(Some(canvas)),
        Err(element) => {
            console::warn_1(&format!("#{} is a <{}>, not a <canvas>", id, element.tag_name()).into());
            Ok(None)
        }
    }
}

/// Requests an animation frame.
pub(crate) fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<(), Error> {
    get_window()?.request_animation_frame(f.as_ref().unchecked_ref())?;
    Ok(())
}

/// Schedules the closure to run once after `delay_ms` milliseconds.
pub(crate) fn set_timeout(f: &Closure<dyn FnMut()>, delay_ms: u32) -> Result<(), Error> {
    get_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        f.as_ref().unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}
