use web_sys::wasm_bindgen::JsValue;

/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to retrieve the window.
    #[error("Unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve the document.
    #[error("Unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve the 2D rendering context of the canvas.
    #[error("Unable to retrieve canvas context")]
    UnableToRetrieveCanvasContext,

    /// Local storage is disabled or unavailable.
    #[error("Unable to retrieve local storage")]
    UnableToRetrieveStorage,

    /// The animator was started twice.
    #[error("Background animator has already been started")]
    AlreadyStarted,

    /// An exception thrown by a browser API.
    #[error("JS error: {0}")]
    JsError(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Error::JsError(message)
    }
}
