use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use web_sys::{
    console,
    js_sys::{Math, Reflect},
    wasm_bindgen::{prelude::*, JsValue},
};

use crate::{
    animator::{Animator, BackgroundOptions},
    backend::{canvas::CanvasSurface, utils::*},
    error::Error,
    theme::DocumentTheme,
};

/// Default name of the `window` function forwarding context labels.
pub const DEFAULT_CONTEXT_HOOK: &str = "updateBackgroundContext";

thread_local! {
    /// Whether a background has been started on this page.
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// The animator as driven in the browser.
type WebAnimator = Animator<CanvasSurface, DocumentTheme>;

/// A running background on a page.
///
/// The animator is shared between the frame loop, the resize listener and
/// this handle. Everything runs on the page's single JS thread, so plain
/// [`RefCell`] borrows are enough; the handle is `!Send` and cannot leave
/// that thread.
#[derive(Debug, Clone)]
pub struct Background {
    animator: Rc<RefCell<WebAnimator>>,
}

impl Background {
    /// Starts the background on the canvas named by the options.
    ///
    /// Sizes the canvas to the window, spawns the tokens, listens for window
    /// resizes and runs one frame per [`requestAnimationFrame`] until the
    /// page unloads.
    ///
    /// Returns `Ok(None)` without touching the page if the canvas does not
    /// exist. Only one background can be started per page; later calls
    /// return [`Error::AlreadyStarted`].
    ///
    /// [`requestAnimationFrame`]: https://developer.mozilla.org/en-US/docs/Web/API/Window/requestAnimationFrame
    pub fn start(options: BackgroundOptions) -> Result<Option<Self>, Error> {
        if STARTED.with(Cell::get) {
            return Err(Error::AlreadyStarted);
        }
        let Some(canvas) = get_canvas_by_id(options.get_canvas_id())? else {
            console::debug_1(
                &format!("no #{} canvas, background disabled", options.get_canvas_id()).into(),
            );
            return Ok(None);
        };

        // Without the `js` feature fastrand cannot seed itself in the browser.
        let options = match options.get_seed() {
            Some(_) => options,
            None => options.seed((Math::random() * u64::MAX as f64) as u64),
        };

        let (width, height) = get_window_size()?;
        let mut animator = Animator::new(CanvasSurface::new(canvas)?, DocumentTheme::new()?, options);
        animator.start(width, height)?;

        let background = Self {
            animator: Rc::new(RefCell::new(animator)),
        };
        background.add_on_resize_listener()?;
        background.run_frames()?;
        STARTED.with(|started| started.set(true));
        console::log_1(&format!("background started at {width}x{height}").into());
        Ok(Some(background))
    }

    /// Retargets the glyphs of respawning tokens from a context label.
    pub fn set_context(&self, label: &str) {
        self.animator.borrow_mut().set_context(label);
    }

    /// Resizes the canvas.
    ///
    /// Called automatically on window resizes.
    pub fn on_resize(&self, width: f64, height: f64) -> Result<(), Error> {
        self.animator.borrow_mut().on_resize(width, height)
    }

    /// Publishes a `window.<name>(label)` function forwarding to
    /// [`Background::set_context`], for page scripts that drive the context.
    pub fn expose_context_hook(&self, name: &str) -> Result<(), Error> {
        let background = self.clone();
        let closure = Closure::<dyn FnMut(String)>::new(move |label: String| {
            background.set_context(&label);
        });
        let window = get_window()?;
        Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())?;
        closure.forget();
        Ok(())
    }

    /// Add a listener to the window resize event.
    fn add_on_resize_listener(&self) -> Result<(), Error> {
        let background = self.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| {
            let result = get_window_size()
                .and_then(|(width, height)| background.on_resize(width, height));
            if let Err(e) = result {
                console::error_1(&format!("background resize failed: {e}").into());
            }
        });
        get_window()?
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Ticks the animator on every animation frame.
    fn run_frames(&self) -> Result<(), Error> {
        let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
        *callback.borrow_mut() = Some(Closure::wrap(Box::new({
            let cb = callback.clone();
            let animator = self.animator.clone();
            move || {
                if let Err(e) = animator.borrow_mut().tick() {
                    console::error_1(&format!("background frame failed: {e}").into());
                }
                if let Some(f) = cb.borrow().as_ref() {
                    if let Err(e) = request_animation_frame(f) {
                        console::error_1(&format!("background loop stopped: {e}").into());
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let result = match callback.borrow().as_ref() {
            Some(f) => request_animation_frame(f),
            None => Ok(()),
        };
        result
    }
}
