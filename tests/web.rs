#![cfg(target_arch = "wasm32")]

use glyphfall::{
    error::Error,
    theme::{apply_theme, toggle_theme, THEME_ATTRIBUTE, THEME_STORAGE_KEY},
    web_sys::{wasm_bindgen::{JsCast, JsValue}, window, Document, HtmlCanvasElement},
    Background, BackgroundOptions, DocumentTheme, Theme, ThemeSource,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn background_lifecycle() {
    // no canvas: nothing is started
    let missing = Background::start(BackgroundOptions::new().canvas_id("absent-canvas")).unwrap();
    assert!(missing.is_none());

    let document = document();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("test-bg");
    document.body().unwrap().append_child(&canvas).unwrap();

    let background = Background::start(BackgroundOptions::new().canvas_id("test-bg").seed(3))
        .unwrap()
        .expect("canvas is present");
    let window = window().unwrap();
    assert_eq!(
        canvas.width() as f64,
        window.inner_width().unwrap().as_f64().unwrap().trunc()
    );

    background.set_context("Data Analyst.");
    background.on_resize(320.0, 240.0).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (320, 240));

    background.expose_context_hook("testContextHook").unwrap();
    let hook = glyphfall::web_sys::js_sys::Reflect::get(&window, &"testContextHook".into()).unwrap();
    assert!(hook.is_function());
    // calling the hook from JS forwards the label without tripping a borrow
    hook.unchecked_ref::<glyphfall::web_sys::js_sys::Function>()
        .call1(&JsValue::NULL, &JsValue::from_str("Web Developer."))
        .unwrap();

    assert!(matches!(
        Background::start(BackgroundOptions::new().canvas_id("test-bg")),
        Err(Error::AlreadyStarted)
    ));
}

#[wasm_bindgen_test]
fn theme_attribute_and_storage() {
    let root = document().document_element().unwrap();
    let source = DocumentTheme::new().unwrap();

    apply_theme(Theme::Light).unwrap();
    assert_eq!(root.get_attribute(THEME_ATTRIBUTE), None);
    assert_eq!(source.theme(), Theme::Light);

    assert_eq!(toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(root.get_attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(source.theme(), Theme::Dark);

    let storage = window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );

    assert_eq!(toggle_theme().unwrap(), Theme::Light);
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}
