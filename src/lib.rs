#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod cursor;
pub mod scroll;
pub mod tilt;
pub mod timeline;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // errors only when a logger is already installed
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
