#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod background;
pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
#[cfg(feature = "ssr")]
pub mod upstream;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
