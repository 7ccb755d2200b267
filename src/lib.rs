#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod build_info;
pub mod contact;
pub mod i18n;
pub mod media;
pub mod observe;
pub mod prefs;
pub mod projects;
pub mod reading;
pub mod scroll_spy;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(App);
}
