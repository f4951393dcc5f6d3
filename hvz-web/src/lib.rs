#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
pub mod paths;
pub mod router;
pub mod site;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::init_console_logger(dom::log_level());
    let site = site::current();
    log::info!(
        "HvZ site ready: {} resources, {} panels",
        site.resources.len(),
        site.content.sections().count()
    );
    yew::Renderer::<app::App>::new().render();
}
