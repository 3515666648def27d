//! Page bootstrap: wires every component present in the markup.

use wasm_bindgen::prelude::*;

use super::{carousel, effects, forms, modals, nav, showcase};

/// Entry point, invoked by the module loader once the WASM instantiates.
/// Each initializer inspects the page and silently skips absent markup, so
/// every page of the site shares this single bundle.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    nav::init();
    nav::init_tabs();
    let modal_handles = modals::init();
    showcase::init(&modal_handles);
    forms::init();
    carousel::init();
    effects::init();
}
