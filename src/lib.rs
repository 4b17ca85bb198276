// lib.rs - Root module for the rent-radar library
//
// The crate compiles three ways: as a plain rlib for tests (no default
// features), as the server library under `ssr`, and as the WASM hydration
// bundle under `hydrate`.

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
