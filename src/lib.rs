// lib.rs - Root module for the dummyjson_catalog library
//
// The same library is compiled twice: natively for the Actix server (`ssr`)
// and to WASM for the browser (`hydrate`). Model, state and thumbnail code
// compile without either feature so they can be tested on their own.

/// The web application: models, view state, server functions and UI
pub mod web_app;

/// Canned API responses shared by unit and integration tests
pub mod fixtures;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// Browser entry point: hydrate the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            use crate::web_app::App;

            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(App);
        }
    }
}
