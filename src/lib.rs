mod app;
mod checklist;
mod components;
mod config;
mod itinerary;
mod links;
mod models;
mod nav;
mod pages;
mod state;
mod util;
mod viewer;

pub use app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_app_mounts_with_nav_buttons() {
        let _handle = mount_to_body(App);

        let body = document().body().expect("document should have a body");
        let html = body.inner_html();
        assert!(html.contains("<button"));
        for label in ["Home", "Planning", "Essentials"] {
            assert!(html.contains(label), "missing nav entry {label}");
        }
    }
}
