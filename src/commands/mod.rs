//! Record Library Bindings
//!
//! Frontend bindings to the `wasm-lib` package, which `index.html`
//! loads and exposes as `window.wasmLib`.

mod records;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "wasmLib"], js_name = init, catch)]
    fn init_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "wasmLib"], js_name = request_records, catch)]
    fn request_records_js(
        private_key: Option<String>,
        view_key: String,
        start: Option<u32>,
        end: Option<u32>,
        last: Option<u32>,
        endpoint: String,
    ) -> Result<JsValue, JsValue>;
}

pub use records::*;
