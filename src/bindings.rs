// Page-level JS libraries loaded by index.html.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `marked.parse`: markdown to HTML.
    #[wasm_bindgen(js_namespace = marked, js_name = parse)]
    pub fn markdown_to_html(source: &str) -> String;

    #[wasm_bindgen(js_namespace = hljs, js_name = highlightElement)]
    pub fn highlight_element(block: &web_sys::Element);
}
