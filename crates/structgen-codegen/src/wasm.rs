//! Browser host binding.
//!
//! Exposes the entry points to JavaScript under the names the host page
//! calls: `generateCode(Uint8Array): string` and `helloWorld(): string`.
//! Both return plain text; a failed conversion returns its error message.

#![allow(unsafe_code)]

use wasm_bindgen::prelude::*;

/// Converts Go source bytes into generated source or an error message.
#[wasm_bindgen(js_name = generateCode)]
#[must_use]
pub fn generate_code(input: &[u8]) -> String {
    crate::entry::generate_code(input)
}

/// Returns the fixed greeting.
#[wasm_bindgen(js_name = helloWorld)]
#[must_use]
pub fn hello_world() -> String {
    crate::entry::hello_world().to_string()
}
