use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod board;
pub mod game;
pub mod history;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
