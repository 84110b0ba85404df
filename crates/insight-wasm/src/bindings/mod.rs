//! wasm-bindgen exports, one module per UI concern.

pub mod catalog;
pub mod config;
pub mod cost;
pub mod format;
pub mod survival;
