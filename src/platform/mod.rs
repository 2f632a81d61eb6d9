//! Platform bridges
//!
//! The core never touches a host environment. Bridges translate host events
//! into controller calls:
//! - `web`: wasm-bindgen wrapper for browser embeddings

#[cfg(target_arch = "wasm32")]
pub mod web;
