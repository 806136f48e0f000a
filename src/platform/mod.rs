//! Platform abstraction layer
//!
//! Browser bindings that let a JavaScript animation-frame loop drive a
//! [`crate::Session`]. Native hosts use the session directly.

#[cfg(target_arch = "wasm32")]
pub mod web;
