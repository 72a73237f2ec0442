//! Shared building blocks for the Flexify web client.
//!
//! Everything here is plain Rust so it can be exercised by native unit tests
//! as well as compiled into the WebAssembly bundle.

pub mod chat;
pub mod models;
pub mod oauth;
pub mod typewriter;
pub mod validation;
