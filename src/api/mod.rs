//! Scrolly deck WASM API
//!
//! JavaScript-facing entry points.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and `JsValue` conversions
//! - `deck`: bootstrap, layout, reveal and tooltip exports

pub mod helpers;
pub mod deck;

pub use deck::*;
