//! Scrolly Deck WASM Module
//!
//! Runtime for scrolling slide decks: scenes are mounted up front, built lazily the
//! first time they scroll into view, laid out from the viewport on every resize, and
//! revealed in two stages (fade, then the builder's own animation).

pub mod models;
pub mod error;
pub mod layout;
pub mod scene;
pub mod surface;
pub mod nav;
pub mod anim;
pub mod registry;
pub mod background;
pub mod schedule;
pub mod reveal;
pub mod presenter;
pub mod web;
pub mod api;

// Re-export commonly used types
pub use error::DeckError;
pub use models::{Deck, Figure, FigureKind, HAlign, MediaGroup, Props, Slide};
pub use presenter::{Collaborators, Presenter};
pub use registry::{ChartBuilder, ChartRegistry};
pub use surface::{MemorySurface, SceneEvent, Surface, Target};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            crate::wasm_warn!("logger already initialized");
        }
    }

    log::info!("Scrolly deck WASM module initialized");
}
