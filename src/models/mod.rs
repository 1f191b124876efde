//! Deck data model
//!
//! Plain serde records for the deck schema: the deck itself, its slides and
//! their figures.

pub mod deck;
pub mod figure;
pub mod slide;

pub use deck::{Deck, MediaGroup};
pub use figure::{Figure, FigureKind, HAlign, Props};
pub use slide::{FigureGroups, Label, LayoutParams, LegacyText, Slide};
