//! Build-on-view scheduling
//!
//! `book` holds the per-slide state machine; `scheduler` drives it from visibility
//! notifications.

pub mod book;
pub mod scheduler;

pub use book::{BuildTicket, SceneBook, SceneState, SceneStatus};
pub use scheduler::{Visibility, VisibilityScheduler, VISIBILITY_THRESHOLD};
