//! Browser bindings
//!
//! web-sys implementations of the runtime seams: the DOM [`Surface`](crate::surface::Surface),
//! a `requestAnimationFrame` animator, page observers, the host background layer and
//! JS chart builders.

pub mod animator;
pub mod background;
pub mod charts;
pub mod dom;
pub mod observer;
pub mod tooltip;

pub use animator::RafAnimator;
pub use background::{HostBackground, JsBackground};
pub use charts::{registry_from_js, JsChart, RawProps};
pub use dom::{DomSurface, DECK_ROOT_ID, DOTNAV_ID};
pub use observer::PageHooks;
