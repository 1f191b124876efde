//! Background Group Manager seam
//!
//! The ambient media layer is supplied by the host page; the runtime only registers
//! the deck's groups and says which one to show when a slide builds.

use crate::models::MediaGroup;

pub trait BackgroundLayer {
    fn register_groups(&self, groups: &[MediaGroup]);

    /// Switch to `group`, or hide the layer with `None`
    fn show(&self, group: Option<&str>);
}

/// Pages without a background layer
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBackground;

impl BackgroundLayer for NoBackground {
    fn register_groups(&self, _groups: &[MediaGroup]) {}

    fn show(&self, _group: Option<&str>) {}
}
