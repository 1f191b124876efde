//! Rendering surface
//!
//! Everything the runtime does to the page goes through [`Surface`]: mounting scene
//! trees, writing inline styles, and rendering [`SceneEvent`] state transitions.
//! The browser implementation lives in `web::dom`; [`memory::MemorySurface`] keeps the
//! same contract in plain Rust for headless use and tests.

pub mod memory;

use crate::error::DeckError;
use crate::layout::Viewport;
use crate::nav::NavEntry;
use crate::scene::SceneNode;
use serde::Serialize;
use std::fmt;

pub use memory::MemorySurface;

/// Scene chrome visible (label and caption fade in)
pub const EFFECTS_ON_CLASS: &str = "fx-on";
/// Text figure built and ready for its chrome-linked transitions
pub const SHOWN_CLASS: &str = "show";
/// Active navigation control
pub const ACTIVE_CLASS: &str = "active";

/// Addressable element on the page
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    /// Element with this id
    Id(String),
    /// First element carrying `class` inside the scene with id `scene`
    SceneChild { scene: String, class: String },
    /// Any other CSS selector; only the DOM surface can resolve these
    Selector(String),
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Target::Id(id.into())
    }

    /// Parse the selector shapes the deck uses (`#id`, `#scene .class`)
    pub fn from_selector(selector: &str) -> Self {
        let selector = selector.trim();
        let mut parts = selector.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), None, None) if is_plain_id(first) => {
                Target::Id(first[1..].to_string())
            }
            (Some(first), Some(second), None)
                if is_plain_id(first) && is_plain_class(second) =>
            {
                Target::SceneChild {
                    scene: first[1..].to_string(),
                    class: second[1..].to_string(),
                }
            }
            _ => Target::Selector(selector.to_string()),
        }
    }

    pub fn selector(&self) -> String {
        match self {
            Target::Id(id) => format!("#{}", id),
            Target::SceneChild { scene, class } => format!("#{} .{}", scene, class),
            Target::Selector(sel) => sel.clone(),
        }
    }
}

fn is_plain_id(part: &str) -> bool {
    part.len() > 1 && part.starts_with('#') && is_ident(&part[1..])
}

fn is_plain_class(part: &str) -> bool {
    part.len() > 1 && part.starts_with('.') && is_ident(&part[1..])
}

fn is_ident(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// Observable state transitions; the surface decides how to render them
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// Scene chrome (label, caption) becomes visible
    ChromeVisible { scene: String },
    /// A built text figure may run its chrome-linked transitions
    FigureShown { target: Target },
    /// Navigation control at `index` is the active one; `None` clears all
    NavActive { index: Option<usize> },
}

/// The page as seen by the runtime
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Numeric value of a root custom property (`--labelH: 48px` -> 48.0)
    fn css_px_var(&self, name: &str) -> Option<f64>;

    fn set_root_property(&self, name: &str, value: &str);

    /// Append one scene subtree to the deck root
    fn mount_scene(&self, scene: &SceneNode) -> Result<(), DeckError>;

    /// Replace the navigation controls
    fn mount_nav(&self, entries: &[NavEntry]) -> Result<(), DeckError>;

    fn exists(&self, target: &Target) -> bool;

    /// Inline style write; an empty value clears the property. Missing targets are ignored.
    fn set_style(&self, target: &Target, property: &str, value: &str);

    /// Id of the scene containing `target`
    fn enclosing_scene(&self, target: &Target) -> Option<String>;

    fn apply(&self, event: &SceneEvent);
}

/// Parse the leading number of a CSS length the way `parseFloat` does
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| {
            !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0))
        })
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!(Target::from_selector("#chart"), Target::id("chart"));
        assert_eq!(
            Target::from_selector("#scene-credits .credits-viewport"),
            Target::SceneChild {
                scene: "scene-credits".into(),
                class: "credits-viewport".into()
            }
        );
        assert_eq!(
            Target::from_selector("div > .x"),
            Target::Selector("div > .x".into())
        );
    }

    #[test]
    fn test_selector_roundtrip() {
        for sel in ["#a", "#scene .canvas"] {
            assert_eq!(Target::from_selector(sel).selector(), sel);
        }
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("48px"), Some(48.0));
        assert_eq!(parse_px(" 90.5px "), Some(90.5));
        assert_eq!(parse_px("-4"), Some(-4.0));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
    }
}
