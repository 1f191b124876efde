//! Reveal Synchronizer
//!
//! Two-stage reveal used by chart builders: stage one flips the scene chrome on and
//! fades the content in; stage two is the caller's continuation, started only after
//! the fade completes. The continuation runs exactly once on every path.

use crate::anim::{Animator, Continuation, Ease};
use crate::schedule::SceneBook;
use crate::surface::{SceneEvent, Surface, Target};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Timing defaults for reveals
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    /// Global multiplier applied to builder timings by [`RevealConfig::scaled`]
    pub speed: f64,
    pub fade_ms: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed: 1.6,
            fade_ms: 600.0,
            ease: Ease::OutCubic,
        }
    }
}

impl RevealConfig {
    pub fn scaled(&self, ms: f64) -> f64 {
        ms * self.speed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealRequest {
    /// Element inside the scene being revealed
    pub container: Target,
    /// Element to fade; `None` skips the fade
    pub fade: Option<Target>,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl RevealRequest {
    pub fn new(container: Target) -> Self {
        let defaults = RevealConfig::default();
        Self {
            container,
            fade: None,
            duration_ms: defaults.fade_ms,
            ease: defaults.ease,
        }
    }

    pub fn fading(mut self, target: Target) -> Self {
        self.fade = Some(target);
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

pub struct Revealer {
    surface: Rc<dyn Surface>,
    animator: Rc<dyn Animator>,
    book: Rc<RefCell<SceneBook>>,
}

impl Revealer {
    pub fn new(surface: Rc<dyn Surface>, animator: Rc<dyn Animator>, book: Rc<RefCell<SceneBook>>) -> Self {
        Self {
            surface,
            animator,
            book,
        }
    }

    pub fn reveal(&self, request: &RevealRequest, on_complete: Option<Continuation>) {
        // Chrome and content fade together.
        if let Some(scene) = self.surface.enclosing_scene(&request.container) {
            if self.book.borrow_mut().show_chrome(&scene) {
                self.surface.apply(&SceneEvent::ChromeVisible { scene });
            }
        }

        match &request.fade {
            Some(target) => {
                self.surface.set_style(target, "opacity", "0");
                let done: Continuation = match on_complete {
                    Some(next) => next,
                    None => Box::new(|| {}),
                };
                self.animator
                    .fade_in(target, request.duration_ms, request.ease, done);
            }
            None => {
                if let Some(next) = on_complete {
                    next();
                }
            }
        }
    }
}
