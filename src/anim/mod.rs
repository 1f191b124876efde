//! Animation primitives
//!
//! [`Animator`] runs opacity fades and reports completion through a one-shot
//! continuation. The browser implementation drives frames with
//! `requestAnimationFrame`; [`ManualAnimator`] advances a virtual clock on demand.

pub mod ease;

use crate::surface::{Surface, Target};
use std::cell::RefCell;
use std::rc::Rc;

pub use ease::Ease;

/// Runs once, after the stage it is attached to has finished
pub type Continuation = Box<dyn FnOnce()>;

pub trait Animator {
    /// Animate `target` opacity 0 -> 1 and then call `done` exactly once.
    /// A target that cannot be resolved completes immediately.
    fn fade_in(&self, target: &Target, duration_ms: f64, ease: Ease, done: Continuation);
}

struct Fade {
    target: Target,
    elapsed_ms: f64,
    duration_ms: f64,
    ease: Ease,
    done: Continuation,
}

/// Animator with a virtual clock; frames are written through the surface
pub struct ManualAnimator {
    surface: Rc<dyn Surface>,
    pending: RefCell<Vec<Fade>>,
}

impl ManualAnimator {
    pub fn new(surface: Rc<dyn Surface>) -> Self {
        Self {
            surface,
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Advance every running fade by `ms`, completing those that reach their end
    pub fn advance(&self, ms: f64) {
        let finished = {
            let mut pending = self.pending.borrow_mut();
            let mut finished = Vec::new();
            let mut running = Vec::new();
            for mut fade in pending.drain(..) {
                fade.elapsed_ms += ms;
                if fade.elapsed_ms >= fade.duration_ms {
                    finished.push(fade);
                } else {
                    let t = fade.elapsed_ms / fade.duration_ms;
                    let opacity = fade.ease.apply(t);
                    self.surface
                        .set_style(&fade.target, "opacity", &opacity.to_string());
                    running.push(fade);
                }
            }
            *pending = running;
            finished
        };

        // Continuations may start new fades; the queue is no longer borrowed.
        for fade in finished {
            self.surface.set_style(&fade.target, "opacity", "1");
            (fade.done)();
        }
    }

    /// Run the clock until nothing is pending, including fades started by continuations
    pub fn finish_all(&self) {
        while self.pending() > 0 {
            self.advance(f64::INFINITY);
        }
    }
}

impl Animator for ManualAnimator {
    fn fade_in(&self, target: &Target, duration_ms: f64, ease: Ease, done: Continuation) {
        if !self.surface.exists(target) || duration_ms <= 0.0 {
            self.surface.set_style(target, "opacity", "1");
            done();
            return;
        }
        self.pending.borrow_mut().push(Fade {
            target: target.clone(),
            elapsed_ms: 0.0,
            duration_ms,
            ease,
            done,
        });
    }
}
