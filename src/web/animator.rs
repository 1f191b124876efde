//! requestAnimationFrame-driven fades

use crate::anim::{Animator, Continuation, Ease};
use crate::surface::Target;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafAnimator {
    window: Window,
    document: Document,
}

impl RafAnimator {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, target: &Target) -> Option<HtmlElement> {
        super::dom::resolve(&self.document, target)
    }
}

fn request_frame(window: &Window, frame: &FrameCallback) -> bool {
    match frame.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
        None => false,
    }
}

impl Animator for RafAnimator {
    fn fade_in(&self, target: &Target, duration_ms: f64, ease: Ease, done: Continuation) {
        let Some(el) = self.element(target) else {
            log::debug!("fade target {} not found; completing", target);
            done();
            return;
        };
        if duration_ms <= 0.0 {
            let _ = el.style().set_property("opacity", "1");
            done();
            return;
        }

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let handle = frame.clone();
        let window = self.window.clone();
        let mut started: Option<f64> = None;
        let done = Rc::new(RefCell::new(Some(done)));
        let pending = done.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let start = *started.get_or_insert(now);
            let t = ((now - start) / duration_ms).clamp(0.0, 1.0);
            let _ = el.style().set_property("opacity", &ease.apply(t).to_string());

            if t < 1.0 && request_frame(&window, &handle) {
                return;
            }

            let _ = el.style().set_property("opacity", "1");
            // Release the frame callback; it is dropped once this call returns.
            let _ = handle.borrow_mut().take();
            let next = pending.borrow_mut().take();
            if let Some(next) = next {
                next();
            }
        }) as Box<dyn FnMut(f64)>));

        if !request_frame(&self.window, &frame) {
            log::warn!("requestAnimationFrame unavailable; completing fade on {}", target);
            let _ = frame.borrow_mut().take();
            if let Some(el) = self.element(target) {
                let _ = el.style().set_property("opacity", "1");
            }
            let next = done.borrow_mut().take();
            if let Some(next) = next {
                next();
            }
        }
    }
}
