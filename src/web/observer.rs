//! Page event wiring: viewport observation and resize

use crate::presenter::Presenter;
use crate::schedule::VISIBILITY_THRESHOLD;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

/// Keeps the page callbacks alive for as long as the deck runs
pub struct PageHooks {
    window: Window,
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    on_resize: Closure<dyn FnMut(Event)>,
}

impl PageHooks {
    /// Observe every mounted scene and relayout on resize
    pub fn attach(presenter: Rc<Presenter>, window: &Window, document: &Document) -> Result<Self, JsValue> {
        let visible = presenter.clone();
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        visible.on_visible(&entry.target().id());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;

        let mut observed = 0;
        for slide in &presenter.deck().slides {
            match document.get_element_by_id(&slide.id) {
                Some(scene) => {
                    observer.observe(&scene);
                    observed += 1;
                }
                None => log::warn!("scene {} not mounted; not observed", slide.id),
            }
        }

        let resized = presenter;
        let on_resize = Closure::wrap(Box::new(move |_event: Event| {
            resized.relayout();
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        log::debug!("observing {} scenes at threshold {}", observed, VISIBILITY_THRESHOLD);
        Ok(Self {
            window: window.clone(),
            observer,
            _on_intersect: on_intersect,
            on_resize,
        })
    }
}

impl Drop for PageHooks {
    fn drop(&mut self) {
        self.observer.disconnect();
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}
