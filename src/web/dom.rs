//! DOM surface backed by web-sys

use crate::error::DeckError;
use crate::layout::Viewport;
use crate::nav::NavEntry;
use crate::scene::SceneNode;
use crate::surface::{parse_px, SceneEvent, Surface, Target, ACTIVE_CLASS, EFFECTS_ON_CLASS, SHOWN_CLASS};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

pub const DECK_ROOT_ID: &str = "deck-root";
pub const DOTNAV_ID: &str = "dotnav";

fn dom_err(e: JsValue) -> DeckError {
    DeckError::Dom(format!("{:?}", e))
}

/// Look up `target` in `document`.
///
/// Ids go through `getElementById` so ids that are not valid CSS identifiers
/// (`2024-chart`, `a.b`) still resolve.
pub(crate) fn resolve(document: &Document, target: &Target) -> Option<HtmlElement> {
    let found = match target {
        Target::Id(id) => document.get_element_by_id(id),
        Target::SceneChild { scene, class } => document
            .get_element_by_id(scene)?
            .query_selector(&format!(".{}", class))
            .ok()
            .flatten(),
        Target::Selector(sel) => document.query_selector(sel).ok().flatten(),
    };
    found.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub struct DomSurface {
    window: Window,
    document: Document,
    root: Element,
    nav_handlers: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

impl DomSurface {
    /// Attach to the current page; `#deck-root` must exist
    pub fn new() -> Result<Self, DeckError> {
        let window = web_sys::window().ok_or_else(|| DeckError::MissingMount("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| DeckError::MissingMount("document".into()))?;
        let root = document
            .get_element_by_id(DECK_ROOT_ID)
            .ok_or_else(|| DeckError::MissingMount(DECK_ROOT_ID.into()))?;
        Ok(Self {
            window,
            document,
            root,
            nav_handlers: RefCell::new(Vec::new()),
        })
    }

    /// Remove every mounted scene
    pub fn clear_root(&self) {
        self.root.set_inner_html("");
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, target: &Target) -> Option<HtmlElement> {
        resolve(&self.document, target)
    }

    fn create(&self, node: &SceneNode) -> Result<Element, JsValue> {
        let el = self.document.create_element(&node.tag)?;
        if !node.class.is_empty() {
            el.set_class_name(&node.class);
        }
        if let Some(id) = &node.id {
            el.set_id(id);
        }
        if let Some(text) = &node.text {
            el.set_text_content(Some(text));
        }
        for child in &node.children {
            let child_el = self.create(child)?;
            el.append_child(&child_el)?;
        }
        Ok(el)
    }

    fn nav_container(&self) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(DOTNAV_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn nav_button(&self, entry: &NavEntry) -> Result<Element, JsValue> {
        let button = self.document.create_element("button")?;
        button.set_attribute("title", &entry.title)?;

        let document = self.document.clone();
        let slide_id = entry.slide_id.clone();
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            if let Some(scene) = document.get_element_by_id(&slide_id) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                scene.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        self.nav_handlers.borrow_mut().push(on_click);
        Ok(button)
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(width, height)
    }

    fn css_px_var(&self, name: &str) -> Option<f64> {
        let root = self.document.document_element()?;
        let style = self.window.get_computed_style(&root).ok().flatten()?;
        let value = style.get_property_value(name).ok()?;
        parse_px(&value)
    }

    fn set_root_property(&self, name: &str, value: &str) {
        let root = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(root) = root {
            let _ = root.style().set_property(name, value);
        }
    }

    fn mount_scene(&self, scene: &SceneNode) -> Result<(), DeckError> {
        let el = self.create(scene).map_err(dom_err)?;
        self.root.append_child(&el).map_err(dom_err)?;
        Ok(())
    }

    fn mount_nav(&self, entries: &[NavEntry]) -> Result<(), DeckError> {
        let Some(nav) = self.nav_container() else {
            return Ok(());
        };
        nav.set_inner_html("");
        self.nav_handlers.borrow_mut().clear();

        let style = nav.style();
        let display = if entries.is_empty() { "none" } else { "flex" };
        for (prop, value) in [
            ("display", display),
            ("flex-direction", "column"),
            ("gap", "6px"),
            ("max-height", "90vh"),
            ("overflow-y", "auto"),
        ] {
            style.set_property(prop, value).map_err(dom_err)?;
        }

        for entry in entries {
            let button = self.nav_button(entry).map_err(dom_err)?;
            nav.append_child(&button).map_err(dom_err)?;
        }
        Ok(())
    }

    fn exists(&self, target: &Target) -> bool {
        self.element(target).is_some()
    }

    fn set_style(&self, target: &Target, property: &str, value: &str) {
        if let Some(el) = self.element(target) {
            let _ = el.style().set_property(property, value);
        }
    }

    fn enclosing_scene(&self, target: &Target) -> Option<String> {
        let el = self.element(target)?;
        el.closest(".scene").ok().flatten().map(|scene| scene.id())
    }

    fn apply(&self, event: &SceneEvent) {
        match event {
            SceneEvent::ChromeVisible { scene } => {
                if let Some(el) = self.document.get_element_by_id(scene) {
                    let _ = el.class_list().add_1(EFFECTS_ON_CLASS);
                }
            }
            SceneEvent::FigureShown { target } => {
                if let Some(el) = self.element(target) {
                    let _ = el.class_list().add_1(SHOWN_CLASS);
                }
            }
            SceneEvent::NavActive { index } => {
                let Some(nav) = self.nav_container() else { return };
                let buttons = nav.children();
                for i in 0..buttons.length() {
                    if let Some(button) = buttons.item(i) {
                        let on = *index == Some(i as usize);
                        let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, on);
                    }
                }
            }
        }
    }
}
