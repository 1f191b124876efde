//! Shared tooltip element
//!
//! One `div.tooltip` per document, created on first use. Whichever chart hovered
//! last owns its content and position.

use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

pub const TOOLTIP_CLASS: &str = "tooltip";

thread_local! {
    static TOOLTIP: RefCell<Option<HtmlElement>> = const { RefCell::new(None) };
}

fn create() -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(TOOLTIP_CLASS);
    el.style().set_property("opacity", "0")?;
    body.append_child(&el)?;
    Ok(el)
}

fn tooltip() -> Result<HtmlElement, JsValue> {
    TOOLTIP.with(|slot| {
        if let Some(el) = slot.borrow().as_ref() {
            return Ok(el.clone());
        }
        let el = create()?;
        *slot.borrow_mut() = Some(el.clone());
        Ok(el)
    })
}

pub fn show(x: f64, y: f64, html: &str) -> Result<(), JsValue> {
    let el = tooltip()?;
    el.set_inner_html(html);
    let style = el.style();
    style.set_property("left", &format!("{}px", x))?;
    style.set_property("top", &format!("{}px", y))?;
    style.set_property("opacity", "1")?;
    Ok(())
}

pub fn hide() -> Result<(), JsValue> {
    let existing = TOOLTIP.with(|slot| slot.borrow().clone());
    if let Some(el) = existing {
        el.style().set_property("opacity", "0")?;
    }
    Ok(())
}
