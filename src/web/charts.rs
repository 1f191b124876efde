//! Chart builders supplied from JavaScript
//!
//! The deck crosses into Rust as JSON, which drops function-valued properties
//! (formatters, accessors). The original props objects are kept per figSel and
//! handed back to the builder untouched; the JSON view is the fallback.

use crate::models::{Deck, FigureKind, Props};
use crate::registry::{ChartBuilder, ChartRegistry};
use js_sys::{Array, Function, Object, Reflect};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// Props objects as the page wrote them, keyed by figSel
#[derive(Default)]
pub struct RawProps {
    by_selector: HashMap<String, JsValue>,
}

impl RawProps {
    /// Walk `slides[].figures[]` plus the legacy `text`/`figure` fields
    pub fn collect(deck: &JsValue) -> Self {
        let mut raw = Self::default();
        let Ok(slides) = Reflect::get(deck, &JsValue::from_str("slides")) else {
            return raw;
        };
        if !Array::is_array(&slides) {
            return raw;
        }
        for slide in Array::from(&slides).iter() {
            if let Ok(figures) = Reflect::get(&slide, &JsValue::from_str("figures")) {
                if Array::is_array(&figures) {
                    for fig in Array::from(&figures).iter() {
                        raw.take(&fig);
                    }
                }
            }
            for legacy in ["text", "figure"] {
                if let Ok(fig) = Reflect::get(&slide, &JsValue::from_str(legacy)) {
                    raw.take(&fig);
                }
            }
        }
        raw
    }

    fn take(&mut self, fig: &JsValue) {
        if !fig.is_object() {
            return;
        }
        let sel = Reflect::get(fig, &JsValue::from_str("figSel"))
            .ok()
            .and_then(|v| v.as_string());
        let props = Reflect::get(fig, &JsValue::from_str("props")).ok();
        if let (Some(sel), Some(props)) = (sel, props) {
            if props.is_object() {
                self.by_selector.entry(sel).or_insert(props);
            }
        }
    }

    pub fn get(&self, selector: &str) -> Option<&JsValue> {
        self.by_selector.get(selector)
    }

    pub fn len(&self) -> usize {
        self.by_selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }
}

/// `(figSel, props) => void` from the page
pub struct JsChart {
    func: Function,
    raw: Rc<RawProps>,
}

impl JsChart {
    pub fn new(func: Function, raw: Rc<RawProps>) -> Self {
        Self { func, raw }
    }

    fn props_value(&self, selector: &str, props: &Props) -> JsValue {
        if let Some(raw) = self.raw.get(selector) {
            return raw.clone();
        }
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        serde::Serialize::serialize(props, &serializer).unwrap_or_else(|_| Object::new().into())
    }
}

impl ChartBuilder for JsChart {
    fn render(&self, selector: &str, props: &Props) {
        let props = self.props_value(selector, props);
        if let Err(e) = self
            .func
            .call2(&JsValue::NULL, &JsValue::from_str(selector), &props)
        {
            log::error!("chart builder for {} threw: {:?}", selector, e);
        }
    }
}

/// Accepts either a `{ type: builder }` table or a `getChart(type)` lookup function
pub fn registry_from_js(charts: &JsValue, deck: &Deck, raw: Rc<RawProps>) -> Result<ChartRegistry, JsValue> {
    let mut registry = ChartRegistry::new();

    if let Some(lookup) = charts.dyn_ref::<Function>() {
        let kinds: BTreeSet<String> = deck
            .slides
            .iter()
            .flat_map(|s| s.canonical_figures().into_owned())
            .map(|f| f.kind.as_str().to_string())
            .collect();
        for kind in kinds {
            let found = lookup.call1(&JsValue::NULL, &JsValue::from_str(&kind))?;
            if let Ok(func) = found.dyn_into::<Function>() {
                registry.register(FigureKind::from(kind), Rc::new(JsChart::new(func, raw.clone())));
            }
        }
        return Ok(registry);
    }

    if !charts.is_object() {
        return Ok(registry);
    }
    for key in Object::keys(charts.unchecked_ref::<Object>()).iter() {
        let Some(kind) = key.as_string() else { continue };
        match Reflect::get(charts, &key)?.dyn_into::<Function>() {
            Ok(func) => registry.register(FigureKind::from(kind), Rc::new(JsChart::new(func, raw.clone()))),
            Err(_) => log::warn!("chart '{}' is not a function; ignored", kind),
        }
    }
    Ok(registry)
}
