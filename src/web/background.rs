//! Host-supplied background layer

use crate::background::BackgroundLayer;
use crate::models::MediaGroup;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `{ registerGroups(groups), show(groupOrNull) }` object from the page
    pub type JsBackground;

    #[wasm_bindgen(method, js_name = registerGroups, catch)]
    fn register_groups_js(this: &JsBackground, groups: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = show, catch)]
    fn show_js(this: &JsBackground, group: &JsValue) -> Result<(), JsValue>;
}

pub struct HostBackground {
    inner: JsBackground,
}

impl HostBackground {
    pub fn new(inner: JsBackground) -> Self {
        Self { inner }
    }
}

impl BackgroundLayer for HostBackground {
    fn register_groups(&self, groups: &[MediaGroup]) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = match serde::Serialize::serialize(groups, &serializer) {
            Ok(value) => value,
            Err(e) => {
                log::error!("media groups not serializable: {}", e);
                return;
            }
        };
        if let Err(e) = self.inner.register_groups_js(&value) {
            log::error!("background registerGroups threw: {:?}", e);
        }
    }

    fn show(&self, group: Option<&str>) {
        let value = group.map(JsValue::from_str).unwrap_or(JsValue::NULL);
        if let Err(e) = self.inner.show_js(&value) {
            log::error!("background show threw: {:?}", e);
        }
    }
}
