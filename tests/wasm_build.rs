//! WASM build test
//!
//! Exercises the web-sys surface against a real document.

#![cfg(target_arch = "wasm32")]

use scrolly_wasm::layout::LayoutEngine;
use scrolly_wasm::nav::NavBar;
use scrolly_wasm::scene::build_scene;
use scrolly_wasm::api;
use scrolly_wasm::scene::builder::{CANVAS_CLASS, TEXT_WRAP_CLASS};
use scrolly_wasm::surface::{ACTIVE_CLASS, EFFECTS_ON_CLASS};
use scrolly_wasm::web::{DomSurface, DECK_ROOT_ID, DOTNAV_ID};
use scrolly_wasm::{Deck, SceneEvent, Surface, Target};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(&format!(
        r#"<nav id="{}"></nav><main id="{}"></main>"#,
        DOTNAV_ID, DECK_ROOT_ID
    ));
    document
}

fn deck() -> Deck {
    Deck::from_json_str(
        r##"{
          "slides": [
            { "id": "one", "label": "First", "figures": [
              { "type": "text", "figSel": "#one-text", "props": {} },
              { "type": "scatter", "figSel": "#one-fig", "props": {} } ] },
            { "id": "two", "figures": [ { "type": "video", "figSel": "#two-video", "props": {} } ] }
          ]
        }"##,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_missing_root_is_reported() {
    let document = page();
    document.get_element_by_id(DECK_ROOT_ID).unwrap().remove();
    assert!(DomSurface::new().is_err());
}

#[wasm_bindgen_test]
fn test_scenes_and_nav_are_mounted() {
    let document = page();
    let surface = DomSurface::new().unwrap();
    let mut deck = deck();
    for slide in deck.slides.iter_mut() {
        surface.mount_scene(&build_scene(slide)).unwrap();
    }
    surface.mount_nav(NavBar::from_deck(&deck).entries()).unwrap();

    assert!(document.get_element_by_id("one").is_some());
    assert!(surface.exists(&Target::id("one-fig")));
    assert_eq!(surface.enclosing_scene(&Target::id("two-video")).as_deref(), Some("two"));

    let nav = document.get_element_by_id(DOTNAV_ID).unwrap();
    assert_eq!(nav.children().length(), 2);
    let nav: HtmlElement = nav.dyn_into().unwrap();
    assert_eq!(nav.style().get_property_value("display").unwrap(), "flex");
}

#[wasm_bindgen_test]
fn test_events_toggle_classes() {
    let document = page();
    let surface = DomSurface::new().unwrap();
    let mut deck = deck();
    for slide in deck.slides.iter_mut() {
        surface.mount_scene(&build_scene(slide)).unwrap();
    }
    surface.mount_nav(NavBar::from_deck(&deck).entries()).unwrap();

    surface.apply(&SceneEvent::ChromeVisible { scene: "two".into() });
    let two = document.get_element_by_id("two").unwrap();
    assert!(two.class_list().contains(EFFECTS_ON_CLASS));

    surface.apply(&SceneEvent::NavActive { index: Some(1) });
    surface.apply(&SceneEvent::NavActive { index: Some(0) });
    let buttons = document.get_element_by_id(DOTNAV_ID).unwrap().children();
    assert!(buttons.item(0).unwrap().class_list().contains(ACTIVE_CLASS));
    assert!(!buttons.item(1).unwrap().class_list().contains(ACTIVE_CLASS));
}

#[wasm_bindgen_test]
fn test_layout_writes_inline_styles() {
    let document = page();
    let surface = DomSurface::new().unwrap();
    let mut deck = deck();
    for slide in deck.slides.iter_mut() {
        surface.mount_scene(&build_scene(slide)).unwrap();
    }

    assert_eq!(LayoutEngine::new().relayout(&deck, &surface), 2);
    let fig: HtmlElement = document.get_element_by_id("one-fig").unwrap().dyn_into().unwrap();
    assert_eq!(fig.style().get_property_value("position").unwrap(), "absolute");
    assert_eq!(fig.style().get_property_value("width").unwrap(), "90%");
}

#[wasm_bindgen_test]
fn test_nested_scene_nodes_are_mounted() {
    let document = page();
    let surface = DomSurface::new().unwrap();
    let mut deck = deck();
    surface.mount_scene(&build_scene(&mut deck.slides[0])).unwrap();

    let text = document.get_element_by_id("one-text").unwrap();
    let wrap = text.parent_element().unwrap();
    assert!(wrap.class_list().contains(TEXT_WRAP_CLASS));
    assert!(wrap.parent_element().unwrap().class_list().contains(CANVAS_CLASS));
    assert_eq!(
        text.closest(".scene").unwrap().unwrap().id(),
        "one",
        "figure containers sit three levels under the scene"
    );
}

#[wasm_bindgen_test]
fn test_ids_that_are_not_css_identifiers_resolve() {
    let document = page();
    let surface = DomSurface::new().unwrap();
    let mut deck = Deck::from_json_str(
        r##"{ "slides": [ { "id": "2024", "figures": [
              { "type": "scatter", "figSel": "#2024-chart", "props": {} } ] } ] }"##,
    )
    .unwrap();
    surface.mount_scene(&build_scene(&mut deck.slides[0])).unwrap();

    let target = Target::from_selector("#2024-chart");
    assert!(surface.exists(&target));
    assert_eq!(surface.enclosing_scene(&target).as_deref(), Some("2024"));

    surface.set_style(&target, "opacity", "0.3");
    let fig: HtmlElement = document.get_element_by_id("2024-chart").unwrap().dyn_into().unwrap();
    assert_eq!(fig.style().get_property_value("opacity").unwrap(), "0.3");
}

#[wasm_bindgen_test]
fn test_rejected_deck_keeps_running_deck() {
    let document = page();
    let charts = JsValue::from(js_sys::Object::new());
    let good = r##"{ "slides": [
        { "id": "one", "figures": [ { "type": "video", "figSel": "#one-video" } ] },
        { "id": "two", "figures": [ { "type": "video", "figSel": "#two-video" } ] } ] }"##;
    api::bootstrap(JsValue::from_str(good), charts.clone(), JsValue::UNDEFINED).unwrap();

    let duplicate = r##"{ "slides": [ { "id": "x" }, { "id": "x" } ] }"##;
    assert!(api::bootstrap(JsValue::from_str(duplicate), charts, JsValue::UNDEFINED).is_err());

    assert!(document.get_element_by_id("one-video").is_some());
    assert!(api::notify_visible("two").unwrap());
    assert!(api::is_built("two"));
}
