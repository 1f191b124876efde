//! Deck runtime exports
//!
//! One deck per page. `bootstrap` mounts it and wires the page events; chart builders
//! call back through `reveal`, `dur` and the tooltip functions while it runs.

use super::helpers::{deserialize, js_error, serialize};
use crate::anim::{Continuation, Ease};
use crate::background::{BackgroundLayer, NoBackground};
use crate::models::Deck;
use crate::presenter::{Collaborators, Presenter};
use crate::reveal::{RevealConfig, RevealRequest};
use crate::schedule::Visibility;
use crate::surface::Target;
use crate::web::{registry_from_js, tooltip, DomSurface, HostBackground, PageHooks, RafAnimator, RawProps};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};
use js_sys::Function;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

struct App {
    presenter: Rc<Presenter>,
    _hooks: PageHooks,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static REVEAL: Cell<RevealConfig> = Cell::new(RevealConfig::default());
}

fn current() -> Option<Rc<Presenter>> {
    APP.with(|app| app.borrow().as_ref().map(|a| a.presenter.clone()))
}

fn presenter() -> Result<Rc<Presenter>, JsValue> {
    current().ok_or_else(|| js_error("deck", "not bootstrapped"))
}

fn reveal_config() -> RevealConfig {
    REVEAL.with(Cell::get)
}

/// Strings are parsed as YAML (which also covers JSON text); objects go through
/// `JSON.stringify` with their props objects kept aside for the builders.
fn parse_deck(deck: &JsValue) -> Result<(Deck, RawProps), JsValue> {
    if let Some(text) = deck.as_string() {
        let parsed = Deck::from_yaml_str(&text).map_err(|e| js_error("deck", e))?;
        return Ok((parsed, RawProps::default()));
    }
    let json: String = js_sys::JSON::stringify(deck)?.into();
    let parsed = Deck::from_json_str(&json).map_err(|e| js_error("deck", e))?;
    Ok((parsed, RawProps::collect(deck)))
}

/// Mount `deck` into `#deck-root`, render `#dotnav` and start observing scenes.
///
/// `charts` is either `{ type: (figSel, props) => void }` or `getChart(type)`.
/// `background` is optional: `{ registerGroups(groups), show(groupOrNull) }`.
#[wasm_bindgen(js_name = bootstrap)]
pub fn bootstrap(deck: JsValue, charts: JsValue, background: JsValue) -> Result<(), JsValue> {
    let (deck, raw) = parse_deck(&deck)?;
    wasm_log!("props objects kept for {} figures", raw.len());
    let registry = registry_from_js(&charts, &deck, Rc::new(raw))?;
    let chart_types = registry.len();

    let background: Rc<dyn BackgroundLayer> = if background.is_undefined() || background.is_null() {
        Rc::new(NoBackground)
    } else {
        Rc::new(HostBackground::new(background.unchecked_into()))
    };

    let surface = Rc::new(DomSurface::new().map_err(|e| js_error("bootstrap", e))?);

    // The running deck stays live until the new one has parsed and validated.
    if let Some(previous) = APP.with(|app| app.borrow_mut().take()) {
        drop(previous);
        surface.clear_root();
    }
    let window = surface.window().clone();
    let document = surface.document().clone();
    let animator = Rc::new(RafAnimator::new(window.clone(), document.clone()));

    let presenter = Presenter::bootstrap(
        deck,
        Collaborators {
            surface,
            registry,
            background,
            animator,
        },
    )
    .map_err(|e| js_error("bootstrap", e))?;
    let presenter = Rc::new(presenter);
    let hooks = PageHooks::attach(presenter.clone(), &window, &document)?;

    wasm_info!(
        "deck ready: {} slides, {} chart types",
        presenter.deck().slides.len(),
        chart_types
    );
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            presenter,
            _hooks: hooks,
        })
    });
    Ok(())
}

/// Rerun the layout pass; returns the number of slides placed
#[wasm_bindgen(js_name = relayout)]
pub fn relayout() -> usize {
    current().map(|p| p.relayout()).unwrap_or(0)
}

/// Treat `id` as having crossed the visibility threshold.
/// Returns whether this call built the slide.
#[wasm_bindgen(js_name = notifyVisible)]
pub fn notify_visible(id: &str) -> Result<bool, JsValue> {
    Ok(presenter()?.on_visible(id) == Visibility::Built)
}

/// Two-stage reveal: chrome on and fade `fadeSel` in, then `onComplete`.
#[wasm_bindgen(js_name = reveal)]
pub fn reveal(
    container: &str,
    fade_sel: Option<String>,
    fade_ms: Option<f64>,
    ease: Option<String>,
    on_complete: Option<Function>,
) -> Result<(), JsValue> {
    let presenter = presenter()?;
    let config = reveal_config();

    let ease = match ease.as_deref() {
        Some(name) => Ease::from_name(name).unwrap_or_else(|| {
            wasm_warn!("unknown ease '{}'; using default", name);
            config.ease
        }),
        None => config.ease,
    };
    let mut request = RevealRequest::new(Target::from_selector(container))
        .duration(fade_ms.unwrap_or(config.fade_ms))
        .ease(ease);
    if let Some(sel) = fade_sel {
        request = request.fading(Target::from_selector(&sel));
    }

    let done = on_complete.map(|callback| {
        Box::new(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                wasm_error!("reveal continuation threw: {:?}", e);
            }
        }) as Continuation
    });
    presenter.reveal(&request, done);
    Ok(())
}

/// Scale a builder timing by the global speed factor
#[wasm_bindgen(js_name = dur)]
pub fn dur(ms: f64) -> f64 {
    reveal_config().scaled(ms)
}

/// Delay counterpart of [`dur`]
#[wasm_bindgen(js_name = dly)]
pub fn dly(ms: f64) -> f64 {
    reveal_config().scaled(ms)
}

/// Override reveal timing defaults; missing fields keep their defaults
#[wasm_bindgen(js_name = configureReveal)]
pub fn configure_reveal(config: JsValue) -> Result<(), JsValue> {
    let config: RevealConfig = deserialize(config, "reveal config")?;
    REVEAL.with(|cell| cell.set(config));
    Ok(())
}

#[wasm_bindgen(js_name = isBuilt)]
pub fn is_built(id: &str) -> bool {
    current().map(|p| p.is_built(id)).unwrap_or(false)
}

/// `{ status, chromeVisible }` for a slide, or `null`
#[wasm_bindgen(js_name = sceneState)]
pub fn scene_state(id: &str) -> Result<JsValue, JsValue> {
    let state = presenter()?.scene_state(id);
    serialize(&state, "scene state")
}

#[wasm_bindgen(js_name = showTip)]
pub fn show_tip(x: f64, y: f64, html: &str) -> Result<(), JsValue> {
    tooltip::show(x, y, html)
}

#[wasm_bindgen(js_name = hideTip)]
pub fn hide_tip() -> Result<(), JsValue> {
    tooltip::hide()
}
