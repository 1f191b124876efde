// Deck loading and bootstrap failures

use scrolly_wasm::anim::ManualAnimator;
use scrolly_wasm::background::NoBackground;
use scrolly_wasm::layout::Viewport;
use scrolly_wasm::*;
use std::rc::Rc;

fn bootstrap(deck: Deck, surface: Rc<MemorySurface>) -> Result<Presenter, DeckError> {
    Presenter::bootstrap(
        deck,
        Collaborators {
            surface: surface.clone(),
            registry: ChartRegistry::new(),
            background: Rc::new(NoBackground),
            animator: Rc::new(ManualAnimator::new(surface)),
        },
    )
}

fn surface() -> Rc<MemorySurface> {
    Rc::new(MemorySurface::new(Viewport::new(1280.0, 800.0)))
}

#[test]
fn test_yaml_deck_mounts_every_slide() {
    let deck = Deck::from_yaml_str(
        r##"
themeVars:
  "--ink": "#222"
slides:
  - id: open
    label: { text: "Opening" }
    figures:
      - { type: text, figSel: "#open-text", props: {} }
  - id: legacy
    figure: { type: video, figSel: "#legacy-video" }
"##,
    )
    .expect("yaml deck parses");

    let surface = surface();
    let presenter = bootstrap(deck, surface.clone()).expect("bootstrap succeeds");

    assert_eq!(surface.scene_ids(), vec!["open", "legacy"]);
    assert!(surface.exists(&Target::id("legacy-video")));
    assert_eq!(surface.root_property("--ink").as_deref(), Some("#222"));
    // legacy shape folded in once
    assert_eq!(presenter.deck().slide("legacy").unwrap().figures.len(), 1);
    assert!(!presenter.is_built("open"));
}

#[test]
fn test_missing_slide_id_fails_fast() {
    let err = Deck::from_json_str(r##"{ "slides": [ { "figures": [] } ] }"##).unwrap_err();
    assert!(matches!(err, DeckError::MissingSlideId { index: 0 }));
}

#[test]
fn test_missing_fig_sel_fails_fast() {
    let err = Deck::from_json_str(
        r##"{ "slides": [ { "id": "a", "figures": [ { "type": "scatter", "props": {} } ] } ] }"##,
    )
    .unwrap_err();
    assert!(matches!(err, DeckError::MissingFigSel { index: 0, .. }));
}

#[test]
fn test_unvalidated_deck_is_checked_at_bootstrap() {
    let deck = Deck::new(vec![Slide::new("a"), Slide::new("a")]);
    let err = bootstrap(deck, surface()).err().expect("duplicate ids rejected");
    assert_eq!(err.to_string(), "Duplicate slide id 'a'");
}

#[test]
fn test_missing_mount_point() {
    let deck = Deck::new(vec![Slide::new("a")]);
    let page = Rc::new(MemorySurface::without_root(Viewport::new(800.0, 600.0)));
    let err = bootstrap(deck, page).err().expect("mount fails");
    assert!(matches!(err, DeckError::MissingMount(_)));
}
