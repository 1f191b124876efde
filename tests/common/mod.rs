// Shared rig for the integration tests: an in-memory page, a manual clock and
// recording chart builders.

#![allow(dead_code)]

use scrolly_wasm::anim::ManualAnimator;
use scrolly_wasm::background::BackgroundLayer;
use scrolly_wasm::layout::Viewport;
use scrolly_wasm::reveal::RevealRequest;
use scrolly_wasm::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type Calls = Rc<RefCell<Vec<(String, String)>>>;

#[derive(Default)]
pub struct RecordingBackground {
    pub groups: RefCell<Vec<String>>,
    pub shown: RefCell<Vec<Option<String>>>,
}

impl BackgroundLayer for RecordingBackground {
    fn register_groups(&self, groups: &[MediaGroup]) {
        self.groups
            .borrow_mut()
            .extend(groups.iter().map(|g| g.id.clone()));
    }

    fn show(&self, group: Option<&str>) {
        self.shown.borrow_mut().push(group.map(str::to_string));
    }
}

pub struct Rig {
    pub surface: Rc<MemorySurface>,
    pub animator: Rc<ManualAnimator>,
    pub background: Rc<RecordingBackground>,
    pub calls: Calls,
    pub presenter: Rc<Presenter>,
}

impl Rig {
    /// Builder invocations as (type, figSel)
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, sel: &str) -> usize {
        self.calls.borrow().iter().filter(|(_, s)| s == sel).count()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.surface.has_class(&Target::id(id), class)
    }
}

pub fn desktop() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

/// Bootstrap `json` with recording builders for `kinds`. The text builder reveals
/// its own box the way page text builders do.
pub fn rig(json: &str, kinds: &[&str]) -> Rig {
    rig_with_viewport(json, kinds, desktop())
}

pub fn rig_with_viewport(json: &str, kinds: &[&str], viewport: Viewport) -> Rig {
    let deck = Deck::from_json_str(json).expect("deck parses");
    let surface = Rc::new(MemorySurface::new(viewport));
    let animator = Rc::new(ManualAnimator::new(surface.clone()));
    let background = Rc::new(RecordingBackground::default());
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let slot: Rc<RefCell<Weak<Presenter>>> = Rc::new(RefCell::new(Weak::new()));

    let mut registry = ChartRegistry::new();
    for kind in kinds {
        let log = calls.clone();
        let presenter = slot.clone();
        let kind_name = kind.to_string();
        registry = registry.with(*kind, move |sel: &str, _props: &Props| {
            log.borrow_mut().push((kind_name.clone(), sel.to_string()));
            if kind_name == "text" {
                let current = presenter.borrow().upgrade();
                if let Some(p) = current {
                    let target = Target::from_selector(sel);
                    p.reveal(&RevealRequest::new(target.clone()).fading(target), None);
                }
            }
        });
    }

    let presenter = Rc::new(
        Presenter::bootstrap(
            deck,
            Collaborators {
                surface: surface.clone(),
                registry,
                background: background.clone(),
                animator: animator.clone(),
            },
        )
        .expect("bootstrap succeeds"),
    );
    *slot.borrow_mut() = Rc::downgrade(&presenter);

    Rig {
        surface,
        animator,
        background,
        calls,
        presenter,
    }
}
