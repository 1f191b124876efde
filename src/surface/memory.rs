//! In-memory surface
//!
//! Keeps the mounted ids, inline styles, marker classes and emitted events in plain
//! maps. Used for headless runs and throughout the test suite.

use super::{SceneEvent, Surface, Target, ACTIVE_CLASS, EFFECTS_ON_CLASS, SHOWN_CLASS};
use crate::error::DeckError;
use crate::layout::Viewport;
use crate::nav::NavEntry;
use crate::scene::SceneNode;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

pub const DECK_ROOT_ID: &str = "deck-root";

#[derive(Debug)]
pub struct MemorySurface {
    viewport: Cell<Viewport>,
    has_root: bool,
    css_vars: RefCell<HashMap<String, String>>,
    root_props: RefCell<BTreeMap<String, String>>,
    /// element id -> enclosing scene id
    ids: RefCell<HashMap<String, String>>,
    /// (scene id, class) pairs present in mounted scenes
    scene_classes: RefCell<HashSet<(String, String)>>,
    scenes: RefCell<Vec<String>>,
    styles: RefCell<HashMap<Target, BTreeMap<String, String>>>,
    classes: RefCell<HashMap<Target, BTreeSet<String>>>,
    nav: RefCell<Vec<NavEntry>>,
    events: RefCell<Vec<SceneEvent>>,
    style_writes: Cell<usize>,
}

impl MemorySurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Cell::new(viewport),
            has_root: true,
            css_vars: RefCell::new(HashMap::new()),
            root_props: RefCell::new(BTreeMap::new()),
            ids: RefCell::new(HashMap::new()),
            scene_classes: RefCell::new(HashSet::new()),
            scenes: RefCell::new(Vec::new()),
            styles: RefCell::new(HashMap::new()),
            classes: RefCell::new(HashMap::new()),
            nav: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            style_writes: Cell::new(0),
        }
    }

    /// A page without `#deck-root`; mounting fails
    pub fn without_root(viewport: Viewport) -> Self {
        Self {
            has_root: false,
            ..Self::new(viewport)
        }
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// Define a stylesheet custom property (e.g. `--labelH`)
    pub fn set_css_var(&self, name: &str, value: &str) {
        self.css_vars.borrow_mut().insert(name.to_string(), value.to_string());
    }

    pub fn root_property(&self, name: &str) -> Option<String> {
        self.root_props.borrow().get(name).cloned()
    }

    pub fn style(&self, target: &Target, property: &str) -> Option<String> {
        self.styles
            .borrow()
            .get(target)
            .and_then(|props| props.get(property).cloned())
    }

    pub fn styles_of(&self, target: &Target) -> BTreeMap<String, String> {
        self.styles.borrow().get(target).cloned().unwrap_or_default()
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes
            .borrow()
            .get(target)
            .map_or(false, |set| set.contains(class))
    }

    pub fn scene_ids(&self) -> Vec<String> {
        self.scenes.borrow().clone()
    }

    pub fn nav_entries(&self) -> Vec<NavEntry> {
        self.nav.borrow().clone()
    }

    pub fn events(&self) -> Vec<SceneEvent> {
        self.events.borrow().clone()
    }

    /// Navigation controls currently marked active
    pub fn active_nav(&self) -> Vec<usize> {
        (0..self.nav.borrow().len())
            .filter(|i| self.has_class(&nav_target(*i), ACTIVE_CLASS))
            .collect()
    }

    pub fn style_write_count(&self) -> usize {
        self.style_writes.get()
    }

    fn add_class(&self, target: Target, class: &str) {
        self.classes
            .borrow_mut()
            .entry(target)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&self, target: &Target, class: &str) {
        if let Some(set) = self.classes.borrow_mut().get_mut(target) {
            set.remove(class);
        }
    }
}

fn nav_target(index: usize) -> Target {
    Target::Selector(format!("#dotnav > button:nth-child({})", index + 1))
}

impl Surface for MemorySurface {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn css_px_var(&self, name: &str) -> Option<f64> {
        self.css_vars.borrow().get(name).and_then(|v| super::parse_px(v))
    }

    fn set_root_property(&self, name: &str, value: &str) {
        self.root_props
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn mount_scene(&self, scene: &SceneNode) -> Result<(), DeckError> {
        if !self.has_root {
            return Err(DeckError::MissingMount(DECK_ROOT_ID.to_string()));
        }
        let scene_id = scene.id.clone().unwrap_or_default();
        let mut ids = self.ids.borrow_mut();
        let mut classes = self.scene_classes.borrow_mut();
        scene.walk(&mut |node| {
            if let Some(id) = &node.id {
                ids.insert(id.clone(), scene_id.clone());
            }
            if !node.class.is_empty() {
                classes.insert((scene_id.clone(), node.class.clone()));
            }
        });
        self.scenes.borrow_mut().push(scene_id);
        Ok(())
    }

    fn mount_nav(&self, entries: &[NavEntry]) -> Result<(), DeckError> {
        *self.nav.borrow_mut() = entries.to_vec();
        Ok(())
    }

    fn exists(&self, target: &Target) -> bool {
        match target {
            Target::Id(id) => self.ids.borrow().contains_key(id),
            Target::SceneChild { scene, class } => self
                .scene_classes
                .borrow()
                .contains(&(scene.clone(), class.clone())),
            Target::Selector(_) => false,
        }
    }

    fn set_style(&self, target: &Target, property: &str, value: &str) {
        if !self.exists(target) {
            return;
        }
        self.style_writes.set(self.style_writes.get() + 1);
        let mut styles = self.styles.borrow_mut();
        let props = styles.entry(target.clone()).or_default();
        if value.is_empty() {
            props.remove(property);
        } else {
            props.insert(property.to_string(), value.to_string());
        }
    }

    fn enclosing_scene(&self, target: &Target) -> Option<String> {
        match target {
            Target::Id(id) => self.ids.borrow().get(id).cloned(),
            Target::SceneChild { scene, .. } => Some(scene.clone()),
            Target::Selector(_) => None,
        }
    }

    fn apply(&self, event: &SceneEvent) {
        match event {
            SceneEvent::ChromeVisible { scene } => {
                self.add_class(Target::id(scene.clone()), EFFECTS_ON_CLASS)
            }
            SceneEvent::FigureShown { target } => self.add_class(target.clone(), SHOWN_CLASS),
            SceneEvent::NavActive { index } => {
                for i in 0..self.nav.borrow().len() {
                    if Some(i) == *index {
                        self.add_class(nav_target(i), ACTIVE_CLASS);
                    } else {
                        self.remove_class(&nav_target(i), ACTIVE_CLASS);
                    }
                }
            }
        }
        self.events.borrow_mut().push(event.clone());
    }
}
