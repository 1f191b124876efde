//! Bootstrap / orchestration
//!
//! [`Presenter::bootstrap`] runs the startup sequence against a surface and owns the
//! shared state afterwards. Event sources (resize, viewport observation) call back into
//! [`Presenter::relayout`] and [`Presenter::on_visible`].

use crate::anim::{Animator, Continuation};
use crate::background::BackgroundLayer;
use crate::error::DeckError;
use crate::layout::LayoutEngine;
use crate::models::Deck;
use crate::nav::NavBar;
use crate::registry::ChartRegistry;
use crate::reveal::{RevealRequest, Revealer};
use crate::scene::build_scene;
use crate::schedule::{SceneBook, SceneState, Visibility, VisibilityScheduler};
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

/// Collaborators supplied by the host page
pub struct Collaborators {
    pub surface: Rc<dyn Surface>,
    pub registry: ChartRegistry,
    pub background: Rc<dyn BackgroundLayer>,
    pub animator: Rc<dyn Animator>,
}

pub struct Presenter {
    deck: Rc<Deck>,
    surface: Rc<dyn Surface>,
    layout: LayoutEngine,
    book: Rc<RefCell<SceneBook>>,
    scheduler: VisibilityScheduler,
    revealer: Revealer,
}

impl Presenter {
    /// Theme vars, background groups, scene trees, nav controls, first layout pass,
    /// then the scene state book. Observers are attached by the caller.
    pub fn bootstrap(mut deck: Deck, parts: Collaborators) -> Result<Self, DeckError> {
        deck.validate()?;
        let Collaborators {
            surface,
            registry,
            background,
            animator,
        } = parts;

        for (name, value) in &deck.theme_vars {
            surface.set_root_property(name, value);
        }

        background.register_groups(&deck.media_groups);

        for slide in deck.slides.iter_mut() {
            surface.mount_scene(&build_scene(slide))?;
        }

        let nav = NavBar::from_deck(&deck);
        surface.mount_nav(nav.entries())?;

        let deck = Rc::new(deck);
        let layout = LayoutEngine::new();
        let placed = layout.relayout(&deck, surface.as_ref());

        let book = Rc::new(RefCell::new(SceneBook::new(&deck, nav)));
        let scheduler = VisibilityScheduler::new(
            deck.clone(),
            registry,
            surface.clone(),
            background,
            book.clone(),
        );
        let revealer = Revealer::new(surface.clone(), animator, book.clone());

        log::info!(
            "deck bootstrapped: {} slides, {} laid out",
            deck.slides.len(),
            placed
        );

        Ok(Self {
            deck,
            surface,
            layout,
            book,
            scheduler,
            revealer,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Full layout pass over every slide
    pub fn relayout(&self) -> usize {
        self.layout.relayout(&self.deck, self.surface.as_ref())
    }

    pub fn on_visible(&self, slide_id: &str) -> Visibility {
        self.scheduler.notify(slide_id)
    }

    pub fn reveal(&self, request: &RevealRequest, on_complete: Option<Continuation>) {
        self.revealer.reveal(request, on_complete);
    }

    pub fn is_built(&self, slide_id: &str) -> bool {
        self.book.borrow().is_built(slide_id)
    }

    pub fn scene_state(&self, slide_id: &str) -> Option<SceneState> {
        self.book.borrow().state(slide_id)
    }

    pub fn active_nav(&self) -> Option<usize> {
        self.book.borrow().active_nav()
    }
}
