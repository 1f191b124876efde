//! Visibility Scheduler
//!
//! Reacts to "slide is in view" notifications: builds a slide's figures the first time
//! it crosses the threshold and keeps the navigation marker on the latest slide.

use super::book::{BuildTicket, SceneBook};
use crate::background::BackgroundLayer;
use crate::models::{Deck, Figure, FigureKind, Slide};
use crate::registry::ChartRegistry;
use crate::surface::{SceneEvent, Surface, Target};
use std::cell::RefCell;
use std::rc::Rc;

/// Fraction of a scene that must be in view before it builds
pub const VISIBILITY_THRESHOLD: f64 = 0.85;

const GRID_ALPHA_VAR: &str = "--grid-alpha";
const GRID_ALPHA_ON: &str = ".06";
const GRID_ALPHA_OFF: &str = "0";

/// What a notification did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Unknown slide id; nothing changed
    Ignored,
    /// First crossing; the slide was built
    Built,
    /// Slide was built earlier; only navigation was updated
    Revisited,
}

pub struct VisibilityScheduler {
    deck: Rc<Deck>,
    registry: ChartRegistry,
    surface: Rc<dyn Surface>,
    background: Rc<dyn BackgroundLayer>,
    book: Rc<RefCell<SceneBook>>,
}

impl VisibilityScheduler {
    pub fn new(
        deck: Rc<Deck>,
        registry: ChartRegistry,
        surface: Rc<dyn Surface>,
        background: Rc<dyn BackgroundLayer>,
        book: Rc<RefCell<SceneBook>>,
    ) -> Self {
        Self {
            deck,
            registry,
            surface,
            background,
            book,
        }
    }

    /// Handle one visibility notification for `slide_id`
    pub fn notify(&self, slide_id: &str) -> Visibility {
        let Some(slide) = self.deck.slide(slide_id) else {
            return Visibility::Ignored;
        };

        // The ticket is taken before any builder runs, so a re-entrant notification
        // from inside a builder sees the slide as built.
        let ticket = self.book.borrow_mut().begin_build(slide_id);
        let outcome = match ticket {
            BuildTicket::Unknown => return Visibility::Ignored,
            BuildTicket::AlreadyBuilt => Visibility::Revisited,
            BuildTicket::Start => {
                self.build(slide);
                Visibility::Built
            }
        };

        let active = self.book.borrow_mut().activate_nav(slide_id);
        if let Some(index) = active {
            self.surface.apply(&SceneEvent::NavActive { index: Some(index) });
        }
        outcome
    }

    fn build(&self, slide: &Slide) {
        log::debug!("building scene {}", slide.id);
        let scene = Target::id(slide.id.clone());

        if let Some(theme) = &slide.theme {
            for (name, value) in theme {
                self.surface.set_style(&scene, name, value);
            }
        }

        self.background.show(slide.group.as_deref());

        if let Some(on) = slide.overlay_grid {
            let alpha = if on { GRID_ALPHA_ON } else { GRID_ALPHA_OFF };
            self.surface.set_root_property(GRID_ALPHA_VAR, alpha);
        }

        let groups = slide.figure_groups();

        let text_builder = self.registry.get(&FigureKind::Text);
        for fig in &groups.text {
            let Some(sel) = fig.fig_sel.as_deref() else { continue };
            match &text_builder {
                Some(builder) => builder.render(sel, &fig.props),
                None => log::warn!("no builder for text figure {}", sel),
            }
            if self.book.borrow_mut().mark_shown(sel) {
                self.surface.apply(&SceneEvent::FigureShown {
                    target: Target::from_selector(sel),
                });
            }
        }

        for fig in &groups.other {
            self.build_figure(fig);
        }

        if groups.text.is_empty() {
            self.show_chrome(&slide.id);
        }
    }

    fn build_figure(&self, fig: &Figure) {
        let Some(sel) = fig.fig_sel.as_deref() else { return };
        if let Some(opacity) = fig.graph_opacity() {
            self.surface
                .set_style(&Target::from_selector(sel), "opacity", &opacity);
        }
        match self.registry.get(&fig.kind) {
            Some(builder) => builder.render(sel, &fig.props),
            None => log::warn!("no builder registered for '{}' ({}); skipped", fig.kind, sel),
        }
    }

    fn show_chrome(&self, slide_id: &str) {
        if self.book.borrow_mut().show_chrome(slide_id) {
            self.surface.apply(&SceneEvent::ChromeVisible {
                scene: slide_id.to_string(),
            });
        }
    }
}
