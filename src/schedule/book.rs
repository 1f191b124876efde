//! Per-slide scene state
//!
//! The orchestrator owns one [`SceneBook`] and shares it with the scheduler and the
//! reveal synchronizer. Every mutator reports whether a transition happened so the
//! caller can emit the matching [`SceneEvent`](crate::surface::SceneEvent).

use crate::models::Deck;
use crate::nav::NavBar;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneStatus {
    #[default]
    Unseen,
    Built,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneState {
    pub status: SceneStatus,
    pub chrome_visible: bool,
}

impl SceneState {
    pub fn built(&self) -> bool {
        self.status == SceneStatus::Built
    }
}

/// Outcome of asking to build a slide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildTicket {
    /// Not a slide of this deck
    Unknown,
    AlreadyBuilt,
    /// First crossing; the slide is now marked built and the caller must build it
    Start,
}

#[derive(Debug, Default)]
pub struct SceneBook {
    states: HashMap<String, SceneState>,
    shown: HashSet<String>,
    nav: NavBar,
    active_nav: Option<usize>,
}

impl SceneBook {
    pub fn new(deck: &Deck, nav: NavBar) -> Self {
        Self {
            states: deck
                .slides
                .iter()
                .map(|slide| (slide.id.clone(), SceneState::default()))
                .collect(),
            shown: HashSet::new(),
            nav,
            active_nav: None,
        }
    }

    pub fn state(&self, slide_id: &str) -> Option<SceneState> {
        self.states.get(slide_id).copied()
    }

    pub fn contains(&self, slide_id: &str) -> bool {
        self.states.contains_key(slide_id)
    }

    pub fn is_built(&self, slide_id: &str) -> bool {
        self.state(slide_id).map_or(false, |s| s.built())
    }

    /// Flip `Unseen -> Built`. Never goes back.
    pub fn begin_build(&mut self, slide_id: &str) -> BuildTicket {
        match self.states.get_mut(slide_id) {
            None => BuildTicket::Unknown,
            Some(state) if state.built() => BuildTicket::AlreadyBuilt,
            Some(state) => {
                state.status = SceneStatus::Built;
                BuildTicket::Start
            }
        }
    }

    /// Mark scene chrome visible; true on the first call for a known scene
    pub fn show_chrome(&mut self, slide_id: &str) -> bool {
        match self.states.get_mut(slide_id) {
            Some(state) if !state.chrome_visible => {
                state.chrome_visible = true;
                true
            }
            _ => false,
        }
    }

    pub fn chrome_visible(&self, slide_id: &str) -> bool {
        self.state(slide_id).map_or(false, |s| s.chrome_visible)
    }

    /// Mark a figure container shown; true on the first call
    pub fn mark_shown(&mut self, fig_sel: &str) -> bool {
        self.shown.insert(fig_sel.to_string())
    }

    pub fn is_shown(&self, fig_sel: &str) -> bool {
        self.shown.contains(fig_sel)
    }

    /// Make the slide's navigation control the active one. Returns its index, or
    /// `None` (leaving the current marker alone) when the slide has no control.
    pub fn activate_nav(&mut self, slide_id: &str) -> Option<usize> {
        let index = self.nav.index_of(slide_id)?;
        self.active_nav = Some(index);
        Some(index)
    }

    pub fn active_nav(&self) -> Option<usize> {
        self.active_nav
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slide;

    fn book() -> SceneBook {
        let mut quiet = Slide::new("b");
        quiet.dotnav = false;
        let deck = Deck::new(vec![Slide::new("a"), quiet, Slide::new("c")]);
        SceneBook::new(&deck, NavBar::from_deck(&deck))
    }

    #[test]
    fn test_build_ticket_is_monotonic() {
        let mut book = book();
        assert_eq!(book.begin_build("a"), BuildTicket::Start);
        assert_eq!(book.begin_build("a"), BuildTicket::AlreadyBuilt);
        assert_eq!(book.begin_build("a"), BuildTicket::AlreadyBuilt);
        assert!(book.is_built("a"));
        assert!(!book.is_built("c"));
        assert_eq!(book.begin_build("zzz"), BuildTicket::Unknown);
    }

    #[test]
    fn test_chrome_transition_fires_once() {
        let mut book = book();
        assert!(book.show_chrome("a"));
        assert!(!book.show_chrome("a"));
        assert!(!book.show_chrome("unknown"));
        assert!(book.chrome_visible("a"));
    }

    #[test]
    fn test_nav_activation_skips_opted_out() {
        let mut book = book();
        assert_eq!(book.activate_nav("c"), Some(1));
        assert_eq!(book.activate_nav("b"), None);
        assert_eq!(book.active_nav(), Some(1));
        assert_eq!(book.activate_nav("a"), Some(0));
        assert_eq!(book.active_nav(), Some(0));
    }
}
