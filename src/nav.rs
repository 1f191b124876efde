//! Navigation dots
//!
//! One control per slide that opts in (`dotnav`, default true), in deck order.

use crate::models::Deck;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub slide_id: String,
    pub title: String,
}

/// Ordered navigation controls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavBar {
    entries: Vec<NavEntry>,
}

impl NavBar {
    pub fn from_deck(deck: &Deck) -> Self {
        let entries = deck
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.dotnav)
            .map(|(i, slide)| NavEntry {
                slide_id: slide.id.clone(),
                title: slide.nav_title(i),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Position of a slide among the navigable slides
    pub fn index_of(&self, slide_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.slide_id == slide_id)
    }
}
