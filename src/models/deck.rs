//! Deck: the root configuration handed over at bootstrap

use super::slide::Slide;
use crate::error::DeckError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

/// Background media group descriptor, forwarded untouched to the background layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// CSS custom properties applied on the document root
    #[serde(default)]
    pub theme_vars: BTreeMap<String, String>,

    #[serde(default)]
    pub media_groups: Vec<MediaGroup>,

    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let deck: Deck = serde_json::from_str(json)?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DeckError> {
        let deck: Deck = serde_yaml::from_str(yaml)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Check the authoring invariants: every slide has a unique id and every
    /// figure (legacy shapes included) has a unique figSel.
    pub fn validate(&self) -> Result<(), DeckError> {
        let mut ids = HashSet::new();
        let mut sels = HashSet::new();

        for (index, slide) in self.slides.iter().enumerate() {
            if slide.id.is_empty() {
                return Err(DeckError::MissingSlideId { index });
            }
            if !ids.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateSlideId(slide.id.clone()));
            }

            for (fig_index, fig) in slide.canonical_figures().iter().enumerate() {
                let sel = match fig.fig_sel.as_deref() {
                    Some(sel) if !sel.is_empty() => sel,
                    _ => {
                        return Err(DeckError::MissingFigSel {
                            slide: slide.id.clone(),
                            index: fig_index,
                        })
                    }
                };
                if !sels.insert(sel.to_string()) {
                    return Err(DeckError::DuplicateFigSel(sel.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    pub fn slide_index(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }
}
