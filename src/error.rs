//! Error types for deck loading and mounting
//!
//! Runtime conditions (missing DOM targets, unknown figure types, stray visibility
//! notifications) are skipped silently. Only schema-authoring defects and parse
//! failures are errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid deck YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Slide #{index} has no id")]
    MissingSlideId { index: usize },

    #[error("Duplicate slide id '{0}'")]
    DuplicateSlideId(String),

    #[error("Figure #{index} of slide '{slide}' has no figSel")]
    MissingFigSel { slide: String, index: usize },

    #[error("Duplicate figSel '{0}'")]
    DuplicateFigSel(String),

    #[error("Missing mount point '{0}'")]
    MissingMount(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
