//! Viewport and stage metrics consumed by every layout strategy

use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// Fallback height of the reserved label band
pub const DEFAULT_LABEL_BAND: f64 = 48.0;

/// Fallback height of the reserved caption band
pub const DEFAULT_CAPTION_BAND: f64 = 90.0;

pub const LABEL_BAND_VAR: &str = "--labelH";
pub const CAPTION_BAND_VAR: &str = "--captionH";

/// Inner size of the browser window
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal gutter for aligned text: 5% of the width, never below 48
    pub fn gutter(&self) -> f64 {
        (self.width * 0.05).max(48.0)
    }
}

/// Reserved chrome bands, read from the stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageMetrics {
    pub label_band: f64,
    pub caption_band: f64,
}

impl Default for StageMetrics {
    fn default() -> Self {
        Self {
            label_band: DEFAULT_LABEL_BAND,
            caption_band: DEFAULT_CAPTION_BAND,
        }
    }
}

impl StageMetrics {
    pub fn read(surface: &dyn Surface) -> Self {
        Self {
            label_band: surface
                .css_px_var(LABEL_BAND_VAR)
                .unwrap_or(DEFAULT_LABEL_BAND),
            caption_band: surface
                .css_px_var(CAPTION_BAND_VAR)
                .unwrap_or(DEFAULT_CAPTION_BAND),
        }
    }

    /// Vertical room between the label and caption bands
    pub fn available_band(&self, viewport: Viewport) -> f64 {
        viewport.height - self.label_band - self.caption_band
    }
}
