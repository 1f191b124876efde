//! Layout Engine
//!
//! Viewport-driven geometry for paired text/figure slides. Strategies are pure; the
//! engine reads the stage metrics once per pass and applies each slide's plan to the
//! surface. A pass is synchronous, total over the deck and idempotent, so resize events
//! simply rerun it.

pub mod metrics;
pub mod plan;
pub mod strategies;

use crate::models::{Deck, Slide};
use crate::surface::Surface;

pub use metrics::{StageMetrics, Viewport, DEFAULT_CAPTION_BAND, DEFAULT_LABEL_BAND};
pub use plan::{LayoutPlan, LayoutRequest, StyleWrite};
pub use strategies::{FigureBox, Length, LayoutVariant, Overflow, SlideGeometry, TextBox};

/// Main layout engine for positioning scene content
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Plan one slide without touching the page
    pub fn plan_slide(&self, slide: &Slide, stage: &StageMetrics, viewport: Viewport) -> Option<LayoutPlan> {
        LayoutRequest::for_slide(slide).map(|req| req.plan(stage, viewport))
    }

    /// Lay out one slide; returns whether any style was written
    fn apply_with(&self, slide: &Slide, surface: &dyn Surface, stage: &StageMetrics, viewport: Viewport) -> bool {
        let Some(plan) = self.plan_slide(slide, stage, viewport) else {
            return false;
        };
        let applied = plan.apply(surface);
        if applied {
            if let SlideGeometry::Table { figure, .. } = &plan.geometry {
                log::debug!(
                    "[TABLE LAYOUT] slide={} label={} caption={} top={:.1} max_height={:.1}",
                    slide.id,
                    stage.label_band,
                    stage.caption_band,
                    figure.top,
                    figure.max_height
                );
            }
        } else {
            log::trace!("layout skipped for {}: target missing", slide.id);
        }
        applied
    }

    /// Lay out every slide of the deck; returns how many slides were positioned
    pub fn relayout(&self, deck: &Deck, surface: &dyn Surface) -> usize {
        let stage = StageMetrics::read(surface);
        let viewport = surface.viewport();
        deck.slides
            .iter()
            .filter(|slide| self.apply_with(slide, surface, &stage, viewport))
            .count()
    }
}
