//! Layout plans: resolved targets plus the style writes to apply to them

use super::metrics::{StageMetrics, Viewport};
use super::strategies::{LayoutVariant, SlideGeometry};
use crate::models::{FigureKind, HAlign, LayoutParams, Slide};
use crate::surface::{Surface, Target};
use serde::Serialize;

pub const CREDITS_VIEWPORT_CLASS: &str = "credits-viewport";

/// One inline style assignment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleWrite {
    pub target: Target,
    pub property: &'static str,
    pub value: String,
}

impl StyleWrite {
    pub fn new(target: &Target, property: &'static str, value: impl ToString) -> Self {
        Self {
            target: target.clone(),
            property,
            value: value.to_string(),
        }
    }
}

/// Which strategy a slide uses and where its text and figure live
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRequest {
    pub slide_id: String,
    pub variant: LayoutVariant,
    pub text: Option<Target>,
    pub figure: Target,
    pub params: LayoutParams,
    pub h_align: HAlign,
}

impl LayoutRequest {
    /// Pick the strategy for a slide from its primary (first non-text) figure.
    /// Text-only slides lay themselves out and get `None`.
    pub fn for_slide(slide: &Slide) -> Option<Self> {
        let groups = slide.figure_groups();
        let primary = groups.primary()?;
        let text = groups
            .first_text()
            .and_then(|fig| fig.fig_sel.as_deref())
            .map(Target::from_selector);
        let figure = primary.fig_sel.as_deref().map(Target::from_selector);

        let (variant, figure) = match (&primary.kind, text.is_some()) {
            (FigureKind::Table, _) => (LayoutVariant::Table, figure?),
            (FigureKind::Credits, _) => (
                LayoutVariant::Credits,
                Target::SceneChild {
                    scene: slide.id.clone(),
                    class: CREDITS_VIEWPORT_CLASS.to_string(),
                },
            ),
            (_, false) => (LayoutVariant::FigureOnly, figure?),
            (_, true) => (LayoutVariant::Panel, figure?),
        };

        Some(Self {
            slide_id: slide.id.clone(),
            variant,
            text,
            figure,
            params: slide.layout_params(),
            h_align: groups.h_align(),
        })
    }

    /// Targets that must exist for the plan to apply
    fn required(&self) -> Vec<&Target> {
        match (self.variant, &self.text) {
            (LayoutVariant::Panel | LayoutVariant::Table, Some(text)) => vec![text, &self.figure],
            // Nothing to pair the figure with; the plan is skipped.
            (LayoutVariant::Panel | LayoutVariant::Table, None) => Vec::new(),
            (LayoutVariant::FigureOnly | LayoutVariant::Credits, _) => vec![&self.figure],
        }
    }

    pub fn plan(&self, stage: &StageMetrics, viewport: Viewport) -> LayoutPlan {
        let geometry = self.variant.compute(stage, viewport, &self.params, self.h_align);
        LayoutPlan {
            slide_id: self.slide_id.clone(),
            required: self.required().into_iter().cloned().collect(),
            writes: geometry.writes(self.text.as_ref(), &self.figure),
            geometry,
        }
    }
}

/// Computed layout for one slide
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub slide_id: String,
    pub geometry: SlideGeometry,
    pub required: Vec<Target>,
    pub writes: Vec<StyleWrite>,
}

impl LayoutPlan {
    /// Apply every write, or nothing at all when a required target is missing
    pub fn apply(&self, surface: &dyn Surface) -> bool {
        if self.required.is_empty() || !self.required.iter().all(|t| surface.exists(t)) {
            return false;
        }
        for write in &self.writes {
            surface.set_style(&write.target, write.property, &write.value);
        }
        true
    }
}
