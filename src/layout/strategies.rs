//! Layout strategies
//!
//! Each strategy is a pure function of stage metrics, viewport and slide parameters.
//! The result is a [`SlideGeometry`] which is turned into inline style writes by
//! [`SlideGeometry::writes`].

use super::metrics::{StageMetrics, Viewport};
use super::plan::StyleWrite;
use crate::models::{HAlign, LayoutParams};
use crate::surface::Target;
use serde::Serialize;
use std::fmt;

// Panel / figure-only
const PANEL_TEXT_FRAC: f64 = 0.22;
const PANEL_GAP_FRAC: f64 = 0.03;
const PANEL_FIG_FRAC: f64 = 0.66;
const PANEL_PAD_TOP: f64 = 40.0;
const FIGURE_ONLY_FOOT: f64 = 12.0;

// Table
const TABLE_TEXT_FRAC: f64 = 0.25;
const TABLE_GAP_FRAC: f64 = 0.02;
const TABLE_PAD_TOP: f64 = 56.0;
const TABLE_TITLE_GAP: f64 = 16.0;
const TABLE_BOTTOM_MARGIN: f64 = 20.0;
const TABLE_MIN_HEIGHT: f64 = 160.0;
const TABLE_MAX_WIDTH: f64 = 1120.0;
const TABLE_MAX_VW: f64 = 92.0;

// Credits
const CREDITS_FRAC: f64 = 0.80;

// Text line-length cap
const TEXT_MAX_WIDTH: f64 = 1120.0;
const TEXT_MAX_VW: f64 = 90.0;

const FIGURE_WIDTH_PCT: f64 = 90.0;

/// Named positioning strategy, picked by a slide's primary figure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutVariant {
    Panel,
    Table,
    FigureOnly,
    Credits,
}

/// CSS length produced by the strategies
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Length {
    Px(f64),
    Percent(f64),
    /// `min(<px>px, <vw>vw)`
    MinPxVw(f64, f64),
    Auto,
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
            Length::MinPxVw(px, vw) => write!(f, "min({}px, {}vw)", px, vw),
            Length::Auto => f.write_str("auto"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Overflow {
    /// Fixed box, content clipped
    Clip,
    /// Vertical scroll when content exceeds the max height, never horizontal
    ScrollY,
}

/// Text sub-band placement; `top` is the vertical midline of the band
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextBox {
    pub top: f64,
    pub h_align: HAlign,
    pub gutter: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FigureBox {
    pub top: f64,
    pub width: Length,
    pub height: Length,
    pub max_height: f64,
    pub overflow: Overflow,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum SlideGeometry {
    Panel { text: TextBox, figure: FigureBox },
    Table { text: TextBox, figure: FigureBox },
    FigureOnly { figure: FigureBox },
    Credits { top: f64, height: f64 },
}

impl LayoutVariant {
    pub fn compute(
        self,
        stage: &StageMetrics,
        viewport: Viewport,
        params: &LayoutParams,
        h_align: HAlign,
    ) -> SlideGeometry {
        match self {
            LayoutVariant::Panel => panel(stage, viewport, params, h_align),
            LayoutVariant::Table => table(stage, viewport, params, h_align),
            LayoutVariant::FigureOnly => figure_only(stage, viewport),
            LayoutVariant::Credits => credits(stage, viewport),
        }
    }
}

fn text_box(stage: &StageMetrics, viewport: Viewport, text_h: f64, pad_top: f64, h_align: HAlign) -> TextBox {
    TextBox {
        top: stage.label_band + text_h / 2.0 + pad_top,
        h_align,
        gutter: viewport.gutter(),
    }
}

/// Text band above a fixed-height figure
pub fn panel(stage: &StageMetrics, viewport: Viewport, params: &LayoutParams, h_align: HAlign) -> SlideGeometry {
    let avail = stage.available_band(viewport);
    let text_h = avail * params.text_frac.unwrap_or(PANEL_TEXT_FRAC);
    let gap = avail * params.gap_frac.unwrap_or(PANEL_GAP_FRAC);
    let fig_h = (avail * params.fig_frac.unwrap_or(PANEL_FIG_FRAC)).max(0.0);

    SlideGeometry::Panel {
        text: text_box(stage, viewport, text_h, PANEL_PAD_TOP, h_align),
        figure: FigureBox {
            top: stage.label_band + text_h + PANEL_PAD_TOP + gap,
            width: Length::Percent(FIGURE_WIDTH_PCT),
            height: Length::Px(fig_h),
            max_height: fig_h,
            overflow: Overflow::Clip,
        },
    }
}

/// Text band above a table that grows with its rows up to the caption band
pub fn table(stage: &StageMetrics, viewport: Viewport, params: &LayoutParams, h_align: HAlign) -> SlideGeometry {
    let avail = stage.available_band(viewport);
    let text_h = avail * params.text_frac.unwrap_or(TABLE_TEXT_FRAC);
    let gap = avail * params.gap_frac.unwrap_or(TABLE_GAP_FRAC);

    let top = stage.label_band + text_h + TABLE_PAD_TOP + gap + TABLE_TITLE_GAP;
    // Room left above the caption band; the max height never exceeds it.
    let room = (viewport.height - top - stage.caption_band).max(0.0);
    let max_height = (room - TABLE_BOTTOM_MARGIN).max(TABLE_MIN_HEIGHT).min(room);

    SlideGeometry::Table {
        text: text_box(stage, viewport, text_h, TABLE_PAD_TOP, h_align),
        figure: FigureBox {
            top,
            width: Length::MinPxVw(TABLE_MAX_WIDTH, TABLE_MAX_VW),
            height: Length::Auto,
            max_height,
            overflow: Overflow::ScrollY,
        },
    }
}

/// Figure fills the whole available band
pub fn figure_only(stage: &StageMetrics, viewport: Viewport) -> SlideGeometry {
    let height = (stage.available_band(viewport) - PANEL_PAD_TOP - FIGURE_ONLY_FOOT).max(0.0);
    SlideGeometry::FigureOnly {
        figure: FigureBox {
            top: stage.label_band + PANEL_PAD_TOP,
            width: Length::Percent(FIGURE_WIDTH_PCT),
            height: Length::Px(height),
            max_height: height,
            overflow: Overflow::Clip,
        },
    }
}

/// Credits viewport vertically centred in the band
pub fn credits(stage: &StageMetrics, viewport: Viewport) -> SlideGeometry {
    let avail = stage.available_band(viewport).max(0.0);
    let height = (avail * CREDITS_FRAC).round();
    SlideGeometry::Credits {
        top: stage.label_band + ((avail - height) / 2.0).round(),
        height,
    }
}

impl SlideGeometry {
    /// Style writes for this geometry. `text` and `figure` are the resolved targets;
    /// credits geometry only uses `figure`.
    pub fn writes(&self, text: Option<&Target>, figure: &Target) -> Vec<StyleWrite> {
        let mut out = Vec::new();
        match self {
            SlideGeometry::Panel { text: tb, figure: fb } | SlideGeometry::Table { text: tb, figure: fb } => {
                if let Some(text) = text {
                    text_writes(&mut out, text, tb);
                }
                figure_writes(&mut out, figure, fb);
            }
            SlideGeometry::FigureOnly { figure: fb } => figure_writes(&mut out, figure, fb),
            SlideGeometry::Credits { top, height } => {
                out.push(StyleWrite::new(figure, "height", Length::Px(*height)));
                out.push(StyleWrite::new(figure, "top", Length::Px(*top)));
            }
        }
        out
    }
}

fn text_writes(out: &mut Vec<StyleWrite>, target: &Target, tb: &TextBox) {
    out.push(StyleWrite::new(target, "position", "absolute"));
    out.push(StyleWrite::new(target, "top", Length::Px(tb.top)));
    out.push(StyleWrite::new(target, "max-width", Length::MinPxVw(TEXT_MAX_WIDTH, TEXT_MAX_VW)));

    let gutter = Length::Px(tb.gutter).to_string();
    let (left, right, transform, align) = match tb.h_align {
        HAlign::Left => (gutter.as_str(), "", "translateY(-50%)", "left"),
        HAlign::Right => ("", gutter.as_str(), "translateY(-50%)", "right"),
        HAlign::Center => ("50%", "", "translate(-50%, -50%)", "center"),
    };
    out.push(StyleWrite::new(target, "left", left));
    out.push(StyleWrite::new(target, "right", right));
    out.push(StyleWrite::new(target, "transform", transform));
    out.push(StyleWrite::new(target, "text-align", align));
}

fn figure_writes(out: &mut Vec<StyleWrite>, target: &Target, fb: &FigureBox) {
    out.push(StyleWrite::new(target, "position", "absolute"));
    out.push(StyleWrite::new(target, "left", "50%"));
    out.push(StyleWrite::new(target, "transform", "translateX(-50%)"));
    out.push(StyleWrite::new(target, "top", Length::Px(fb.top)));
    out.push(StyleWrite::new(target, "width", fb.width));
    out.push(StyleWrite::new(target, "height", fb.height));
    out.push(StyleWrite::new(target, "max-height", Length::Px(fb.max_height)));
    match fb.overflow {
        Overflow::Clip => out.push(StyleWrite::new(target, "overflow", "hidden")),
        Overflow::ScrollY => {
            out.push(StyleWrite::new(target, "overflow-y", "auto"));
            out.push(StyleWrite::new(target, "overflow-x", "hidden"));
        }
    }
}
