//! Slide records and legacy-shape normalization

use super::figure::{Figure, FigureKind, HAlign, Props};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Scene header; either a bare string or `{ text }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Plain(String),
    Rich {
        #[serde(default)]
        text: Option<String>,
    },
}

impl Label {
    pub fn text(&self) -> &str {
        match self {
            Label::Plain(text) => text,
            Label::Rich { text } => text.as_deref().unwrap_or(""),
        }
    }
}

/// Per-slide layout fractions; unset values fall back to the variant defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    #[serde(default)]
    pub text_frac: Option<f64>,
    #[serde(default)]
    pub gap_frac: Option<f64>,
    #[serde(default)]
    pub fig_frac: Option<f64>,
}

/// Legacy single-text field (`slide.text`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyText {
    #[serde(default)]
    pub fig_sel: Option<String>,
    #[serde(default)]
    pub props: Props,
}

/// One slide of the deck
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub id: String,

    /// Background media group shown while this slide builds
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub label: Option<Label>,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub figures: Vec<Figure>,

    #[serde(default)]
    pub layout: Option<LayoutParams>,

    /// CSS custom properties scoped to the scene element
    #[serde(default)]
    pub theme: Option<BTreeMap<String, String>>,

    #[serde(default = "default_dotnav")]
    pub dotnav: bool,

    #[serde(default)]
    pub overlay_grid: Option<bool>,

    /// Title of this slide's navigation dot
    #[serde(default)]
    pub nav: Option<String>,

    #[serde(default)]
    pub text: Option<LegacyText>,

    #[serde(default)]
    pub figure: Option<Figure>,
}

fn default_dotnav() -> bool {
    true
}

/// Figures of a slide split by build phase
#[derive(Debug, Default)]
pub struct FigureGroups<'a> {
    pub text: Vec<&'a Figure>,
    pub other: Vec<&'a Figure>,
}

impl<'a> FigureGroups<'a> {
    /// First non-text figure; it selects the slide's layout variant
    pub fn primary(&self) -> Option<&'a Figure> {
        self.other.first().copied()
    }

    pub fn first_text(&self) -> Option<&'a Figure> {
        self.text.first().copied()
    }

    pub fn h_align(&self) -> HAlign {
        self.first_text().map(Figure::h_align).unwrap_or_default()
    }
}

impl Slide {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: None,
            label: None,
            caption: None,
            figures: Vec::new(),
            layout: None,
            theme: None,
            dotnav: true,
            overlay_grid: None,
            nav: None,
            text: None,
            figure: None,
        }
    }

    pub fn with_figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    /// Fold the legacy `text`/`figure` fields into `figures`.
    ///
    /// Once `figures` holds anything it is returned as-is, so repeated calls never
    /// duplicate entries.
    pub fn canonicalize(&mut self) -> &[Figure] {
        if self.figures.is_empty() {
            self.figures = self.legacy_figures();
        }
        &self.figures
    }

    /// Canonical figures without mutating the slide
    pub fn canonical_figures(&self) -> Cow<'_, [Figure]> {
        if self.figures.is_empty() {
            Cow::Owned(self.legacy_figures())
        } else {
            Cow::Borrowed(&self.figures)
        }
    }

    fn legacy_figures(&self) -> Vec<Figure> {
        let mut figs = Vec::new();
        if let Some(text) = &self.text {
            figs.push(Figure {
                kind: FigureKind::Text,
                fig_sel: text.fig_sel.clone(),
                props: text.props.clone(),
            });
        }
        if let Some(figure) = &self.figure {
            figs.push(figure.clone());
        }
        figs
    }

    /// Split the canonical figures into text and non-text, preserving array order
    pub fn figure_groups(&self) -> FigureGroups<'_> {
        let (text, other): (Vec<&Figure>, Vec<&Figure>) =
            self.figures.iter().partition(|fig| fig.is_text());
        FigureGroups { text, other }
    }

    pub fn layout_params(&self) -> LayoutParams {
        self.layout.unwrap_or_default()
    }

    /// Navigation title: `nav`, else the id, else `Slide N`
    pub fn nav_title(&self, index: usize) -> String {
        match (&self.nav, self.id.is_empty()) {
            (Some(nav), _) if !nav.is_empty() => nav.clone(),
            (_, false) => self.id.clone(),
            _ => format!("Slide {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn legacy_slide() -> Slide {
        serde_json::from_value(json!({
            "id": "scene-legacy",
            "text": { "figSel": "#legacy-text", "props": { "title": "Hello" } },
            "figure": { "type": "scatter", "figSel": "#legacy-fig", "props": {} }
        }))
        .unwrap()
    }

    #[test]
    fn test_canonicalize_folds_legacy_fields() {
        let mut slide = legacy_slide();
        let figs = slide.canonicalize();
        assert_eq!(figs.len(), 2);
        assert!(figs[0].is_text());
        assert_eq!(figs[0].fig_sel.as_deref(), Some("#legacy-text"));
        assert_eq!(figs[1].kind, FigureKind::Other("scatter".into()));
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let mut slide = legacy_slide();
        let first = slide.canonicalize().to_vec();
        let second = slide.canonicalize().to_vec();
        assert_eq!(first.len(), second.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_figures_win_over_legacy() {
        let mut slide = legacy_slide();
        slide.figures = vec![Figure::new("video", "#clip")];
        assert_eq!(slide.canonicalize().len(), 1);
    }

    #[test]
    fn test_groups_keep_order() {
        let slide = Slide::new("s")
            .with_figure(Figure::new("line", "#a"))
            .with_figure(Figure::new("text", "#t"))
            .with_figure(Figure::new("table", "#b"));
        let groups = slide.figure_groups();
        assert_eq!(groups.text.len(), 1);
        assert_eq!(groups.other[0].fig_sel.as_deref(), Some("#a"));
        assert_eq!(groups.other[1].fig_sel.as_deref(), Some("#b"));
        assert_eq!(groups.primary().unwrap().fig_sel.as_deref(), Some("#a"));
    }

    #[test]
    fn test_defaults_and_label_shapes() {
        let slide: Slide = serde_json::from_value(json!({
            "id": "s",
            "label": { "text": "Header" },
            "layout": { "textFrac": 0.28 }
        }))
        .unwrap();
        assert!(slide.dotnav);
        assert_eq!(slide.label.unwrap().text(), "Header");
        assert_eq!(slide.layout.unwrap().text_frac, Some(0.28));
        assert_eq!(Label::Plain("Plain".into()).text(), "Plain");
    }

    #[test]
    fn test_nav_title_fallbacks() {
        let mut slide = Slide::new("scene-a");
        assert_eq!(slide.nav_title(0), "scene-a");
        slide.nav = Some("Cover".into());
        assert_eq!(slide.nav_title(0), "Cover");
        assert_eq!(Slide::new("").nav_title(3), "Slide 4");
    }
}
