//! Figure records
//!
//! A figure is one visual unit inside a scene. Its `type` tag picks both the chart
//! builder that renders it and the layout variant its slide uses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form configuration handed to a chart builder
pub type Props = Map<String, Value>;

/// Figure type tag
///
/// The core only distinguishes the tags that change scene structure or layout;
/// every other tag is carried through verbatim for the chart registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FigureKind {
    Text,
    Table,
    Credits,
    Video,
    Other(String),
}

impl FigureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FigureKind::Text => "text",
            FigureKind::Table => "table",
            FigureKind::Credits => "credits",
            FigureKind::Video => "video",
            FigureKind::Other(tag) => tag,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FigureKind::Text)
    }
}

impl From<String> for FigureKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FigureKind::Text,
            "table" => FigureKind::Table,
            "credits" => FigureKind::Credits,
            "video" => FigureKind::Video,
            _ => FigureKind::Other(tag),
        }
    }
}

impl From<&str> for FigureKind {
    fn from(tag: &str) -> Self {
        FigureKind::from(tag.to_string())
    }
}

impl From<FigureKind> for String {
    fn from(kind: FigureKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment of a text block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HAlign {
    /// Lenient parse; anything unrecognised centers
    pub fn from_prop(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("left") => HAlign::Left,
            Some("right") => HAlign::Right,
            _ => HAlign::Center,
        }
    }
}

/// One figure within a slide
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    #[serde(rename = "type")]
    pub kind: FigureKind,

    /// Anchor selector (`#some-id`); the container id is derived from it
    #[serde(default)]
    pub fig_sel: Option<String>,

    #[serde(default)]
    pub props: Props,
}

impl Figure {
    pub fn new(kind: impl Into<FigureKind>, fig_sel: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fig_sel: Some(fig_sel.into()),
            props: Props::new(),
        }
    }

    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }

    /// DOM id of this figure's container (`#chart` -> `chart`)
    pub fn container_id(&self) -> Option<&str> {
        self.fig_sel.as_deref().map(|sel| sel.trim_start_matches('#'))
    }

    /// `halign` prop of a text figure
    pub fn h_align(&self) -> HAlign {
        HAlign::from_prop(self.props.get("halign"))
    }

    /// Starting opacity requested via `graphOpacity`, as a CSS value.
    ///
    /// Numbers and strings are both accepted; strings pass through untouched.
    pub fn graph_opacity(&self) -> Option<String> {
        match self.props.get("graphOpacity")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_roundtrips_unknown_tags() {
        let fig: Figure = serde_json::from_value(json!({
            "type": "scatter",
            "figSel": "#corr",
            "props": { "xLabel": "Distance" }
        }))
        .unwrap();

        assert_eq!(fig.kind, FigureKind::Other("scatter".into()));
        assert_eq!(fig.container_id(), Some("corr"));
        assert_eq!(serde_json::to_value(&fig).unwrap()["type"], "scatter");
    }

    #[test]
    fn test_known_tags_map_to_variants() {
        assert_eq!(FigureKind::from("text"), FigureKind::Text);
        assert_eq!(FigureKind::from("table"), FigureKind::Table);
        assert_eq!(FigureKind::from("credits"), FigureKind::Credits);
        assert!(!FigureKind::from("video").is_text());
    }

    #[test]
    fn test_halign_and_opacity_props() {
        let fig = Figure::new("text", "#t")
            .with_prop("halign", json!("left"))
            .with_prop("graphOpacity", json!(0.4));
        assert_eq!(fig.h_align(), HAlign::Left);
        assert_eq!(fig.graph_opacity().as_deref(), Some("0.4"));

        let plain = Figure::new("text", "#u").with_prop("halign", json!("justify"));
        assert_eq!(plain.h_align(), HAlign::Center);
        assert_eq!(plain.graph_opacity(), None);
    }

    #[test]
    fn test_string_opacity_passes_through() {
        let fig = Figure::new("scatter", "#s").with_prop("graphOpacity", json!("0.3"));
        assert_eq!(fig.graph_opacity().as_deref(), Some("0.3"));

        let null = Figure::new("scatter", "#n").with_prop("graphOpacity", Value::Null);
        assert_eq!(null.graph_opacity(), None);
    }
}
