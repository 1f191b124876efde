//! Scene Builder
//!
//! Turns one slide into its scene subtree: optional label, a canvas holding one
//! container per figure, optional caption. Container ids come from `figSel`.

use super::node::SceneNode;
use crate::models::{Figure, FigureKind, Slide};

pub const SCENE_CLASS: &str = "scene";
pub const LABEL_CLASS: &str = "graph-label";
pub const GRAPHIC_CLASS: &str = "graphic";
pub const CANVAS_CLASS: &str = "canvas";
pub const TABLE_CLASS: &str = "table-cards";
pub const FIGURE_CLASS: &str = "figure-box";
pub const CREDITS_VIEWPORT_CLASS: &str = crate::layout::plan::CREDITS_VIEWPORT_CLASS;
pub const TEXT_WRAP_CLASS: &str = "text-cards";
pub const TEXT_CLASS: &str = "text-box";
pub const CAPTION_CLASS: &str = "caption";

/// Build the scene subtree for a slide.
///
/// Canonicalizes the slide's figures first (legacy `text`/`figure` fields are folded
/// in once). Figures without a figSel get no container.
pub fn build_scene(slide: &mut Slide) -> SceneNode {
    slide.canonicalize();

    let mut section = SceneNode::new("section", SCENE_CLASS).with_id(slide.id.clone());

    if let Some(label) = &slide.label {
        section.push(SceneNode::div(LABEL_CLASS).with_text(label.text()));
    }

    let mut canvas = SceneNode::div(CANVAS_CLASS);
    for fig in &slide.figures {
        if let Some(container) = figure_container(fig) {
            canvas.push(container);
        }
    }
    section.push(SceneNode::div(GRAPHIC_CLASS).with_child(canvas));

    if let Some(caption) = &slide.caption {
        section.push(SceneNode::div(CAPTION_CLASS).with_text(caption.clone()));
    }

    section
}

fn figure_container(fig: &Figure) -> Option<SceneNode> {
    let id = fig.container_id().filter(|id| !id.is_empty())?;
    let node = match fig.kind {
        FigureKind::Table => SceneNode::div(TABLE_CLASS).with_id(id),
        FigureKind::Credits => SceneNode::div(FIGURE_CLASS)
            .with_id(id)
            .with_child(SceneNode::div(CREDITS_VIEWPORT_CLASS)),
        FigureKind::Text => {
            SceneNode::div(TEXT_WRAP_CLASS).with_child(SceneNode::div(TEXT_CLASS).with_id(id))
        }
        FigureKind::Video | FigureKind::Other(_) => SceneNode::div(FIGURE_CLASS).with_id(id),
    };
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, LegacyText, Props};

    fn canvas(scene: &SceneNode) -> &SceneNode {
        scene.find_class(CANVAS_CLASS).expect("canvas")
    }

    #[test]
    fn test_scene_order_label_canvas_caption() {
        let mut slide = Slide::new("s1").with_figure(Figure::new("text", "#a"));
        slide.label = Some(Label::Plain("Header".into()));
        slide.caption = Some("Source".into());

        let scene = build_scene(&mut slide);
        assert_eq!(scene.tag, "section");
        assert_eq!(scene.id.as_deref(), Some("s1"));
        let classes: Vec<_> = scene.children.iter().map(|c| c.class.as_str()).collect();
        assert_eq!(classes, [LABEL_CLASS, GRAPHIC_CLASS, CAPTION_CLASS]);
        assert_eq!(scene.children[0].text.as_deref(), Some("Header"));
    }

    #[test]
    fn test_container_per_figure_kind() {
        let mut slide = Slide::new("s")
            .with_figure(Figure::new("text", "#t"))
            .with_figure(Figure::new("table", "#tab"))
            .with_figure(Figure::new("credits", "#cred"))
            .with_figure(Figure::new("geo", "#map"));
        let scene = build_scene(&mut slide);
        let canvas = canvas(&scene);
        assert_eq!(canvas.children.len(), 4);

        assert_eq!(canvas.children[0].class, TEXT_WRAP_CLASS);
        assert_eq!(scene.find("t").unwrap().class, TEXT_CLASS);
        assert_eq!(scene.find("tab").unwrap().class, TABLE_CLASS);
        let credits = scene.find("cred").unwrap();
        assert_eq!(credits.class, FIGURE_CLASS);
        assert_eq!(credits.children[0].class, CREDITS_VIEWPORT_CLASS);
        assert_eq!(scene.find("map").unwrap().class, FIGURE_CLASS);
    }

    #[test]
    fn test_chrome_only_without_figures() {
        let mut slide = Slide::new("empty");
        slide.caption = Some("Only a caption".into());
        let scene = build_scene(&mut slide);
        assert!(canvas(&scene).children.is_empty());
        assert!(scene.find_class(CAPTION_CLASS).is_some());
        assert!(scene.find_class(LABEL_CLASS).is_none());
    }

    #[test]
    fn test_legacy_slide_rebuild_does_not_duplicate() {
        let mut slide = Slide::new("legacy");
        slide.text = Some(LegacyText { fig_sel: Some("#lt".into()), props: Props::new() });
        slide.figure = Some(Figure::new("line", "#lf"));

        let first = build_scene(&mut slide);
        let second = build_scene(&mut slide);
        assert_eq!(slide.figures.len(), 2);
        assert_eq!(first, second);
        assert_eq!(canvas(&second).children.len(), 2);
    }

    #[test]
    fn test_figure_without_selector_is_skipped() {
        let mut slide = Slide::new("s");
        slide.figures.push(Figure { kind: FigureKind::Video, fig_sel: None, props: Props::new() });
        let scene = build_scene(&mut slide);
        assert!(canvas(&scene).children.is_empty());
    }
}
