//! Declarative scene tree
//!
//! The scene builder returns this structure; the DOM surface turns it into elements
//! one-to-one. Nothing here touches the page.

use serde::{Deserialize, Serialize};

/// One element of a scene subtree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Element tag (`section`, `div`)
    pub tag: String,

    pub id: Option<String>,

    pub class: String,

    /// Text content; mutually exclusive with children in practice
    pub text: Option<String>,

    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            class: class.to_string(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn div(class: &str) -> Self {
        Self::new("div", class)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search by id
    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Depth-first search by class
    pub fn find_class(&self, class: &str) -> Option<&SceneNode> {
        if self.class == class {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_class(class))
    }

    /// Visit every node, parents first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a SceneNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
