//! Chart Registry
//!
//! Lookup table from figure type to render capability. Builders draw into the
//! figure's container and return nothing.

use crate::models::{FigureKind, Props};
use std::collections::HashMap;
use std::rc::Rc;

/// Render capability for one figure type
pub trait ChartBuilder {
    /// Render into the element addressed by `selector` (the figure's figSel)
    fn render(&self, selector: &str, props: &Props);
}

impl<F> ChartBuilder for F
where
    F: Fn(&str, &Props),
{
    fn render(&self, selector: &str, props: &Props) {
        self(selector, props)
    }
}

#[derive(Clone, Default)]
pub struct ChartRegistry {
    builders: HashMap<FigureKind, Rc<dyn ChartBuilder>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: impl Into<FigureKind>, builder: Rc<dyn ChartBuilder>) {
        self.builders.insert(kind.into(), builder);
    }

    pub fn with(mut self, kind: impl Into<FigureKind>, builder: impl ChartBuilder + 'static) -> Self {
        self.register(kind, Rc::new(builder));
        self
    }

    pub fn get(&self, kind: &FigureKind) -> Option<Rc<dyn ChartBuilder>> {
        self.builders.get(kind).cloned()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl std::fmt::Debug for ChartRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.builders.keys().map(FigureKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ChartRegistry").field("kinds", &kinds).finish()
    }
}
