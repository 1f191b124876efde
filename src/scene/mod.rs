//! Scene construction
//!
//! Builds the declarative subtree for each slide; the surface mounts it.

pub mod builder;
pub mod node;

pub use builder::build_scene;
pub use node::SceneNode;
