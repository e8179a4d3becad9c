//! Scene management system
//!
//! The scene graph holds every renderable node. The lifecycle core only ever
//! attaches nodes for freshly loaded transient objects, mutates their material
//! opacity and detaches them again; everything else about the scene is set up
//! outside the engine.
//!
//! ```text
//! Transient registry (lifecycle)
//!      ↓  add / set opacity / remove
//! Scene graph
//!      ↓  read each frame
//! Renderer (external)
//! ```

mod node;
mod scene_graph;

pub use node::{BlendMode, GlowMaterial, SceneNode};
pub use scene_graph::{SceneGraph, SimpleSceneGraph};
