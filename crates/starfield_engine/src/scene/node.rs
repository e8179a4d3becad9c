//! Renderable scene nodes and their glow material

use crate::foundation::math::{Transform, Vec3};

/// How a material combines with what is already in the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending
    #[default]
    Normal,
    /// Colour is added on top of the destination
    Additive,
}

/// Emissive glow material with a per-node opacity
///
/// The opacity is the value the lifecycle pass fades; renderers read it
/// straight off the node every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowMaterial {
    /// Glow colour (linear RGB)
    pub color: Vec3,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Blending against the framebuffer
    pub blend: BlendMode,
    /// Whether the material writes depth
    pub depth_write: bool,
}

impl GlowMaterial {
    /// Fully opaque, additive, depth-write disabled glow of the given colour
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            opacity: 1.0,
            blend: BlendMode::Additive,
            depth_write: false,
        }
    }
}

/// A node attached to the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Name taken from the source asset
    pub name: String,
    /// World placement
    pub transform: Transform,
    /// Material override applied to every mesh under this node
    pub material: Option<GlowMaterial>,
    /// Number of meshes in the node's subtree
    pub mesh_count: usize,
}

impl SceneNode {
    /// Create an empty node at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            material: None,
            mesh_count: 0,
        }
    }

    /// Builder: set the mesh count
    #[must_use]
    pub fn with_mesh_count(mut self, mesh_count: usize) -> Self {
        self.mesh_count = mesh_count;
        self
    }

    /// Current opacity (1.0 without a material override)
    pub fn opacity(&self) -> f32 {
        self.material.as_ref().map_or(1.0, |material| material.opacity)
    }

    /// Write the material opacity, clamped to `[0, 1]`
    pub fn set_opacity(&mut self, opacity: f32) {
        if let Some(material) = self.material.as_mut() {
            material.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}
