//! # Starfield Engine
//!
//! Lifecycle management for short-lived scene objects: shooting stars that are
//! spawned on a fixed wall-clock schedule, live for a bounded time, fade out
//! over the end of that time and are then detached and released.
//!
//! ## Features
//!
//! - **Wall-clock spawning**: spawn rate independent of frame rate
//! - **Asynchronous loading**: model loads never block a frame
//! - **Fade lifecycle**: linear opacity fade, removal at end of life
//! - **Deterministic ordering**: lifecycle, then animation, then render
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starfield_engine::prelude::*;
//!
//! struct NullRenderer;
//!
//! impl Renderer for NullRenderer {
//!     fn render(&mut self, _scene: &dyn SceneGraph, _report: &FrameReport) -> Result<(), RenderError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StarfieldConfig::default();
//!     let mut render_loop = RenderLoop::new(
//!         &config,
//!         SystemClock::new(),
//!         SimpleSceneGraph::new(),
//!         Box::new(GltfModelLoader::new()),
//!         Box::new(NullRenderer),
//!     )?;
//!     render_loop.tick()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod animation;
pub mod assets;
pub mod ecs;

mod engine;

pub use engine::{EngineError, FrameReport, FrameScheduler, RenderError, RenderLoop, Renderer};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        EngineError, FrameReport, FrameScheduler, RenderError, RenderLoop, Renderer,
        animation::{AnimationClip, AnimationMixer},
        assets::{AssetLoadError, AssetLoader, GltfModelLoader, LoadCompletion, LoadedModel, ModelRef},
        config::{Config, ConfigError, EngineConfig, StarfieldConfig},
        ecs::{ObjectHandle, TransientObject, TransientRegistry},
        foundation::{
            math::{Transform, Vec3},
            time::{Clock, ManualClock, SystemClock},
        },
        scene::{BlendMode, GlowMaterial, SceneGraph, SceneNode, SimpleSceneGraph},
    };
}
