//! Asset management system
//!
//! Models are produced asynchronously by an [`AssetLoader`]. The loader owns
//! the work; the engine only ever sees the outcome, delivered through the
//! completion queue on the frame thread.

pub mod loader;
pub mod gltf_loader;

pub use loader::{AssetLoadError, AssetLoader, LoadCompletion, LoadOutcome, LoadedModel, ModelRef};
pub use gltf_loader::GltfModelLoader;
