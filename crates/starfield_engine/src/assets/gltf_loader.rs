//! glTF model loader
//!
//! Each request is parsed on its own worker thread so concurrent loads never
//! wait on each other or on the frame loop.

use std::path::Path;
use std::thread;

use super::loader::{AssetLoadError, AssetLoader, LoadCompletion, LoadedModel, ModelRef};
use crate::animation::AnimationClip;
use crate::scene::SceneNode;

/// Loads `.gltf`/`.glb` models on background threads
#[derive(Debug, Default, Clone, Copy)]
pub struct GltfModelLoader;

impl GltfModelLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }
}

impl AssetLoader for GltfModelLoader {
    fn load(&mut self, model: &ModelRef, completion: LoadCompletion) {
        let path = model.path().to_path_buf();
        let request_id = completion.request_id();

        let spawned = thread::Builder::new()
            .name(format!("gltf-load-{request_id}"))
            .spawn(move || {
                let result = load_model(&path);
                completion.complete(result);
            });

        // On failure the closure, and the completion inside it, is dropped,
        // which reports the request as abandoned.
        if let Err(e) = spawned {
            log::warn!("Could not start loader thread for request {}: {}", request_id, e);
        }
    }
}

/// Parse a glTF file into its default scene root and animation clips
pub fn load_model(path: &Path) -> Result<LoadedModel, AssetLoadError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::open(path)?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| AssetLoadError::MissingScene(path.display().to_string()))?;

    let name = scene
        .name()
        .map(str::to_string)
        .or_else(|| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "model".to_string());
    let mesh_count = scene.nodes().map(|node| count_meshes(&node)).sum();

    let clips = document
        .animations()
        .map(|animation| {
            let duration = animation
                .channels()
                .filter_map(|channel| {
                    let reader = channel.reader(|buffer| Some(&buffers[buffer.index()]));
                    reader.read_inputs().map(|inputs| inputs.fold(0.0_f32, f32::max))
                })
                .fold(0.0_f32, f32::max);
            let name = animation
                .name()
                .map_or_else(|| format!("animation_{}", animation.index()), str::to_string);
            AnimationClip::new(name, duration)
        })
        .collect();

    log::debug!("Loaded {} ({} meshes)", path.display(), mesh_count);

    Ok(LoadedModel {
        node: SceneNode::new(name).with_mesh_count(mesh_count),
        clips,
    })
}

fn count_meshes(node: &gltf::Node<'_>) -> usize {
    usize::from(node.mesh().is_some()) + node.children().map(|child| count_meshes(&child)).sum::<usize>()
}
