//! Asynchronous model loading contract

use std::fmt;
use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;
use thiserror::Error;

use crate::animation::AnimationClip;
use crate::scene::SceneNode;

/// Reference to a model asset on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    path: PathBuf,
}

impl ModelRef {
    /// Create a reference to the model at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the model file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A successfully loaded model: its root node and animation clips
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    /// Root node of the model, not yet attached to any scene
    pub node: SceneNode,
    /// Every animation clip the model defines
    pub clips: Vec<AnimationClip>,
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetLoadError {
    /// The file could not be read or parsed as glTF
    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),

    /// The document has no scene to instantiate
    #[error("Model {0} contains no scene")]
    MissingScene(String),

    /// The loader dropped the request without answering
    #[error("Load request {0} was abandoned by the loader")]
    Abandoned(u64),

    /// Loader-specific failure
    #[error("Asset error: {0}")]
    Custom(String),
}

/// Result of one load request as seen by the engine
#[derive(Debug)]
pub struct LoadOutcome {
    /// Request this outcome answers
    pub request_id: u64,
    /// Loaded model or the reason it failed
    pub result: Result<LoadedModel, AssetLoadError>,
}

/// One-shot completion handle for a load request
///
/// Consumed by [`LoadCompletion::complete`], so an outcome is delivered at
/// most once. A handle dropped without completing reports
/// [`AssetLoadError::Abandoned`] instead of leaving the request dangling.
#[derive(Debug)]
pub struct LoadCompletion {
    request_id: u64,
    sender: Option<Sender<LoadOutcome>>,
}

impl LoadCompletion {
    pub(crate) fn new(request_id: u64, sender: Sender<LoadOutcome>) -> Self {
        Self {
            request_id,
            sender: Some(sender),
        }
    }

    /// Request this handle answers
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Deliver the outcome to the engine's completion queue
    pub fn complete(mut self, result: Result<LoadedModel, AssetLoadError>) {
        self.deliver(result);
    }

    fn deliver(&mut self, result: Result<LoadedModel, AssetLoadError>) {
        let Some(sender) = self.sender.take() else {
            return;
        };
        let outcome = LoadOutcome {
            request_id: self.request_id,
            result,
        };
        if sender.send(outcome).is_err() {
            log::debug!("Load request {} finished after its queue closed", self.request_id);
        }
    }
}

impl Drop for LoadCompletion {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.deliver(Err(AssetLoadError::Abandoned(self.request_id)));
        }
    }
}

/// Produces renderable nodes and animation clips from model references
///
/// Implementations may finish inline or on another thread, but must hand the
/// result to `completion`; the engine drains completions on its own thread.
/// No timeout is applied: a load that never completes simply never spawns.
pub trait AssetLoader {
    /// Start loading `model`, answering through `completion`
    fn load(&mut self, model: &ModelRef, completion: LoadCompletion);
}
