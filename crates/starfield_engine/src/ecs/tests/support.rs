//! In-process loaders and renderers for tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::animation::AnimationClip;
use crate::assets::{AssetLoadError, AssetLoader, LoadCompletion, LoadedModel, ModelRef};
use crate::engine::{FrameReport, RenderError, Renderer};
use crate::scene::{SceneGraph, SceneNode};

pub(crate) fn star_model() -> LoadedModel {
    LoadedModel {
        node: SceneNode::new("shooting_star").with_mesh_count(1),
        clips: vec![AnimationClip::new("fly", 3.0)],
    }
}

/// Answers every request inline, succeeding or failing per the script
pub(crate) struct ScriptedLoader {
    script: VecDeque<bool>,
    pub requests: usize,
}

impl ScriptedLoader {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requests: 0,
        }
    }

    pub fn always_ok() -> Self {
        Self::new([])
    }
}

impl AssetLoader for ScriptedLoader {
    fn load(&mut self, model: &ModelRef, completion: LoadCompletion) {
        self.requests += 1;
        if self.script.pop_front().unwrap_or(true) {
            completion.complete(Ok(star_model()));
        } else {
            completion.complete(Err(AssetLoadError::Custom(format!("scripted failure for {model}"))));
        }
    }
}

/// Holds every request until the test completes it
#[derive(Default)]
pub(crate) struct DeferredLoader {
    pub pending: Vec<LoadCompletion>,
}

impl DeferredLoader {
    /// Successfully complete the most recent outstanding request
    pub fn complete_last(&mut self) {
        if let Some(completion) = self.pending.pop() {
            completion.complete(Ok(star_model()));
        }
    }
}

impl AssetLoader for DeferredLoader {
    fn load(&mut self, _model: &ModelRef, completion: LoadCompletion) {
        self.pending.push(completion);
    }
}

/// Deferred loader the test keeps a handle to after boxing it into a render loop
#[derive(Clone, Default)]
pub(crate) struct SharedDeferredLoader(pub Rc<RefCell<DeferredLoader>>);

impl AssetLoader for SharedDeferredLoader {
    fn load(&mut self, model: &ModelRef, completion: LoadCompletion) {
        self.0.borrow_mut().load(model, completion);
    }
}

/// One rendered frame as the renderer saw it
#[derive(Debug, Clone)]
pub(crate) struct RenderedFrame {
    pub report: FrameReport,
    pub node_count: usize,
    pub opacities: Vec<f32>,
}

/// Renderer that records what it was handed
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub frames: Rc<RefCell<Vec<RenderedFrame>>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &dyn SceneGraph, report: &FrameReport) -> Result<(), RenderError> {
        self.frames.borrow_mut().push(RenderedFrame {
            report: report.clone(),
            node_count: scene.node_count(),
            opacities: scene.nodes().map(|(_, node)| node.opacity()).collect(),
        });
        Ok(())
    }
}
