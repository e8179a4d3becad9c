//! Per-object animation mixer
//!
//! Tracks playback position for every clip action bound to one scene node.
//! Pose evaluation belongs to the renderer; the mixer only owns time.

use crate::foundation::collections::NodeId;
use super::AnimationClip;

/// Looping playback state of one clip
#[derive(Debug, Clone, PartialEq)]
pub struct ClipAction {
    clip: AnimationClip,
    time_secs: f32,
    playing: bool,
}

impl ClipAction {
    /// Create a stopped action at time zero
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            time_secs: 0.0,
            playing: false,
        }
    }

    /// Start playback
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Clip being played
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    /// Current playback position in seconds
    pub fn time_secs(&self) -> f32 {
        self.time_secs
    }

    /// Whether the action is still advancing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn advance(&mut self, delta_secs: f32) {
        if !self.playing {
            return;
        }

        let duration = self.clip.duration_secs;
        self.time_secs += delta_secs;

        if duration <= 0.0 {
            self.time_secs = 0.0;
            return;
        }

        self.time_secs = self.time_secs.rem_euclid(duration);
    }
}

/// Animation mixer bound to a single scene node
#[derive(Debug, Clone)]
pub struct AnimationMixer {
    root: NodeId,
    actions: Vec<ClipAction>,
    released: bool,
}

impl AnimationMixer {
    /// Create an empty mixer for `root`
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            actions: Vec::new(),
            released: false,
        }
    }

    /// Node this mixer animates
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a looping action for every clip and start them all
    pub fn play_all(&mut self, clips: impl IntoIterator<Item = AnimationClip>) {
        for clip in clips {
            let mut action = ClipAction::new(clip);
            action.play();
            self.actions.push(action);
        }
    }

    /// Advance every playing action by `delta_secs`
    pub fn update(&mut self, delta_secs: f32) {
        for action in &mut self.actions {
            action.advance(delta_secs);
        }
    }

    /// All actions, in clip order
    pub fn actions(&self) -> &[ClipAction] {
        &self.actions
    }

    /// Look up an action by clip name
    pub fn action(&self, name: &str) -> Option<&ClipAction> {
        self.actions.iter().find(|action| action.clip.name == name)
    }

    /// Number of cached actions
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Drop every cached action for the root node
    ///
    /// Returns `false` if the mixer had already been released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.actions.clear();
        self.released = true;
        true
    }

    /// Whether [`AnimationMixer::release`] has run
    pub fn is_released(&self) -> bool {
        self.released
    }
}
