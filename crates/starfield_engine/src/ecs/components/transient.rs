//! Transient object record

use crate::animation::AnimationMixer;
use crate::foundation::collections::NodeId;
use super::{FadeLifetime, FadeState};

/// A spawned, time-limited animated object
///
/// Owns its scene node handle and its animation mixer outright; nothing is
/// shared between objects.
#[derive(Debug, Clone)]
pub struct TransientObject {
    /// Scene node owned by this object for its whole lifetime
    pub node: NodeId,
    /// Playback state bound to `node`
    pub animation: AnimationMixer,
    /// Age, fade state and opacity
    pub fade: FadeLifetime,
}

impl TransientObject {
    /// Create an object registered at `created_at_ms`
    pub fn new(node: NodeId, animation: AnimationMixer, created_at_ms: u64) -> Self {
        Self {
            node,
            animation,
            fade: FadeLifetime::new(created_at_ms),
        }
    }

    /// Current fade state
    pub fn state(&self) -> FadeState {
        self.fade.state()
    }

    /// Current opacity
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }
}
