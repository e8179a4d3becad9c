//! Animation playback
//!
//! Clips come from loaded models; each transient object owns one
//! [`AnimationMixer`] that plays every clip of its model on a loop.

mod mixer;

pub use mixer::{AnimationMixer, ClipAction};

/// A named keyframe animation from a model
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Clip name from the source asset
    pub name: String,
    /// Length of the clip in seconds (last keyframe time)
    pub duration_secs: f32,
}

impl AnimationClip {
    /// Create a clip description
    pub fn new(name: impl Into<String>, duration_secs: f32) -> Self {
        Self {
            name: name.into(),
            duration_secs: duration_secs.max(0.0),
        }
    }
}
