//! Animation system: advances playback for every live transient object

use crate::ecs::TransientRegistry;

/// System advancing each object's animation mixer by the frame delta
///
/// Fade state is ignored; objects keep animating until they are removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationSystem;

impl AnimationSystem {
    /// Create a new animation system
    pub fn new() -> Self {
        Self
    }

    /// Advance all mixers by `delta_secs`
    pub fn update(&self, registry: &mut TransientRegistry, delta_secs: f32) {
        for (_, object) in registry.iter_mut() {
            object.animation.update(delta_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationClip, AnimationMixer, ClipAction};
    use crate::ecs::components::{FadeState, FadeTiming, TransientObject};
    use crate::scene::{SceneGraph, SceneNode, SimpleSceneGraph};
    use approx::assert_relative_eq;

    #[test]
    fn test_fading_objects_keep_animating() {
        let mut registry = TransientRegistry::new();
        let mut scene = SimpleSceneGraph::new();
        let node = scene.add(SceneNode::new("star"));
        let mut mixer = AnimationMixer::new(node);
        mixer.play_all([AnimationClip::new("spin", 10.0)]);
        let handle = registry.register(TransientObject::new(node, mixer, 0));

        let timing = FadeTiming::new(10_000, 2_000).expect("valid timing");
        if let Some(object) = registry.get_mut(handle) {
            object.fade.advance(9_000, &timing);
        }

        let animation = AnimationSystem::new();
        animation.update(&mut registry, 0.25);
        animation.update(&mut registry, 0.25);

        let object = registry.get(handle).expect("still registered");
        assert_eq!(object.state(), FadeState::Fading);
        assert_relative_eq!(
            object.animation.action("spin").map_or(-1.0, ClipAction::time_secs),
            0.5
        );
    }

    #[test]
    fn test_objects_advance_independently() {
        let mut registry = TransientRegistry::new();
        let mut scene = SimpleSceneGraph::new();

        let first_node = scene.add(SceneNode::new("first"));
        let mut first = AnimationMixer::new(first_node);
        first.play_all([AnimationClip::new("spin", 1.0)]);
        let first = registry.register(TransientObject::new(first_node, first, 0));

        AnimationSystem::new().update(&mut registry, 0.4);

        let second_node = scene.add(SceneNode::new("second"));
        let mut second = AnimationMixer::new(second_node);
        second.play_all([AnimationClip::new("spin", 1.0)]);
        let second = registry.register(TransientObject::new(second_node, second, 400));

        AnimationSystem::new().update(&mut registry, 0.1);

        let time_of = |handle| {
            registry
                .get(handle)
                .and_then(|object| object.animation.action("spin").map(ClipAction::time_secs))
                .unwrap_or(-1.0)
        };
        assert_relative_eq!(time_of(first), 0.5, epsilon = 1e-6);
        assert_relative_eq!(time_of(second), 0.1, epsilon = 1e-6);
    }
}
