//! Lifecycle system: ages, fades and reclaims transient objects

use crate::ecs::components::{FadeState, FadeStep, FadeTiming};
use crate::ecs::{TransientRegistry, Visit};
use crate::scene::SceneGraph;

/// System advancing every transient object's fade and removing finished ones
///
/// One pass per frame. Opacity is written to the node material immediately,
/// so the renderer sees it on the same frame. An object whose fade finished
/// during a long pause is removed in that same pass, having been written a
/// clamped opacity of zero at worst.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleSystem {
    timing: FadeTiming,
}

impl LifecycleSystem {
    /// Create the system for a lifetime/fade pair
    pub fn new(timing: FadeTiming) -> Self {
        Self { timing }
    }

    /// Timing this system applies
    pub fn timing(&self) -> &FadeTiming {
        &self.timing
    }

    /// Run one pass at `now_ms`, returning how many objects were removed
    pub fn update<S: SceneGraph + ?Sized>(
        &self,
        now_ms: u64,
        registry: &mut TransientRegistry,
        scene: &mut S,
    ) -> usize {
        registry.for_each_removable(scene, |handle, object, scene| {
            let was_alive = object.state() == FadeState::Alive;
            let step = object.fade.advance(now_ms, &self.timing);

            if object.state() == FadeState::Fading {
                if was_alive {
                    log::trace!("Transient object {:?} started fading", handle);
                }
                if let Some(node) = scene.node_mut(object.node) {
                    node.set_opacity(object.opacity());
                }
            }

            match step {
                FadeStep::Live => Visit::Keep,
                FadeStep::Expired => {
                    log::debug!(
                        "Removing transient object {:?} after {} ms",
                        handle,
                        object.fade.age_ms(now_ms)
                    );
                    Visit::Remove
                }
            }
        })
    }
}
