//! Spawn system: periodically requests new transient objects
//!
//! Fire times are laid out on the wall clock at `start + k * interval`, so the
//! spawn rate does not depend on how often frames run. Each fire picks a
//! random placement and asks the loader for a model; outcomes come back on a
//! completion queue and are registered when [`SpawnTrigger::deliver`] drains it.

use std::collections::HashMap;
use std::f32::consts::TAU;

use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::AnimationMixer;
use crate::assets::{AssetLoader, LoadCompletion, LoadOutcome, LoadedModel, ModelRef};
use crate::config::StarfieldConfig;
use crate::ecs::components::TransientObject;
use crate::ecs::{ObjectHandle, TransientRegistry};
use crate::foundation::math::{Transform, Vec3};
use crate::scene::{GlowMaterial, SceneGraph};

/// Running totals for spawn attempts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnStats {
    /// Load requests issued
    pub fired: u64,
    /// Loads that produced a registered object
    pub registered: u64,
    /// Loads that failed and were discarded
    pub failed: u64,
}

/// Wall-clock spawn timer and load completion handler
#[derive(Debug)]
pub struct SpawnTrigger {
    model: ModelRef,
    interval_ms: u64,
    half_extent: f32,
    glow_color: Vec3,
    next_fire_ms: u64,
    rng: StdRng,
    next_request_id: u64,
    pending: HashMap<u64, Transform>,
    sender: Sender<LoadOutcome>,
    receiver: Receiver<LoadOutcome>,
    stats: SpawnStats,
}

impl SpawnTrigger {
    /// Create a trigger whose first fire is one interval after `start_ms`
    pub fn new(config: &StarfieldConfig, start_ms: u64) -> Self {
        Self::with_rng(config, start_ms, StdRng::from_entropy())
    }

    /// Same as [`SpawnTrigger::new`] with reproducible placements
    pub fn with_seed(config: &StarfieldConfig, start_ms: u64, seed: u64) -> Self {
        Self::with_rng(config, start_ms, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &StarfieldConfig, start_ms: u64, rng: StdRng) -> Self {
        let (sender, receiver) = unbounded();
        let [r, g, b] = config.glow_color;
        let interval_ms = config.spawn_interval_ms.max(1);

        Self {
            model: ModelRef::new(&config.model_path),
            interval_ms,
            half_extent: placement_half_extent(config.spawn_spread),
            glow_color: Vec3::new(r, g, b),
            next_fire_ms: start_ms.saturating_add(interval_ms),
            rng,
            next_request_id: 0,
            pending: HashMap::new(),
            sender,
            receiver,
            stats: SpawnStats::default(),
        }
    }

    /// Issue every fire that is due at `now_ms`, returning how many fired
    ///
    /// Fires missed while the caller was suspended are all issued now.
    pub fn poll<L: AssetLoader + ?Sized>(&mut self, now_ms: u64, loader: &mut L) -> usize {
        let mut fired = 0;
        while now_ms >= self.next_fire_ms {
            let scheduled_ms = self.next_fire_ms;
            self.next_fire_ms = self.next_fire_ms.saturating_add(self.interval_ms);
            self.fire(scheduled_ms, loader);
            fired += 1;
        }
        fired
    }

    fn fire<L: AssetLoader + ?Sized>(&mut self, scheduled_ms: u64, loader: &mut L) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let placement = self.random_placement();
        log::debug!(
            "Spawn {} due at {} ms: requesting {} at {:?}",
            request_id,
            scheduled_ms,
            self.model,
            placement.position
        );

        self.pending.insert(request_id, placement);
        self.stats.fired += 1;
        loader.load(&self.model, LoadCompletion::new(request_id, self.sender.clone()));
    }

    /// Register every completed load, returning how many objects were added
    ///
    /// Successful loads get `created_at = now_ms`. Failures are logged, counted
    /// and dropped; they never affect other requests.
    pub fn deliver<S: SceneGraph + ?Sized>(
        &mut self,
        now_ms: u64,
        registry: &mut TransientRegistry,
        scene: &mut S,
    ) -> usize {
        let mut registered = 0;

        while let Ok(outcome) = self.receiver.try_recv() {
            let placement = self.pending.remove(&outcome.request_id).unwrap_or_default();

            match outcome.result {
                Ok(model) => {
                    let handle = self.instantiate(model, placement, now_ms, registry, scene);
                    log::debug!("Spawn {} registered as {:?}", outcome.request_id, handle);
                    self.stats.registered += 1;
                    registered += 1;
                }
                Err(e) => {
                    log::error!("Failed to load {} for spawn {}: {}", self.model, outcome.request_id, e);
                    self.stats.failed += 1;
                }
            }
        }

        registered
    }

    fn instantiate<S: SceneGraph + ?Sized>(
        &self,
        model: LoadedModel,
        placement: Transform,
        now_ms: u64,
        registry: &mut TransientRegistry,
        scene: &mut S,
    ) -> ObjectHandle {
        let LoadedModel { mut node, clips } = model;
        node.transform = placement;
        node.material = Some(GlowMaterial::new(self.glow_color));

        let node = scene.add(node);
        let mut animation = AnimationMixer::new(node);
        animation.play_all(clips);

        registry.register(TransientObject::new(node, animation, now_ms))
    }

    fn random_placement(&mut self) -> Transform {
        let half = self.half_extent;
        let position = Vec3::new(
            self.rng.gen_range(-half..=half),
            self.rng.gen_range(-half..=half),
            self.rng.gen_range(-half..=half),
        );
        let angles = Vec3::new(
            self.rng.gen_range(0.0..TAU),
            self.rng.gen_range(0.0..TAU),
            self.rng.gen_range(0.0..TAU),
        );
        Transform::from_position_euler(position, angles)
    }

    /// Time of the next scheduled fire
    pub fn next_fire_ms(&self) -> u64 {
        self.next_fire_ms
    }

    /// Loads requested but not yet answered
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Running totals
    pub fn stats(&self) -> SpawnStats {
        self.stats
    }

}

/// Half the spawn cube's edge; non-finite or negative spreads collapse to the origin
fn placement_half_extent(spread: f32) -> f32 {
    if spread.is_finite() && spread > 0.0 {
        spread * 0.5
    } else {
        0.0
    }
}
