//! Core engine implementation
//!
//! [`RenderLoop`] is the cooperative, single-threaded frame driver. The
//! environment calls [`RenderLoop::tick`] once per display refresh (or hands
//! the loop a [`FrameScheduler`] and calls [`RenderLoop::run`]); within a tick
//! the passes always run in the same order:
//!
//! 1. measure the frame delta from the clock
//! 2. fire due spawns and register completed loads
//! 3. lifecycle pass (age, fade, remove)
//! 4. animation pass
//! 5. one render of the scene graph

use crate::{
    assets::AssetLoader,
    config::{ConfigError, StarfieldConfig},
    ecs::{
        systems::{AnimationSystem, LifecycleSystem, SpawnStats, SpawnTrigger},
        TransientRegistry,
    },
    foundation::time::{Clock, FrameTimer},
    scene::{SceneGraph, SimpleSceneGraph},
};
use thiserror::Error;

/// Draws the scene graph; the graphics backend lives outside the engine
pub trait Renderer {
    /// Render the current scene once
    fn render(&mut self, scene: &dyn SceneGraph, report: &FrameReport) -> Result<(), RenderError>;
}

/// The environment's display refresh
pub trait FrameScheduler {
    /// Block until the next refresh; `false` once the display surface is gone
    fn next_frame(&mut self) -> bool;
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Zero-based frame index
    pub frame: u64,
    /// Clock reading for this frame
    pub now_ms: u64,
    /// Time since the previous frame
    pub delta_ms: u64,
    /// Load requests issued this frame
    pub spawns_fired: usize,
    /// Objects registered this frame
    pub spawned: usize,
    /// Objects removed this frame
    pub removed: usize,
    /// Objects alive after the lifecycle pass
    pub live: usize,
}

/// Render backend errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Backend-specific failure
    #[error("Render backend error: {0}")]
    Backend(String),

    /// The display surface went away
    #[error("Render surface lost")]
    SurfaceLost,
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Frame driver owning the scene, the transient registry and every system
pub struct RenderLoop<C: Clock, S: SceneGraph = SimpleSceneGraph> {
    config: StarfieldConfig,
    clock: C,
    start_ms: u64,
    timer: FrameTimer,
    scene: S,
    registry: TransientRegistry,
    spawner: SpawnTrigger,
    lifecycle: LifecycleSystem,
    animation: AnimationSystem,
    loader: Box<dyn AssetLoader>,
    renderer: Box<dyn Renderer>,
    last_stats_ms: u64,
}

impl<C: Clock, S: SceneGraph> RenderLoop<C, S> {
    /// Create a loop; the spawn timer and frame timer start at the clock's current time
    pub fn new(
        config: &StarfieldConfig,
        clock: C,
        scene: S,
        loader: Box<dyn AssetLoader>,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let timing = config.fade_timing()?;
        let start_ms = clock.now_ms();

        log::info!(
            "Render loop ready: lifetime {} ms, fade {} ms, spawn every {} ms",
            config.lifetime_ms,
            config.fade_duration_ms,
            config.spawn_interval_ms
        );

        Ok(Self {
            config: config.clone(),
            clock,
            start_ms,
            timer: FrameTimer::starting_at(start_ms),
            scene,
            registry: TransientRegistry::new(),
            spawner: SpawnTrigger::new(config, start_ms),
            lifecycle: LifecycleSystem::new(timing),
            animation: AnimationSystem::new(),
            loader,
            renderer,
            last_stats_ms: start_ms,
        })
    }

    /// Use a seeded spawner so placements are reproducible
    ///
    /// Intended to be called before the first tick; any in-flight requests are forgotten.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawner = SpawnTrigger::with_seed(&self.config, self.start_ms, seed);
        self
    }

    /// Run one frame
    pub fn tick(&mut self) -> Result<FrameReport, EngineError> {
        let now_ms = self.clock.now_ms();
        let delta_ms = self.timer.tick(now_ms);

        let spawns_fired = self.spawner.poll(now_ms, self.loader.as_mut());
        let spawned = self.spawner.deliver(now_ms, &mut self.registry, &mut self.scene);

        let removed = self.lifecycle.update(now_ms, &mut self.registry, &mut self.scene);
        self.animation.update(&mut self.registry, self.timer.delta_secs());

        let report = FrameReport {
            frame: self.timer.frame_count() - 1,
            now_ms,
            delta_ms,
            spawns_fired,
            spawned,
            removed,
            live: self.registry.len(),
        };

        self.renderer.render(&self.scene, &report)?;
        Ok(report)
    }

    /// Drive frames until the scheduler reports the display is gone
    ///
    /// Returns the number of frames rendered.
    pub fn run<F: FrameScheduler + ?Sized>(&mut self, frames: &mut F) -> Result<u64, EngineError> {
        log::info!("Starting frame loop...");
        let mut rendered = 0;

        while frames.next_frame() {
            let report = self.tick()?;
            rendered += 1;
            self.log_stats(&report);
        }

        log::info!("Frame loop ended after {} frames", rendered);
        Ok(rendered)
    }

    fn log_stats(&mut self, report: &FrameReport) {
        if report.now_ms.saturating_sub(self.last_stats_ms) < self.config.engine.stats_interval_ms {
            return;
        }
        self.last_stats_ms = report.now_ms;

        let stats = self.spawner.stats();
        log::info!(
            "{} live, {} in flight, {} fired / {} registered / {} failed, {:.1} fps",
            report.live,
            self.spawner.in_flight(),
            stats.fired,
            stats.registered,
            stats.failed,
            self.timer.average_fps()
        );
    }

    /// Live transient objects
    pub fn registry(&self) -> &TransientRegistry {
        &self.registry
    }

    /// Scene graph being rendered
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Scene graph, for static setup outside the lifecycle core
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Spawn totals so far
    pub fn spawn_stats(&self) -> SpawnStats {
        self.spawner.stats()
    }

    /// Loads requested but not yet answered
    pub fn loads_in_flight(&self) -> usize {
        self.spawner.in_flight()
    }

    /// Clock driving this loop
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
