//! ECS Systems module
//!
//! Per-frame passes over the transient registry, run in this order:
//! spawn delivery, lifecycle, animation.

pub mod spawn_system;
pub mod lifecycle_system;
pub mod animation_system;

pub use spawn_system::{SpawnStats, SpawnTrigger};
pub use lifecycle_system::LifecycleSystem;
pub use animation_system::AnimationSystem;
