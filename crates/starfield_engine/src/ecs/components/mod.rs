//! ECS Components module
//!
//! Data carried by every transient object

pub mod fade;
pub mod transient;

pub use fade::{FadeLifetime, FadeState, FadeStep, FadeTiming};
pub use transient::TransientObject;
