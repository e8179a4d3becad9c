//! Entity-Component-System implementation
//!
//! Transient objects live in a [`TransientRegistry`] owned by the render loop
//! and are addressed by generational handles. Systems are plain structs that
//! run over the registry once per frame.

pub mod registry;
pub mod components;
pub mod systems;

#[cfg(test)]
pub(crate) mod tests;

pub use registry::{TransientRegistry, Visit};
pub use components::TransientObject;
pub use crate::foundation::collections::ObjectHandle;
