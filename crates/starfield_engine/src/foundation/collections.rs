//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a node attached to a scene graph
    pub struct NodeId;

    /// Stable handle to a live transient object in the registry
    pub struct ObjectHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;
