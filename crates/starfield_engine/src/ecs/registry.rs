//! Transient object registry
//!
//! Arena of live transient objects keyed by generational handles. Removing an
//! object detaches its scene node and releases its animation in the same
//! call, so the registry and the scene graph never disagree.

use crate::foundation::collections::{HandleMap, ObjectHandle};
use crate::scene::SceneGraph;
use super::components::TransientObject;

/// Decision returned by a [`TransientRegistry::for_each_removable`] callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Leave the object in place
    Keep,
    /// Remove the object before moving on
    Remove,
}

/// Owner of every live transient object
#[derive(Debug, Default)]
pub struct TransientRegistry {
    objects: HandleMap<ObjectHandle, TransientObject>,
}

impl TransientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an object and return its handle
    pub fn register(&mut self, object: TransientObject) -> ObjectHandle {
        self.objects.insert(object)
    }

    /// Remove an object, detaching its node and releasing its animation
    ///
    /// Returns `false` (and touches nothing) if the handle is no longer live.
    pub fn remove<S: SceneGraph + ?Sized>(&mut self, handle: ObjectHandle, scene: &mut S) -> bool {
        let Some(mut object) = self.objects.remove(handle) else {
            return false;
        };

        if scene.remove(object.node).is_none() {
            log::warn!("Transient object {:?} had no attached node", handle);
        }
        object.animation.release();
        true
    }

    /// Visit every live object, removing those the callback asks to remove
    ///
    /// Handles are snapshotted up front, so removals made during the walk never
    /// skip or invalidate the remaining entries. The callback also receives the
    /// scene so it can update the object's node. Returns the number removed.
    pub fn for_each_removable<S, F>(&mut self, scene: &mut S, mut visit: F) -> usize
    where
        S: SceneGraph + ?Sized,
        F: FnMut(ObjectHandle, &mut TransientObject, &mut S) -> Visit,
    {
        let handles: Vec<ObjectHandle> = self.objects.keys().collect();
        let mut removed = 0;

        for handle in handles {
            let Some(object) = self.objects.get_mut(handle) else {
                continue;
            };
            if visit(handle, object, scene) == Visit::Remove && self.remove(handle, scene) {
                removed += 1;
            }
        }

        removed
    }

    /// Look up a live object
    pub fn get(&self, handle: ObjectHandle) -> Option<&TransientObject> {
        self.objects.get(handle)
    }

    /// Look up a live object mutably
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut TransientObject> {
        self.objects.get_mut(handle)
    }

    /// Whether a handle still refers to a live object
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(handle)
    }

    /// Iterate live objects
    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &TransientObject)> {
        self.objects.iter()
    }

    /// Iterate live objects mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectHandle, &mut TransientObject)> {
        self.objects.iter_mut()
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no objects are live
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
