//! Scene graph trait and implementations
//!
//! Provides pluggable storage for renderable nodes. Nodes are addressed by
//! generational [`NodeId`] handles, so a handle to a removed node never
//! resolves to a node added later.

use crate::foundation::collections::{HandleMap, NodeId};
use super::SceneNode;

/// Trait for scene storage used by the lifecycle core
///
/// Insertion order carries no meaning. The core calls [`SceneGraph::remove`]
/// at most once per node.
pub trait SceneGraph {
    /// Attach a node and return its handle
    fn add(&mut self, node: SceneNode) -> NodeId;

    /// Detach a node, returning it if it was attached
    fn remove(&mut self, id: NodeId) -> Option<SceneNode>;

    /// Look up an attached node
    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    /// Look up an attached node mutably
    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    /// Whether a node is currently attached
    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Iterate all attached nodes
    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, &SceneNode)> + '_>;

    /// Get the total number of attached nodes
    fn node_count(&self) -> usize;
}

/// Slot-map backed scene graph (no spatial optimization)
///
/// Sufficient for the handful of transient objects alive at any time; can be
/// replaced without changing the API.
#[derive(Debug, Default)]
pub struct SimpleSceneGraph {
    nodes: HandleMap<NodeId, SceneNode>,
}

impl SimpleSceneGraph {
    /// Create a new empty scene graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneGraph for SimpleSceneGraph {
    fn add(&mut self, node: SceneNode) -> NodeId {
        self.nodes.insert(node)
    }

    fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, &SceneNode)> + '_> {
        Box::new(self.nodes.iter())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
