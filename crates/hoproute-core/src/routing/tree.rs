//! Shortest-path tree with per-ancestor next-hop annotations
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! `NodeId`. Every node keeps a map from each vertex in its subtree to the
//! child that leads there, filled in as vertices are finalized, so the
//! first hop from the root is a single lookup.

use std::collections::BTreeMap;

use crate::error::{InvariantViolation, Result};
use crate::graph::types::{Cost, Vertex};
use crate::routing::distance::DistanceTable;
use crate::routing::frontier::FrontierEntry;

/// Index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    vertex: Vertex,
    distance: Cost,
    parent: Option<NodeId>,
    next_hops: BTreeMap<Vertex, NodeId>,
}

impl TreeNode {
    fn new(vertex: Vertex, distance: Cost, parent: Option<NodeId>) -> Self {
        TreeNode {
            vertex,
            distance,
            parent,
            next_hops: BTreeMap::new(),
        }
    }

    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    pub fn distance(&self) -> Cost {
        self.distance
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child of this node on the tree path toward `destination`
    pub fn child_toward(&self, destination: Vertex) -> Option<NodeId> {
        self.next_hops.get(&destination).copied()
    }

    /// Vertices reachable through this node, ascending
    #[cfg(test)]
    pub fn subtree_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.next_hops.keys().copied()
    }
}

#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    nodes: Vec<TreeNode>,
    by_vertex: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    const ROOT: NodeId = NodeId(0);

    /// Start a tree at `source` and record its zero distance.
    ///
    /// The root registers itself under its own vertex so that the route to
    /// the source resolves to the source.
    pub fn create_root(source: Vertex, distances: &mut DistanceTable) -> Result<Self> {
        let mut by_vertex = vec![None; distances.len()];
        let slot = by_vertex
            .get_mut(source)
            .ok_or(InvariantViolation::UnknownVertex { vertex: source })?;
        *slot = Some(Self::ROOT);

        let mut root = TreeNode::new(source, Cost::ZERO, None);
        root.next_hops.insert(source, Self::ROOT);
        distances.record(source, Cost::ZERO)?;

        tracing::trace!(root = source, "tree root created");
        Ok(ShortestPathTree {
            nodes: vec![root],
            by_vertex,
        })
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn node_for(&self, vertex: Vertex) -> Option<&TreeNode> {
        self.id_for(vertex).map(|id| self.node(id))
    }

    fn id_for(&self, vertex: Vertex) -> Option<NodeId> {
        self.by_vertex.get(vertex).copied().flatten()
    }

    /// Number of finalized vertices
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add `entry.to` under `entry.from` and annotate every ancestor.
    ///
    /// Each ancestor records, under the new vertex, its own child one step
    /// down this path. Fails if `entry.from` has no distance or no node, or if
    /// `entry.to` is already in the tree.
    pub fn finalize(&mut self, entry: &FrontierEntry, distances: &mut DistanceTable) -> Result<NodeId> {
        let base = distances
            .get(entry.from)
            .ok_or(InvariantViolation::UnfinalizedSource {
                from: entry.from,
                to: entry.to,
            })?;
        let new_distance = entry.weight + base;

        let parent = self
            .id_for(entry.from)
            .ok_or(InvariantViolation::MissingTreeNode { vertex: entry.from })?;
        if distances.is_finalized(entry.to) || self.id_for(entry.to).is_some() {
            return Err(InvariantViolation::AlreadyFinalized { vertex: entry.to }.into());
        }

        let id = NodeId(self.nodes.len());
        let slot = self
            .by_vertex
            .get_mut(entry.to)
            .ok_or(InvariantViolation::UnknownVertex { vertex: entry.to })?;
        *slot = Some(id);
        self.nodes
            .push(TreeNode::new(entry.to, new_distance, Some(parent)));

        self.nodes[parent.0].next_hops.insert(entry.to, id);
        let mut below = parent;
        while let Some(ancestor) = self.nodes[below.0].parent {
            self.nodes[ancestor.0].next_hops.insert(entry.to, below);
            tracing::trace!(
                ancestor = self.nodes[ancestor.0].vertex,
                destination = entry.to,
                via = self.nodes[below.0].vertex,
                "next hop recorded"
            );
            below = ancestor;
        }

        distances.record(entry.to, new_distance)?;
        tracing::trace!(
            vertex = entry.to,
            parent = entry.from,
            distance = %new_distance,
            "vertex finalized"
        );
        Ok(id)
    }

    /// Vertex one step from `at` toward `destination`, if `destination` lies in its subtree
    pub fn next_hop(&self, at: Vertex, destination: Vertex) -> Option<Vertex> {
        let node = self.node_for(at)?;
        node.child_toward(destination)
            .map(|child| self.node(child).vertex)
    }

    /// Vertices on the tree path from the root to `destination`, inclusive
    pub fn path_to(&self, destination: Vertex) -> Option<Vec<Vertex>> {
        let mut id = self.id_for(destination)?;
        let mut path = vec![self.node(id).vertex];
        while let Some(parent) = self.node(id).parent {
            path.push(self.node(parent).vertex);
            id = parent;
        }
        path.reverse();
        Some(path)
    }
}
