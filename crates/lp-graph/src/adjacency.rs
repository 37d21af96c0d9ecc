use std::collections::{BTreeMap, BTreeSet};

use lp_core::errors::LinkError;
use lp_core::sentinel::if_node_not_exist;
use lp_core::NodeId;

/// Out-degree statistics over every source of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeSummary {
    /// Number of nodes holding at least one outgoing edge.
    pub sources: usize,
    /// Total number of recorded edges, duplicates included.
    pub edges: usize,
    /// Smallest out-degree among sources.
    pub min_out_degree: usize,
    /// Largest out-degree among sources.
    pub max_out_degree: usize,
    /// Mean out-degree among sources.
    pub mean_out_degree: f64,
}

/// Directed graph stored as a mapping from source node to its out-neighbours.
///
/// A node is a key of the mapping iff at least one edge was added from it.
/// Neighbour sequences keep insertion order and may hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    edges: BTreeMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by adding every `(source, target)` pair in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }

    /// Appends `node2` to the out-neighbours of `node1`.
    pub fn add_edge(&mut self, node1: NodeId, node2: NodeId) {
        self.edges.entry(node1).or_default().push(node2);
    }

    /// Removes `node` as a source, returning its neighbour sequence.
    ///
    /// Entries pointing at `node` from other sources are left in place.
    pub fn remove_source(&mut self, node: NodeId) -> Option<Vec<NodeId>> {
        self.edges.remove(&node)
    }

    /// Returns every node appearing as a source or as a neighbour.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        let mut nodes: BTreeSet<NodeId> = self.edges.keys().copied().collect();
        for neighbours in self.edges.values() {
            nodes.extend(neighbours.iter().copied());
        }
        nodes
    }

    /// Returns whether `node` appears anywhere in the graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.contains_source(node)
            || self
                .edges
                .values()
                .any(|neighbours| neighbours.contains(&node))
    }

    /// Returns whether `node` has at least one outgoing edge.
    pub fn contains_source(&self, node: NodeId) -> bool {
        self.edges.contains_key(&node)
    }

    /// Iterates over source nodes in ascending identifier order.
    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.keys().copied()
    }

    /// Iterates over `(source, neighbours)` entries in ascending source order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.edges
            .iter()
            .map(|(source, neighbours)| (*source, neighbours.as_slice()))
    }

    /// Iterates over every recorded edge, duplicates included.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().flat_map(|(source, neighbours)| {
            neighbours.iter().map(move |target| (*source, *target))
        })
    }

    /// Returns the number of nodes holding outgoing edges.
    pub fn source_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Returns whether no edge was ever added.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the mean out-degree over sources.
    ///
    /// Fails with `empty-graph` when there is no source to average over.
    pub fn average_degree(&self) -> Result<f64, LinkError> {
        if self.edges.is_empty() {
            return Err(LinkError::empty_graph("average_degree"));
        }
        Ok(self.edge_count() as f64 / self.edges.len() as f64)
    }

    /// Returns min/max/mean out-degree over sources.
    pub fn degree_summary(&self) -> Result<DegreeSummary, LinkError> {
        let mean_out_degree = self.average_degree()?;
        let degrees = self.edges.values().map(Vec::len);
        let min_out_degree = degrees.clone().min().unwrap_or(0);
        let max_out_degree = degrees.max().unwrap_or(0);
        Ok(DegreeSummary {
            sources: self.edges.len(),
            edges: self.edge_count(),
            min_out_degree,
            max_out_degree,
            mean_out_degree,
        })
    }

    /// Returns the out-degree of `node`, failing with `node-not-found` when it is not a source.
    pub fn out_degree(&self, node: NodeId) -> Result<usize, LinkError> {
        self.edges
            .get(&node)
            .map(Vec::len)
            .ok_or_else(|| LinkError::node_not_found(node))
    }

    /// Returns the out-degree of `node`, or `-1` when it is not a source.
    pub fn neighbors_size(&self, node: NodeId) -> i64 {
        let strict = self.out_degree(node).map(|degree| degree as i64);
        if_node_not_exist("neighbors_size", strict).unwrap_or(lp_core::NODE_NOT_FOUND)
    }

    /// Returns the out-neighbour sequence of `node`, empty when it is not a source.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.edges.get(&node) {
            Some(neighbours) => neighbours.as_slice(),
            None => {
                tracing::warn!(op = "neighbors", node = node.as_raw(), "node does not exist");
                &[]
            }
        }
    }

    /// Returns the out-neighbour sequence of `node` if it is a source.
    pub fn out_neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.edges.get(&node).map(Vec::as_slice)
    }

    /// Returns the out-neighbours of `node` as a set, failing when it is not a source.
    pub fn neighbor_set(&self, node: NodeId) -> Result<BTreeSet<NodeId>, LinkError> {
        self.edges
            .get(&node)
            .map(|neighbours| neighbours.iter().copied().collect())
            .ok_or_else(|| LinkError::node_not_found(node))
    }

    /// Returns the nodes adjacent to `node` ignoring direction, `node` itself excluded.
    pub fn undirected_neighbors(&self, node: NodeId) -> BTreeSet<NodeId> {
        let mut neighbours: BTreeSet<NodeId> = self
            .edges
            .get(&node)
            .map(|out| out.iter().copied().collect())
            .unwrap_or_default();
        for (source, targets) in &self.edges {
            if targets.contains(&node) {
                neighbours.insert(*source);
            }
        }
        neighbours.remove(&node);
        neighbours
    }

    /// Returns the number of distinct nodes adjacent to `node` ignoring direction.
    pub fn undirected_degree(&self, node: NodeId) -> usize {
        self.undirected_neighbors(node).len()
    }
}
