use lp_core::errors::LinkError;
use lp_core::{NodeId, RngHandle};
use lp_graph::AdjacencyGraph;
use rand::seq::index;
use rand::RngCore;

use crate::config::RandomWalkConfig;
use crate::Sparsifier;

const NODE_PASS: u64 = 0;
const NEIGHBOUR_PASS: u64 = 1;

/// Randomly drops whole sources and then a fraction of each survivor's neighbours.
///
/// Only sources are dropped: neighbour lists may keep pointing at nodes
/// removed as sources, and the result is not closed.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    config: RandomWalkConfig,
}

impl RandomWalk {
    /// Creates a sparsifier from a configuration.
    pub fn new(config: RandomWalkConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RandomWalkConfig {
        &self.config
    }

    /// Applies dropout using the configured seed.
    pub fn fit(&self, graph: &AdjacencyGraph) -> Result<AdjacencyGraph, LinkError> {
        self.fit_seeded(graph, self.config.seed)
    }

    /// Applies dropout with a master seed drawn from `rng`.
    pub fn fit_with_rng(
        &self,
        graph: &AdjacencyGraph,
        rng: &mut RngHandle,
    ) -> Result<AdjacencyGraph, LinkError> {
        let master = rng.next_u64();
        self.fit_seeded(graph, master)
    }

    fn fit_seeded(&self, graph: &AdjacencyGraph, seed: u64) -> Result<AdjacencyGraph, LinkError> {
        self.config.validate()?;
        let mut node_rng = RngHandle::substream(seed, NODE_PASS);
        let mut neighbour_rng = RngHandle::substream(seed, NEIGHBOUR_PASS);

        let mut working = graph.clone();
        let sources: Vec<NodeId> = working.sources().collect();
        let drop_count = (sources.len() as f64 * self.config.node_dropout).floor() as usize;
        for idx in index::sample(&mut node_rng, sources.len(), drop_count) {
            working.remove_source(sources[idx]);
        }

        let keep_fraction = 1.0 - self.config.neighbor_dropout;
        let mut reduced = AdjacencyGraph::new();
        for (source, neighbours) in working.iter() {
            let keep = ((neighbours.len() as f64 * keep_fraction).floor() as usize)
                .max(1)
                .min(neighbours.len());
            let mut picked = index::sample(&mut neighbour_rng, neighbours.len(), keep).into_vec();
            picked.sort_unstable();
            for idx in picked {
                reduced.add_edge(source, neighbours[idx]);
            }
        }

        tracing::debug!(
            op = "random_walk",
            seed,
            sources_before = graph.source_count(),
            sources_dropped = drop_count,
            sources_after = reduced.source_count(),
            edges_before = graph.edge_count(),
            edges_after = reduced.edge_count(),
            "sparsified graph"
        );
        Ok(reduced)
    }
}

impl Sparsifier for RandomWalk {
    fn sparsify(&self, graph: &AdjacencyGraph) -> Result<AdjacencyGraph, LinkError> {
        self.fit(graph)
    }
}
