use sha2::{Digest, Sha256};

use crate::adjacency::AdjacencyGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// Sources are visited in ascending order and neighbour sequences are hashed
/// as stored, so duplicate edges and insertion order both affect the digest.
pub fn canonical_hash(graph: &AdjacencyGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"adjacency:v1");
    hasher.update((graph.source_count() as u64).to_le_bytes());
    for (source, neighbours) in graph.iter() {
        hasher.update(source.as_raw().to_le_bytes());
        hasher.update((neighbours.len() as u64).to_le_bytes());
        for target in neighbours {
            hasher.update(target.as_raw().to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
