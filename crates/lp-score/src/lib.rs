#![deny(missing_docs)]

//! Link-prediction scores over an [`AdjacencyGraph`](lp_graph::AdjacencyGraph).
//!
//! Each algorithm comes in two forms. The `try_*` form reports a missing
//! node as `LinkError` with code `node-not-found`; the plain form logs a
//! warning and returns the `-1` sentinel instead, which lets batch scoring
//! carry on past unknown pairs. Scoring never mutates the graph and keeps no
//! state between calls.

/// Preferential attachment.
pub mod attachment;
/// Scoring parameters and their defaults.
pub mod config;
/// Katz score and its path enumerator.
pub mod katz;
/// Named dispatch over every scorer.
pub mod kind;
/// Common neighbours, Jaccard coefficient and Adamic-Adar.
pub mod neighborhood;
/// Depth-bounded shortest path.
pub mod path;

use lp_core::errors::LinkError;
use lp_core::sentinel::{if_node_not_exist, SentinelValue};
use lp_core::NODE_NOT_FOUND;

pub use attachment::{preferential_attachment, try_preferential_attachment};
pub use config::ScoreParams;
pub use katz::{katz_score, try_katz_score, PathEnumerator};
pub use kind::{ScoreKind, ScoreValue};
pub use neighborhood::{
    adamic_adar, common_neighbors, jaccard_coefficient, try_adamic_adar, try_common_neighbors,
    try_jaccard_coefficient,
};
pub use path::{shortest_path, try_shortest_path};

fn legacy<T: SentinelValue>(op: &'static str, result: Result<T, LinkError>) -> T {
    if_node_not_exist(op, result).unwrap_or_else(|err| {
        tracing::error!(op, error = %err, "unexpected scoring failure");
        T::from_sentinel(NODE_NOT_FOUND)
    })
}
