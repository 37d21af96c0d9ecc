//! Adapter converting strict missing-node failures into legacy sentinel values.
//!
//! Batch scoring over many pairs must keep going past nodes that never
//! recorded an outgoing edge. Strict operations report those as
//! [`LinkError::Graph`] with code `node-not-found`; the adapter below logs a
//! warning and substitutes [`NODE_NOT_FOUND`]. Every other error kind passes
//! through untouched.

use crate::errors::LinkError;

/// Sentinel returned when a queried node is not a source of the graph.
pub const NODE_NOT_FOUND: i64 = -1;

/// Sentinel returned by Common Neighbors for an identical node pair.
pub const SAME_NODE: i64 = -2;

/// Scalar types able to carry a negative sentinel code.
pub trait SentinelValue: Sized {
    /// Converts the sentinel code into this scalar type.
    fn from_sentinel(code: i64) -> Self;
}

impl SentinelValue for i64 {
    fn from_sentinel(code: i64) -> Self {
        code
    }
}

impl SentinelValue for f64 {
    fn from_sentinel(code: i64) -> Self {
        code as f64
    }
}

/// Replaces a `node-not-found` failure of `op` with [`NODE_NOT_FOUND`].
pub fn if_node_not_exist<T: SentinelValue>(
    op: &'static str,
    result: Result<T, LinkError>,
) -> Result<T, LinkError> {
    match result {
        Err(err) if err.is_node_not_found() => {
            let node = err
                .info()
                .context
                .get("node")
                .map(String::as_str)
                .unwrap_or("?");
            tracing::warn!(op, node, "node does not exist");
            Ok(T::from_sentinel(NODE_NOT_FOUND))
        }
        other => other,
    }
}
