//! Structured error types shared across the link-prediction crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NodeId;

/// Error code reported when a node is not a source of the adjacency mapping.
pub const NODE_NOT_FOUND_CODE: &str = "node-not-found";

/// Error code reported when an aggregate is requested over a graph without edges.
pub const EMPTY_GRAPH_CODE: &str = "empty-graph";

/// Structured payload attached to every [`LinkError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, rates, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the link-prediction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LinkError {
    /// Graph store lookups and aggregates.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Invalid scoring parameters.
    #[error("score error: {0}")]
    Score(ErrorInfo),
    /// Invalid sparsification parameters.
    #[error("sparsify error: {0}")]
    Sparsify(ErrorInfo),
    /// Configuration parsing and encoding.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl LinkError {
    /// Builds the error reported when `node` has no recorded outgoing edges.
    pub fn node_not_found(node: NodeId) -> Self {
        LinkError::Graph(
            ErrorInfo::new(NODE_NOT_FOUND_CODE, "node is not a source in the graph")
                .with_context("node", node.to_string()),
        )
    }

    /// Builds the error reported when an aggregate needs at least one edge.
    pub fn empty_graph(operation: &str) -> Self {
        LinkError::Graph(
            ErrorInfo::new(EMPTY_GRAPH_CODE, "graph has no edges")
                .with_context("op", operation)
                .with_hint("add at least one edge before requesting aggregates"),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LinkError::Graph(info)
            | LinkError::Score(info)
            | LinkError::Sparsify(info)
            | LinkError::Config(info) => info,
        }
    }

    /// Returns whether this is a recoverable missing-node condition.
    pub fn is_node_not_found(&self) -> bool {
        matches!(self, LinkError::Graph(info) if info.code == NODE_NOT_FOUND_CODE)
    }

    /// Returns whether this error reports an aggregate over an empty graph.
    pub fn is_empty_graph(&self) -> bool {
        matches!(self, LinkError::Graph(info) if info.code == EMPTY_GRAPH_CODE)
    }
}
