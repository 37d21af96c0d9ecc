use std::collections::BTreeSet;

use lp_core::errors::{ErrorInfo, LinkError};
use lp_core::serde_io::from_yaml_str;
use serde::{Deserialize, Serialize};

use crate::degree::DegreeBased;
use crate::random_walk::RandomWalk;
use crate::Sparsifier;

/// Binary comparison applied as `out_degree <op> threshold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Strictly greater than.
    #[default]
    Gt,
    /// Greater than or equal.
    Ge,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
}

impl Comparison {
    /// Evaluates `lhs <op> rhs`.
    pub fn apply(&self, lhs: usize, rhs: usize) -> bool {
        match self {
            Comparison::Gt => lhs > rhs,
            Comparison::Ge => lhs >= rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Eq => lhs == rhs,
            Comparison::Ne => lhs != rhs,
        }
    }
}

/// Which out-degrees a source must have to survive degree-based filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeCriterion {
    /// Compared against the out-degree with the configured [`Comparison`].
    Threshold(usize),
    /// Explicit set of accepted out-degrees; the comparison is ignored.
    OneOf(BTreeSet<usize>),
}

/// Settings for [`DegreeBased`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBasedConfig {
    /// Degree criterion applied to every source.
    pub criterion: DegreeCriterion,
    /// Comparison used with [`DegreeCriterion::Threshold`].
    #[serde(default)]
    pub comparison: Comparison,
}

impl DegreeBasedConfig {
    /// Returns whether a source of out-degree `degree` passes the filter.
    pub fn accepts(&self, degree: usize) -> bool {
        match &self.criterion {
            DegreeCriterion::Threshold(threshold) => self.comparison.apply(degree, *threshold),
            DegreeCriterion::OneOf(accepted) => accepted.contains(&degree),
        }
    }
}

/// Settings for [`RandomWalk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    /// Fraction of sources removed entirely.
    #[serde(default = "RandomWalkConfig::default_dropout")]
    pub node_dropout: f64,
    /// Fraction of each surviving source's neighbours removed.
    #[serde(default = "RandomWalkConfig::default_dropout")]
    pub neighbor_dropout: f64,
    /// Master seed for both sampling passes.
    #[serde(default)]
    pub seed: u64,
}

impl RandomWalkConfig {
    fn default_dropout() -> f64 {
        0.1
    }

    /// Rejects rates that are not finite fractions in `[0, 1]`.
    pub fn validate(&self) -> Result<(), LinkError> {
        for (name, rate) in [
            ("node_dropout", self.node_dropout),
            ("neighbor_dropout", self.neighbor_dropout),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(LinkError::Sparsify(
                    ErrorInfo::new("invalid-dropout", "dropout rate must lie in [0, 1]")
                        .with_context("rate", name)
                        .with_context("value", rate.to_string()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            node_dropout: Self::default_dropout(),
            neighbor_dropout: Self::default_dropout(),
            seed: 0,
        }
    }
}

/// Strategy selection as read from a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SparsifyConfig {
    /// Out-degree filter with closure.
    DegreeBased(DegreeBasedConfig),
    /// Seeded node and neighbour dropout.
    RandomWalk(RandomWalkConfig),
}

impl SparsifyConfig {
    /// Parses a strategy from YAML.
    pub fn from_yaml(data: &str) -> Result<Self, LinkError> {
        from_yaml_str(data)
    }

    /// Instantiates the configured sparsifier.
    pub fn build(&self) -> Result<Box<dyn Sparsifier>, LinkError> {
        match self {
            SparsifyConfig::DegreeBased(config) => Ok(Box::new(DegreeBased::new(config.clone()))),
            SparsifyConfig::RandomWalk(config) => {
                config.validate()?;
                Ok(Box::new(RandomWalk::new(config.clone())))
            }
        }
    }
}
