use lp_core::errors::{ErrorInfo, LinkError};
use lp_core::serde_io::from_yaml_str;
use serde::{Deserialize, Serialize};

use crate::path::DEFAULT_MAX_DEPTH;

/// Tunable parameters shared by the scoring algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreParams {
    /// Hop bound for shortest path.
    #[serde(default = "ScoreParams::default_max_depth")]
    pub max_depth: usize,
    /// Katz attenuation factor applied per path length.
    #[serde(default = "ScoreParams::default_alpha")]
    pub alpha: f64,
    /// Weight of the immediate neighbourhood. Accepted for call compatibility; no score reads it.
    #[serde(default = "ScoreParams::default_beta")]
    pub beta: f64,
    /// Longest path length enumerated by Katz.
    #[serde(default = "ScoreParams::default_max_length")]
    pub max_length: usize,
}

impl ScoreParams {
    fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }
    fn default_alpha() -> f64 {
        1.0
    }
    fn default_beta() -> f64 {
        1.0
    }
    fn default_max_length() -> usize {
        100
    }

    /// Parses parameters from YAML, filling omitted fields with defaults.
    pub fn from_yaml(data: &str) -> Result<Self, LinkError> {
        let params: Self = from_yaml_str(data)?;
        params.validate()?;
        Ok(params)
    }

    /// Rejects non-finite attenuation factors.
    pub fn validate(&self) -> Result<(), LinkError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(LinkError::Score(
                    ErrorInfo::new(format!("invalid-{name}"), format!("{name} must be finite"))
                        .with_context(name, value.to_string()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            alpha: Self::default_alpha(),
            beta: Self::default_beta(),
            max_length: Self::default_max_length(),
        }
    }
}
