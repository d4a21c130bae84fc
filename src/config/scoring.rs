//! Scoring configuration

use serde::Deserialize;

use crate::domain::topsis::{DegeneratePolicy, TopsisScorer};

/// Scorer behaviour settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// How rows at zero distance from both ideal points are handled
    /// (`flag` scores them 0, `reject` fails the request)
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

impl ScoringConfig {
    /// Build a scorer with these settings
    pub fn scorer(&self) -> TopsisScorer {
        TopsisScorer::new().with_policy(self.degenerate_policy)
    }
}
