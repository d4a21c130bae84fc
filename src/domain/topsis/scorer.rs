//! TOPSIS Scorer - closeness scoring and ranking of alternatives.

use serde::{Deserialize, Serialize};

use super::ranking::rank_descending;
use super::{
    ArithmeticError, DecisionMatrix, Impact, ImpactVector, TopsisError, ValidationError,
    WeightVector,
};

/// What to do when a row coincides with both ideal points.
///
/// That happens only when every criterion column is constant, in which case
/// every row is affected at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Score the row 0 and set its `degenerate` flag.
    #[default]
    Flag,
    /// Fail with `ArithmeticError::ZeroDistanceSum`.
    Reject,
}

/// A scored alternative, in original row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    pub id: String,
    pub values: Vec<f64>,
    /// Relative closeness to the ideal point, in `[0, 1]`.
    pub score: f64,
    /// 1 = best.
    pub rank: usize,
    /// True when `score` was defined as 0 because both distances were zero.
    pub degenerate: bool,
}

/// Euclidean distances of one row to the ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealDistances {
    pub to_best: f64,
    pub to_worst: f64,
}

/// Full scoring result including intermediate ideal points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    pub rows: Vec<ScoredRow>,
    /// Per-criterion ideal best of the weighted normalized matrix.
    pub ideal_best: Vec<f64>,
    /// Per-criterion ideal worst of the weighted normalized matrix.
    pub ideal_worst: Vec<f64>,
    /// Distances per row, in original row order.
    pub distances: Vec<IdealDistances>,
}

impl TopsisAnalysis {
    /// Returns the rank-1 row.
    pub fn best(&self) -> Option<&ScoredRow> {
        self.rows.iter().find(|row| row.rank == 1)
    }

    /// Returns true if any row was scored through the degenerate path.
    pub fn has_degenerate_rows(&self) -> bool {
        self.rows.iter().any(|row| row.degenerate)
    }

    /// Rows ordered by rank, best first.
    pub fn ranked(&self) -> Vec<&ScoredRow> {
        let mut ranked: Vec<_> = self.rows.iter().collect();
        ranked.sort_by_key(|row| row.rank);
        ranked
    }
}

/// Stateless TOPSIS scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisScorer {
    policy: DegeneratePolicy,
}

impl TopsisScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how rows at zero distance from both ideal points are handled.
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Scores and ranks every alternative.
    ///
    /// Rows come back in original order with score and rank attached.
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Vec<ScoredRow>, TopsisError> {
        self.analyze(matrix, weights, impacts)
            .map(|analysis| analysis.rows)
    }

    /// Scores every alternative and keeps the intermediate results.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each criterion column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Pick ideal best/worst per column (max/min for benefit, min/max for cost)
    /// 4. Measure Euclidean distance of each row to both ideal points
    /// 5. score = d_worst / (d_best + d_worst)
    /// 6. Rank by stable descending sort of score
    pub fn analyze(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisAnalysis, TopsisError> {
        Self::check_shape(matrix, weights, impacts)?;

        let weighted = Self::weighted_normalized(matrix, weights)?;
        let (ideal_best, ideal_worst) = Self::ideal_points(&weighted, impacts.as_slice());

        // Distances are measured in units of the largest weighted magnitude
        // so that squaring cannot overflow or underflow.
        let unit = max_abs(weighted.iter().flatten().copied());
        let mut distances = Vec::with_capacity(weighted.len());
        let mut scores = Vec::with_capacity(weighted.len());
        let mut degenerate = Vec::with_capacity(weighted.len());
        for (row, values) in weighted.iter().enumerate() {
            let to_best = scaled_distance(values, &ideal_best, unit);
            let to_worst = scaled_distance(values, &ideal_worst, unit);
            distances.push(IdealDistances {
                to_best: to_best * unit,
                to_worst: to_worst * unit,
            });

            let total = to_best + to_worst;
            if total == 0.0 {
                if self.policy == DegeneratePolicy::Reject {
                    return Err(ArithmeticError::ZeroDistanceSum { row }.into());
                }
                scores.push(0.0);
                degenerate.push(true);
            } else {
                scores.push(to_worst / total);
                degenerate.push(false);
            }
        }

        let ranks = rank_descending(&scores);

        let rows = matrix
            .rows()
            .iter()
            .enumerate()
            .map(|(i, alternative)| ScoredRow {
                id: alternative.id.clone(),
                values: alternative.values.clone(),
                score: scores[i],
                rank: ranks[i],
                degenerate: degenerate[i],
            })
            .collect();

        Ok(TopsisAnalysis {
            rows,
            ideal_best,
            ideal_worst,
            distances,
        })
    }

    /// Checks that weights and impacts line up with the criterion columns.
    fn check_shape(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<(), ValidationError> {
        let criteria = matrix.criteria_count();
        if weights.len() != criteria {
            return Err(ValidationError::count_mismatch("weights", criteria, weights.len()));
        }
        if impacts.len() != criteria {
            return Err(ValidationError::count_mismatch("impacts", criteria, impacts.len()));
        }
        Ok(())
    }

    /// Returns the weighted normalized matrix, row-major.
    fn weighted_normalized(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<Vec<f64>>, ArithmeticError> {
        let mut weighted: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| row.values.clone())
            .collect();

        for (column, weight) in weights.as_slice().iter().enumerate() {
            // norm = peak * root, kept factored so neither step leaves f64 range
            let peak = max_abs(matrix.column(column));
            if peak == 0.0 {
                return Err(ArithmeticError::ZeroColumnNorm { column });
            }
            let root = matrix
                .column(column)
                .map(|v| (v / peak) * (v / peak))
                .sum::<f64>()
                .sqrt();

            for row in weighted.iter_mut() {
                row[column] = row[column] / peak / root * weight;
            }
        }

        Ok(weighted)
    }

    /// Returns `(ideal_best, ideal_worst)` per criterion.
    fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(column, impact)| {
                let (min, max) = weighted.iter().map(|row| row[column]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(min, max), v| (min.min(v), max.max(v)),
                );
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip()
    }
}

fn max_abs(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0_f64, |peak, v| peak.max(v.abs()))
}

/// Euclidean distance between `a / unit` and `b / unit`.
fn scaled_distance(a: &[f64], b: &[f64], unit: f64) -> f64 {
    if unit == 0.0 {
        return 0.0;
    }
    let diffs: Vec<f64> = a.iter().zip(b).map(|(x, y)| x / unit - y / unit).collect();
    let peak = max_abs(diffs.iter().copied());
    if peak == 0.0 {
        return 0.0;
    }
    peak * diffs
        .iter()
        .map(|d| (d / peak) * (d / peak))
        .sum::<f64>()
        .sqrt()
}
