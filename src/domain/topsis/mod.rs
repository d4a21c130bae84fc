//! TOPSIS Module - Pure domain service for multi-criteria ranking.
//!
//! Ranks alternatives by their relative closeness to an ideal point and
//! distance from an anti-ideal point, both built from the weighted
//! normalized decision matrix.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria table of raw values
//! - `WeightVector` / `ImpactVector` - Per-criterion weights and directions
//! - `TopsisScorer` - Normalization, weighting, ideal points, distances, ranks
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Invalid input fails before any
//! computation, and degenerate numeric conditions are reported as errors
//! instead of leaking NaN or infinity into results.

mod criteria;
mod errors;
mod matrix;
mod ranking;
mod scorer;

pub use criteria::{Impact, ImpactVector, WeightVector};
pub use errors::{ArithmeticError, TopsisError, ValidationError};
pub use matrix::{Alternative, DecisionMatrix, DecisionMatrixBuilder};
pub use ranking::rank_descending;
pub use scorer::{DegeneratePolicy, IdealDistances, ScoredRow, TopsisAnalysis, TopsisScorer};
