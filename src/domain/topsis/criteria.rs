//! Criterion weights and preference directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher raw value is preferred (`+`).
    #[serde(rename = "+")]
    Benefit,
    /// Lower raw value is preferred (`-`).
    #[serde(rename = "-")]
    Cost,
}

impl Impact {
    /// Returns the textual symbol for this impact.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }

    /// Parses a single symbol. Only exact `+` and `-` are accepted.
    fn parse_at(index: usize, symbol: &str) -> Result<Self, ValidationError> {
        match symbol {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(ValidationError::invalid_impact(index, other)),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Ordered per-criterion impacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Every criterion a benefit.
    pub fn all_benefit(len: usize) -> Self {
        Self(vec![Impact::Benefit; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    /// Returns a copy with the impact at `index` flipped.
    pub fn with_flipped(&self, index: usize) -> Self {
        let mut impacts = self.0.clone();
        if let Some(impact) = impacts.get_mut(index) {
            *impact = impact.flipped();
        }
        Self(impacts)
    }
}

impl FromStr for ImpactVector {
    type Err = ValidationError;

    /// Parses a comma-separated list such as `"+,+,-,+"`.
    ///
    /// Whitespace around each symbol is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .enumerate()
            .map(|(index, symbol)| Impact::parse_at(index, symbol.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Ordered per-criterion weights.
///
/// Weights are multiplicative factors used as given. They do not need to
/// sum to one and are never renormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting non-positive or non-finite weights.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        if let Some((index, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(ValidationError::invalid_weight(index, w.to_string()));
        }
        Ok(Self(weights))
    }

    /// Equal unit weights for `len` criteria.
    pub fn uniform(len: usize) -> Self {
        Self(vec![1.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, ValidationError> {
        Self::try_new(self.0.iter().map(|w| w * factor).collect())
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = ValidationError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

impl FromStr for WeightVector {
    type Err = ValidationError;

    /// Parses a comma-separated list such as `"1,1,0.5,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weights = s
            .split(',')
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.trim();
                raw.parse::<f64>()
                    .map_err(|_| ValidationError::invalid_weight(index, raw))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_impact_symbols() {
        let impacts: ImpactVector = "+,-,+".parse().unwrap();
        assert_eq!(
            impacts.as_slice(),
            &[Impact::Benefit, Impact::Cost, Impact::Benefit]
        );
    }

    #[test]
    fn impact_parsing_trims_whitespace() {
        let impacts: ImpactVector = " + , - ".parse().unwrap();
        assert_eq!(impacts.as_slice(), &[Impact::Benefit, Impact::Cost]);
    }

    #[test]
    fn rejects_unknown_impact_symbol_with_index() {
        let err = "+,x,-".parse::<ImpactVector>().unwrap_err();
        assert_eq!(err, ValidationError::invalid_impact(1, "x"));
    }

    #[test]
    fn rejects_empty_impact_symbol() {
        let err = "+,,-".parse::<ImpactVector>().unwrap_err();
        assert_eq!(err, ValidationError::invalid_impact(1, ""));
    }

    #[test]
    fn flipping_impact_reverses_direction() {
        let impacts = ImpactVector::all_benefit(2).with_flipped(1);
        assert_eq!(impacts.as_slice(), &[Impact::Benefit, Impact::Cost]);
        assert_eq!(Impact::Cost.flipped(), Impact::Benefit);
    }

    #[test]
    fn impact_serializes_as_symbol() {
        let json = serde_json::to_string(&ImpactVector::new(vec![Impact::Benefit, Impact::Cost]))
            .unwrap();
        assert_eq!(json, r#"["+","-"]"#);
    }

    #[test]
    fn parses_weights() {
        let weights: WeightVector = "1, 2.5,0.25".parse().unwrap();
        assert_eq!(weights.as_slice(), &[1.0, 2.5, 0.25]);
    }

    #[test]
    fn weights_are_not_renormalized() {
        let weights: WeightVector = "2,2,2".parse().unwrap();
        assert_eq!(weights.as_slice().iter().sum::<f64>(), 6.0);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let err = "1,abc".parse::<WeightVector>().unwrap_err();
        assert_eq!(err, ValidationError::invalid_weight(1, "abc"));
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert!(matches!(
            "1,0".parse::<WeightVector>(),
            Err(ValidationError::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            WeightVector::try_new(vec![-1.0]),
            Err(ValidationError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_weight() {
        assert!("1,inf".parse::<WeightVector>().is_err());
        assert!("NaN".parse::<WeightVector>().is_err());
    }

    #[test]
    fn scaled_weights_multiply_each_entry() {
        let weights = WeightVector::uniform(3).scaled(2.0).unwrap();
        assert_eq!(weights.as_slice(), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn deserializing_weights_applies_validation() {
        let weights: WeightVector = serde_json::from_str("[1.0, 2.5]").unwrap();
        assert_eq!(weights.as_slice(), &[1.0, 2.5]);

        assert!(serde_json::from_str::<WeightVector>("[-1.0]").is_err());
        assert!(serde_json::from_str::<WeightVector>("[1.0, 0.0]").is_err());
    }

    #[test]
    fn weights_serialize_as_plain_list() {
        let json = serde_json::to_string(&WeightVector::uniform(2)).unwrap();
        assert_eq!(json, "[1.0,1.0]");
    }
}
