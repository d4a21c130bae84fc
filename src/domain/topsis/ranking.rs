//! Rank derivation from closeness scores.

use std::cmp::Ordering;

/// Assigns 1-based ranks by descending score.
///
/// Ranks are positions in a stable descending sort, so equal scores keep
/// their original row order and the earlier row gets the better rank. The
/// result is always a permutation of `1..=scores.len()`, returned in input
/// order.
///
/// # Edge Cases
/// - Empty input: Returns empty Vec
/// - All scores equal: Ranks follow row order
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0; scores.len()];
    for (position, &row) in order.iter().enumerate() {
        ranks[row] = position + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_have_no_ranks() {
        assert!(rank_descending(&[]).is_empty());
    }

    #[test]
    fn highest_score_gets_rank_one() {
        assert_eq!(rank_descending(&[0.2, 0.9, 0.5]), vec![3, 1, 2]);
    }

    #[test]
    fn ties_keep_row_order() {
        assert_eq!(rank_descending(&[0.5, 0.8, 0.5, 0.8]), vec![3, 1, 4, 2]);
    }

    #[test]
    fn all_equal_scores_rank_in_row_order() {
        assert_eq!(rank_descending(&[0.0, 0.0, 0.0]), vec![1, 2, 3]);
    }
}
