use std::cmp::Ordering;

use ndarray::ArrayView1;

use crate::error::NmfError;

/// Pair the n largest-magnitude entries of a vector with their labels.
///
/// Typical use: pass one column of W and the row labels of V to read off which
/// inputs dominate a basis vector. Returns (weight, label) pairs sorted by
/// descending magnitude; ties keep the higher original index first.
pub fn top_labeled<L: Clone>(
    vec: ArrayView1<'_, f64>,
    n: usize,
    labels: &[L],
) -> Result<Vec<(f64, L)>, NmfError> {
    let len = vec.len();
    if labels.len() != len {
        return Err(NmfError::Index(format!(
            "vector has {} entries but {} labels were supplied",
            len,
            labels.len()
        )));
    }
    if n > len {
        return Err(NmfError::Index(format!(
            "requested top {} of a vector with only {} entries",
            n, len
        )));
    }

    let mut indexed: Vec<(usize, f64)> = vec.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(Ordering::Equal)
            .then(b.0.cmp(&a.0))
    });

    Ok(indexed
        .into_iter()
        .take(n)
        .map(|(i, weight)| (weight, labels[i].clone()))
        .collect())
}
