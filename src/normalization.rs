//! Product-preserving rescalings of a factor pair (W, H).
//!
//! Both transforms insert a diagonal matrix and its reciprocal between W and H,
//! so W'*H' == W*H up to floating-point rounding. Zero norms get a zero scale
//! in both directions, leaving the degenerate column or row untouched.

use ndarray::{Array1, Array2, Axis};

/// Scale W to unit-norm columns, with H absorbing the norms.
///
/// Returns (W * S^-1, S * H) where S = diag of W's column norms.
pub fn normalize_columns(w: &Array2<f64>, h: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let norms: Array1<f64> = w
        .axis_iter(Axis(1))
        .map(|col| col.mapv(|v| v * v).sum().sqrt())
        .collect();

    let mut w_out = w.clone();
    let mut h_out = h.clone();
    for (j, &norm) in norms.iter().enumerate() {
        let inv = if norm.abs() < 1e-30 { 0.0 } else { 1.0 / norm };
        w_out.column_mut(j).mapv_inplace(|v| v * inv);
        h_out.row_mut(j).mapv_inplace(|v| v * norm);
    }

    (w_out, h_out)
}

/// Scale H to unit-norm rows, with W absorbing the norms.
///
/// Returns (W * S, S^-1 * H) where S = diag of H's row norms.
pub fn normalize_rows(w: &Array2<f64>, h: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let norms: Array1<f64> = h
        .axis_iter(Axis(0))
        .map(|row| row.mapv(|v| v * v).sum().sqrt())
        .collect();

    let mut w_out = w.clone();
    let mut h_out = h.clone();
    for (i, &norm) in norms.iter().enumerate() {
        let inv = if norm.abs() < 1e-30 { 0.0 } else { 1.0 / norm };
        w_out.column_mut(i).mapv_inplace(|v| v * norm);
        h_out.row_mut(i).mapv_inplace(|v| v * inv);
    }

    (w_out, h_out)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::test_utils::max_abs_diff;

    #[test]
    fn test_normalize_columns_unit_norms() {
        let w = array![[3.0, 0.0], [4.0, 2.0]];
        let h = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let (w_out, h_out) = normalize_columns(&w, &h);

        for j in 0..w_out.ncols() {
            let norm = w_out.column(j).mapv(|v| v * v).sum().sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "column {} norm {}", j, norm);
        }
        assert!(max_abs_diff(&w.dot(&h), &w_out.dot(&h_out)) < 1e-8);
    }

    #[test]
    fn test_normalize_columns_zero_column() {
        let w = array![[3.0, 0.0], [4.0, 0.0]];
        let h = array![[1.0, 2.0], [3.0, 4.0]];
        let (w_out, h_out) = normalize_columns(&w, &h);

        // zero column stays zero instead of dividing by zero
        assert_eq!(w_out[[0, 1]], 0.0);
        assert_eq!(w_out[[1, 1]], 0.0);
        assert!(w_out.iter().all(|v| v.is_finite()));
        assert!(max_abs_diff(&w.dot(&h), &w_out.dot(&h_out)) < 1e-8);
    }

    #[test]
    fn test_normalize_rows_unit_norms() {
        let w = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let h = array![[3.0, 4.0], [1.0, 1.0]];
        let (w_out, h_out) = normalize_rows(&w, &h);

        for i in 0..h_out.nrows() {
            let norm = h_out.row(i).mapv(|v| v * v).sum().sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "row {} norm {}", i, norm);
        }
        assert!(max_abs_diff(&w.dot(&h), &w_out.dot(&h_out)) < 1e-8);
    }

    #[test]
    fn test_normalize_rows_zero_row() {
        let w = array![[1.0, 2.0], [3.0, 4.0]];
        let h = array![[0.0, 0.0], [1.0, 1.0]];
        let (w_out, h_out) = normalize_rows(&w, &h);

        assert!(h_out.iter().all(|v| v.is_finite()));
        assert_eq!(h_out[[0, 0]], 0.0);
        assert!(max_abs_diff(&w.dot(&h), &w_out.dot(&h_out)) < 1e-8);
    }
}
