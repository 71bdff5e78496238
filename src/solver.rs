use nalgebra::{Cholesky, DMatrix, DVector, Dyn};
use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::error::NmfError;

/// Solver for the regularized normal equations of the H-step.
///
/// Forms A = W^T*W + lambda*I (k×k, symmetric positive definite for lambda > 0)
/// and Cholesky-factorizes it once, so every column of V reuses the same
/// factorization.
pub struct CoefficientSolver {
    chol: Cholesky<f64, Dyn>,
    k: usize,
}

impl CoefficientSolver {
    pub fn new(w: &Array2<f64>, lambda: f64) -> Result<Self, NmfError> {
        let k = w.ncols();
        let mut gram = w.t().dot(w);
        for i in 0..k {
            gram[[i, i]] += lambda;
        }

        let a = DMatrix::from_fn(k, k, |i, j| gram[[i, j]]);
        let chol = a.cholesky().ok_or_else(|| {
            NmfError::Numeric(format!(
                "{}x{} system W^T*W + {}*I is singular or not positive definite; \
                 use a regularization parameter > 0",
                k, k, lambda
            ))
        })?;

        Ok(Self { chol, k })
    }

    /// Solve A * h = rhs for a single right-hand side
    pub fn solve(&self, rhs: &Array1<f64>) -> Array1<f64> {
        let b = DVector::from_iterator(self.k, rhs.iter().copied());
        let x = self.chol.solve(&b);
        Array1::from_iter(x.iter().copied())
    }

    /// Solve A * h_i = W^T * v_i for every column v_i of V and assemble H (k×n).
    ///
    /// Columns are independent, so they are solved in parallel; the result is
    /// identical to a sequential column sweep.
    pub fn solve_coefficients(&self, v: &Array2<f64>, w: &Array2<f64>) -> Array2<f64> {
        let n = v.ncols();
        let wt_v = w.t().dot(v);

        let columns: Vec<Array1<f64>> = (0..n)
            .into_par_iter()
            .map(|j| {
                let rhs = wt_v.column(j).to_owned();
                self.solve(&rhs)
            })
            .collect();

        let mut h = Array2::zeros((self.k, n));
        for (j, col) in columns.iter().enumerate() {
            h.column_mut(j).assign(col);
        }
        h
    }
}
