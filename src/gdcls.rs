//! GDCLS: gradient-descent constrained least squares NMF.
//!
//! Alternates a Tikhonov-regularized least-squares solve for H with a
//! multiplicative gradient update for W until the iteration budget or an
//! optional relative-residual goal is reached. V is never mutated; W and H are
//! rebuilt functionally every iteration.

use std::time::Instant;

use ndarray::Array2;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::error::NmfError;
use crate::observer::{should_report, LogObserver, NoopObserver, StepObserver};
use crate::options::GdclsOptions;
use crate::solver::CoefficientSolver;
use crate::update::{frobenius_norm, update_basis};

/// Caller-held factorization state for resuming optimization.
///
/// Each call to [`continue_factorization`] consumes a state and returns a fresh
/// one, so independent factorizations never share anything.
#[derive(Debug, Clone)]
pub struct FactorizationState {
    w: Array2<f64>,
    h: Array2<f64>,
}

impl FactorizationState {
    /// Wrap an existing (W, H) pair, checking that the inner dimensions agree
    pub fn new(w: Array2<f64>, h: Array2<f64>) -> Result<Self, NmfError> {
        if w.ncols() != h.nrows() {
            return Err(NmfError::ShapeMismatch {
                w_cols: w.ncols(),
                h_rows: h.nrows(),
            });
        }
        Ok(Self { w, h })
    }

    /// Number of latent basis vectors, inferred from the factor shapes
    pub fn rank(&self) -> usize {
        self.w.ncols()
    }

    pub fn w(&self) -> &Array2<f64> {
        &self.w
    }

    pub fn h(&self) -> &Array2<f64> {
        &self.h
    }

    pub fn into_pair(self) -> (Array2<f64>, Array2<f64>) {
        (self.w, self.h)
    }
}

/// Factorize V (m×n) into non-negative W (m×k) and H (k×n) with V ≈ W*H.
///
/// W starts from a uniform [0, 1) initialization (seeded through
/// `options.seed` if reproducibility matters) and the loop runs until
/// `options.max_steps` or, when a precision goal is set, until the relative
/// residual drops below 10^-p.
pub fn factorize(
    v: &Array2<f64>,
    k: usize,
    options: &GdclsOptions,
) -> Result<(Array2<f64>, Array2<f64>), NmfError> {
    if options.print_profiling_info {
        factorize_with_observer(v, k, options, &LogObserver)
    } else {
        factorize_with_observer(v, k, options, &NoopObserver)
    }
}

/// [`factorize`] with an injected diagnostic sink
pub fn factorize_with_observer(
    v: &Array2<f64>,
    k: usize,
    options: &GdclsOptions,
    observer: &dyn StepObserver,
) -> Result<(Array2<f64>, Array2<f64>), NmfError> {
    options.validate()?;
    validate_input(v)?;
    if k == 0 {
        return Err(NmfError::Shape(
            "rank k must be a positive integer".to_string(),
        ));
    }

    let m = v.nrows();
    let n = v.ncols();
    let w = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            Array2::random_using((m, k), Uniform::new(0.0, 1.0), &mut rng)
        }
        None => Array2::random((m, k), Uniform::new(0.0, 1.0)),
    };
    // H carries no information before the first solve; zeros only fix its shape
    let h = Array2::zeros((k, n));

    run_loop(v, w, h, options, observer)
}

/// Resume optimization from a caller-held state, returning the advanced state.
///
/// Same loop body as [`factorize`]; the rank is inferred from the state and the
/// incoming H is only read for shape validation. With `max_steps == 0` the
/// state comes back unchanged.
pub fn continue_factorization(
    v: &Array2<f64>,
    state: FactorizationState,
    options: &GdclsOptions,
) -> Result<FactorizationState, NmfError> {
    if options.print_profiling_info {
        continue_factorization_with_observer(v, state, options, &LogObserver)
    } else {
        continue_factorization_with_observer(v, state, options, &NoopObserver)
    }
}

/// [`continue_factorization`] with an injected diagnostic sink
pub fn continue_factorization_with_observer(
    v: &Array2<f64>,
    state: FactorizationState,
    options: &GdclsOptions,
    observer: &dyn StepObserver,
) -> Result<FactorizationState, NmfError> {
    options.validate()?;
    validate_input(v)?;
    if state.w.nrows() != v.nrows() || state.h.ncols() != v.ncols() {
        return Err(NmfError::Shape(format!(
            "state is {}x{} * {}x{} but V is {}x{}",
            state.w.nrows(),
            state.w.ncols(),
            state.h.nrows(),
            state.h.ncols(),
            v.nrows(),
            v.ncols()
        )));
    }

    let (w, h) = state.into_pair();
    let (w, h) = run_loop(v, w, h, options, observer)?;
    FactorizationState::new(w, h)
}

fn validate_input(v: &Array2<f64>) -> Result<(), NmfError> {
    if v.nrows() == 0 || v.ncols() == 0 {
        return Err(NmfError::Shape(format!(
            "input matrix must be non-empty, got {}x{}",
            v.nrows(),
            v.ncols()
        )));
    }
    Ok(())
}

/// Shared alternating loop for fresh runs and continuations
fn run_loop(
    v: &Array2<f64>,
    mut w: Array2<f64>,
    mut h: Array2<f64>,
    options: &GdclsOptions,
    observer: &dyn StepObserver,
) -> Result<(Array2<f64>, Array2<f64>), NmfError> {
    let norm_v = frobenius_norm(v);
    let threshold = options.residual_threshold();
    // Sentinel keeps the convergence test false before the first iteration
    let mut diff_norm = 10.0 * norm_v;

    let start = Instant::now();
    let mut step = 0;

    while step < options.max_steps
        && threshold.map_or(true, |t| norm_v > 0.0 && diff_norm / norm_v > t)
    {
        // H-step: solve (W^T*W + lambda*I) h_i = W^T v_i per column of V
        let solver = CoefficientSolver::new(&w, options.regularization)?;
        h = solver.solve_coefficients(v, &w);
        if options.non_negative {
            h.mapv_inplace(|x| x.max(0.0));
        }

        // W-step: multiplicative gradient update, keeps W non-negative
        w = update_basis(v, &w, &h, options.epsilon);

        let residual = if threshold.is_some() {
            diff_norm = frobenius_norm(&(v - &w.dot(&h)));
            Some(diff_norm / norm_v)
        } else {
            None
        };

        step += 1;
        if should_report(step) {
            observer.on_step(step, start.elapsed(), residual);
        }
    }

    Ok((w, h))
}
