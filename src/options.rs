use serde::{Deserialize, Serialize};

use crate::error::NmfError;

/// Configuration for the GDCLS factorization loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdclsOptions {
    /// Iteration budget for the outer alternating loop
    pub max_steps: usize,
    /// Clamp every entry of H to be >= 0 after each least-squares solve
    pub non_negative: bool,
    /// Stabilizer added to the multiplicative-update denominator
    pub epsilon: f64,
    /// Tikhonov weight lambda on H; keep > 0 so the k×k solve stays positive definite
    pub regularization: f64,
    /// Convergence exponent p: stop once ||V - WH|| / ||V|| <= 10^-p.
    /// None runs the loop for exactly `max_steps` iterations.
    pub precision_goal: Option<f64>,
    /// Route per-step diagnostics to the log facade
    pub print_profiling_info: bool,
    /// Seed for the uniform [0, 1) initialization of W; None uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for GdclsOptions {
    fn default() -> Self {
        Self {
            max_steps: 200,
            non_negative: true,
            epsilon: 1e-9,
            regularization: 0.01,
            precision_goal: None,
            print_profiling_info: false,
            seed: None,
        }
    }
}

impl GdclsOptions {
    /// Validate the numeric fields once at the call boundary
    pub fn validate(&self) -> Result<(), NmfError> {
        if !(self.epsilon > 0.0) || !self.epsilon.is_finite() {
            return Err(NmfError::InvalidOptions(format!(
                "epsilon must be a finite positive number, got {}",
                self.epsilon
            )));
        }
        if !(self.regularization >= 0.0) || !self.regularization.is_finite() {
            return Err(NmfError::InvalidOptions(format!(
                "regularization must be finite and >= 0, got {}",
                self.regularization
            )));
        }
        if let Some(p) = self.precision_goal {
            if !(p >= 0.0) || !p.is_finite() {
                return Err(NmfError::InvalidOptions(format!(
                    "precision goal must be finite and >= 0, got {}",
                    p
                )));
            }
        }
        Ok(())
    }

    /// Relative-residual threshold 10^-p, if a precision goal is set
    pub(crate) fn residual_threshold(&self) -> Option<f64> {
        self.precision_goal.map(|p| 10f64.powf(-p))
    }
}
