//! GDCLS non-negative matrix factorization.
//!
//! Computes a low-rank factorization V ≈ W*H with non-negative factors by
//! alternating a Tikhonov-regularized least-squares solve for H with a
//! multiplicative gradient update for W. Ships with a continuation entry point
//! for resuming optimization from caller-held state, two product-preserving
//! normalization transforms, and a small utility for labeling the dominant
//! coordinates of a basis vector.
//!
//! ```
//! use gdcls_nmf::{factorize, GdclsOptions};
//! use ndarray::array;
//!
//! let v = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
//! let options = GdclsOptions {
//!     max_steps: 50,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let (w, h) = factorize(&v, 1, &options).unwrap();
//! assert_eq!(w.dim(), (3, 1));
//! assert_eq!(h.dim(), (1, 2));
//! ```

pub mod error;
pub mod gdcls;
pub mod interpret;
pub mod normalization;
pub mod observer;
pub mod options;
pub mod solver;
pub mod update;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports for convenience
pub use error::NmfError;
pub use gdcls::{
    continue_factorization, continue_factorization_with_observer, factorize,
    factorize_with_observer, FactorizationState,
};
pub use interpret::top_labeled;
pub use normalization::{normalize_columns, normalize_rows};
pub use observer::{LogObserver, NoopObserver, StepObserver};
pub use options::GdclsOptions;
pub use update::relative_residual;
