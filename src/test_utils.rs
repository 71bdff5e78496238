/// Shared test fixtures for the factorization tests
use ndarray::Array2;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

/// Exactly rank-two non-negative matrix: product of random uniform factors.
/// A k=2 factorization can drive the residual close to zero on this input.
pub fn planted_rank_two(m: usize, n: usize) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = Array2::random_using((m, 2), Uniform::new(0.1, 2.0), &mut rng);
    let b = Array2::random_using((2, n), Uniform::new(0.1, 2.0), &mut rng);
    a.dot(&b)
}

/// Largest elementwise absolute difference between two same-shaped matrices
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
