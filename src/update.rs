use ndarray::Array2;

/// Elementwise multiplicative update: base * numer / (denom + eps)
pub fn multiplicative_update(
    base: &Array2<f64>,
    numer: &Array2<f64>,
    denom: &Array2<f64>,
    eps: f64,
) -> Array2<f64> {
    let mut result = base.clone();
    ndarray::Zip::from(&mut result)
        .and(numer)
        .and(denom)
        .for_each(|r, &n, &d| {
            *r *= n / (d + eps);
        });
    nan_to_num(&mut result);
    result
}

/// GDCLS basis step: W <- W * (V * H^T) / (W * H * H^T + eps).
///
/// Preserves non-negativity of W when V and H are non-negative.
pub fn update_basis(
    v: &Array2<f64>,
    w: &Array2<f64>,
    h: &Array2<f64>,
    eps: f64,
) -> Array2<f64> {
    let numer = v.dot(&h.t());
    // H * H^T is k×k
    let denom = w.dot(&h.dot(&h.t()));
    multiplicative_update(w, &numer, &denom, eps)
}

/// Replace NaN and Inf with 0.0 in-place
pub fn nan_to_num(a: &mut Array2<f64>) {
    a.mapv_inplace(|v| if v.is_finite() { v } else { 0.0 });
}

/// Frobenius norm: sqrt of the sum of squared entries
pub fn frobenius_norm(a: &Array2<f64>) -> f64 {
    a.mapv(|v| v * v).sum().sqrt()
}

/// ||V - W*H||_F / ||V||_F, falling back to the absolute residual for a zero V
pub fn relative_residual(v: &Array2<f64>, w: &Array2<f64>, h: &Array2<f64>) -> f64 {
    let diff = v - &w.dot(h);
    let error = frobenius_norm(&diff);
    let v_norm = frobenius_norm(v);
    if v_norm > 0.0 {
        error / v_norm
    } else {
        error
    }
}
