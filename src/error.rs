use std::error::Error;
use std::fmt;

/// Errors raised by the factorization routines
#[derive(Debug)]
pub enum NmfError {
    /// Input matrix empty or dimensionally inconsistent, or rank non-positive
    Shape(String),
    /// Continuation called with an incompatible (W, H) pair
    ShapeMismatch { w_cols: usize, h_rows: usize },
    /// Singular or non-positive-definite k×k system in the regularized solve
    Numeric(String),
    /// Ranking utility asked for more entries than available, or label count mismatch
    Index(String),
    /// Option field rejected by validation
    InvalidOptions(String),
}

impl fmt::Display for NmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmfError::Shape(msg) => write!(f, "Shape error: {}", msg),
            NmfError::ShapeMismatch { w_cols, h_rows } => write!(
                f,
                "Shape mismatch: W has {} columns but H has {} rows",
                w_cols, h_rows
            ),
            NmfError::Numeric(msg) => write!(f, "Numeric error: {}", msg),
            NmfError::Index(msg) => write!(f, "Index error: {}", msg),
            NmfError::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
        }
    }
}

impl Error for NmfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shape_mismatch() {
        let err = NmfError::ShapeMismatch {
            w_cols: 3,
            h_rows: 5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3 columns"));
        assert!(msg.contains("5 rows"));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn Error> = Box::new(NmfError::Numeric("singular system".to_string()));
        assert!(err.to_string().contains("singular"));
    }
}
