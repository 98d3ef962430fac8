// ============================================================================
// Numeric Errors
// Error taxonomy shared by every scalar, vector and matrix operation
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or combining numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable range of the scalar backend
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Rounding would change the value under `RoundingMode::Unnecessary`
    PrecisionLoss,
    /// Input value or configuration is invalid
    InvalidInput(&'static str),
    /// Operands of incompatible vector length or matrix shape
    DimensionMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// Malformed construction input (empty, ragged, missing cell, 1x1)
    InvalidShape(String),
    /// Semantically undefined request
    InvalidOperation(&'static str),
    /// Intentionally unfinished algorithm
    NotImplemented(&'static str),
    /// Index past the end of a coordinate list, row or column
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: rounding required but rounding mode is Unnecessary"
            ),
            NumericError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            NumericError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {:?}, found {:?}",
                expected, found
            ),
            NumericError::InvalidShape(reason) => write!(f, "invalid shape: {}", reason),
            NumericError::InvalidOperation(reason) => {
                write!(f, "invalid operation: {}", reason)
            },
            NumericError::NotImplemented(what) => write!(f, "not implemented: {}", what),
            NumericError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded representable range"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "index 4 out of range for length 3"
        );
        assert_eq!(
            NumericError::DimensionMismatch {
                expected: vec![2, 2],
                found: vec![3, 2],
            }
            .to_string(),
            "dimension mismatch: expected [2, 2], found [3, 2]"
        );
        assert_eq!(
            NumericError::NotImplemented("matrix determinant").to_string(),
            "not implemented: matrix determinant"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::PrecisionLoss);
        assert_ne!(
            NumericError::InvalidShape("a".to_string()),
            NumericError::InvalidShape("b".to_string())
        );
    }
}
