// ============================================================================
// Numeric Module
// Scalar backends, rounding configuration and shared numeric utilities
// ============================================================================
//
// This module provides:
// - Scalar: the numeric capability all algebraic types are generic over
// - PrecisionConfig/RoundingMode: explicit rounding policy for decimals
// - NumericError: Error types for every operation in the crate
// - Real n-th roots for both scalar backends
//
// Design principles:
// - Every arithmetic step is rounded, not just final results
// - All arithmetic returns Result (no panics)
// - The rounding policy is an explicit argument, never global state

mod errors;
mod precision;
mod roots;
mod scalar;

pub use errors::{NumericError, NumericResult};
pub use precision::{PrecisionConfig, RoundingMode, MAX_PRECISION};
pub use roots::{decimal_real_root, f64_real_root};
pub use scalar::Scalar;

/// Arbitrary-precision decimal scalar
pub use rust_decimal::Decimal;
