// ============================================================================
// Hyperalgebra Library
// Multi-precision hypercomplex numbers, coordinate vectors and matrices
// ============================================================================

//! # Hyperalgebra
//!
//! Hypercomplex numbers (real, complex, quaternion, octonion, sedenion under
//! one representation), coordinate vectors and rectangular matrices, each in
//! an arbitrary-precision decimal variant and a machine-precision variant.
//!
//! ## Features
//!
//! - **One algorithm set, two precisions**: every type is generic over
//!   [`numeric::Scalar`], implemented for `rust_decimal::Decimal` and `f64`
//! - **Explicit rounding**: decimal operations take a [`numeric::PrecisionConfig`]
//!   and round every intermediate step, not just the final result
//! - **Dimension interoperability**: hypercomplex numbers of different
//!   imaginary dimension combine and compare via implicit zero-padding
//! - **Fail-fast errors**: all operations return [`numeric::NumericResult`]
//!
//! ## Example
//!
//! ```rust
//! use hyperalgebra::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let mc = PrecisionConfig::new(10, RoundingMode::HalfEven).unwrap();
//!
//! // 3 + 4i has magnitude 5
//! let z = DecimalHypercomplex::new(Decimal::from(3), [Decimal::from(4)]);
//! assert_eq!(z.magnitude(&mc).unwrap(), Decimal::from(5));
//!
//! // Vectors convert to hypercomplex numbers and back
//! let v = z.to_vector();
//! assert_eq!(v.to_hypercomplex().unwrap(), z);
//!
//! // Matrices are assembled from column vectors
//! let m = DecimalMatrix::from_columns(&[v.clone(), v]).unwrap();
//! let squared = m.pow(2, &mc).unwrap();
//! println!("{}", squared);
//!
//! // The machine-precision variant has a unit rounding context
//! let w = Hypercomplex64::new(-4.0, [0.0]);
//! let root = w.sqrt(&()).unwrap();
//! assert!((root.imaginary(0) - 2.0).abs() < 1e-12);
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DecimalHypercomplex, DecimalMatrix, DecimalVector, Family, FamilyThresholds,
        Hypercomplex, Hypercomplex64, Matrix, Matrix64, Vector, Vector64,
    };
    pub use crate::interfaces::MathRender;
    pub use crate::numeric::{
        NumericError, NumericResult, PrecisionConfig, RoundingMode, Scalar,
    };
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::cmp::Ordering;

    fn decimal() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000, 0u32..4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    fn hypercomplex() -> impl Strategy<Value = DecimalHypercomplex> {
        (decimal(), prop::collection::vec(decimal(), 0..10))
            .prop_map(|(real, imag)| Hypercomplex::new(real, imag))
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in hypercomplex(), b in hypercomplex()) {
            let mc = PrecisionConfig::DECIMAL64;
            prop_assert_eq!(a.add(&b, &mc).unwrap(), b.add(&a, &mc).unwrap());
        }

        #[test]
        fn prop_conjugate_is_involution(a in hypercomplex()) {
            let mc = PrecisionConfig::DECIMAL64;
            let twice = a.conjugate(&mc).unwrap().conjugate(&mc).unwrap();
            prop_assert_eq!(twice, a);
        }

        #[test]
        fn prop_magnitude_is_non_negative(a in hypercomplex()) {
            let mc = PrecisionConfig::DECIMAL32;
            prop_assert!(a.magnitude(&mc).unwrap() >= Decimal::ZERO);
        }

        #[test]
        fn prop_ordering_matches_equality(a in hypercomplex(), b in hypercomplex()) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&a), Ordering::Equal);
        }

        #[test]
        fn prop_real_numbers_belong_to_every_family(real in decimal(), zeros in 0usize..20) {
            let x = Hypercomplex::new(real, vec![Decimal::ZERO; zeros]);
            prop_assert!(x.is_real_number());
            prop_assert!(x.is_complex_number());
            prop_assert!(x.is_quaternion());
            prop_assert!(x.is_octonion());
            prop_assert!(x.is_sedenion());
        }

        #[test]
        fn prop_hypercomplex_vector_round_trip(a in hypercomplex()) {
            prop_assert_eq!(a.to_vector().to_hypercomplex().unwrap(), a);
        }

        // A single coordinate would need a 1x1 matrix, which is rejected.
        #[test]
        fn prop_vector_matrix_round_trip(coords in prop::collection::vec(decimal(), 2..10)) {
            let v = DecimalVector::new(coords);
            let column = v.to_matrix().unwrap();
            prop_assert_eq!(column.column_as_vector(0).unwrap(), v);
        }
    }
}
