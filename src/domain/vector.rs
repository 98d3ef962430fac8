// ============================================================================
// Coordinate Vector
// Fixed-length ordered tuple of scalars
// ============================================================================

use super::hypercomplex::Hypercomplex;
use super::matrix::Matrix;
use crate::interfaces::MathRender;
use crate::numeric::{NumericError, NumericResult, Scalar};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate vector whose length is fixed at construction.
///
/// A vector of length `k + 1` is isomorphic to a hypercomplex number with
/// `k` imaginary coefficients (coordinate 0 is the real part), and to a
/// single-column matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<S> {
    coordinates: Vec<S>,
}

impl<S: Scalar> Vector<S> {
    pub fn new(coordinates: Vec<S>) -> Self {
        Self { coordinates }
    }

    /// Coordinate at `index`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> NumericResult<S> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(NumericError::IndexOutOfRange {
                index,
                len: self.coordinates.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.coordinates
    }

    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.coordinates.iter().copied()
    }

    /// Hypercomplex number with coordinate 0 as its real part.
    pub fn to_hypercomplex(&self) -> NumericResult<Hypercomplex<S>> {
        Hypercomplex::from_vector(self)
    }

    /// Single-column matrix with this vector as column 0.
    pub fn to_matrix(&self) -> NumericResult<Matrix<S>> {
        Matrix::from_columns(std::slice::from_ref(self))
    }

    fn ensure_same_len(&self, other: &Self) -> NumericResult<()> {
        if self.len() != other.len() {
            return Err(NumericError::DimensionMismatch {
                expected: vec![self.len()],
                found: vec![other.len()],
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, ctx: &S::Context, op: F) -> NumericResult<Self>
    where
        F: Fn(S, S, &S::Context) -> NumericResult<S>,
    {
        self.ensure_same_len(other)?;
        let coordinates = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| op(*a, *b, ctx))
            .collect::<NumericResult<Vec<S>>>()?;
        Ok(Self { coordinates })
    }

    /// Component-wise sum.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn add(&self, other: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(other, ctx, S::add_rounded)
    }

    /// Component-wise difference.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn subtract(&self, other: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(other, ctx, S::sub_rounded)
    }

    /// Sum of pairwise products; every product and every partial sum is
    /// rounded.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn dot_product(&self, other: &Self, ctx: &S::Context) -> NumericResult<S> {
        self.ensure_same_len(other)?;
        self.coordinates
            .iter()
            .zip(&other.coordinates)
            .try_fold(S::ZERO, |sum, (a, b)| {
                sum.add_rounded(a.mul_rounded(*b, ctx)?, ctx)
            })
    }

    /// Cross product. Not implemented for any dimension.
    ///
    /// # Errors
    /// Always returns `NotImplemented`.
    pub fn cross_product(&self, _other: &Self, _ctx: &S::Context) -> NumericResult<Self> {
        tracing::debug!(len = self.len(), "cross product requested");
        Err(NumericError::NotImplemented("vector cross product"))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: Scalar> From<Vec<S>> for Vector<S> {
    fn from(coordinates: Vec<S>) -> Self {
        Self::new(coordinates)
    }
}

impl<S: Scalar> From<&Hypercomplex<S>> for Vector<S> {
    fn from(number: &Hypercomplex<S>) -> Self {
        number.to_vector()
    }
}

/// Only single-column matrices convert; use `column_as_vector` otherwise.
impl<S: Scalar> TryFrom<&Matrix<S>> for Vector<S> {
    type Error = NumericError;

    fn try_from(matrix: &Matrix<S>) -> NumericResult<Self> {
        if matrix.columns() != 1 {
            return Err(NumericError::InvalidShape(format!(
                "expected a single-column matrix, found {} columns",
                matrix.columns()
            )));
        }
        matrix.column_as_vector(0)
    }
}

/// Vectors of different length are unordered.
impl<S: Scalar> PartialOrd for Vector<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.len() != other.len() {
            return None;
        }
        self.coordinates.partial_cmp(&other.coordinates)
    }
}

impl<S: Scalar> fmt::Display for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("]")
    }
}

impl<S: Scalar> MathRender for Vector<S> {
    fn to_latex(&self) -> String {
        let body = self
            .coordinates
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" \\\\ ");
        format!("\\begin{{pmatrix}} {} \\end{{pmatrix}}", body)
    }
}

/// Vector with arbitrary-precision decimal coordinates
pub type DecimalVector = Vector<Decimal>;

/// Vector with machine-precision coordinates
pub type Vector64 = Vector<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{PrecisionConfig, RoundingMode};

    fn dv(values: &[i64]) -> DecimalVector {
        Vector::new(values.iter().map(|v| Decimal::from(*v)).collect())
    }

    #[test]
    fn test_accessors() {
        let v = dv(&[1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.get(2).unwrap(), Decimal::from(3));
        assert_eq!(
            v.get(3),
            Err(NumericError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_add_is_component_wise() {
        let mc = PrecisionConfig::DECIMAL64;
        let sum = dv(&[1, 2, 3]).add(&dv(&[4, 5, 6]), &mc).unwrap();
        assert_eq!(sum, dv(&[5, 7, 9]));
    }

    #[test]
    fn test_subtract_is_component_wise() {
        let mc = PrecisionConfig::DECIMAL64;
        let difference = dv(&[1, 2, 3]).subtract(&dv(&[4, 6, 8]), &mc).unwrap();
        assert_eq!(difference, dv(&[-3, -4, -5]));
    }

    #[test]
    fn test_length_mismatch() {
        let mc = PrecisionConfig::DECIMAL64;
        let short = dv(&[1, 2]);
        let long = dv(&[1, 2, 3]);
        assert_eq!(
            short.add(&long, &mc),
            Err(NumericError::DimensionMismatch {
                expected: vec![2],
                found: vec![3],
            })
        );
        assert!(matches!(
            short.subtract(&long, &mc),
            Err(NumericError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            short.dot_product(&long, &mc),
            Err(NumericError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_dot_product() {
        let mc = PrecisionConfig::DECIMAL64;
        assert_eq!(
            dv(&[1, 0, 0]).dot_product(&dv(&[0, 1, 0]), &mc).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            dv(&[1, 2, 3]).dot_product(&dv(&[4, 5, 6]), &mc).unwrap(),
            Decimal::from(32)
        );
    }

    #[test]
    fn test_dot_product_rounds_each_step() {
        let mc = PrecisionConfig::new(2, RoundingMode::Down).unwrap();
        // 1.9 * 1.9 = 3.61 -> 3.6; 3.6 + 3.6 = 7.2
        let v = Vector::new(vec![Decimal::new(19, 1), Decimal::new(19, 1)]);
        assert_eq!(v.dot_product(&v, &mc).unwrap(), Decimal::new(72, 1));
    }

    #[test]
    fn test_cross_product_not_implemented() {
        let mc = PrecisionConfig::DECIMAL64;
        assert!(matches!(
            dv(&[1, 0, 0]).cross_product(&dv(&[0, 1, 0]), &mc),
            Err(NumericError::NotImplemented(_))
        ));
        let v: Vector64 = Vector::new(vec![1.0, 2.0]);
        assert!(matches!(
            v.cross_product(&v, &()),
            Err(NumericError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(dv(&[1, 2, 3]) < dv(&[1, 3, 0]));
        assert_eq!(dv(&[1, 2]).partial_cmp(&dv(&[1, 2, 3])), None);
        assert_eq!(
            dv(&[4, 4]).partial_cmp(&dv(&[4, 4])),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_conversions() {
        let v = dv(&[1, 2, 3]);
        let number = v.to_hypercomplex().unwrap();
        assert_eq!(number.real(), Decimal::from(1));
        assert_eq!(number.imaginary(1), Decimal::from(3));
        assert_eq!(Vector::from(&number), v);

        let column = v.to_matrix().unwrap();
        assert_eq!(column.rows(), 3);
        assert_eq!(column.columns(), 1);
        assert_eq!(column.column_as_vector(0).unwrap(), v);
        assert_eq!(Vector::try_from(&column).unwrap(), v);

        let square = Matrix::from_columns(&[v.clone(), v.clone()]).unwrap();
        assert!(matches!(
            Vector::try_from(&square),
            Err(NumericError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_f64_arithmetic() {
        let a: Vector64 = vec![1.0, 2.0, 3.0].into();
        let b: Vector64 = vec![4.0, 5.0, 6.0].into();
        assert_eq!(a.add(&b, &()).unwrap(), Vector::new(vec![5.0, 7.0, 9.0]));
        assert_eq!(a.dot_product(&b, &()).unwrap(), 32.0);
    }

    #[test]
    fn test_rendering() {
        let v = dv(&[1, -2, 3]);
        assert_eq!(v.to_string(), "[1, -2, 3]");
        assert_eq!(
            v.to_latex(),
            "\\begin{pmatrix} 1 \\\\ -2 \\\\ 3 \\end{pmatrix}"
        );

        let mc = PrecisionConfig::DECIMAL64;
        let sum = dv(&[1, 2, 3]).add(&dv(&[4, 5, 6]), &mc).unwrap();
        assert_eq!(sum.to_string(), "[5, 7, 9]");

        let tiny = Vector::new(vec![Decimal::new(5, 20), Decimal::new(-3, 27)]);
        let difference = tiny.subtract(&dv(&[0, 0]), &mc).unwrap();
        assert_eq!(
            difference.to_string(),
            "[0.00000000000000000005, -0.000000000000000000000000003]"
        );
    }

    #[test]
    fn test_single_coordinate_has_no_matrix_form() {
        let v = dv(&[7]);
        assert!(matches!(v.to_matrix(), Err(NumericError::InvalidShape(_))));
        assert_eq!(v.to_hypercomplex().unwrap().to_vector(), v);
    }
}
