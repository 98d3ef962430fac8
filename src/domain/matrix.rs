// ============================================================================
// Rectangular Matrix
// Row-major 2-D array of scalars with rounding-aware arithmetic
// ============================================================================

use super::hypercomplex::Hypercomplex;
use super::vector::Vector;
use crate::interfaces::MathRender;
use crate::numeric::{NumericError, NumericResult, Scalar};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangular matrix with at least one row and one column.
///
/// Every row has the same length and every cell holds a value. A 1x1 matrix
/// is rejected as degenerate. Values are immutable; arithmetic returns a new
/// matrix.
///
/// # Example
/// ```
/// use hyperalgebra::prelude::*;
///
/// let m = Matrix64::new(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
/// let squared = m.pow(2, &()).unwrap();
/// assert_eq!(squared, Matrix64::new(vec![vec![1.0, 2.0], vec![0.0, 1.0]]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<Vec<S>>",
        into = "Vec<Vec<S>>",
        bound(
            serialize = "S: Scalar + Serialize",
            deserialize = "S: Scalar + Deserialize<'de>"
        )
    )
)]
pub struct Matrix<S> {
    rows: usize,
    columns: usize,
    data: Vec<S>,
}

/// Validate row layout and return `(rows, columns)`.
fn check_shape<T>(cells: &[Vec<T>]) -> NumericResult<(usize, usize)> {
    let first = cells
        .first()
        .ok_or_else(|| NumericError::InvalidShape("matrix data is empty".to_string()))?;
    let rows = cells.len();
    let columns = first.len();

    if columns == 0 {
        return Err(NumericError::InvalidShape(
            "matrix rows must not be empty".to_string(),
        ));
    }
    if let Some((index, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(NumericError::InvalidShape(format!(
            "row {} has {} cells, expected {}",
            index,
            row.len(),
            columns
        )));
    }
    if rows == 1 && columns == 1 {
        return Err(NumericError::InvalidShape(
            "1x1 matrix is degenerate".to_string(),
        ));
    }
    Ok((rows, columns))
}

impl<S: Scalar> Matrix<S> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from row-major data.
    ///
    /// # Errors
    /// Returns `InvalidShape` for empty data, ragged rows or a 1x1 matrix.
    pub fn new(rows: Vec<Vec<S>>) -> NumericResult<Self> {
        let (row_count, columns) = check_shape(&rows)?;
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            columns,
            data,
        })
    }

    /// Create from row-major data where cells may be missing.
    ///
    /// # Errors
    /// Returns `InvalidShape` for any `None` cell, in addition to the
    /// layout checks of [`Matrix::new`].
    pub fn from_cells(cells: Vec<Vec<Option<S>>>) -> NumericResult<Self> {
        let (rows, columns) = check_shape(&cells)?;
        let mut data = Vec::with_capacity(rows * columns);
        for (r, row) in cells.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                let value = cell.ok_or_else(|| {
                    NumericError::InvalidShape(format!("missing cell at row {} column {}", r, c))
                })?;
                data.push(value);
            }
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Create from real-valued hypercomplex cells.
    ///
    /// # Errors
    /// - `InvalidShape` for a malformed layout
    /// - `InvalidOperation` if any cell has a nonzero imaginary coefficient
    pub fn from_hypercomplex_rows(rows: Vec<Vec<Hypercomplex<S>>>) -> NumericResult<Self> {
        check_shape(&rows)?;
        let reals = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        if cell.is_real_number() {
                            Ok(cell.real())
                        } else {
                            Err(NumericError::InvalidOperation(
                                "matrix cells must be real numbers",
                            ))
                        }
                    })
                    .collect::<NumericResult<Vec<S>>>()
            })
            .collect::<NumericResult<Vec<Vec<S>>>>()?;
        Self::new(reals)
    }

    /// Assemble a matrix whose column `i` is `columns[i]`.
    ///
    /// # Errors
    /// Returns `InvalidShape` if no vectors are given, their lengths
    /// differ, or the result would be empty or 1x1.
    pub fn from_columns(columns: &[Vector<S>]) -> NumericResult<Self> {
        let first = columns.first().ok_or_else(|| {
            NumericError::InvalidShape("no column vectors given".to_string())
        })?;
        let rows = first.len();
        if let Some((index, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != rows)
        {
            return Err(NumericError::InvalidShape(format!(
                "column {} has {} coordinates, expected {}",
                index,
                column.len(),
                rows
            )));
        }

        let data = (0..rows)
            .map(|r| columns.iter().map(|v| v.as_slice()[r]).collect())
            .collect();
        Self::new(data)
    }

    /// Result of an arithmetic operation; rejects a degenerate 1x1 product.
    fn from_parts(rows: usize, columns: usize, data: Vec<S>) -> NumericResult<Self> {
        if rows == 1 && columns == 1 {
            return Err(NumericError::InvalidShape(
                "1x1 matrix is degenerate".to_string(),
            ));
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn at(&self, row: usize, column: usize) -> S {
        self.data[row * self.columns + column]
    }

    /// Cell at (`row`, `column`).
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if either index is past the matrix bounds.
    pub fn get(&self, row: usize, column: usize) -> NumericResult<S> {
        if row >= self.rows {
            return Err(NumericError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if column >= self.columns {
            return Err(NumericError::IndexOutOfRange {
                index: column,
                len: self.columns,
            });
        }
        Ok(self.at(row, column))
    }

    /// Column `column` as a vector, preserving row order.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `column >= columns()`.
    pub fn column_as_vector(&self, column: usize) -> NumericResult<Vector<S>> {
        if column >= self.columns {
            return Err(NumericError::IndexOutOfRange {
                index: column,
                len: self.columns,
            });
        }
        Ok(Vector::new(
            (0..self.rows).map(|r| self.at(r, column)).collect(),
        ))
    }

    /// Rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.data
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }

    #[inline]
    pub fn is_square_matrix(&self) -> bool {
        self.rows == self.columns
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn ensure_same_shape(&self, other: &Self) -> NumericResult<()> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(NumericError::DimensionMismatch {
                expected: vec![self.rows, self.columns],
                found: vec![other.rows, other.columns],
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, ctx: &S::Context, op: F) -> NumericResult<Self>
    where
        F: Fn(S, S, &S::Context) -> NumericResult<S>,
    {
        self.ensure_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| op(*a, *b, ctx))
            .collect::<NumericResult<Vec<S>>>()?;
        Ok(Self {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless both shapes are identical.
    pub fn add(&self, other: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(other, ctx, S::add_rounded)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless both shapes are identical.
    pub fn subtract(&self, other: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(other, ctx, S::sub_rounded)
    }

    /// Matrix product `self x rhs`.
    ///
    /// Cell (r, c) accumulates `self[r, k] * rhs[k, c]` over `k`; every
    /// product and every partial sum is rounded.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `self.columns() != rhs.rows()`
    /// - `InvalidShape` if the product would be 1x1
    pub fn multiply(&self, rhs: &Self, ctx: &S::Context) -> NumericResult<Self> {
        if self.columns != rhs.rows {
            tracing::debug!(
                lhs_columns = self.columns,
                rhs_rows = rhs.rows,
                "matrix multiply rejected"
            );
            return Err(NumericError::DimensionMismatch {
                expected: vec![self.columns],
                found: vec![rhs.rows],
            });
        }
        tracing::trace!(
            rows = self.rows,
            inner = self.columns,
            columns = rhs.columns,
            "matrix multiply"
        );

        let mut data = Vec::with_capacity(self.rows * rhs.columns);
        for r in 0..self.rows {
            for c in 0..rhs.columns {
                let mut sum = S::ZERO;
                for k in 0..self.columns {
                    let product = self.at(r, k).mul_rounded(rhs.at(k, c), ctx)?;
                    sum = sum.add_rounded(product, ctx)?;
                }
                data.push(sum);
            }
        }
        Self::from_parts(self.rows, rhs.columns, data)
    }

    /// `self` multiplied by itself `power` times; `pow(1)` is `self`.
    ///
    /// # Errors
    /// `InvalidOperation` if the matrix is not square or `power == 0`.
    pub fn pow(&self, power: u32, ctx: &S::Context) -> NumericResult<Self> {
        if !self.is_square_matrix() {
            tracing::debug!(
                rows = self.rows,
                columns = self.columns,
                "matrix power rejected: not square"
            );
            return Err(NumericError::InvalidOperation(
                "matrix is not a square matrix",
            ));
        }
        if power == 0 {
            return Err(NumericError::InvalidOperation(
                "matrix power must be at least 1",
            ));
        }

        let mut result = self.clone();
        for step in 1..power {
            tracing::trace!(step, power, "matrix power step");
            result = self.multiply(&result, ctx)?;
        }
        Ok(result)
    }

    /// Determinant. Not implemented.
    ///
    /// # Errors
    /// Always returns `NotImplemented`.
    pub fn determinant(&self, _ctx: &S::Context) -> NumericResult<S> {
        tracing::debug!(rows = self.rows, columns = self.columns, "determinant requested");
        Err(NumericError::NotImplemented("matrix determinant"))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: Scalar> TryFrom<Vec<Vec<S>>> for Matrix<S> {
    type Error = NumericError;

    fn try_from(rows: Vec<Vec<S>>) -> NumericResult<Self> {
        Self::new(rows)
    }
}

impl<S: Scalar> From<Matrix<S>> for Vec<Vec<S>> {
    fn from(matrix: Matrix<S>) -> Self {
        matrix.to_rows()
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.data.chunks(self.columns).enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", cell)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

impl<S: Scalar> MathRender for Matrix<S> {
    fn to_latex(&self) -> String {
        let body = self
            .data
            .chunks(self.columns)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join(" & ")
            })
            .collect::<Vec<_>>()
            .join(" \\\\ ");
        format!("\\left[ \\begin{{align*}} {} \\end{{align*}} \\right]", body)
    }
}

/// Matrix with arbitrary-precision decimal cells
pub type DecimalMatrix = Matrix<Decimal>;

/// Matrix with machine-precision cells
pub type Matrix64 = Matrix<f64>;
