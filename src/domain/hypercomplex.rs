// ============================================================================
// Hypercomplex Number
// Real coefficient plus any number of imaginary coefficients
// ============================================================================

use super::family::{Family, FamilyThresholds};
use super::vector::Vector;
use crate::interfaces::{latex_unit_label, unit_label, MathRender};
use crate::numeric::{NumericError, NumericResult, Scalar};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Imaginary coefficients; up to octonions are stored inline.
type Imaginary<S> = SmallVec<[S; 7]>;

/// Hypercomplex number `a0 + a1*i1 + a2*i2 + ... + an*in`.
///
/// One real coefficient plus an ordered list of imaginary coefficients
/// indexed from 0. Any index past the stored list reads as zero, so values
/// of different imaginary dimension interoperate by implicit zero-padding:
/// `3 + 0i` equals `3`, and `1 + 2i` orders before `1 + 2i + 1j`.
///
/// Values are immutable; every operation returns a new number. Arithmetic
/// takes the scalar's rounding context and rounds each resulting
/// coefficient individually.
///
/// # Example
/// ```
/// use hyperalgebra::prelude::*;
/// use rust_decimal::Decimal;
///
/// let mc = PrecisionConfig::DECIMAL64;
/// let a = DecimalHypercomplex::new(Decimal::from(1), [Decimal::from(2)]);
/// let b = DecimalHypercomplex::new(Decimal::from(3), [Decimal::ZERO, Decimal::from(4)]);
///
/// let sum = a.add(&b, &mc).unwrap();
/// assert_eq!(sum.imaginary_count(), 2);
/// assert_eq!(sum.to_string(), "4+2i+4j");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hypercomplex<S> {
    real: S,
    imag: Imaginary<S>,
}

impl<S: Scalar> Hypercomplex<S> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a real coefficient and imaginary coefficients.
    pub fn new<I>(real: S, imag: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            real,
            imag: imag.into_iter().collect(),
        }
    }

    /// Create a number with no imaginary coefficients.
    #[inline]
    pub fn from_real(real: S) -> Self {
        Self {
            real,
            imag: SmallVec::new(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_real(S::ZERO)
    }

    /// Create from a vector: index 0 is the real part, the rest imaginary.
    ///
    /// # Errors
    /// Returns `InvalidShape` for an empty vector.
    pub fn from_vector(vector: &Vector<S>) -> NumericResult<Self> {
        match vector.as_slice().split_first() {
            Some((real, imag)) => Ok(Self::new(*real, imag.iter().copied())),
            None => Err(NumericError::InvalidShape(
                "cannot build a hypercomplex number from an empty vector".to_string(),
            )),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn real(&self) -> S {
        self.real
    }

    /// Imaginary coefficient `n` (0-based); zero past the stored list.
    #[inline]
    pub fn imaginary(&self, n: usize) -> S {
        self.imag.get(n).copied().unwrap_or(S::ZERO)
    }

    /// Number of stored imaginary coefficients (trailing zeros included).
    #[inline]
    pub fn imaginary_count(&self) -> usize {
        self.imag.len()
    }

    /// Stored imaginary coefficients.
    #[inline]
    pub fn imaginary_parts(&self) -> &[S] {
        &self.imag
    }

    /// Real coefficient followed by the stored imaginary coefficients.
    pub fn coefficients(&self) -> impl Iterator<Item = S> + '_ {
        std::iter::once(self.real).chain(self.imag.iter().copied())
    }

    /// Vector of `1 + imaginary_count()` coordinates, real part first.
    pub fn to_vector(&self) -> Vector<S> {
        Vector::new(self.coefficients().collect())
    }

    // ========================================================================
    // Classification
    // ========================================================================

    fn no_imaginary_from(&self, start: usize) -> bool {
        self.imag.iter().skip(start).all(|c| c.is_zero())
    }

    /// Whether every imaginary coefficient from the family's threshold on is
    /// zero.
    #[inline]
    pub fn belongs_to(&self, family: Family, thresholds: &FamilyThresholds) -> bool {
        self.no_imaginary_from(thresholds.zero_from(family))
    }

    /// Narrowest family containing this value, or `None` past sedenions.
    pub fn family_with(&self, thresholds: &FamilyThresholds) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|family| self.belongs_to(*family, thresholds))
    }

    /// Narrowest family under `FamilyThresholds::REFERENCE`.
    pub fn family(&self) -> Option<Family> {
        self.family_with(&FamilyThresholds::REFERENCE)
    }

    pub fn is_real_number(&self) -> bool {
        self.belongs_to(Family::Real, &FamilyThresholds::REFERENCE)
    }

    pub fn is_complex_number(&self) -> bool {
        self.belongs_to(Family::Complex, &FamilyThresholds::REFERENCE)
    }

    pub fn is_quaternion(&self) -> bool {
        self.belongs_to(Family::Quaternion, &FamilyThresholds::REFERENCE)
    }

    pub fn is_octonion(&self) -> bool {
        self.belongs_to(Family::Octonion, &FamilyThresholds::REFERENCE)
    }

    pub fn is_sedenion(&self) -> bool {
        self.belongs_to(Family::Sedenion, &FamilyThresholds::REFERENCE)
    }

    /// Real number whose real part rounds to an integral value.
    ///
    /// Any rounding failure counts as not integral: `PrecisionLoss` under
    /// `RoundingMode::Unnecessary` on a value with too many digits, and also
    /// `Overflow`, although rounding a valid decimal never overflows.
    pub fn is_integer(&self, ctx: &S::Context) -> bool {
        match self.real.round_to(ctx) {
            Ok(rounded) => rounded.is_integral() && self.is_real_number(),
            Err(_) => false,
        }
    }

    /// Integer with a strictly positive real part.
    pub fn is_natural_number(&self, ctx: &S::Context) -> bool {
        self.is_integer(ctx) && self.real > S::ZERO
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Coefficient-wise combination over `max(dimension)` coefficients.
    fn zip_with<F>(&self, rhs: &Self, ctx: &S::Context, op: F) -> NumericResult<Self>
    where
        F: Fn(S, S, &S::Context) -> NumericResult<S>,
    {
        let count = self.imag.len().max(rhs.imag.len());
        let real = op(self.real, rhs.real, ctx)?;
        let imag = (0..count)
            .map(|i| op(self.imaginary(i), rhs.imaginary(i), ctx))
            .collect::<NumericResult<Imaginary<S>>>()?;
        Ok(Self { real, imag })
    }

    /// Sum; the result has `max` of both imaginary dimensions.
    pub fn add(&self, augend: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(augend, ctx, S::add_rounded)
    }

    /// Difference; the result has `max` of both imaginary dimensions.
    pub fn subtract(&self, subtrahend: &Self, ctx: &S::Context) -> NumericResult<Self> {
        self.zip_with(subtrahend, ctx, S::sub_rounded)
    }

    /// Real part rounded, every imaginary coefficient negated and rounded.
    pub fn conjugate(&self, ctx: &S::Context) -> NumericResult<Self> {
        let real = self.real.round_to(ctx)?;
        let imag = self
            .imag
            .iter()
            .map(|c| c.negate().round_to(ctx))
            .collect::<NumericResult<Imaginary<S>>>()?;
        Ok(Self { real, imag })
    }

    /// Euclidean norm: square root of the sum of squared coefficients.
    ///
    /// Each coefficient is rounded, squared under rounding and accumulated
    /// under rounding before the root is taken. If the squares leave the
    /// scalar's range, the coefficients are first divided by the largest
    /// absolute coefficient and the norm is multiplied back afterwards.
    pub fn magnitude(&self, ctx: &S::Context) -> NumericResult<S> {
        match self.sum_of_squares(None, ctx) {
            Ok(sum) => sum.real_root(2, ctx),
            Err(NumericError::Overflow) => self.scaled_magnitude(ctx),
            Err(e) => Err(e),
        }
    }

    fn sum_of_squares(&self, divisor: Option<S>, ctx: &S::Context) -> NumericResult<S> {
        let mut sum = S::ZERO;
        for coefficient in self.coefficients() {
            let mut c = coefficient.round_to(ctx)?;
            if let Some(divisor) = divisor {
                c = c.div_rounded(divisor, ctx)?;
            }
            sum = sum.add_rounded(c.mul_rounded(c, ctx)?, ctx)?;
        }
        Ok(sum)
    }

    fn scaled_magnitude(&self, ctx: &S::Context) -> NumericResult<S> {
        let mut largest = S::ZERO;
        for coefficient in self.coefficients() {
            let c = coefficient.round_to(ctx)?.absolute();
            if c > largest {
                largest = c;
            }
        }
        tracing::debug!(%largest, "magnitude overflowed, rescaling");

        let unit = self.sum_of_squares(Some(largest), ctx)?.real_root(2, ctx)?;
        unit.mul_rounded(largest, ctx)
    }

    /// Principal n-th root of a complex-family number via polar form.
    ///
    /// The angle `atan2(imag, real)` is divided by `n` and the magnitude
    /// replaced by its real n-th root. Trigonometry runs in `f64`.
    ///
    /// # Errors
    /// - `InvalidOperation` if the number has a nonzero coefficient past
    ///   the first imaginary unit, or `n == 0`
    pub fn root(&self, n: u32, ctx: &S::Context) -> NumericResult<Self> {
        if !self.is_complex_number() {
            tracing::debug!(dimension = self.imag.len(), "root rejected: not a complex number");
            return Err(NumericError::InvalidOperation(
                "cannot compute root of non-complex number",
            ));
        }
        if n == 0 {
            return Err(NumericError::InvalidOperation("zeroth root is undefined"));
        }

        let angle = self
            .imaginary(0)
            .approx_f64()
            .atan2(self.real.approx_f64())
            / f64::from(n);
        let magnitude = self.magnitude(ctx)?.real_root(n, ctx)?;

        let real = S::from_approx_f64(angle.cos(), ctx)?.mul_rounded(magnitude, ctx)?;
        let imag = S::from_approx_f64(angle.sin(), ctx)?.mul_rounded(magnitude, ctx)?;
        Ok(Self::new(real, [imag]))
    }

    #[inline]
    pub fn sqrt(&self, ctx: &S::Context) -> NumericResult<Self> {
        self.root(2, ctx)
    }

    #[inline]
    pub fn cbrt(&self, ctx: &S::Context) -> NumericResult<Self> {
        self.root(3, ctx)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Lexicographic comparison: real part, then imaginary coefficients by
    /// ascending index with zero-padding.
    fn compare_by<F>(&self, other: &Self, mut cmp: F) -> Option<Ordering>
    where
        F: FnMut(&S, &S) -> Option<Ordering>,
    {
        match cmp(&self.real, &other.real)? {
            Ordering::Equal => {},
            ord => return Some(ord),
        }
        for i in 0..self.imag.len().max(other.imag.len()) {
            match cmp(&self.imaginary(i), &other.imaginary(i))? {
                Ordering::Equal => {},
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }

    /// Stored coefficients without trailing zeros.
    fn significant_imaginary(&self) -> &[S] {
        let len = self
            .imag
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |last| last + 1);
        &self.imag[..len]
    }

    fn render<F>(&self, f: &mut fmt::Formatter<'_>, label: F) -> fmt::Result
    where
        F: Fn(usize) -> String,
    {
        if self.is_real_number() {
            return write!(f, "{}", self.real);
        }

        let mut first = true;
        if !self.real.is_zero() {
            write!(f, "{}", self.real)?;
            first = false;
        }
        for (i, c) in self.imag.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first && *c > S::ZERO {
                f.write_str("+")?;
            }
            write!(f, "{}{}", c, label(i))?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: Scalar> Default for Hypercomplex<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<S> for Hypercomplex<S> {
    fn from(real: S) -> Self {
        Self::from_real(real)
    }
}

impl<S: Scalar> TryFrom<&Vector<S>> for Hypercomplex<S> {
    type Error = NumericError;

    fn try_from(vector: &Vector<S>) -> NumericResult<Self> {
        Self::from_vector(vector)
    }
}

impl<S: Scalar> PartialEq for Hypercomplex<S> {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real
            && (0..self.imag.len().max(other.imag.len()))
                .all(|i| self.imaginary(i) == other.imaginary(i))
    }
}

impl<S: Scalar + Eq> Eq for Hypercomplex<S> {}

impl<S: Scalar> PartialOrd for Hypercomplex<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_by(other, |a, b| a.partial_cmp(b))
    }
}

impl<S: Scalar + Ord> Ord for Hypercomplex<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_by(other, |a, b| Some(a.cmp(b)))
            .unwrap_or(Ordering::Equal)
    }
}

// Trailing zeros are skipped so that zero-padded equal values hash equally.
impl<S: Scalar + Hash> Hash for Hypercomplex<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.real.hash(state);
        self.significant_imaginary().hash(state);
    }
}

impl<S: Scalar> fmt::Display for Hypercomplex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, unit_label)
    }
}

impl<S: Scalar> MathRender for Hypercomplex<S> {
    fn to_latex(&self) -> String {
        struct Latex<'a, S>(&'a Hypercomplex<S>);

        impl<S: Scalar> fmt::Display for Latex<'_, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.render(f, latex_unit_label)
            }
        }

        Latex(self).to_string()
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Hypercomplex number with arbitrary-precision decimal coefficients
pub type DecimalHypercomplex = Hypercomplex<Decimal>;

/// Hypercomplex number with machine-precision coefficients
pub type Hypercomplex64 = Hypercomplex<f64>;

// ============================================================================
// Tests
// ============================================================================
