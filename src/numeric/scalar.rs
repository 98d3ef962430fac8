// ============================================================================
// Scalar Capability
// Rounding-aware arithmetic shared by the decimal and machine-precision types
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::precision::PrecisionConfig;
use super::roots;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

/// Numeric capability every coefficient type must provide.
///
/// All hypercomplex, vector and matrix algorithms are written once against
/// this trait. Each operation receives the scalar's `Context`, which carries
/// the rounding policy applied after the step:
///
/// | Scalar    | Context           | Rounding                              |
/// |-----------|-------------------|---------------------------------------|
/// | `Decimal` | `PrecisionConfig` | significant digits + rounding mode    |
/// | `f64`     | `()`              | native IEEE-754 semantics             |
pub trait Scalar:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Rounding configuration consumed by every operation.
    type Context: fmt::Debug + Send + Sync;

    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Apply the context's rounding to a single value.
    fn round_to(self, ctx: &Self::Context) -> NumericResult<Self>;

    /// `self + rhs`, rounded.
    fn add_rounded(self, rhs: Self, ctx: &Self::Context) -> NumericResult<Self>;

    /// `self - rhs`, rounded.
    fn sub_rounded(self, rhs: Self, ctx: &Self::Context) -> NumericResult<Self>;

    /// `self * rhs`, rounded.
    fn mul_rounded(self, rhs: Self, ctx: &Self::Context) -> NumericResult<Self>;

    /// `self / rhs`, rounded.
    fn div_rounded(self, rhs: Self, ctx: &Self::Context) -> NumericResult<Self>;

    /// Exact negation.
    fn negate(self) -> Self;

    /// Exact absolute value.
    fn absolute(self) -> Self;

    fn is_zero(&self) -> bool;

    /// True when the value has no fractional part.
    fn is_integral(&self) -> bool;

    /// Real (non-complex) n-th root, rounded.
    fn real_root(self, n: u32, ctx: &Self::Context) -> NumericResult<Self>;

    /// Nearest `f64`, used for trigonometry in polar decomposition.
    fn approx_f64(self) -> f64;

    /// Convert an `f64` into this scalar, rounded.
    fn from_approx_f64(value: f64, ctx: &Self::Context) -> NumericResult<Self>;
}

// ============================================================================
// Decimal (arbitrary precision)
// ============================================================================

impl Scalar for Decimal {
    type Context = PrecisionConfig;

    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;

    #[inline]
    fn round_to(self, ctx: &PrecisionConfig) -> NumericResult<Self> {
        ctx.round(self)
    }

    #[inline]
    fn add_rounded(self, rhs: Self, ctx: &PrecisionConfig) -> NumericResult<Self> {
        let sum = self.checked_add(rhs).ok_or(NumericError::Overflow)?;
        ctx.round(sum)
    }

    #[inline]
    fn sub_rounded(self, rhs: Self, ctx: &PrecisionConfig) -> NumericResult<Self> {
        let difference = self.checked_sub(rhs).ok_or(NumericError::Overflow)?;
        ctx.round(difference)
    }

    #[inline]
    fn mul_rounded(self, rhs: Self, ctx: &PrecisionConfig) -> NumericResult<Self> {
        let product = self.checked_mul(rhs).ok_or(NumericError::Overflow)?;
        ctx.round(product)
    }

    fn div_rounded(self, rhs: Self, ctx: &PrecisionConfig) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = self.checked_div(rhs).ok_or(NumericError::Overflow)?;
        ctx.round(quotient)
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }

    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Decimal::ZERO
    }

    #[inline]
    fn is_integral(&self) -> bool {
        self.fract() == Decimal::ZERO
    }

    fn real_root(self, n: u32, ctx: &PrecisionConfig) -> NumericResult<Self> {
        roots::decimal_real_root(self, n, ctx)
    }

    #[inline]
    fn approx_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn from_approx_f64(value: f64, ctx: &PrecisionConfig) -> NumericResult<Self> {
        let converted = <Decimal as FromPrimitive>::from_f64(value)
            .ok_or(NumericError::InvalidInput("value is not a finite decimal"))?;
        ctx.round(converted)
    }
}

// ============================================================================
// f64 (machine precision)
// ============================================================================

impl Scalar for f64 {
    type Context = ();

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn round_to(self, _ctx: &()) -> NumericResult<Self> {
        Ok(self)
    }

    #[inline]
    fn add_rounded(self, rhs: Self, _ctx: &()) -> NumericResult<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn sub_rounded(self, rhs: Self, _ctx: &()) -> NumericResult<Self> {
        Ok(self - rhs)
    }

    #[inline]
    fn mul_rounded(self, rhs: Self, _ctx: &()) -> NumericResult<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn div_rounded(self, rhs: Self, _ctx: &()) -> NumericResult<Self> {
        Ok(self / rhs)
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }

    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    #[inline]
    fn is_integral(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }

    fn real_root(self, n: u32, _ctx: &()) -> NumericResult<Self> {
        roots::f64_real_root(self, n)
    }

    #[inline]
    fn approx_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_approx_f64(value: f64, _ctx: &()) -> NumericResult<Self> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RoundingMode;

    fn three_digits() -> PrecisionConfig {
        PrecisionConfig::new(3, RoundingMode::HalfUp).unwrap()
    }

    #[test]
    fn test_decimal_constants() {
        assert_eq!(<Decimal as Scalar>::ZERO, Decimal::ZERO);
        assert_eq!(<Decimal as Scalar>::ONE, Decimal::ONE);
    }

    #[test]
    fn test_decimal_add_rounds_result() {
        let mc = three_digits();
        // 1.23 + 0.005 = 1.235 -> 1.24
        let sum = Decimal::new(123, 2)
            .add_rounded(Decimal::new(5, 3), &mc)
            .unwrap();
        assert_eq!(sum, Decimal::new(124, 2));
    }

    #[test]
    fn test_decimal_mul_rounds_result() {
        let mc = three_digits();
        // 1.11 * 1.11 = 1.2321 -> 1.23
        let product = Decimal::new(111, 2)
            .mul_rounded(Decimal::new(111, 2), &mc)
            .unwrap();
        assert_eq!(product, Decimal::new(123, 2));
    }

    #[test]
    fn test_decimal_div_rounds_result() {
        let mc = three_digits();
        let quotient = Decimal::ONE.div_rounded(Decimal::from(3), &mc).unwrap();
        assert_eq!(quotient, Decimal::new(333, 3));
        assert_eq!(
            Decimal::ONE.div_rounded(Decimal::ZERO, &mc),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(Decimal::new(-25, 1).absolute(), Decimal::new(25, 1));
    }

    #[test]
    fn test_decimal_overflow() {
        let result = Decimal::MAX.add_rounded(Decimal::MAX, &PrecisionConfig::MAXIMUM);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_decimal_integral() {
        assert!(Decimal::from(7).is_integral());
        assert!(Decimal::new(70, 1).is_integral());
        assert!(!Decimal::new(75, 1).is_integral());
    }

    #[test]
    fn test_decimal_f64_conversion() {
        let mc = three_digits();
        let value = Decimal::from_approx_f64(0.5, &mc).unwrap();
        assert_eq!(value, Decimal::new(5, 1));
        assert_eq!(value.approx_f64(), 0.5);
        assert!(matches!(
            Decimal::from_approx_f64(f64::NAN, &mc),
            Err(NumericError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_f64_operations() {
        assert_eq!(1.5f64.add_rounded(2.0, &()).unwrap(), 3.5);
        assert_eq!(1.5f64.sub_rounded(2.0, &()).unwrap(), -0.5);
        assert_eq!(1.5f64.mul_rounded(2.0, &()).unwrap(), 3.0);
        assert_eq!(3.0f64.div_rounded(2.0, &()).unwrap(), 1.5);
        assert_eq!(1.5f64.negate(), -1.5);
        assert_eq!((-1.5f64).absolute(), 1.5);
        assert!(Scalar::is_zero(&0.0f64));
        assert!(Scalar::is_zero(&-0.0f64));
    }

    #[test]
    fn test_f64_integral() {
        assert!(3.0f64.is_integral());
        assert!(!3.5f64.is_integral());
        assert!(!f64::INFINITY.is_integral());
        assert!(!f64::NAN.is_integral());
    }
}
