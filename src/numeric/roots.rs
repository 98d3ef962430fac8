// ============================================================================
// Real Roots
// n-th real root extraction for both scalar backends
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::precision::PrecisionConfig;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Upper bound on Newton steps; convergence from an f64 seed takes a handful.
const MAX_ITERATIONS: usize = 64;

/// Real n-th root of a decimal, every Newton step rounded under `mc`.
///
/// Iterates `x <- ((n-1)x + v / x^(n-1)) / n` from the `f64` estimate until
/// an iterate repeats. Rounding can make the sequence alternate between two
/// neighbours, so a repeat of the iterate before last also ends the loop.
///
/// # Errors
/// - `InvalidOperation` for `n == 0`, or an even root of a negative value
/// - `Overflow` if an intermediate power leaves the decimal range
pub fn decimal_real_root(value: Decimal, n: u32, mc: &PrecisionConfig) -> NumericResult<Decimal> {
    if n == 0 {
        return Err(NumericError::InvalidOperation("zeroth root is undefined"));
    }

    let value = mc.round(value)?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        if n % 2 == 0 {
            return Err(NumericError::InvalidOperation(
                "even root of a negative number",
            ));
        }
        return decimal_real_root(-value, n, mc).map(|root| -root);
    }
    if n == 1 {
        return Ok(value);
    }

    let degree = Decimal::from(n);
    let lower = Decimal::from(n - 1);

    let estimate = value.to_f64().unwrap_or(1.0).powf(1.0 / f64::from(n));
    let mut x = match Decimal::from_f64(estimate) {
        Some(seed) if !seed.is_zero() => mc.round(seed)?,
        _ => Decimal::ONE,
    };
    let mut previous = None;

    for _ in 0..MAX_ITERATIONS {
        let power = powi_rounded(x, n - 1, mc)?;
        let quotient = value.checked_div(power).ok_or(if power.is_zero() {
            NumericError::DivisionByZero
        } else {
            NumericError::Overflow
        })?;
        let quotient = mc.round(quotient)?;

        let scaled = mc.round(lower.checked_mul(x).ok_or(NumericError::Overflow)?)?;
        let numerator = mc.round(scaled.checked_add(quotient).ok_or(NumericError::Overflow)?)?;
        let next = mc.round(numerator.checked_div(degree).ok_or(NumericError::Overflow)?)?;

        if next == x || previous == Some(next) {
            x = next;
            break;
        }
        previous = Some(x);
        x = next;
    }

    tracing::trace!(%value, n, root = %x, "decimal real root");
    Ok(x)
}

/// `base^exponent` by repeated multiplication, each product rounded.
fn powi_rounded(base: Decimal, exponent: u32, mc: &PrecisionConfig) -> NumericResult<Decimal> {
    let mut result = Decimal::ONE;
    for _ in 0..exponent {
        result = mc.round(result.checked_mul(base).ok_or(NumericError::Overflow)?)?;
    }
    Ok(result)
}

/// Real n-th root of an `f64`.
///
/// # Errors
/// `InvalidOperation` for `n == 0`, or an even root of a negative value.
pub fn f64_real_root(value: f64, n: u32) -> NumericResult<f64> {
    if n == 0 {
        return Err(NumericError::InvalidOperation("zeroth root is undefined"));
    }
    if value < 0.0 && n % 2 == 0 {
        return Err(NumericError::InvalidOperation(
            "even root of a negative number",
        ));
    }

    let root = match n {
        1 => value,
        2 => value.sqrt(),
        3 => value.cbrt(),
        _ if value < 0.0 => -(-value).powf(1.0 / f64::from(n)),
        _ => value.powf(1.0 / f64::from(n)),
    };
    Ok(root)
}
