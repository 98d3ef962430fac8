// ============================================================================
// Precision Configuration
// Significant-digit precision and rounding policy for decimal arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of significant digits a `Decimal` can hold.
pub const MAX_PRECISION: u32 = 28;

// ============================================================================
// Rounding Mode
// ============================================================================

/// Decimal rounding policy applied after every arithmetic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven,
    /// Exact results only: any rounding fails with `PrecisionLoss`
    Unnecessary,
}

impl RoundingMode {
    /// The `rust_decimal` strategy backing this mode.
    ///
    /// `Unnecessary` maps to truncation; the caller compares against the
    /// unrounded value to detect a change.
    #[inline]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down | RoundingMode::Unnecessary => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

// ============================================================================
// Precision Configuration
// ============================================================================

/// Immutable (digits, rounding-mode) pair governing every decimal operation.
///
/// The configuration is always passed explicitly; there is no global or
/// thread-local default in effect.
///
/// # Example
/// ```
/// use hyperalgebra::numeric::{PrecisionConfig, RoundingMode};
/// use rust_decimal::Decimal;
///
/// let mc = PrecisionConfig::new(3, RoundingMode::HalfUp).unwrap();
/// assert_eq!(mc.round(Decimal::new(12345, 3)).unwrap(), Decimal::new(123, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPrecisionConfig"))]
pub struct PrecisionConfig {
    /// Number of significant digits kept after each step (1..=28)
    precision: u32,

    /// Policy used to discard the remaining digits
    rounding: RoundingMode,
}

impl PrecisionConfig {
    /// 7 significant digits, half-even rounding
    pub const DECIMAL32: Self = Self {
        precision: 7,
        rounding: RoundingMode::HalfEven,
    };

    /// 16 significant digits, half-even rounding
    pub const DECIMAL64: Self = Self {
        precision: 16,
        rounding: RoundingMode::HalfEven,
    };

    /// Every digit the decimal backend can hold, half-even rounding
    pub const MAXIMUM: Self = Self {
        precision: MAX_PRECISION,
        rounding: RoundingMode::HalfEven,
    };

    /// Create a validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `precision` is zero or exceeds 28 digits.
    pub fn new(precision: u32, rounding: RoundingMode) -> NumericResult<Self> {
        let config = Self {
            precision,
            rounding,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder method: Set the number of significant digits
    pub fn with_precision(self, precision: u32) -> NumericResult<Self> {
        Self::new(precision, self.rounding)
    }

    /// Builder method: Set the rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.precision == 0 {
            return Err(NumericError::InvalidInput("precision must be positive"));
        }
        if self.precision > MAX_PRECISION {
            return Err(NumericError::InvalidInput(
                "precision exceeds 28 significant digits",
            ));
        }
        Ok(())
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Round `value` to the configured number of significant digits.
    ///
    /// The result is normalized: trailing zeros are stripped, so a value
    /// that already fits is returned unchanged in value and `scale() <= 28`
    /// always holds.
    ///
    /// # Errors
    /// - `PrecisionLoss` under `RoundingMode::Unnecessary` when digits would be dropped
    /// - `Overflow` if rounding the integral part leaves the decimal range
    pub fn round(&self, value: Decimal) -> NumericResult<Decimal> {
        let value = value.normalize();
        if significant_digits(value) <= self.precision {
            return Ok(value);
        }

        let rounded = value
            .round_sf_with_strategy(self.precision, self.rounding.strategy())
            .ok_or(NumericError::Overflow)?
            .normalize();

        if self.rounding == RoundingMode::Unnecessary && rounded != value {
            return Err(NumericError::PrecisionLoss);
        }

        Ok(rounded)
    }
}

/// Digits of the mantissa of a normalized decimal; zero has none.
fn significant_digits(value: Decimal) -> u32 {
    value
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |log| log + 1)
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self::DECIMAL64
    }
}

/// Unvalidated wire form; deserialization goes through `PrecisionConfig::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPrecisionConfig {
    precision: u32,
    rounding: RoundingMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrecisionConfig> for PrecisionConfig {
    type Error = NumericError;

    fn try_from(raw: RawPrecisionConfig) -> NumericResult<Self> {
        Self::new(raw.precision, raw.rounding)
    }
}
