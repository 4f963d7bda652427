use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    number::{core::InvalidNumber, fraction::Fraction},
    util::num::{div_half_up, pow10},
};

/// The number of fractional digits carried by every real value.
pub const SCALE: u32 = 15;

/// Represents a decimal number at the fixed scale of the tower.
///
/// The value is stored as an integer count of `10^-15` units, so arithmetic
/// never touches floating-point hardware. Additions are exact; products and
/// quotients are rounded half away from zero back to the scale, the single
/// rounding mode shared by every conversion into this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Real {
    units: BigInt,
}

impl Real {
    fn scale_units() -> BigInt {
        pow10(SCALE)
    }

    /// The real number `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self { units: BigInt::zero() }
    }

    /// The real number `1`.
    #[must_use]
    pub fn one() -> Self {
        Self { units: Self::scale_units() }
    }

    /// The real number `10`.
    #[must_use]
    pub fn ten() -> Self {
        Self { units: pow10(SCALE + 1) }
    }

    /// Converts an integer to a real value, exactly.
    #[must_use]
    pub fn from_integer(value: &BigInt) -> Self {
        Self { units: value * Self::scale_units() }
    }

    /// Converts an integer ratio to a real value by division at the fixed
    /// scale, rounding half away from zero. The denominator must not be
    /// zero.
    #[must_use]
    pub fn from_ratio(numerator: &BigInt, denominator: &BigInt) -> Self {
        Self { units: div_half_up(&(numerator * Self::scale_units()), denominator) }
    }

    /// Converts a fraction to a real value by division at the fixed scale.
    #[must_use]
    pub fn from_fraction(value: &Fraction) -> Self {
        Self::from_ratio(value.numerator(), value.denominator())
    }

    /// Converts a finite `f64` through its shortest decimal rendering, the
    /// same digits `Display` would print for it.
    pub(crate) fn from_f64(value: f64) -> Self {
        match format!("{value}").parse() {
            Ok(real) => real,
            Err(InvalidNumber) => unreachable!("a finite f64 renders as a plain decimal"),
        }
    }

    /// Returns the integer part of this value, truncating toward zero.
    #[must_use]
    pub fn to_integer(&self) -> BigInt {
        &self.units / Self::scale_units()
    }

    /// Returns this value as a fraction scaled by `10^15`, in lowest terms.
    #[must_use]
    pub fn to_fraction(&self) -> Fraction {
        Fraction::reduced(self.units.clone(), Self::scale_units())
    }

    /// Returns this value as an `f64` approximation. Intended for the
    /// bounded mantissa of the logarithm machinery, where the error is
    /// confined to a single digit of magnitude.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.units.to_f64().unwrap_or(f64::INFINITY) / 1e15
    }

    /// Returns `true` if all fractional digits of this value are zero.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        (&self.units % Self::scale_units()).is_zero()
    }

    /// Returns `true` if this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Returns `true` if this value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.units.is_positive()
    }

    /// Returns `true` if this value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.units.is_negative()
    }

    /// Returns a real whose value is `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { units: -&self.units }
    }

    /// Returns the exact sum of this value and another.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self { units: &self.units + &other.units }
    }

    /// Returns the exact difference of this value and another.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self { units: &self.units - &other.units }
    }

    /// Returns the product of this value and another, rounded half away
    /// from zero back to the fixed scale.
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        Self { units: div_half_up(&(&self.units * &other.units), &Self::scale_units()) }
    }

    /// Returns the quotient of this value and another at the fixed scale,
    /// rounded half away from zero. Callers must check the divisor against
    /// zero first.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        Self { units: div_half_up(&(&self.units * Self::scale_units()), &other.units) }
    }

    /// Divides this value by ten at the fixed scale, rounding half away
    /// from zero.
    pub(crate) fn shift_down(&self) -> Self {
        Self { units: div_half_up(&self.units, &BigInt::from(10)) }
    }

    /// Multiplies this value by ten, exactly.
    pub(crate) fn shift_up(&self) -> Self {
        Self { units: &self.units * BigInt::from(10) }
    }

    /// Returns the square root of this value at the fixed scale, rounded to
    /// the nearest unit. The value must not be negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let target = &self.units * Self::scale_units();
        let floor = target.sqrt();
        let ceiling = &floor + BigInt::one();
        let below = &target - &floor * &floor;
        let above = &ceiling * &ceiling - &target;

        Self { units: if above <= below { ceiling } else { floor } }
    }
}

impl FromStr for Real {
    type Err = InvalidNumber;

    /// Parses decimal notation: an optional sign, digits with an optional
    /// fractional part (or a fractional part alone), and an optional
    /// power-of-ten exponent. Fractional digits beyond the fixed scale are
    /// rounded half away from zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                (mantissa, exponent.parse::<i32>().map_err(|_| InvalidNumber)?)
            },
            None => (rest, 0),
        };

        let (int_digits, frac_digits) = match mantissa.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, frac_digits),
            None => (mantissa, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(InvalidNumber);
        }
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
           || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidNumber);
        }

        let digits = format!("{int_digits}{frac_digits}");
        let unscaled: BigInt = digits.parse().map_err(|_| InvalidNumber)?;

        let shift = i64::from(SCALE) - frac_digits.len() as i64 + i64::from(exponent);
        let magnitude = if shift >= 0 {
            unscaled * pow10(u32::try_from(shift).map_err(|_| InvalidNumber)?)
        } else {
            div_half_up(&unscaled,
                        &pow10(u32::try_from(-shift).map_err(|_| InvalidNumber)?))
        };

        Ok(Self { units: if negative { -magnitude } else { magnitude } })
    }
}

impl std::fmt::Display for Real {
    /// Renders the value at the fixed scale with trailing fractional zeros
    /// stripped; integral values print as plain digits, never in exponent
    /// notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (int_part, frac_part) = self.units.abs().div_rem(&Self::scale_units());

        let digits = frac_part.to_string();
        let mut fraction = "0".repeat(SCALE as usize - digits.len());
        fraction.push_str(&digits);
        let fraction = fraction.trim_end_matches('0');

        if self.units.is_negative() {
            write!(f, "-")?;
        }
        if fraction.is_empty() {
            write!(f, "{int_part}")
        } else {
            write!(f, "{int_part}.{fraction}")
        }
    }
}
