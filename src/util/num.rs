use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed};

/// Returns ten raised to the given power as a `BigInt`.
///
/// ## Parameters
/// - `exponent`: The non-negative power of ten.
///
/// ## Returns
/// `10^exponent` as an arbitrary-precision integer.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use numstep::util::num::pow10;
///
/// assert_eq!(pow10(3), BigInt::from(1000));
/// assert_eq!(pow10(0), BigInt::from(1));
/// ```
#[must_use]
pub fn pow10(exponent: u32) -> BigInt {
    Pow::pow(BigInt::from(10), exponent)
}

/// Divides two integers, rounding the quotient half away from zero.
///
/// This is the rounding mode shared by every fixed-scale decimal operation:
/// a remainder of at least half the divisor rounds the magnitude up, smaller
/// remainders round it down. The sign of the result follows the usual sign
/// rule for division.
///
/// ## Parameters
/// - `numerator`: The dividend.
/// - `denominator`: The divisor. Must not be zero.
///
/// ## Returns
/// The rounded quotient.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use numstep::util::num::div_half_up;
///
/// assert_eq!(div_half_up(&BigInt::from(5), &BigInt::from(2)), BigInt::from(3));
/// assert_eq!(div_half_up(&BigInt::from(-5), &BigInt::from(2)), BigInt::from(-3));
/// assert_eq!(div_half_up(&BigInt::from(4), &BigInt::from(3)), BigInt::from(1));
/// ```
#[must_use]
pub fn div_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let negative = numerator.is_negative() != denominator.is_negative();
    let dividend = numerator.abs();
    let divisor = denominator.abs();

    let (quotient, remainder) = dividend.div_rem(&divisor);
    let rounded = if remainder * BigInt::from(2) >= divisor {
        quotient + BigInt::one()
    } else {
        quotient
    };

    if negative { -rounded } else { rounded }
}
