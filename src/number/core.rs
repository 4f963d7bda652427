use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::{
    error::{Comparison, EvalError},
    number::{fraction::Fraction, real::Real},
    tree::evaluator::EvalResult,
    util::num::pow10,
};

/// Raised when a string is not a literal of the numeric tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNumber;

impl std::fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a valid number literal.")
    }
}

impl std::error::Error for InvalidNumber {}

/// Represents a value of the numeric tower.
///
/// The tower has three rungs: exact arbitrary-precision integers, exact
/// rationals in lowest terms, and decimals at the fixed scale of fifteen
/// fractional digits. Mixed-variant arithmetic promotes symmetrically:
/// integer with integer stays integer, anything with a real is computed in
/// real space, and the remaining combinations are computed in rational
/// space. Every arithmetic result that is exactly an integer is demoted to
/// the `Integer` variant before it is returned, so the tower always yields
/// the simplest exact representation.
///
/// Equality is variant-sensitive: `0.5` and `1/2` denote the same point on
/// the number line but are distinct values of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    /// An exact arbitrary-precision integer.
    Integer(BigInt),
    /// An exact rational number in lowest terms.
    Rational(Fraction),
    /// A decimal at the fixed scale of the tower.
    Real(Real),
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<Fraction> for Number {
    fn from(value: Fraction) -> Self {
        Self::Rational(value)
    }
}

impl From<Real> for Number {
    fn from(value: Real) -> Self {
        Self::Real(value)
    }
}

impl Number {
    /// The integer `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::Integer(BigInt::zero())
    }

    /// The integer `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::Integer(BigInt::one())
    }

    /// Returns the representation of this number as an integer, truncating
    /// toward zero where the value has a fractional part.
    #[must_use]
    pub fn to_integer(&self) -> BigInt {
        match self {
            Self::Integer(value) => value.clone(),
            Self::Rational(fraction) => fraction.numerator() / fraction.denominator(),
            Self::Real(real) => real.to_integer(),
        }
    }

    /// Returns the representation of this number as a fraction in lowest
    /// terms.
    #[must_use]
    pub fn to_fraction(&self) -> Fraction {
        match self {
            Self::Integer(value) => Fraction::reduced(value.clone(), BigInt::one()),
            Self::Rational(fraction) => fraction.clone(),
            Self::Real(real) => real.to_fraction(),
        }
    }

    /// Returns the representation of this number as a real at the fixed
    /// scale.
    #[must_use]
    pub fn to_real(&self) -> Real {
        match self {
            Self::Integer(value) => Real::from_integer(value),
            Self::Rational(fraction) => Real::from_fraction(fraction),
            Self::Real(real) => real.clone(),
        }
    }

    /// Returns `true` if this number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(value) => value.is_zero(),
            Self::Rational(fraction) => fraction.is_zero(),
            Self::Real(real) => real.is_zero(),
        }
    }

    /// Returns `true` if this number is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(value) => value.is_negative(),
            Self::Rational(fraction) => fraction.numerator().is_negative(),
            Self::Real(real) => real.is_negative(),
        }
    }

    /// Demotes an exactly integral real to the `Integer` variant.
    fn normalized_real(real: Real) -> Self {
        if real.is_integral() {
            Self::Integer(real.to_integer())
        } else {
            Self::Real(real)
        }
    }

    /// Demotes a fraction with denominator one to the `Integer` variant.
    fn normalized_fraction(fraction: Fraction) -> Self {
        if fraction.denominator().is_one() {
            Self::Integer(fraction.numerator().clone())
        } else {
            Self::Rational(fraction)
        }
    }

    /// Returns a number whose value is `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Integer(value) => Self::Integer(-value),
            Self::Rational(fraction) => Self::Rational(fraction.negate()),
            Self::Real(real) => Self::Real(real.negate()),
        }
    }

    /// Returns the sum of this number and another.
    ///
    /// Integer with integer stays in integer space; either operand real is
    /// computed in real space; the remaining combinations in rational
    /// space. Exactly integral results are demoted.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// let half: Number = "1/2".parse().unwrap();
    /// assert_eq!(half.plus(&half), Number::from(1));
    /// ```
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a + b),
            (Self::Real(_), _) | (_, Self::Real(_)) => {
                Self::normalized_real(self.to_real().plus(&other.to_real()))
            },
            (Self::Integer(a), Self::Rational(f)) | (Self::Rational(f), Self::Integer(a)) => {
                Self::normalized_fraction(f.plus_integer(a))
            },
            (Self::Rational(a), Self::Rational(b)) => Self::normalized_fraction(a.plus(b)),
        }
    }

    /// Returns the difference of this number and another, under the same
    /// promotion rules as [`Number::plus`].
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a - b),
            (Self::Real(_), _) | (_, Self::Real(_)) => {
                Self::normalized_real(self.to_real().minus(&other.to_real()))
            },
            (Self::Integer(a), Self::Rational(f)) => {
                Self::normalized_fraction(f.negate().plus_integer(a))
            },
            (Self::Rational(f), Self::Integer(b)) => {
                Self::normalized_fraction(f.plus_integer(&-b))
            },
            (Self::Rational(a), Self::Rational(b)) => {
                Self::normalized_fraction(a.plus(&b.negate()))
            },
        }
    }

    /// Returns the product of this number and another, under the same
    /// promotion rules as [`Number::plus`].
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a * b),
            (Self::Real(_), _) | (_, Self::Real(_)) => {
                Self::normalized_real(self.to_real().times(&other.to_real()))
            },
            (Self::Integer(a), Self::Rational(f)) | (Self::Rational(f), Self::Integer(a)) => {
                Self::normalized_fraction(f.times_integer(a))
            },
            (Self::Rational(a), Self::Rational(b)) => Self::normalized_fraction(a.times(b)),
        }
    }

    /// Returns the quotient of this number and another.
    ///
    /// Integer divided by integer yields a reduced rational (demoted when
    /// the denominator reduces to one); either operand real is computed in
    /// real space at the fixed scale; the remaining combinations in
    /// rational space.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` if the divisor is zero, in every
    /// variant combination; the check precedes the division.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// let six = Number::from(6);
    /// assert_eq!(six.divide(&Number::from(3)).unwrap(), Number::from(2));
    /// assert_eq!(Number::one().divide(&Number::from(3)).unwrap().to_string(), "1/3");
    /// ```
    pub fn divide(&self, other: &Self) -> EvalResult<Self> {
        Self::require_non_zero(other)?;

        Ok(match (self, other) {
               (Self::Integer(a), Self::Integer(b)) => {
                   Self::normalized_fraction(Fraction::reduced(a.clone(), b.clone()))
               },
               (Self::Real(_), _) | (_, Self::Real(_)) => {
                   Self::normalized_real(self.to_real().divide(&other.to_real()))
               },
               _ => {
                   Self::normalized_fraction(self.to_fraction()
                                                 .times(&other.to_fraction().invert()))
               },
           })
    }

    /// Returns the reciprocal `1 / self`.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` if this number is zero.
    pub fn reciprocal(&self) -> EvalResult<Self> {
        Self::require_non_zero(self)?;

        Ok(match self {
               Self::Integer(value) => {
                   Self::normalized_fraction(Fraction::reduced(BigInt::one(), value.clone()))
               },
               Self::Rational(fraction) => Self::normalized_fraction(fraction.invert()),
               Self::Real(real) => Self::normalized_real(Real::one().divide(real)),
           })
    }

    /// Returns the square root of this number, computed at the fixed scale
    /// and demoted when exact.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` if this number is negative.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// assert_eq!(Number::from(9).sqrt().unwrap(), Number::from(3));
    /// assert_eq!(Number::from(2).sqrt().unwrap().to_string(), "1.414213562373095");
    /// ```
    pub fn sqrt(&self) -> EvalResult<Self> {
        if self.is_negative() {
            return Err(EvalError::WrongOperand { operand:    self.to_string(),
                                                 comparison: Comparison::GreaterOrEqual,
                                                 expected:   "0".to_string(), });
        }

        Ok(Self::normalized_real(self.to_real().sqrt()))
    }

    /// Returns this number raised to the power of the given exponent.
    ///
    /// An integer base with an integer exponent is computed exactly; a
    /// rational base with an integer exponent raises numerator and
    /// denominator and divides at the fixed scale; every other combination
    /// goes through the shared base-ten logarithm and antilogarithm
    /// machinery.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` unless both the base and the
    /// exponent are strictly positive under their variant's rule, and
    /// `EvalError::Overflow` if the result's magnitude cannot be
    /// represented.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// let kilo = Number::from(2).expt(&Number::from(10)).unwrap();
    /// assert_eq!(kilo, Number::from(1024));
    /// ```
    pub fn expt(&self, exponent: &Self) -> EvalResult<Self> {
        self.require_positive()?;
        exponent.require_positive()?;

        match (self, exponent) {
            (Self::Integer(base), Self::Integer(power)) => {
                let power = power.to_u32().ok_or(EvalError::Overflow)?;
                Ok(Self::Integer(Pow::pow(base, power)))
            },
            (Self::Rational(fraction), Self::Integer(power)) => {
                let power = power.to_u32().ok_or(EvalError::Overflow)?;
                Ok(Self::normalized_real(Real::from_ratio(&Pow::pow(fraction.numerator(),
                                                                    power),
                                                          &Pow::pow(fraction.denominator(),
                                                                    power))))
            },
            _ => {
                let exponent10 = Self::log10_parts(&self.to_real()).times(&exponent.to_real());
                Self::antilog10(&exponent10)
            },
        }
    }

    /// Returns Euler's number raised to the power of this number, through
    /// the same machinery as [`Number::expt`].
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` unless this number is strictly
    /// positive, mirroring `expt` with base *e*.
    pub fn exp(&self) -> EvalResult<Self> {
        self.require_positive()?;

        let exponent10 = Real::from_f64(std::f64::consts::LOG10_E).times(&self.to_real());
        Self::antilog10(&exponent10)
    }

    /// Returns the natural logarithm of this number.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` unless this number is strictly
    /// positive.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// assert_eq!(Number::one().ln().unwrap(), Number::zero());
    /// ```
    pub fn ln(&self) -> EvalResult<Self> {
        self.require_positive()?;

        let log10 = Self::log10_parts(&self.to_real());
        Ok(Self::normalized_real(log10.divide(&Real::from_f64(std::f64::consts::LOG10_E))))
    }

    /// Returns the logarithm of this number with the given base.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` unless both this number and the
    /// base are strictly positive under their variant's rule, or if the
    /// base is one.
    ///
    /// # Example
    /// ```
    /// use numstep::number::Number;
    ///
    /// let log = Number::from(100).log(&Number::from(10)).unwrap();
    /// assert_eq!(log, Number::from(2));
    /// ```
    pub fn log(&self, base: &Self) -> EvalResult<Self> {
        self.require_positive()?;
        base.require_positive()?;

        let denominator = Real::from_f64(base.to_real().to_f64().log10());
        if denominator.is_zero() {
            return Err(EvalError::WrongOperand { operand:    base.to_string(),
                                                 comparison: Comparison::DifferentFrom,
                                                 expected:   "1".to_string(), });
        }

        let log10 = Self::log10_parts(&self.to_real());
        Ok(Self::normalized_real(log10.divide(&denominator)))
    }

    /// Computes the base-ten logarithm of a positive real by digit
    /// shifting: the value is divided by ten while it exceeds ten, or
    /// multiplied by ten while it is below one, and the shift count is
    /// combined with the native logarithm of the remaining mantissa. The
    /// mantissa is confined to one digit of magnitude, which bounds the
    /// floating-point contribution regardless of the original size.
    fn log10_parts(value: &Real) -> Real {
        let one = Real::one();
        let ten = Real::ten();

        let mut mantissa = value.clone();
        let mut shift = 0.0f64;

        while mantissa > ten {
            mantissa = mantissa.shift_down();
            shift += 1.0;
        }
        while mantissa < one {
            mantissa = mantissa.shift_up();
            shift -= 1.0;
        }

        Real::from_f64(shift + mantissa.to_f64().log10())
    }

    /// Computes `10^x` by splitting the exponent into its integer part,
    /// applied as an exact power of ten, and its fractional part, applied
    /// through native exponentiation. The split keeps very large and very
    /// small magnitudes representable at the fixed scale.
    fn antilog10(x: &Real) -> EvalResult<Self> {
        let whole = x.to_integer();
        let fraction = x.minus(&Real::from_integer(&whole));
        let correction = Real::from_f64(10f64.powf(fraction.to_f64()));

        let magnitude = whole.abs().to_u32().ok_or(EvalError::Overflow)?;
        let scaled = if whole.is_negative() {
            correction.divide(&Real::from_integer(&pow10(magnitude)))
        } else {
            Real::from_integer(&pow10(magnitude)).times(&correction)
        };

        Ok(Self::normalized_real(scaled))
    }

    /// Checks this number against zero, failing with the operand and the
    /// non-zero constraint.
    fn require_non_zero(&self) -> EvalResult<()> {
        if self.is_zero() {
            return Err(EvalError::WrongOperand { operand:    self.to_string(),
                                                 comparison: Comparison::DifferentFrom,
                                                 expected:   "0".to_string(), });
        }

        Ok(())
    }

    /// Checks this number for strict positivity under its variant's rule:
    /// a positive integer, a positive real, or a non-zero rational with a
    /// positive numerator.
    fn require_positive(&self) -> EvalResult<()> {
        let positive = match self {
            Self::Integer(value) => value.is_positive(),
            Self::Rational(fraction) => fraction.numerator().is_positive(),
            Self::Real(real) => real.is_positive(),
        };

        if positive {
            Ok(())
        } else {
            Err(EvalError::WrongOperand { operand:    self.to_string(),
                                          comparison: Comparison::GreaterThan,
                                          expected:   "0".to_string(), })
        }
    }
}

impl FromStr for Number {
    type Err = InvalidNumber;

    /// Parses a numeric literal, attempting in order: an integer, a
    /// decimal real, and a `numerator/denominator` rational. A rational
    /// with a zero denominator does not denote a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<BigInt>() {
            return Ok(Self::Integer(value));
        }
        if let Ok(real) = s.parse::<Real>() {
            return Ok(Self::Real(real));
        }
        if let Some((numerator, denominator)) = s.split_once('/')
           && signed_digits(numerator)
           && unsigned_digits(denominator)
        {
            let numerator: BigInt = numerator.parse().map_err(|_| InvalidNumber)?;
            let denominator: BigInt = denominator.parse().map_err(|_| InvalidNumber)?;
            if denominator.is_zero() {
                return Err(InvalidNumber);
            }
            return Ok(Self::Rational(Fraction::reduced(numerator, denominator)));
        }

        Err(InvalidNumber)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(fraction) => write!(f, "{fraction}"),
            Self::Real(real) => write!(f, "{real}"),
        }
    }
}

/// Matches `-?\d+`.
fn signed_digits(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `\d+`.
fn unsigned_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
